//! Statistical utilities for the phonerank project.
//!
//! This crate provides the small set of numeric summaries the scoring
//! pipeline and the dataset inspection report are built on:
//!
//! - [`range`]: Associative min/max reduction and linear rescaling onto `[0, 1]`,
//!   used by min-max normalization
//! - [`descriptive`]: Min, quartiles, max and mean of one attribute column
//!
//! # Examples
//!
//! ## Rescaling values onto `[0, 1]`
//!
//! ```
//! use phonerank_stats::range::ValueRange;
//!
//! let range = [10.0, 20.0, 30.0]
//!     .map(ValueRange::single)
//!     .into_iter()
//!     .reduce(ValueRange::merge)
//!     .unwrap();
//! assert_eq!(range.rescale(20.0), Some(0.5));
//! ```
//!
//! ## Summarizing a column
//!
//! ```
//! use phonerank_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```

pub mod descriptive;
pub mod range;
