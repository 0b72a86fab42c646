//! Scoring and ranking of mobile phones by their specifications
//!
//! This crate turns raw phone attribute records into a deterministic ranking.
//! It performs no I/O; records are supplied by a loader and results are
//! handed to a presenter.
//!
//! # Overview
//!
//! Every record passes through the same stages, each represented by its own
//! type so that a record cannot skip one:
//!
//! 1. **Load** ([`record::PhoneRecord`], [`record::RecordSet`]): name plus nine
//!    optional raw attributes
//! 2. **Derive** ([`derivation::DerivedRecord`]): weighted performance, camera
//!    and display sub-scores, after applying a [`derivation::MissingPolicy`]
//! 3. **Normalize** ([`normalization::NormalizedRecord`]): min-max rescaling of
//!    the three sub-scores plus battery and price onto `[0, 1]`, using ranges
//!    computed over the whole record set
//! 4. **Aggregate** ([`aggregation::ScoredRecord`]): fixed-weight combination
//!    with price inverted
//! 5. **Rank** ([`ranking::Ranking`]): stable descending sort by final score
//!
//! [`pipeline::ScoringPipeline`] runs all of them in order.
//! [`report::DatasetSummary`] inspects a record set without scoring it.
//!
//! # Weights
//!
//! | Stage     | Output            | Formula                                              |
//! |-----------|-------------------|------------------------------------------------------|
//! | Derive    | performance_score | 0.4 cpu_speed + 0.2 cpu_cores + 0.4 spec_score       |
//! | Derive    | camera_score      | 0.7 rear_primary + 0.3 front_primary                 |
//! | Derive    | display_score     | 0.4 refresh_rate + 0.6 ppi                           |
//! | Aggregate | final_score       | 0.35 perf + 0.25 cam + 0.20 disp + 0.10 battery + 0.10 (1 - price) |
//!
//! # Examples
//!
//! ```
//! use phonerank_scoring::{
//!     derivation::MissingPolicy,
//!     pipeline::ScoringPipeline,
//!     record::{PhoneRecord, RawAttribute, RecordSet},
//! };
//!
//! let records = RecordSet::from(vec![
//!     PhoneRecord::complete("Budget", [2.0, 8.0, 70.0, 50.0, 8.0, 90.0, 400.0, 5000.0, 12000.0]),
//!     PhoneRecord::complete("Flagship", [3.3, 8.0, 96.0, 200.0, 32.0, 120.0, 500.0, 5000.0, 90000.0]),
//!     PhoneRecord::new("Rumoured").with(RawAttribute::Price, 50000.0),
//! ]);
//!
//! // The default policy rejects the incomplete record.
//! assert!(ScoringPipeline::default().run(&records).is_err());
//!
//! let outcome = ScoringPipeline::new(MissingPolicy::Skip).run(&records)?;
//! assert_eq!(outcome.skipped.len(), 1);
//! assert_eq!(outcome.ranking.best()?.name, "Flagship");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregation;
pub mod derivation;
pub mod error;
pub mod normalization;
pub mod pipeline;
pub mod ranking;
pub mod record;
pub mod report;
