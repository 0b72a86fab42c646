//! Min-max normalization of score-bearing attributes
//!
//! This module rescales the five score-bearing attributes of every derived
//! record onto the common range `[0, 1]`, so that quantities measured in
//! different units can be combined by the [`aggregation`](crate::aggregation)
//! stage.
//!
//! # Overview
//!
//! | Attribute           | Normalized field |
//! |---------------------|------------------|
//! | `performance_score` | `perf_n`         |
//! | `camera_score`      | `cam_n`          |
//! | `display_score`     | `disp_n`         |
//! | `battery`           | `battery_n`      |
//! | `price`             | `price_n`        |
//!
//! Normalization is the only place where a record's output depends on its
//! peers, so it runs as two explicit passes over the fully materialized set:
//!
//! 1. **Range pass** ([`AttributeRanges::from_records`]): reduce each attribute
//!    to its observed minimum and maximum across all records
//! 2. **Rescale pass** ([`AttributeRanges::normalize`]): map every value with
//!    `(value - min) / (max - min)`
//!
//! # Degenerate Ranges
//!
//! When every record shares the same value for an attribute, the range has
//! zero span and the division is undefined. Every record then receives
//! [`DEGENERATE_RANGE_FILL`] (`0.0`) for that attribute, the same result a
//! min-max scaler gives when it treats a zero span as a unit span. A warning
//! naming the attribute is logged once per run.
//!
//! # Example
//!
//! ```
//! use phonerank_scoring::{
//!     derivation::{self, MissingPolicy},
//!     normalization::{self, ScoreAttribute},
//!     record::{PhoneRecord, RecordSet},
//! };
//!
//! let records = RecordSet::from(vec![
//!     PhoneRecord::complete("Budget", [2.0, 8.0, 70.0, 50.0, 8.0, 90.0, 400.0, 5000.0, 12000.0]),
//!     PhoneRecord::complete("Flagship", [3.3, 8.0, 92.0, 200.0, 12.0, 120.0, 500.0, 5000.0, 90000.0]),
//! ]);
//! let derived = derivation::derive_all(&records, MissingPolicy::Fail)?;
//! let normalized = normalization::normalize(derived.records)?;
//!
//! let flagship = &normalized.records[1];
//! assert_eq!(flagship.normalized.perf_n, 1.0);
//! assert_eq!(flagship.normalized.price_n, 1.0);
//! // Both phones have the same battery, so the range is degenerate
//! assert!(normalized.ranges.get(ScoreAttribute::Battery).is_degenerate());
//! assert_eq!(flagship.normalized.battery_n, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use phonerank_stats::range::ValueRange;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    derivation::{DerivedRecord, RawAttributes, SubScores},
    error::EmptyInputError,
};

/// Normalized value assigned to every record when an attribute has zero span.
pub const DEGENERATE_RANGE_FILL: f64 = 0.0;

/// Attributes rescaled by the normalizer, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAttribute {
    Performance,
    Camera,
    Display,
    Battery,
    Price,
}

impl fmt::Display for ScoreAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.source_id(), f)
    }
}

impl ScoreAttribute {
    pub const ALL: [Self; 5] = [
        Self::Performance,
        Self::Camera,
        Self::Display,
        Self::Battery,
        Self::Price,
    ];

    /// Name of the attribute being normalized.
    #[must_use]
    pub const fn source_id(self) -> &'static str {
        match self {
            Self::Performance => "performance_score",
            Self::Camera => "camera_score",
            Self::Display => "display_score",
            Self::Battery => "battery",
            Self::Price => "price",
        }
    }

    /// Name of the normalized output field.
    #[must_use]
    pub const fn normalized_id(self) -> &'static str {
        match self {
            Self::Performance => "perf_n",
            Self::Camera => "cam_n",
            Self::Display => "disp_n",
            Self::Battery => "battery_n",
            Self::Price => "price_n",
        }
    }

    const fn position(self) -> usize {
        match self {
            Self::Performance => 0,
            Self::Camera => 1,
            Self::Display => 2,
            Self::Battery => 3,
            Self::Price => 4,
        }
    }

    /// Extracts this attribute's unnormalized value from a derived record.
    #[must_use]
    pub fn value_of(self, record: &DerivedRecord) -> f64 {
        match self {
            Self::Performance => record.sub_scores.performance_score,
            Self::Camera => record.sub_scores.camera_score,
            Self::Display => record.sub_scores.display_score,
            Self::Battery => record.raw.battery,
            Self::Price => record.raw.price,
        }
    }
}

/// Observed range of every score attribute across a record set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeRanges {
    ranges: [ValueRange; 5],
}

impl AttributeRanges {
    /// Range pass: computes min and max of each attribute over all records.
    ///
    /// Fails with [`EmptyInputError`] if `records` is empty, since the range
    /// of zero values is undefined.
    pub fn from_records(records: &[DerivedRecord]) -> Result<Self, EmptyInputError> {
        let (first, rest) = records
            .split_first()
            .ok_or(EmptyInputError::new("normalization"))?;
        let ranges = rest.iter().fold(Self::single(first), |acc, record| {
            acc.merge(Self::single(record))
        });

        for attribute in ScoreAttribute::ALL {
            let range = ranges.get(attribute);
            debug!(
                attribute = attribute.source_id(),
                min = range.min(),
                max = range.max(),
                "computed attribute range"
            );
            if range.is_degenerate() {
                warn!(
                    attribute = attribute.source_id(),
                    value = range.min(),
                    fill = DEGENERATE_RANGE_FILL,
                    "attribute has zero span; using constant fill"
                );
            }
        }
        Ok(ranges)
    }

    fn single(record: &DerivedRecord) -> Self {
        Self {
            ranges: ScoreAttribute::ALL.map(|attribute| ValueRange::single(attribute.value_of(record))),
        }
    }

    /// Combines ranges computed over disjoint parts of a record set.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut ranges = self.ranges;
        for (range, other) in ranges.iter_mut().zip(other.ranges) {
            *range = range.merge(other);
        }
        Self { ranges }
    }

    #[must_use]
    pub fn get(&self, attribute: ScoreAttribute) -> ValueRange {
        self.ranges[attribute.position()]
    }

    /// Rescales `value` of `attribute` onto `[0, 1]`.
    ///
    /// Returns [`DEGENERATE_RANGE_FILL`] if the attribute's range is degenerate.
    #[must_use]
    pub fn rescale(&self, attribute: ScoreAttribute, value: f64) -> f64 {
        self.get(attribute)
            .rescale(value)
            .unwrap_or(DEGENERATE_RANGE_FILL)
    }

    /// Rescale pass for a single record.
    #[must_use]
    pub fn normalize(&self, record: &DerivedRecord) -> NormalizedScores {
        let [perf_n, cam_n, disp_n, battery_n, price_n] = ScoreAttribute::ALL
            .map(|attribute| self.rescale(attribute, attribute.value_of(record)));
        NormalizedScores {
            perf_n,
            cam_n,
            disp_n,
            battery_n,
            price_n,
        }
    }
}

/// Normalized score attributes of one record, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScores {
    pub perf_n: f64,
    pub cam_n: f64,
    pub disp_n: f64,
    pub battery_n: f64,
    pub price_n: f64,
}

impl NormalizedScores {
    #[must_use]
    pub fn get(&self, attribute: ScoreAttribute) -> f64 {
        match attribute {
            ScoreAttribute::Performance => self.perf_n,
            ScoreAttribute::Camera => self.cam_n,
            ScoreAttribute::Display => self.disp_n,
            ScoreAttribute::Battery => self.battery_n,
            ScoreAttribute::Price => self.price_n,
        }
    }
}

/// A record after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Position of the record in the input record set
    pub index: usize,
    pub name: String,
    pub raw: RawAttributes,
    pub sub_scores: SubScores,
    pub normalized: NormalizedScores,
}

/// Normalized records together with the ranges they were rescaled by.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSet {
    pub ranges: AttributeRanges,
    pub records: Vec<NormalizedRecord>,
}

/// Normalizes a whole set of derived records.
///
/// Runs the range pass over every record before rescaling any of them.
/// Record order is preserved.
pub fn normalize(records: Vec<DerivedRecord>) -> Result<NormalizedSet, EmptyInputError> {
    let ranges = AttributeRanges::from_records(&records)?;
    let records = records
        .into_iter()
        .map(|record| {
            let normalized = ranges.normalize(&record);
            NormalizedRecord {
                index: record.index,
                name: record.name,
                raw: record.raw,
                sub_scores: record.sub_scores,
                normalized,
            }
        })
        .collect::<Vec<_>>();
    info!(records = records.len(), "normalized score attributes");
    Ok(NormalizedSet { ranges, records })
}
