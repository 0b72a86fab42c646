//! Sub-score derivation from raw phone attributes
//!
//! The first pipeline stage turns the nine raw attributes of each record into
//! three category sub-scores using fixed linear combinations:
//!
//! ```text
//! performance_score = 0.4 * cpu_speed    + 0.2 * cpu_cores + 0.4 * spec_score
//! camera_score      = 0.7 * rear_primary + 0.3 * front_primary
//! display_score     = 0.4 * refresh_rate + 0.6 * ppi
//! ```
//!
//! Sub-scores stay in their raw, unit-mixed magnitudes; bringing them onto a
//! common scale is the job of [`normalization`](crate::normalization).
//!
//! Derivation is row-local: a record's sub-scores depend only on that
//! record's own attributes.
//!
//! # Missing Values
//!
//! A raw attribute that is absent or non-finite cannot enter a formula.
//! [`MissingPolicy`] decides what happens to such a record:
//!
//! - [`MissingPolicy::Fail`] (default): derivation fails with [`MissingAttributeError`]
//! - [`MissingPolicy::Skip`]: the record is excluded before normalization
//! - [`MissingPolicy::Zero`]: the missing values are replaced by `0.0`
//!
//! Both fallback policies log every affected record at `warn` level and
//! report it in [`Derivation`]. `battery` and `price` are checked here too:
//! no formula uses them, but normalization needs them for every record.

use std::{convert::Infallible, fmt};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::record::{PhoneRecord, RawAttribute, RecordSet};

pub const CPU_SPEED_WEIGHT: f64 = 0.4;
pub const CPU_CORES_WEIGHT: f64 = 0.2;
pub const SPEC_SCORE_WEIGHT: f64 = 0.4;

pub const REAR_CAMERA_WEIGHT: f64 = 0.7;
pub const FRONT_CAMERA_WEIGHT: f64 = 0.3;

pub const REFRESH_RATE_WEIGHT: f64 = 0.4;
pub const PPI_WEIGHT: f64 = 0.6;

/// A raw attribute needed for scoring is absent or not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("record #{index} ({name:?}) is missing attribute '{attribute}'")]
pub struct MissingAttributeError {
    /// Position of the record in the input record set
    pub index: usize,
    pub name: String,
    pub attribute: RawAttribute,
}

/// How derivation treats records with missing raw attributes.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Fail the whole pipeline on the first incomplete record
    #[default]
    Fail,
    /// Exclude incomplete records from scoring
    Skip,
    /// Substitute `0.0` for every missing value
    Zero,
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl MissingPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Zero => "zero",
        }
    }
}

/// Performance sub-score from CPU clock speed, core count and the dataset's spec score.
#[must_use]
pub fn performance_score(cpu_speed: f64, cpu_cores: f64, spec_score: f64) -> f64 {
    CPU_SPEED_WEIGHT * cpu_speed + CPU_CORES_WEIGHT * cpu_cores + SPEC_SCORE_WEIGHT * spec_score
}

/// Camera sub-score from the rear and front primary sensor resolutions.
#[must_use]
pub fn camera_score(rear_primary: f64, front_primary: f64) -> f64 {
    REAR_CAMERA_WEIGHT * rear_primary + FRONT_CAMERA_WEIGHT * front_primary
}

/// Display sub-score from refresh rate and pixel density.
#[must_use]
pub fn display_score(refresh_rate: f64, ppi: f64) -> f64 {
    REFRESH_RATE_WEIGHT * refresh_rate + PPI_WEIGHT * ppi
}

/// Raw attributes of a record, validated to be present and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawAttributes {
    pub cpu_speed: f64,
    pub cpu_cores: f64,
    pub spec_score: f64,
    pub rear_primary: f64,
    pub front_primary: f64,
    pub refresh_rate: f64,
    pub ppi: f64,
    pub battery: f64,
    pub price: f64,
}

impl RawAttributes {
    /// Validates that every raw attribute of `record` is usable.
    ///
    /// Reports the first missing attribute in [`RawAttribute::ALL`] order.
    pub fn from_record(index: usize, record: &PhoneRecord) -> Result<Self, MissingAttributeError> {
        Self::build(|attribute| {
            record
                .usable(attribute)
                .ok_or_else(|| MissingAttributeError {
                    index,
                    name: record.name.clone(),
                    attribute,
                })
        })
    }

    /// Builds raw attributes from `record`, replacing missing values by `0.0`.
    #[must_use]
    pub fn zero_filled(record: &PhoneRecord) -> Self {
        let Ok(raw) =
            Self::build(|attribute| Ok::<_, Infallible>(record.usable(attribute).unwrap_or(0.0)));
        raw
    }

    fn build<F, E>(mut value: F) -> Result<Self, E>
    where
        F: FnMut(RawAttribute) -> Result<f64, E>,
    {
        Ok(Self {
            cpu_speed: value(RawAttribute::CpuSpeed)?,
            cpu_cores: value(RawAttribute::CpuCores)?,
            spec_score: value(RawAttribute::SpecScore)?,
            rear_primary: value(RawAttribute::RearPrimary)?,
            front_primary: value(RawAttribute::FrontPrimary)?,
            refresh_rate: value(RawAttribute::RefreshRate)?,
            ppi: value(RawAttribute::Ppi)?,
            battery: value(RawAttribute::Battery)?,
            price: value(RawAttribute::Price)?,
        })
    }
}

/// Category sub-scores of one record, in raw magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub performance_score: f64,
    pub camera_score: f64,
    pub display_score: f64,
}

impl SubScores {
    /// Applies the three sub-score formulas to validated raw attributes.
    ///
    /// ```
    /// use phonerank_scoring::{derivation::{RawAttributes, SubScores}, record::PhoneRecord};
    ///
    /// let phone = PhoneRecord::complete(
    ///     "Nord",
    ///     [2.0, 8.0, 80.0, 50.0, 16.0, 120.0, 400.0, 5000.0, 30000.0],
    /// );
    /// let raw = RawAttributes::from_record(0, &phone).unwrap();
    /// let scores = SubScores::from_raw(&raw);
    ///
    /// assert!((scores.performance_score - 34.4).abs() < 1e-9);
    /// assert!((scores.camera_score - 39.8).abs() < 1e-9);
    /// assert!((scores.display_score - 288.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &RawAttributes) -> Self {
        Self {
            performance_score: performance_score(raw.cpu_speed, raw.cpu_cores, raw.spec_score),
            camera_score: camera_score(raw.rear_primary, raw.front_primary),
            display_score: display_score(raw.refresh_rate, raw.ppi),
        }
    }
}

/// A record after sub-score derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    /// Position of the record in the input record set
    pub index: usize,
    pub name: String,
    pub raw: RawAttributes,
    pub sub_scores: SubScores,
}

impl DerivedRecord {
    /// Derives sub-scores for a single record.
    ///
    /// Fails with [`MissingAttributeError`] if any raw attribute is missing.
    pub fn derive(index: usize, record: &PhoneRecord) -> Result<Self, MissingAttributeError> {
        let raw = RawAttributes::from_record(index, record)?;
        Ok(Self::from_raw(index, record.name.clone(), raw))
    }

    #[must_use]
    pub fn from_raw(index: usize, name: String, raw: RawAttributes) -> Self {
        Self {
            index,
            name,
            sub_scores: SubScores::from_raw(&raw),
            raw,
        }
    }
}

/// A record that did not enter scoring unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteRecord {
    pub index: usize,
    pub name: String,
    pub missing: Vec<RawAttribute>,
}

/// Result of deriving sub-scores for a whole record set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Derivation {
    /// Records that proceed to normalization, in input order
    pub records: Vec<DerivedRecord>,
    /// Records excluded under [`MissingPolicy::Skip`]
    pub skipped: Vec<IncompleteRecord>,
    /// Records completed with zeros under [`MissingPolicy::Zero`]
    pub zero_filled: Vec<IncompleteRecord>,
}

/// Derives sub-scores for every record of `records`.
///
/// Records keep their input order. With [`MissingPolicy::Fail`] the first
/// incomplete record aborts the whole derivation.
///
/// # Examples
///
/// ```
/// use phonerank_scoring::{
///     derivation::{self, MissingPolicy},
///     record::{PhoneRecord, RecordSet},
/// };
///
/// let records = RecordSet::from(vec![
///     PhoneRecord::complete("A", [3.0, 8.0, 90.0, 50.0, 32.0, 120.0, 450.0, 5000.0, 60000.0]),
///     PhoneRecord::new("Unknown"),
/// ]);
///
/// assert!(derivation::derive_all(&records, MissingPolicy::Fail).is_err());
///
/// let derived = derivation::derive_all(&records, MissingPolicy::Skip).unwrap();
/// assert_eq!(derived.records.len(), 1);
/// assert_eq!(derived.skipped[0].name, "Unknown");
/// ```
pub fn derive_all(
    records: &RecordSet,
    policy: MissingPolicy,
) -> Result<Derivation, MissingAttributeError> {
    let mut derivation = Derivation {
        records: Vec::with_capacity(records.len()),
        ..Derivation::default()
    };

    for (index, record) in records.iter().enumerate() {
        let missing = record.missing_attributes().collect::<Vec<_>>();
        if missing.is_empty() {
            derivation.records.push(DerivedRecord::derive(index, record)?);
            continue;
        }

        let incomplete = IncompleteRecord {
            index,
            name: record.name.clone(),
            missing,
        };
        match policy {
            MissingPolicy::Fail => {
                return Err(MissingAttributeError {
                    index,
                    name: incomplete.name,
                    attribute: incomplete.missing[0],
                });
            }
            MissingPolicy::Skip => {
                warn!(
                    index,
                    name = %incomplete.name,
                    missing = ?incomplete.missing,
                    "skipping record with missing attributes"
                );
                derivation.skipped.push(incomplete);
            }
            MissingPolicy::Zero => {
                warn!(
                    index,
                    name = %incomplete.name,
                    missing = ?incomplete.missing,
                    "filling missing attributes with zero"
                );
                let raw = RawAttributes::zero_filled(record);
                derivation
                    .records
                    .push(DerivedRecord::from_raw(index, record.name.clone(), raw));
                derivation.zero_filled.push(incomplete);
            }
        }
    }

    info!(
        derived = derivation.records.len(),
        skipped = derivation.skipped.len(),
        zero_filled = derivation.zero_filled.len(),
        "derived sub-scores"
    );
    Ok(derivation)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample(name: &str) -> PhoneRecord {
        PhoneRecord::complete(
            name,
            [2.8, 8.0, 85.0, 108.0, 32.0, 144.0, 395.0, 5000.0, 24999.0],
        )
    }

    #[test]
    fn test_derivation_weights_sum_to_one() {
        assert_eq!(CPU_SPEED_WEIGHT + CPU_CORES_WEIGHT + SPEC_SCORE_WEIGHT, 1.0);
        assert_eq!(REAR_CAMERA_WEIGHT + FRONT_CAMERA_WEIGHT, 1.0);
        assert_eq!(REFRESH_RATE_WEIGHT + PPI_WEIGHT, 1.0);
    }

    #[test]
    fn test_sub_scores_match_formulas() {
        let derived = DerivedRecord::derive(0, &sample("Edge")).unwrap();
        let scores = derived.sub_scores;
        assert!((scores.performance_score - (0.4 * 2.8 + 0.2 * 8.0 + 0.4 * 85.0)).abs() < EPS);
        assert!((scores.camera_score - (0.7 * 108.0 + 0.3 * 32.0)).abs() < EPS);
        assert!((scores.display_score - (0.4 * 144.0 + 0.6 * 395.0)).abs() < EPS);
    }

    #[test]
    fn test_battery_and_price_pass_through() {
        let derived = DerivedRecord::derive(3, &sample("Edge")).unwrap();
        assert_eq!(derived.index, 3);
        assert_eq!(derived.raw.battery, 5000.0);
        assert_eq!(derived.raw.price, 24999.0);
    }

    #[test]
    fn test_missing_attribute_error_names_first_missing() {
        let mut record = sample("Holey");
        record.front_primary = None;
        record.price = Some(f64::NAN);

        let err = DerivedRecord::derive(7, &record).unwrap_err();
        assert_eq!(err.index, 7);
        assert_eq!(err.name, "Holey");
        assert_eq!(err.attribute, RawAttribute::FrontPrimary);
        assert_eq!(
            err.to_string(),
            "record #7 (\"Holey\") is missing attribute 'front_primary'"
        );
    }

    #[test]
    fn test_fail_policy_aborts() {
        let mut broken = sample("B");
        broken.battery = None;
        let records = RecordSet::from(vec![sample("A"), broken, sample("C")]);

        let err = derive_all(&records, MissingPolicy::Fail).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.attribute, RawAttribute::Battery);
    }

    #[test]
    fn test_skip_policy_keeps_input_order() {
        let mut broken = sample("B");
        broken.ppi = None;
        let records = RecordSet::from(vec![sample("A"), broken, sample("C")]);

        let derivation = derive_all(&records, MissingPolicy::Skip).unwrap();
        let names = derivation
            .records
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(derivation.records[1].index, 2);
        assert_eq!(derivation.skipped.len(), 1);
        assert_eq!(derivation.skipped[0].missing, vec![RawAttribute::Ppi]);
        assert!(derivation.zero_filled.is_empty());
    }

    #[test]
    fn test_zero_policy_fills_missing_values() {
        let mut broken = sample("B");
        broken.rear_primary = None;
        broken.front_primary = Some(f64::INFINITY);
        let records = RecordSet::from(vec![broken]);

        let derivation = derive_all(&records, MissingPolicy::Zero).unwrap();
        assert_eq!(derivation.records.len(), 1);
        assert_eq!(derivation.records[0].sub_scores.camera_score, 0.0);
        assert_eq!(
            derivation.zero_filled[0].missing,
            vec![RawAttribute::RearPrimary, RawAttribute::FrontPrimary]
        );
    }

    #[test]
    fn test_empty_record_set_derives_nothing() {
        let derivation = derive_all(&RecordSet::default(), MissingPolicy::Fail).unwrap();
        assert!(derivation.records.is_empty());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("skip".parse::<MissingPolicy>().unwrap(), MissingPolicy::Skip);
        assert_eq!("Zero".parse::<MissingPolicy>().unwrap(), MissingPolicy::Zero);
        assert!("drop".parse::<MissingPolicy>().is_err());
    }
}
