//! Phone attribute records as supplied by the input loader
//!
//! A [`PhoneRecord`] carries the display name and the nine raw numeric
//! attributes of one phone model. Every raw attribute is optional at the
//! type level: loaders leave a field empty when the source cell is blank or
//! not a number, and the pipeline decides what to do about it (see
//! [`MissingPolicy`](crate::derivation::MissingPolicy)).
//!
//! A [`RecordSet`] is the ordered collection of records fed to the pipeline.
//! Its order carries no meaning for scoring, but the ranker uses it to break
//! ties between equal final scores.

use std::{fmt, slice};

use serde::{Deserialize, Serialize};

/// Raw numeric attributes of a phone record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawAttribute {
    CpuSpeed,
    CpuCores,
    SpecScore,
    RearPrimary,
    FrontPrimary,
    RefreshRate,
    Ppi,
    Battery,
    Price,
}

impl fmt::Display for RawAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.id(), f)
    }
}

impl RawAttribute {
    /// All raw attributes in input column order.
    pub const ALL: [Self; 9] = [
        Self::CpuSpeed,
        Self::CpuCores,
        Self::SpecScore,
        Self::RearPrimary,
        Self::FrontPrimary,
        Self::RefreshRate,
        Self::Ppi,
        Self::Battery,
        Self::Price,
    ];

    /// Column name of the attribute in the input dataset.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::CpuSpeed => "cpu_speed",
            Self::CpuCores => "cpu_cores",
            Self::SpecScore => "spec_score",
            Self::RearPrimary => "rear_primary",
            Self::FrontPrimary => "front_primary",
            Self::RefreshRate => "refresh_rate",
            Self::Ppi => "ppi",
            Self::Battery => "battery",
            Self::Price => "price",
        }
    }

    /// Index of the attribute in [`Self::ALL`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::CpuSpeed => 0,
            Self::CpuCores => 1,
            Self::SpecScore => 2,
            Self::RearPrimary => 3,
            Self::FrontPrimary => 4,
            Self::RefreshRate => 5,
            Self::Ppi => 6,
            Self::Battery => 7,
            Self::Price => 8,
        }
    }
}

/// One phone model as loaded from the dataset.
///
/// # Examples
///
/// ```
/// use phonerank_scoring::record::{PhoneRecord, RawAttribute};
///
/// let phone = PhoneRecord::new("Pixel 9").with(RawAttribute::Battery, 4700.0);
///
/// assert_eq!(phone.get(RawAttribute::Battery), Some(4700.0));
/// assert_eq!(phone.get(RawAttribute::Price), None);
/// assert_eq!(phone.missing_attributes().count(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// Display name, not required to be unique
    pub name: String,
    pub cpu_speed: Option<f64>,
    pub cpu_cores: Option<f64>,
    pub spec_score: Option<f64>,
    pub rear_primary: Option<f64>,
    pub front_primary: Option<f64>,
    pub refresh_rate: Option<f64>,
    pub ppi: Option<f64>,
    pub battery: Option<f64>,
    pub price: Option<f64>,
}

impl PhoneRecord {
    /// Creates a record with the given name and no attribute values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a record with every raw attribute present.
    ///
    /// Values are given in [`RawAttribute::ALL`] order.
    #[must_use]
    pub fn complete(name: impl Into<String>, values: [f64; 9]) -> Self {
        RawAttribute::ALL
            .into_iter()
            .zip(values)
            .fold(Self::new(name), |record, (attribute, value)| {
                record.with(attribute, value)
            })
    }

    /// Returns the record with `attribute` set to `value`.
    #[must_use]
    pub fn with(mut self, attribute: RawAttribute, value: f64) -> Self {
        *self.slot_mut(attribute) = Some(value);
        self
    }

    /// Returns the stored value of `attribute`, as loaded.
    #[must_use]
    pub fn get(&self, attribute: RawAttribute) -> Option<f64> {
        match attribute {
            RawAttribute::CpuSpeed => self.cpu_speed,
            RawAttribute::CpuCores => self.cpu_cores,
            RawAttribute::SpecScore => self.spec_score,
            RawAttribute::RearPrimary => self.rear_primary,
            RawAttribute::FrontPrimary => self.front_primary,
            RawAttribute::RefreshRate => self.refresh_rate,
            RawAttribute::Ppi => self.ppi,
            RawAttribute::Battery => self.battery,
            RawAttribute::Price => self.price,
        }
    }

    /// Returns the value of `attribute` if it is present and finite.
    ///
    /// NaN and infinite values count as missing.
    #[must_use]
    pub fn usable(&self, attribute: RawAttribute) -> Option<f64> {
        self.get(attribute).filter(|value| value.is_finite())
    }

    /// Iterates over attributes that are absent or non-finite.
    pub fn missing_attributes(&self) -> impl Iterator<Item = RawAttribute> + '_ {
        RawAttribute::ALL
            .into_iter()
            .filter(|attribute| self.usable(*attribute).is_none())
    }

    fn slot_mut(&mut self, attribute: RawAttribute) -> &mut Option<f64> {
        match attribute {
            RawAttribute::CpuSpeed => &mut self.cpu_speed,
            RawAttribute::CpuCores => &mut self.cpu_cores,
            RawAttribute::SpecScore => &mut self.spec_score,
            RawAttribute::RearPrimary => &mut self.rear_primary,
            RawAttribute::FrontPrimary => &mut self.front_primary,
            RawAttribute::RefreshRate => &mut self.refresh_rate,
            RawAttribute::Ppi => &mut self.ppi,
            RawAttribute::Battery => &mut self.battery,
            RawAttribute::Price => &mut self.price,
        }
    }
}

/// Ordered collection of phone records fed to the scoring pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<PhoneRecord>,
}

impl RecordSet {
    #[must_use]
    pub fn new(records: Vec<PhoneRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PhoneRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, PhoneRecord> {
        self.records.iter()
    }
}

impl From<Vec<PhoneRecord>> for RecordSet {
    fn from(records: Vec<PhoneRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<PhoneRecord> for RecordSet {
    fn from_iter<T: IntoIterator<Item = PhoneRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a PhoneRecord;
    type IntoIter = slice::Iter<'a, PhoneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
