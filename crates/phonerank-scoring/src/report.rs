//! Dataset inspection before scoring
//!
//! [`DatasetSummary`] describes a record set column by column: how many
//! records carry a usable value for each raw attribute, and how those values
//! are distributed. It is computed over the loaded records as-is, so it also
//! covers records the pipeline would later reject.

use phonerank_stats::descriptive::DescriptiveStats;

use crate::{
    derivation::IncompleteRecord,
    record::{RawAttribute, RecordSet},
};

/// Presence counts and distribution of one raw attribute.
#[derive(Debug, Clone)]
pub struct AttributeSummary {
    pub attribute: RawAttribute,
    pub present: usize,
    pub missing: usize,
    /// `None` when no record has a usable value
    pub stats: Option<DescriptiveStats>,
}

impl AttributeSummary {
    fn from_records(attribute: RawAttribute, records: &RecordSet) -> Self {
        let values = records
            .iter()
            .filter_map(|record| record.usable(attribute))
            .collect::<Vec<_>>();

        Self {
            attribute,
            present: values.len(),
            missing: records.len() - values.len(),
            stats: DescriptiveStats::new(values),
        }
    }
}

/// Column-wise summary of a record set.
///
/// # Examples
///
/// ```
/// use phonerank_scoring::{
///     record::{PhoneRecord, RawAttribute, RecordSet},
///     report::DatasetSummary,
/// };
///
/// let records = RecordSet::from(vec![
///     PhoneRecord::complete("A", [3.0, 8.0, 90.0, 50.0, 32.0, 120.0, 450.0, 5000.0, 60000.0]),
///     PhoneRecord::new("B").with(RawAttribute::Price, 20000.0),
/// ]);
/// let summary = DatasetSummary::from_records(&records);
///
/// assert_eq!(summary.total_records, 2);
/// assert_eq!(summary.attribute(RawAttribute::Price).missing, 0);
/// assert_eq!(summary.attribute(RawAttribute::Battery).missing, 1);
/// assert_eq!(summary.incomplete[0].name, "B");
/// ```
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub total_records: usize,
    /// One entry per raw attribute, in [`RawAttribute::ALL`] order
    pub attributes: [AttributeSummary; RawAttribute::ALL.len()],
    /// Records with at least one missing attribute, in input order
    pub incomplete: Vec<IncompleteRecord>,
}

impl DatasetSummary {
    #[must_use]
    pub fn from_records(records: &RecordSet) -> Self {
        let attributes =
            RawAttribute::ALL.map(|attribute| AttributeSummary::from_records(attribute, records));
        let incomplete = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let missing = record.missing_attributes().collect::<Vec<_>>();
                (!missing.is_empty()).then(|| IncompleteRecord {
                    index,
                    name: record.name.clone(),
                    missing,
                })
            })
            .collect();

        Self {
            total_records: records.len(),
            attributes,
            incomplete,
        }
    }

    #[must_use]
    pub fn attribute(&self, attribute: RawAttribute) -> &AttributeSummary {
        &self.attributes[attribute.position()]
    }

    /// Total number of missing cells across all attributes.
    #[must_use]
    pub fn missing_cells(&self) -> usize {
        self.attributes.iter().map(|summary| summary.missing).sum()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.incomplete.is_empty()
    }
}
