//! Ordering of scored records
//!
//! [`Ranking`] holds scored records sorted by final score, highest first.
//! Records with equal final scores keep their relative input order (the sort
//! is stable), so a ranking is fully deterministic for a given input.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{aggregation::ScoredRecord, error::EmptyInputError};

/// One row of a leaderboard: 1-based rank, display name and final score.
///
/// This is the shape consumed by chart and report writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub final_score: f64,
}

/// Scored records in descending order of final score.
///
/// # Examples
///
/// ```
/// use phonerank_scoring::{pipeline::ScoringPipeline, record::{PhoneRecord, RecordSet}};
///
/// let records = RecordSet::from(vec![
///     PhoneRecord::complete("Lite", [2.0, 8.0, 70.0, 48.0, 8.0, 60.0, 300.0, 4000.0, 9000.0]),
///     PhoneRecord::complete("Pro", [3.2, 8.0, 95.0, 200.0, 32.0, 120.0, 520.0, 5000.0, 99000.0]),
///     PhoneRecord::complete("Plus", [2.8, 8.0, 85.0, 108.0, 16.0, 120.0, 400.0, 5000.0, 35000.0]),
/// ]);
/// let ranking = ScoringPipeline::default().run(&records)?.ranking;
///
/// assert_eq!(ranking.best()?.name, "Pro");
/// assert_eq!(ranking.top_n(10).len(), 3);
///
/// let board = ranking.leaderboard(2);
/// assert_eq!(board[0].rank, 1);
/// assert_eq!(board[1].name, ranking.top_n(2)[1].name);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    records: Vec<ScoredRecord>,
}

impl Ranking {
    /// Sorts scored records by final score, descending.
    ///
    /// Ties keep the order in which records were given.
    #[must_use]
    pub fn new(mut records: Vec<ScoredRecord>) -> Self {
        records.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
        info!(records = records.len(), "ranked records");
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

    /// All records in ranked order.
    #[must_use]
    pub fn as_slice(&self) -> &[ScoredRecord] {
        &self.records
    }

    /// The `n` highest-scoring records in ranked order.
    ///
    /// Returns every record if `n` exceeds the number of records.
    #[must_use]
    pub fn top_n(&self, n: usize) -> &[ScoredRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// The single highest-scoring record.
    pub fn best(&self) -> Result<&ScoredRecord, EmptyInputError> {
        self.records.first().ok_or(EmptyInputError::new("best"))
    }

    /// `(rank, name, final_score)` rows for the top `n` records.
    #[must_use]
    pub fn leaderboard(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.top_n(n)
            .iter()
            .zip(1..)
            .map(|(record, rank)| LeaderboardEntry {
                rank,
                name: record.name.clone(),
                final_score: record.final_score,
            })
            .collect()
    }

    /// 1-based rank of the first record named `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name == name)
            .map(|idx| idx + 1)
    }
}
