//! Weighted aggregation of normalized scores into a final score
//!
//! ```text
//! final_score = 0.35 * perf_n
//!             + 0.25 * cam_n
//!             + 0.20 * disp_n
//!             + 0.10 * battery_n
//!             + 0.10 * (1 - price_n)
//! ```
//!
//! The price term is the only inverted one: a cheaper phone has a lower
//! `price_n` and therefore contributes more. Because the weights sum to 1.0
//! and every input lies in `[0, 1]`, the final score is a convex combination
//! and also lies in `[0, 1]`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    derivation::{RawAttributes, SubScores},
    normalization::{NormalizedRecord, NormalizedScores},
};

/// Fixed weights of the five normalized attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub performance: f64,
    pub camera: f64,
    pub display: f64,
    pub battery: f64,
    /// Weight of the inverted price term `1 - price_n`
    pub price: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScoreWeights {
    pub const DEFAULT: Self = Self {
        performance: 0.35,
        camera: 0.25,
        display: 0.20,
        battery: 0.10,
        price: 0.10,
    };

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.performance + self.camera + self.display + self.battery + self.price
    }

    /// Combines normalized scores into a single final score.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonerank_scoring::{aggregation::ScoreWeights, normalization::NormalizedScores};
    ///
    /// let best_in_class = NormalizedScores {
    ///     perf_n: 1.0,
    ///     cam_n: 1.0,
    ///     disp_n: 1.0,
    ///     battery_n: 1.0,
    ///     price_n: 0.0,
    /// };
    /// assert!((ScoreWeights::DEFAULT.final_score(&best_in_class) - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn final_score(&self, scores: &NormalizedScores) -> f64 {
        self.performance * scores.perf_n
            + self.camera * scores.cam_n
            + self.display * scores.disp_n
            + self.battery * scores.battery_n
            + self.price * (1.0 - scores.price_n)
    }
}

/// A fully scored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// Position of the record in the input record set
    pub index: usize,
    pub name: String,
    pub raw: RawAttributes,
    pub sub_scores: SubScores,
    pub normalized: NormalizedScores,
    pub final_score: f64,
}

impl ScoredRecord {
    #[must_use]
    pub fn from_normalized(record: NormalizedRecord, weights: &ScoreWeights) -> Self {
        let final_score = weights.final_score(&record.normalized);
        Self {
            index: record.index,
            name: record.name,
            raw: record.raw,
            sub_scores: record.sub_scores,
            normalized: record.normalized,
            final_score,
        }
    }
}

/// Scores every normalized record, preserving order.
#[must_use]
pub fn aggregate(records: Vec<NormalizedRecord>, weights: &ScoreWeights) -> Vec<ScoredRecord> {
    let scored = records
        .into_iter()
        .map(|record| ScoredRecord::from_normalized(record, weights))
        .collect::<Vec<_>>();
    info!(records = scored.len(), "aggregated final scores");
    scored
}
