//! End-to-end scoring run
//!
//! [`ScoringPipeline::run`] chains the stages in their fixed order:
//!
//! 1. [`derivation::derive_all`] applies the missing-value policy and
//!    computes sub-scores
//! 2. [`normalization::normalize`] runs the range pass, then rescales
//! 3. [`aggregation::aggregate`] applies [`ScoreWeights::DEFAULT`]
//! 4. [`Ranking::new`] sorts by final score
//!
//! A run either yields a complete [`PipelineOutcome`] or a [`PipelineError`].

use tracing::info;

use crate::{
    aggregation::{self, ScoreWeights},
    derivation::{self, IncompleteRecord, MissingPolicy},
    error::PipelineError,
    normalization::{self, AttributeRanges},
    ranking::Ranking,
    record::RecordSet,
};

/// Configured scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringPipeline {
    missing_policy: MissingPolicy,
}

impl ScoringPipeline {
    #[must_use]
    pub const fn new(missing_policy: MissingPolicy) -> Self {
        Self { missing_policy }
    }

    #[must_use]
    pub const fn missing_policy(&self) -> MissingPolicy {
        self.missing_policy
    }

    /// Scores and ranks every record of `records`.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingAttribute`] if a record lacks a raw attribute
    ///   and the policy is [`MissingPolicy::Fail`]
    /// - [`PipelineError::EmptyInput`] if no record reaches normalization
    pub fn run(&self, records: &RecordSet) -> Result<PipelineOutcome, PipelineError> {
        info!(
            records = records.len(),
            policy = %self.missing_policy,
            "starting scoring run"
        );

        let derived = derivation::derive_all(records, self.missing_policy)?;
        let normalized = normalization::normalize(derived.records)?;
        let scored = aggregation::aggregate(normalized.records, &ScoreWeights::DEFAULT);
        let ranking = Ranking::new(scored);

        Ok(PipelineOutcome {
            ranking,
            ranges: normalized.ranges,
            skipped: derived.skipped,
            zero_filled: derived.zero_filled,
        })
    }
}

/// Everything a successful run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub ranking: Ranking,
    /// Ranges the score attributes were normalized by
    pub ranges: AttributeRanges,
    pub skipped: Vec<IncompleteRecord>,
    pub zero_filled: Vec<IncompleteRecord>,
}
