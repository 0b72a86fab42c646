use chrono::{DateTime, Utc};
use phonerank_scoring::{
    aggregation::ScoreWeights,
    derivation::{IncompleteRecord, MissingPolicy},
    pipeline::PipelineOutcome,
    ranking::LeaderboardEntry,
};
use serde::{Deserialize, Serialize};

/// Machine-readable result of a ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Missing-value policy the run used
    pub missing_policy: MissingPolicy,
    /// Number of records in the loaded dataset
    pub input_records: usize,
    /// Number of records that were scored and ranked
    pub ranked_records: usize,
    pub skipped: Vec<IncompleteRecord>,
    pub zero_filled: Vec<IncompleteRecord>,
    pub weights: ScoreWeights,
    /// Top entries of the ranking, best first
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl RankingReport {
    pub fn new(
        outcome: &PipelineOutcome,
        missing_policy: MissingPolicy,
        input_records: usize,
        top: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            missing_policy,
            input_records,
            ranked_records: outcome.ranking.len(),
            skipped: outcome.skipped.clone(),
            zero_filled: outcome.zero_filled.clone(),
            weights: ScoreWeights::DEFAULT,
            leaderboard: outcome.ranking.leaderboard(top),
        }
    }
}

#[cfg(test)]
mod tests {
    use phonerank_scoring::record::{PhoneRecord, RecordSet};

    use super::*;

    #[test]
    fn test_report_from_outcome() {
        let records = RecordSet::from(vec![
            PhoneRecord::complete("low", [1.0; 9]),
            PhoneRecord::complete("high", [9.0; 9]),
            PhoneRecord::new("blank"),
        ]);
        let outcome = phonerank_scoring::pipeline::ScoringPipeline::new(MissingPolicy::Skip)
            .run(&records)
            .unwrap();
        let report = RankingReport::new(&outcome, MissingPolicy::Skip, records.len(), 1);

        assert_eq!(report.input_records, 3);
        assert_eq!(report.ranked_records, 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.leaderboard.len(), 1);
        assert_eq!(report.leaderboard[0].name, "high");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["missing_policy"], "skip");
        assert_eq!(json["leaderboard"][0]["rank"], 1);
        assert_eq!(json["weights"]["performance"], 0.35);
    }
}
