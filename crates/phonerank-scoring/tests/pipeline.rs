use phonerank_scoring::{
    derivation::MissingPolicy,
    error::{EmptyInputError, PipelineError},
    normalization::{DEGENERATE_RANGE_FILL, ScoreAttribute},
    pipeline::ScoringPipeline,
    record::{PhoneRecord, RawAttribute, RecordSet},
};

const EPS: f64 = 1e-9;

/// A record whose sub-scores, battery and price all equal `value`.
///
/// Each sub-score weight group sums to one, so uniform raw inputs pass
/// through derivation unchanged.
fn uniform(name: &str, value: f64) -> PhoneRecord {
    PhoneRecord::complete(name, [value; 9])
}

fn ranked_names(records: &RecordSet, policy: MissingPolicy) -> Vec<String> {
    ScoringPipeline::new(policy)
        .run(records)
        .unwrap()
        .ranking
        .as_slice()
        .iter()
        .map(|record| record.name.clone())
        .collect()
}

#[test]
fn test_three_phone_end_to_end() {
    let records = RecordSet::from(vec![
        uniform("B", 50.0),
        uniform("C", 0.0),
        uniform("A", 100.0),
    ]);
    let outcome = ScoringPipeline::default().run(&records).unwrap();
    let ranked = outcome.ranking.as_slice();

    let got = ranked
        .iter()
        .map(|record| (record.name.as_str(), record.final_score))
        .collect::<Vec<_>>();
    let expected = [("A", 0.90), ("B", 0.50), ("C", 0.10)];
    assert_eq!(got.len(), expected.len());
    for ((name, score), (want_name, want_score)) in got.into_iter().zip(expected) {
        assert_eq!(name, want_name);
        assert!((score - want_score).abs() < EPS, "{name}: {score}");
    }

    let a = &ranked[0];
    assert!((a.sub_scores.performance_score - 100.0).abs() < EPS);
    assert_eq!(a.normalized.price_n, 1.0);
    assert_eq!(a.index, 2);
}

#[test]
fn test_normalized_values_within_unit_interval() {
    let records = RecordSet::from(vec![
        PhoneRecord::complete("x", [2.4, 8.0, 78.0, 64.0, 16.0, 120.0, 395.0, 5000.0, 18999.0]),
        PhoneRecord::complete("y", [3.2, 8.0, 89.0, 200.0, 32.0, 144.0, 460.0, 4600.0, 74999.0]),
        PhoneRecord::complete("z", [2.2, 6.0, 71.0, 50.0, 8.0, 90.0, 270.0, 6000.0, 9999.0]),
        PhoneRecord::complete("w", [3.0, 8.0, 85.0, 108.0, 20.0, 120.0, 401.0, 5500.0, 34999.0]),
    ]);
    let outcome = ScoringPipeline::default().run(&records).unwrap();

    for record in outcome.ranking.as_slice() {
        for attribute in ScoreAttribute::ALL {
            let value = record.normalized.get(attribute);
            assert!((0.0..=1.0).contains(&value), "{attribute} = {value}");
        }
        assert!((0.0..=1.0).contains(&record.final_score));
    }

    for attribute in ScoreAttribute::ALL {
        let values = outcome
            .ranking
            .as_slice()
            .iter()
            .map(|record| record.normalized.get(attribute))
            .collect::<Vec<_>>();
        assert!(values.iter().any(|v| *v == 0.0), "{attribute} has no minimum");
        assert!(values.iter().any(|v| *v == 1.0), "{attribute} has no maximum");
    }
}

#[test]
fn test_degenerate_attribute_uses_fill() {
    let records = RecordSet::from(vec![
        uniform("a", 10.0).with(RawAttribute::Battery, 5000.0),
        uniform("b", 20.0).with(RawAttribute::Battery, 5000.0),
    ]);
    let outcome = ScoringPipeline::default().run(&records).unwrap();
    assert!(outcome.ranges.get(ScoreAttribute::Battery).is_degenerate());
    for record in outcome.ranking.as_slice() {
        assert_eq!(record.normalized.battery_n, DEGENERATE_RANGE_FILL);
    }
}

#[test]
fn test_single_record_is_ranked_first() {
    let records = RecordSet::from(vec![uniform("only", 42.0)]);
    let outcome = ScoringPipeline::default().run(&records).unwrap();
    let best = outcome.ranking.best().unwrap();
    assert_eq!(best.name, "only");
    assert!((0.0..=1.0).contains(&best.final_score));
    assert_eq!(outcome.ranking.top_n(10).len(), 1);
}

#[test]
fn test_best_matches_top_one() {
    let records = RecordSet::from(vec![
        uniform("p", 3.0),
        uniform("q", 9.0),
        uniform("r", 6.0),
    ]);
    let ranking = ScoringPipeline::default().run(&records).unwrap().ranking;
    assert_eq!(ranking.best().unwrap(), &ranking.top_n(1)[0]);
    assert_eq!(ranking.position_of("r"), Some(2));
}

#[test]
fn test_equal_scores_keep_input_order() {
    let records = RecordSet::from(vec![
        uniform("first", 5.0),
        uniform("top", 8.0),
        uniform("second", 5.0),
    ]);
    assert_eq!(
        ranked_names(&records, MissingPolicy::Fail),
        ["top", "first", "second"]
    );
}

#[test]
fn test_missing_policies() {
    let records = RecordSet::from(vec![
        uniform("full", 10.0),
        PhoneRecord::new("partial").with(RawAttribute::Price, 5.0),
        uniform("other", 20.0),
    ]);

    let err = ScoringPipeline::default().run(&records).unwrap_err();
    assert!(matches!(err, PipelineError::MissingAttribute(ref e) if e.index == 1));

    let skipped = ScoringPipeline::new(MissingPolicy::Skip).run(&records).unwrap();
    assert_eq!(skipped.ranking.len(), 2);
    assert_eq!(skipped.skipped.len(), 1);
    assert_eq!(skipped.skipped[0].name, "partial");
    assert_eq!(skipped.ranking.position_of("partial"), None);

    let zeroed = ScoringPipeline::new(MissingPolicy::Zero).run(&records).unwrap();
    assert_eq!(zeroed.ranking.len(), 3);
    assert_eq!(zeroed.zero_filled.len(), 1);
    let partial = &zeroed.ranking.as_slice()[zeroed.ranking.position_of("partial").unwrap() - 1];
    assert_eq!(partial.sub_scores.performance_score, 0.0);
    assert_eq!(partial.raw.price, 5.0);
}

#[test]
fn test_empty_input_fails() {
    let err = ScoringPipeline::default().run(&RecordSet::default()).unwrap_err();
    assert_eq!(
        err,
        PipelineError::EmptyInput(EmptyInputError::new("normalization"))
    );
    assert!(err.to_string().contains("at least one record"));
}

#[test]
fn test_runs_are_deterministic() {
    let records = RecordSet::from(vec![
        uniform("a", 1.0),
        uniform("b", 7.0),
        uniform("c", 7.0),
        uniform("d", 3.0),
    ]);
    let first = ScoringPipeline::default().run(&records).unwrap();
    let second = ScoringPipeline::default().run(&records).unwrap();
    assert_eq!(first, second);
}
