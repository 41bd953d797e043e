use medscore_core::models::answer::Answers;
use medscore_core::models::template::SurveyTemplate;
use medscore_instruments::calculate;
use medscore_instruments::instruments::{basdai, das28_crp};
use serde_json::json;

fn answers(pairs: &[(&str, f64)]) -> Answers {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn das28_crp_reference_cases() {
    let cases = [
        ((0.0, 0.0, 1.0, 10.0), 1.35, "remission"),
        ((2.0, 1.0, 3.0, 20.0), 2.81, "low_activity"),
        ((2.0, 2.0, 5.0, 30.0), 3.21, "moderate_activity"),
        ((6.0, 4.0, 15.0, 50.0), 4.59, "moderate_activity"),
        ((15.0, 12.0, 40.0, 80.0), 6.56, "high_activity"),
    ];

    for ((tjc28, sjc28, crp, gh), score, category) in cases {
        let result = das28_crp::score(&answers(&[
            ("tjc28", tjc28),
            ("sjc28", sjc28),
            ("crp", crp),
            ("gh", gh),
        ]));
        assert_close(result.score, score);
        assert_eq!(result.category, category);
    }
}

#[test]
fn das28_crp_band_edges() {
    assert_eq!(das28_crp::band(2.59).0, "remission");
    assert_eq!(das28_crp::band(2.6).0, "low_activity");
    assert_eq!(das28_crp::band(3.19).0, "low_activity");
    assert_eq!(das28_crp::band(3.2).0, "moderate_activity");
    assert_eq!(das28_crp::band(5.1).0, "moderate_activity");
    assert_eq!(das28_crp::band(5.11).0, "high_activity");
}

#[test]
fn das28_crp_missing_inputs_read_as_zero() {
    let result = das28_crp::score(&Answers::new());
    assert_close(result.score, 0.96);
    assert_eq!(result.category, "remission");
    assert_eq!(result.breakdown.get("crp"), Some(&json!(0.0)));
}

#[test]
fn das28_crp_negative_inputs_score_as_zero() {
    let negative = das28_crp::score(&answers(&[
        ("tjc28", -4.0),
        ("sjc28", -1.0),
        ("crp", -3.0),
        ("gh", 20.0),
    ]));
    let zero = das28_crp::score(&answers(&[("gh", 20.0)]));

    assert!(negative.score.is_finite());
    assert_eq!(negative.score, zero.score);
    assert_eq!(negative.category, zero.category);
    assert_eq!(negative.breakdown.get("tjc28"), Some(&json!(-4.0)));
}

#[test]
fn das28_crp_breakdown_records_inputs_and_formula() {
    let result = das28_crp::score(&answers(&[("tjc28", 4.0), ("crp", 10.0)]));
    assert_eq!(result.breakdown.get("tjc28"), Some(&json!(4.0)));
    assert_eq!(result.breakdown.text("formula"), Some(das28_crp::FORMULA));
    assert_eq!(
        result.breakdown.text("category_description"),
        result.description.as_deref()
    );
}

#[test]
fn basdai_reference_cases() {
    let low = basdai::score(&answers(&[
        ("q1", 2.0),
        ("q2", 3.0),
        ("q3", 2.0),
        ("q4", 1.0),
        ("q5", 3.0),
        ("q6", 2.0),
    ]));
    assert_close(low.score, 2.1);
    assert_eq!(low.category, "low_activity");

    let high = basdai::score(&answers(&[
        ("q1", 7.0),
        ("q2", 6.0),
        ("q3", 8.0),
        ("q4", 5.0),
        ("q5", 7.0),
        ("q6", 6.0),
    ]));
    assert_close(high.score, 6.5);
    assert_eq!(high.category, "high_activity");
}

#[test]
fn basdai_rounds_to_two_places() {
    // (1 + 1 + 1 + 1 + (1 + 0.3333) / 2) / 5 = 0.93333
    let result = basdai::score(&answers(&[
        ("q1", 1.0),
        ("q2", 1.0),
        ("q3", 1.0),
        ("q4", 1.0),
        ("q5", 1.0),
        ("q6", 0.3333),
    ]));
    assert_close(result.score, 0.93);
}

#[test]
fn basdai_threshold_is_four() {
    assert_eq!(basdai::band(3.99).0, "low_activity");
    assert_eq!(basdai::band(4.0).0, "high_activity");
}

#[test]
fn formula_instruments_dispatch_by_code() {
    let template = SurveyTemplate::new("BASDAI", "BASDAI", json!([]));
    let result = calculate(
        &template,
        &answers(&[("q1", 10.0), ("q2", 10.0), ("q3", 10.0), ("q4", 10.0)]),
    )
    .unwrap();
    assert_close(result.score, 8.0);
    assert_eq!(result.category, "high_activity");
}
