use medscore_core::models::answer::Answers;
use medscore_core::models::template::SurveyTemplate;
use medscore_instruments::calculate;
use medscore_instruments::instruments::{asa, caprini, goldman, rcri};
use serde_json::json;

#[test]
fn asa_emergency_adds_modifier() {
    let mut answers = Answers::new();
    answers.insert("asa_class", 3.0);
    answers.insert("is_emergency", true);

    let result = asa::score(&answers);
    assert_eq!(result.score, 3.0);
    assert_eq!(result.category, "asa_3_e");
    assert_eq!(result.breakdown.text("emergency_modifier"), Some("E"));
    assert_eq!(result.breakdown.text("mortality_rate"), Some("1.8%"));
    assert!(result.description.unwrap().ends_with("(ЭКСТРЕННАЯ операция)"));
}

#[test]
fn asa_class_six_never_takes_emergency_modifier() {
    let mut answers = Answers::new();
    answers.insert("asa_class", 6.0);
    answers.insert("is_emergency", "yes");

    let result = asa::score(&answers);
    assert_eq!(result.category, "asa_6");
    assert!(result.breakdown.get("emergency_modifier").is_none());
}

#[test]
fn asa_out_of_table_is_unknown() {
    let mut answers = Answers::new();
    answers.insert("asa_class", 7.0);
    answers.insert("is_emergency", true);
    let result = asa::score(&answers);
    assert_eq!(result.category, "unknown");
    assert_eq!(result.score, 7.0);
    assert!(result.breakdown.get("emergency_modifier").is_none());

    let result = asa::score(&Answers::new());
    assert_eq!(result.category, "unknown");
    assert_eq!(result.description.as_deref(), Some("Неопределенный класс ASA"));
    assert_eq!(result.breakdown.get("asa_class"), Some(&json!(0)));
}

#[test]
fn asa_emergency_marks_unknown_classes_below_six() {
    for class in [0.0, -1.0] {
        let mut answers = Answers::new();
        answers.insert("asa_class", class);
        answers.insert("is_emergency", true);

        let result = asa::score(&answers);
        assert_eq!(result.category, "unknown_e");
        assert_eq!(result.score, class);
        assert_eq!(
            result.description.as_deref(),
            Some("Неопределенный класс ASA (ЭКСТРЕННАЯ операция)")
        );
        assert_eq!(result.breakdown.text("emergency_modifier"), Some("E"));
        assert_eq!(result.breakdown.text("mortality_rate"), Some("N/A"));
    }

    let mut answers = Answers::new();
    answers.insert("is_emergency", true);
    assert_eq!(asa::score(&answers).category, "unknown_e");
}

#[test]
fn asa_fractional_class_truncates() {
    let mut answers = Answers::new();
    answers.insert("asa_class", 5.9);
    answers.insert("is_emergency", true);

    let result = asa::score(&answers);
    assert_eq!(result.category, "asa_5_e");
    assert_eq!(result.score, 5.9);
}

#[test]
fn rcri_counts_risk_factors() {
    let none = rcri::score(&Answers::new());
    assert_eq!(none.score, 0.0);
    assert_eq!(none.category, "class_i");
    assert_eq!(none.breakdown.text("mace_risk"), Some("3.9%"));

    let mut answers = Answers::new();
    answers.insert("ihd", true);
    answers.insert("chf", "true");
    answers.insert("ckd", 1.0);
    answers.insert("cvd", false);
    let three = rcri::score(&answers);
    assert_eq!(three.score, 3.0);
    assert_eq!(three.category, "class_iv");
    assert_eq!(three.breakdown.get("risk_factor_count"), Some(&json!(3)));
    assert_eq!(
        three.breakdown.get("risk_factors"),
        Some(&json!([
            "Ишемическая болезнь сердца",
            "Хроническая сердечная недостаточность",
            "Хроническая болезнь почек (креатинин > 177 мкмоль/л)"
        ]))
    );
}

#[test]
fn rcri_bands() {
    assert_eq!(rcri::band(1).0, "class_ii");
    assert_eq!(rcri::band(2).0, "class_iii");
    assert_eq!(rcri::band(6).0, "class_iv");
}

fn weighted_template(code: &str) -> SurveyTemplate {
    SurveyTemplate::new(
        code,
        code,
        json!([
            {
                "section": "history",
                "title": "History",
                "questions": [
                    { "id": "mi", "text": "MI within 6 months", "type": "boolean", "score": 10 },
                    { "id": "age", "text": "Age over 70", "type": "boolean", "score": 5 },
                    { "id": "unweighted", "text": "Unweighted item", "type": "boolean" }
                ]
            },
            {
                "section": "exam",
                "title": "Exam",
                "questions": [
                    { "id": "s3", "text": "S3 gallop", "type": "boolean", "score": 11 },
                    { "id": "half", "text": "Half point", "type": "boolean", "score": 2.5 }
                ]
            }
        ]),
    )
}

#[test]
fn goldman_sums_weights_per_section() {
    let template = weighted_template("GOLDMAN");
    let mut answers = Answers::new();
    answers.insert("mi", true);
    answers.insert("unweighted", "yes");
    answers.insert("s3", true);
    answers.insert("half", true);

    let result = calculate(&template, &answers).unwrap();
    // 10 + 1 + 11 + round(2.5) = 25
    assert_eq!(result.score, 25.0);
    assert_eq!(result.category, "class_iii");
    assert_eq!(
        result.breakdown.get("section_scores"),
        Some(&json!({ "History": 11, "Exam": 14 }))
    );
    assert_eq!(
        result.breakdown.get("positive_factors"),
        Some(&json!(["MI within 6 months", "Unweighted item", "S3 gallop", "Half point"]))
    );
}

#[test]
fn goldman_bands() {
    assert_eq!(goldman::band(5.0).0, "class_i");
    assert_eq!(goldman::band(6.0).0, "class_ii");
    assert_eq!(goldman::band(12.0).0, "class_ii");
    assert_eq!(goldman::band(13.0).0, "class_iii");
    assert_eq!(goldman::band(26.0).0, "class_iv");
}

#[test]
fn caprini_uses_same_sum_with_own_bands() {
    let template = weighted_template("CAPRINI");

    let empty = calculate(&template, &Answers::new()).unwrap();
    assert_eq!(empty.score, 0.0);
    assert_eq!(empty.category, "very_low");

    let mut answers = Answers::new();
    answers.insert("age", true);
    let result = calculate(&template, &answers).unwrap();
    assert_eq!(result.score, 5.0);
    assert_eq!(result.category, "high");
    assert_eq!(result.description.as_deref(), Some("Высокий риск ВТЭ (≥5 баллов)"));
}

#[test]
fn caprini_bands() {
    assert_eq!(caprini::band(1.0).0, "low");
    assert_eq!(caprini::band(2.0).0, "low");
    assert_eq!(caprini::band(3.0).0, "moderate");
    assert_eq!(caprini::band(4.0).0, "moderate");
    assert_eq!(caprini::band(5.0).0, "high");
}

#[test]
fn huge_weights_saturate_instead_of_overflowing() {
    let template = SurveyTemplate::new(
        "GOLDMAN",
        "Goldman",
        json!([{
            "section": "history",
            "title": "History",
            "questions": [
                { "id": "a", "text": "A", "type": "boolean", "score": 1e19 },
                { "id": "b", "text": "B", "type": "boolean", "score": 1e19 }
            ]
        }, {
            "section": "exam",
            "title": "Exam",
            "questions": [
                { "id": "c", "text": "C", "type": "boolean", "score": 1e19 }
            ]
        }]),
    );
    let mut answers = Answers::new();
    answers.insert("a", true);
    answers.insert("b", true);
    answers.insert("c", true);

    let result = calculate(&template, &answers).unwrap();
    assert_eq!(result.score, i64::MAX as f64);
    assert_eq!(result.category, "class_iv");
    assert_eq!(
        result.breakdown.get("section_scores"),
        Some(&json!({ "History": i64::MAX, "Exam": i64::MAX }))
    );

    let generic = SurveyTemplate::new("CUSTOM", "Custom", template.questions.clone());
    assert_eq!(calculate(&generic, &answers).unwrap().score, i64::MAX as f64);
}
