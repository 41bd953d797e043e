use medscore_core::error::CoreError;
use medscore_core::models::template::{QuestionKind, ScoringKind, SurveyTemplate};
use serde_json::json;

fn bvas_template() -> SurveyTemplate {
    SurveyTemplate::new(
        "BVAS_V3",
        "BVAS v3",
        json!([
            {
                "section": "general",
                "title": "General",
                "questions": [
                    { "id": "myalgia", "text": "Myalgia", "type": "boolean", "score": 1 },
                    { "id": "fever", "text": "Fever", "type": "boolean", "score": 2, "required": true }
                ]
            },
            {
                "section": "renal",
                "title": "Renal",
                "questions": [
                    { "id": "hypertension", "text": "Hypertension", "type": "boolean", "score": 4 }
                ]
            }
        ]),
    )
}

#[test]
fn sections_decode_in_document_order() {
    let sections = bvas_template().sections().unwrap();
    let keys: Vec<_> = sections.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(keys, ["general", "renal"]);

    let fever = &sections[0].questions[1];
    assert_eq!(fever.kind, QuestionKind::Boolean);
    assert_eq!(fever.weight(), 2.0);
    assert!(fever.required);
}

#[test]
fn unknown_question_type_is_tolerated() {
    let template = SurveyTemplate::new(
        "X",
        "X",
        json!([{ "section": "a", "title": "A", "questions": [{ "id": "q", "type": "slider" }] }]),
    );
    let sections = template.sections().unwrap();
    assert_eq!(sections[0].questions[0].kind, QuestionKind::Other);
    assert_eq!(sections[0].questions[0].weight(), 0.0);
}

#[test]
fn null_questions_document_has_no_sections() {
    let template = SurveyTemplate::new("X", "X", json!(null));
    assert!(template.sections().unwrap().is_empty());
}

#[test]
fn malformed_questions_document_is_a_structural_error() {
    let template = SurveyTemplate::new("X", "X", json!({ "not": "a list" }));
    assert!(matches!(
        template.sections(),
        Err(CoreError::MalformedQuestions(_))
    ));
}

#[test]
fn interpretation_rules_accept_wrapped_and_bare_lists() {
    let rule = json!({ "min": 0, "max": 3, "category": "low", "description": "Low" });

    let wrapped = bvas_template().with_interpretation_rules(json!({ "ranges": [rule.clone()] }));
    let bare = bvas_template().with_interpretation_rules(json!([rule]));

    let wrapped = wrapped.interpretation_rules().unwrap().unwrap();
    let bare = bare.interpretation_rules().unwrap().unwrap();
    assert_eq!(wrapped, bare);
    assert_eq!(wrapped.ranges[0].category, "low");
}

#[test]
fn first_matching_range_wins() {
    let template = bvas_template().with_interpretation_rules(json!({
        "ranges": [
            { "min": 0, "max": 5, "category": "first", "description": "" },
            { "min": 5, "max": 10, "category": "second", "description": "" }
        ]
    }));
    let rules = template.interpretation_rules().unwrap().unwrap();
    assert_eq!(rules.resolve(5.0).unwrap().category, "first");
    assert_eq!(rules.resolve(7.5).unwrap().category, "second");
    assert!(rules.resolve(10.5).is_none());
}

#[test]
fn missing_rules_and_logic_are_none() {
    let template = bvas_template();
    assert!(template.interpretation_rules().unwrap().is_none());
    assert!(template.scoring_logic().unwrap().is_none());
}

#[test]
fn scoring_logic_is_descriptive_only() {
    let template = bvas_template().with_scoring_logic(json!({
        "type": "sum",
        "sections": ["general", "renal"]
    }));
    let logic = template.scoring_logic().unwrap().unwrap();
    assert_eq!(logic.kind, ScoringKind::Sum);
    assert_eq!(logic.sections, ["general", "renal"]);
    assert!(logic.formula.is_none());
}

#[test]
fn template_round_trips_through_json() {
    let template = bvas_template();
    let body = serde_json::to_string(&template).unwrap();
    let back: SurveyTemplate = serde_json::from_str(&body).unwrap();
    assert_eq!(back.code, "BVAS_V3");
    assert_eq!(back.questions, template.questions);
}
