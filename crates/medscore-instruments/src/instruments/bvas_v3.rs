use medscore_core::models::answer::Answers;
use medscore_core::models::template::{InterpretationRules, SurveyQuestion, SurveySection};
use serde_json::{Map, Value};

use crate::scoring::{round2, Breakdown, ScoreResult, UNKNOWN_CATEGORY};

/// BVAS v3: sum of item weights for every positive item, grouped by organ
/// system. The category comes from the template's interpretation ranges,
/// matched against the rounded total.
pub fn score(
    sections: &[SurveySection],
    rules: Option<&InterpretationRules>,
    answers: &Answers,
) -> ScoreResult {
    let mut subtotals = Map::new();
    let mut total = 0.0;

    for section in sections {
        let subtotal: f64 = section
            .questions
            .iter()
            .filter(|q| answers.flag(&q.id))
            .map(SurveyQuestion::weight)
            .sum();
        subtotals.insert(section.section.clone(), Value::from(round2(subtotal)));
        total += subtotal;
    }

    let score = round2(total);

    let mut breakdown = Breakdown::new();
    breakdown.set("sections", Value::Object(subtotals));
    breakdown.set("total", score);

    match rules.and_then(|r| r.resolve(score)) {
        Some(rule) => {
            breakdown.set("category_description", rule.description.as_str());
            ScoreResult::new(score, rule.category.as_str(), breakdown)
                .with_description(rule.description.as_str())
        }
        None => ScoreResult::new(score, UNKNOWN_CATEGORY, breakdown),
    }
}
