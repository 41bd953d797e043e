use medscore_core::models::answer::Answers;
use medscore_core::models::template::{SurveyQuestion, SurveySection};
use serde_json::{Map, Value};

use crate::scoring::{Breakdown, ScoreResult};

/// Category reported by the generic fallback.
pub const GENERIC_CATEGORY: &str = "calculated";

/// Points contributed by a positive answer: the rounded weight, or 1 when
/// the question carries no positive weight.
pub fn points(question: &SurveyQuestion) -> i64 {
    let weight = question.weight();
    if weight > 0.0 { weight.round() as i64 } else { 1 }
}

/// Totals of a weighted boolean sum. Sums saturate at `i64::MAX`.
#[derive(Debug, Clone, Default)]
pub struct WeightedSum {
    pub total: i64,
    /// Subtotal per section title.
    pub section_scores: Map<String, Value>,
    /// Text of every question that contributed.
    pub positive_factors: Vec<String>,
}

pub fn sum(sections: &[SurveySection], answers: &Answers) -> WeightedSum {
    let mut out = WeightedSum::default();

    for section in sections {
        let mut subtotal: i64 = 0;
        for question in section.questions.iter().filter(|q| answers.flag(&q.id)) {
            subtotal = subtotal.saturating_add(points(question));
            out.positive_factors.push(question.text.clone());
        }
        out.section_scores
            .insert(section.title.clone(), Value::from(subtotal));
        out.total = out.total.saturating_add(subtotal);
    }

    out
}

/// Weighted boolean sum interpreted through an instrument's own bands.
pub fn interpreted(
    sections: &[SurveySection],
    answers: &Answers,
    band: fn(f64) -> (&'static str, &'static str),
) -> ScoreResult {
    let WeightedSum {
        total,
        section_scores,
        positive_factors,
    } = sum(sections, answers);
    let score = total as f64;
    let (category, description) = band(score);

    let mut breakdown = Breakdown::new();
    breakdown.set("section_scores", Value::Object(section_scores));
    breakdown.set("positive_factors", positive_factors);
    breakdown.set("description", description);

    ScoreResult::new(score, category, breakdown).with_description(description)
}

/// Fallback for templates without a dedicated algorithm.
pub fn generic(sections: &[SurveySection], answers: &Answers) -> ScoreResult {
    let total = sum(sections, answers).total;
    ScoreResult::new(total as f64, GENERIC_CATEGORY, Breakdown::new())
}
