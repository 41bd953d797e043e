use medscore_core::models::answer::Answers;
use medscore_core::models::template::SurveySection;

use super::weighted;
use crate::scoring::ScoreResult;

/// Caprini VTE risk: weighted sum of the template's positive items.
pub fn score(sections: &[SurveySection], answers: &Answers) -> ScoreResult {
    weighted::interpreted(sections, answers, band)
}

pub fn band(score: f64) -> (&'static str, &'static str) {
    if score == 0.0 {
        ("very_low", "Очень низкий риск ВТЭ (0 баллов)")
    } else if score <= 2.0 {
        ("low", "Низкий риск ВТЭ (1-2 балла)")
    } else if score <= 4.0 {
        ("moderate", "Умеренный риск ВТЭ (3-4 балла)")
    } else {
        ("high", "Высокий риск ВТЭ (≥5 баллов)")
    }
}
