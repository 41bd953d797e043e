use medscore_core::models::answer::Answers;
use medscore_core::models::template::SurveySection;

use super::weighted;
use crate::scoring::ScoreResult;

/// Goldman cardiac risk: weighted sum of the template's positive items.
pub fn score(sections: &[SurveySection], answers: &Answers) -> ScoreResult {
    weighted::interpreted(sections, answers, band)
}

pub fn band(score: f64) -> (&'static str, &'static str) {
    if score <= 5.0 {
        ("class_i", "Класс I - минимальный риск (0-5 баллов)")
    } else if score <= 12.0 {
        ("class_ii", "Класс II - низкий риск (6-12 баллов)")
    } else if score <= 25.0 {
        ("class_iii", "Класс III - умеренный риск (13-25 баллов)")
    } else {
        ("class_iv", "Класс IV - высокий риск (>25 баллов)")
    }
}
