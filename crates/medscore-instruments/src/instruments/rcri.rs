use medscore_core::models::answer::Answers;

use crate::scoring::{Breakdown, ScoreResult};

/// The six Lee risk factors, in reporting order.
pub const RISK_FACTORS: [(&str, &str); 6] = [
    ("high_risk_surgery", "Операция высокого риска"),
    ("ihd", "Ишемическая болезнь сердца"),
    ("chf", "Хроническая сердечная недостаточность"),
    ("cvd", "Цереброваскулярное заболевание"),
    ("insulin_dm", "Сахарный диабет на инсулинотерапии"),
    ("ckd", "Хроническая болезнь почек (креатинин > 177 мкмоль/л)"),
];

/// RCRI: one point per present risk factor.
pub fn score(answers: &Answers) -> ScoreResult {
    let present: Vec<&str> = RISK_FACTORS
        .iter()
        .filter(|(key, _)| answers.flag(key))
        .map(|(_, name)| *name)
        .collect();
    let count = present.len();

    let (category, mace_risk, description) = band(count);

    let mut breakdown = Breakdown::new();
    breakdown.set("risk_factors", present);
    breakdown.set("risk_factor_count", count);
    breakdown.set("mace_risk", mace_risk);
    breakdown.set("description", description);

    ScoreResult::new(count as f64, category, breakdown).with_description(description)
}

/// Risk class, approximate MACE risk, and description for a factor count.
pub fn band(count: usize) -> (&'static str, &'static str, &'static str) {
    match count {
        0 => ("class_i", "3.9%", "Класс I - минимальный риск MACE"),
        1 => ("class_ii", "6.0%", "Класс II - низкий риск MACE"),
        2 => ("class_iii", "10.1%", "Класс III - умеренный риск MACE"),
        _ => ("class_iv", "15%+", "Класс IV - высокий риск MACE"),
    }
}
