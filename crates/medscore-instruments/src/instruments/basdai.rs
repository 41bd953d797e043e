use medscore_core::models::answer::Answers;

use crate::scoring::{round2, Breakdown, ScoreResult};

pub const FORMULA: &str = "(Q1 + Q2 + Q3 + Q4 + (Q5+Q6)/2) / 5";

const ITEMS: [&str; 6] = ["q1", "q2", "q3", "q4", "q5", "q6"];

/// BASDAI over six 0–10 VAS items; the two morning-stiffness items (q5, q6)
/// are averaged before entering the mean.
pub fn score(answers: &Answers) -> ScoreResult {
    let [q1, q2, q3, q4, q5, q6] = ITEMS.map(|id| answers.number(id));

    let score = round2((q1 + q2 + q3 + q4 + (q5 + q6) / 2.0) / 5.0);
    let (category, description) = band(score);

    let mut breakdown = Breakdown::new();
    for (id, value) in ITEMS.iter().zip([q1, q2, q3, q4, q5, q6]) {
        breakdown.set(id, value);
    }
    breakdown.set("formula", FORMULA);
    breakdown.set("category_description", description);

    ScoreResult::new(score, category, breakdown).with_description(description)
}

pub fn band(score: f64) -> (&'static str, &'static str) {
    if score < 4.0 {
        ("low_activity", "Низкая активность заболевания")
    } else {
        ("high_activity", "Высокая активность заболевания")
    }
}
