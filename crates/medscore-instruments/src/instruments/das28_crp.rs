use medscore_core::models::answer::Answers;

use crate::scoring::{round2, Breakdown, ScoreResult};

pub const FORMULA: &str = "0.56*sqrt(TJC28) + 0.28*sqrt(SJC28) + 0.36*ln(CRP+1) + 0.014*GH + 0.96";

/// DAS28-CRP from tender and swollen joint counts, CRP (mg/L), and the
/// patient's global health VAS (0–100).
pub fn score(answers: &Answers) -> ScoreResult {
    let tjc28 = answers.number("tjc28");
    let sjc28 = answers.number("sjc28");
    let crp = answers.number("crp");
    let gh = answers.number("gh");

    // Negative counts and CRP are outside the formula's domain; read them as 0.
    let raw = 0.56 * tjc28.max(0.0).sqrt()
        + 0.28 * sjc28.max(0.0).sqrt()
        + 0.36 * (crp.max(0.0) + 1.0).ln()
        + 0.014 * gh
        + 0.96;
    let score = round2(raw);

    let (category, description) = band(score);

    let mut breakdown = Breakdown::new();
    breakdown.set("tjc28", tjc28);
    breakdown.set("sjc28", sjc28);
    breakdown.set("crp", crp);
    breakdown.set("gh", gh);
    breakdown.set("formula", FORMULA);
    breakdown.set("category_description", description);

    ScoreResult::new(score, category, breakdown).with_description(description)
}

/// Disease activity band for a DAS28-CRP score.
pub fn band(score: f64) -> (&'static str, &'static str) {
    if score < 2.6 {
        ("remission", "Ремиссия")
    } else if score < 3.2 {
        ("low_activity", "Низкая активность")
    } else if score <= 5.1 {
        ("moderate_activity", "Умеренная активность")
    } else {
        ("high_activity", "Высокая активность")
    }
}
