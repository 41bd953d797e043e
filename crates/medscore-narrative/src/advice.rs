//! User prompts and templated fallbacks built from a score.

use medscore_instruments::scoring::{Breakdown, ScoreResult};
use serde_json::Value;

/// Advice shown when no model is configured or the model gives nothing
/// usable.
pub fn fallback_advice(survey_name: &str, result: &ScoreResult) -> String {
    let summary = result
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(&result.category);

    format!(
        "Результат опросника: {survey_name} ({:.2})\n\n{summary}",
        result.score
    )
}

/// User prompt for patient-facing advice.
pub fn patient_advice_prompt(
    survey_name: &str,
    survey_code: &str,
    result: &ScoreResult,
    user_text: &str,
) -> String {
    format!(
        "Опросник: {survey_name} ({survey_code})\n\
         Итоговый балл: {:.2}\n\
         Категория: {}\n\
         Детали:\n{}\n\n\
         Комментарий пациента (если есть - учесть в ответе): {}\n",
        result.score,
        result.category,
        details_block(&result.breakdown),
        user_text.trim(),
    )
}

/// User prompt for the clinician-facing interpretation of a response.
pub fn interpretation_prompt(survey_name: &str, result: &ScoreResult) -> String {
    format!(
        "Опросник: {survey_name}\n\
         Итоговый балл: {:.2}\n\
         Категория: {}\n\
         Детали:\n{}\n\n\
         Дай краткую интерпретацию результатов для врача.",
        result.score,
        result.category,
        details_block(&result.breakdown),
    )
}

/// One `- key: value` line per breakdown entry, in key order.
///
/// Strings are written bare, everything else as compact JSON. An empty
/// breakdown renders as `-`.
pub fn details_block(breakdown: &Breakdown) -> String {
    if breakdown.is_empty() {
        return "-".to_string();
    }

    breakdown
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("- {key}: {s}"),
            other => format!("- {key}: {other}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
