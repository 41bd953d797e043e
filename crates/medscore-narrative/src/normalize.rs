//! Disclaimer cleanup for generated advice.
//!
//! The caller renders [`PATIENT_ADVICE_DISCLAIMER`] verbatim next to every
//! piece of advice, so the advice text itself must not carry one. Models are
//! told not to add disclaimers but often do anyway; this module removes the
//! canonical string wherever it appears, then drops a trailing "Важно: ..."
//! block when it reads like a safety disclaimer.
//!
//! The trailing-block check is a heuristic over Russian wording. It can miss
//! paraphrased disclaimers, and it can cut a genuine closing paragraph that
//! starts with the marker and mentions a doctor.

use std::sync::LazyLock;

/// Shown to the patient alongside every piece of advice.
pub const PATIENT_ADVICE_DISCLAIMER: &str = "Важно: это информационная справка, а не клиническая рекомендация и не заменяет консультацию врача. При ухудшении самочувствия, сильной боли, высокой температуре, одышке или других тревожных симптомах обратитесь за медицинской помощью.";

/// Parameters of the disclaimer heuristic.
#[derive(Debug, Clone)]
pub struct DisclaimerFilter {
    /// Removed wherever it appears.
    pub disclaimer: String,
    /// Start of a trailing block that may be a disclaimer. Matched without
    /// regard to case.
    pub marker: String,
    /// The block must start within this many characters of the end.
    pub window: usize,
    /// Lower-case fragments, any of which marks the block as a disclaimer.
    pub indicators: Vec<String>,
}

impl Default for DisclaimerFilter {
    fn default() -> Self {
        Self {
            disclaimer: PATIENT_ADVICE_DISCLAIMER.to_string(),
            marker: "важно:".to_string(),
            window: 700,
            indicators: ["не является", "не клиничес", "не замен", "консульта", "врач"]
                .map(String::from)
                .to_vec(),
        }
    }
}

static DEFAULT_FILTER: LazyLock<DisclaimerFilter> = LazyLock::new(DisclaimerFilter::default);

/// Clean advice text with the default Russian-language filter.
pub fn normalize_advice_text(text: &str) -> String {
    DEFAULT_FILTER.apply(text)
}

impl DisclaimerFilter {
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.trim().to_string();
        if out.is_empty() {
            return out;
        }

        if !self.disclaimer.is_empty() && out.contains(&self.disclaimer) {
            out = out.replace(&self.disclaimer, "").trim().to_string();
        }

        if let Some(cut) = self.trailing_disclaimer(&out) {
            out = out[..cut].trim().to_string();
        }

        out
    }

    /// Byte offset where a trailing disclaimer block starts, if there is one.
    fn trailing_disclaimer(&self, text: &str) -> Option<usize> {
        if self.marker.is_empty() {
            return None;
        }

        // Prefer a marker that opens a line.
        let line_marker = format!("\n{}", self.marker);
        let start = rfind_ignore_case(text, &line_marker)
            .or_else(|| rfind_ignore_case(text, &self.marker))?;

        let tail = &text[start..];
        if tail.chars().count() > self.window {
            return None;
        }

        let tail = tail.to_lowercase();
        self.indicators
            .iter()
            .any(|needle| tail.contains(needle.as_str()))
            .then_some(start)
    }
}

/// Byte offset of the last case-insensitive occurrence of `needle`.
fn rfind_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .rev()
        .map(|(i, _)| i)
        .find(|&i| starts_with_ignore_case(&haystack[i..], needle))
}

fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    let mut hay = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|n| hay.next() == Some(n))
}
