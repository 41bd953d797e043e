use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Category reported when no band matches the score.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Intermediate values explaining how a score was derived. Keys are kept
/// sorted so the same inputs always serialize to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown(BTreeMap<String, Value>);

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String entry for `key`, if present and a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

/// The outcome of scoring one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub score: f64,
    pub category: String,
    /// Human-readable text of the matched band, when the instrument has one.
    pub description: Option<String>,
    #[ts(type = "Record<string, unknown>")]
    pub breakdown: Breakdown,
}

impl ScoreResult {
    pub fn new(score: f64, category: impl Into<String>, breakdown: Breakdown) -> Self {
        Self {
            score,
            category: category.into(),
            description: None,
            breakdown,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Short interpretation label, e.g. `"DAS28_CRP (remission)"`.
    pub fn interpretation(&self, code: &str) -> String {
        format!("{code} ({})", self.category)
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
