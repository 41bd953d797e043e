use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single submitted answer, reduced to the shapes the scoring engine
/// understands. Arrays and objects carry no meaning for scoring and are
/// read as `Null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl AnswerValue {
    /// Numeric reading of the answer. Anything that is not a number is 0.
    pub fn as_number(&self) -> f64 {
        match self {
            AnswerValue::Number(n) => *n,
            AnswerValue::Bool(_) | AnswerValue::Text(_) | AnswerValue::Null => 0.0,
        }
    }

    /// Boolean reading of the answer.
    ///
    /// True for `true`, any nonzero number, and the exact strings
    /// `"true"`, `"1"`, and `"yes"`.
    pub fn as_bool(&self) -> bool {
        match self {
            AnswerValue::Bool(b) => *b,
            AnswerValue::Number(n) => *n != 0.0,
            AnswerValue::Text(s) => matches!(s.as_str(), "true" | "1" | "yes"),
            AnswerValue::Null => false,
        }
    }
}

impl From<&Value> for AnswerValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => AnswerValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(AnswerValue::Null, AnswerValue::Number),
            Value::String(s) => AnswerValue::Text(s.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => AnswerValue::Null,
        }
    }
}

impl From<Value> for AnswerValue {
    fn from(value: Value) -> Self {
        AnswerValue::from(&value)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Bool(b)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(AnswerValue::from(value))
    }
}

/// Answers keyed by question id, as submitted by the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build answers from a raw JSON object.
    pub fn from_json_map(map: &serde_json::Map<String, Value>) -> Self {
        Self(
            map.iter()
                .map(|(k, v)| (k.clone(), AnswerValue::from(v)))
                .collect(),
        )
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    /// Numeric answer for `id`; a missing key reads as 0.
    pub fn number(&self, id: &str) -> f64 {
        self.get(id).map_or(0.0, AnswerValue::as_number)
    }

    /// Boolean answer for `id`; a missing key reads as `false`.
    pub fn flag(&self, id: &str) -> bool {
        self.get(id).is_some_and(AnswerValue::as_bool)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
