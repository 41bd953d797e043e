use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::document::{self, Candidate};
use crate::error::CoreError;

/// A selectable answer option for a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyOption {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub label: String,
}

/// Older templates store options as a plain list of labels; each label's
/// position becomes its value.
fn from_labels(value: &Value) -> Result<Vec<SurveyOption>, serde_json::Error> {
    let labels: Vec<String> = document::as_is(value)?;
    Ok(labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| SurveyOption {
            value: i as f64,
            label,
        })
        .collect())
}

const CANDIDATES: &[Candidate<Vec<SurveyOption>>] =
    &[document::as_is::<Vec<SurveyOption>>, from_labels];

/// Decode an options fragment in either the `{value, label}` form or the
/// legacy label-list form. A missing or empty fragment yields no options.
pub fn decode_options(value: Option<&Value>) -> Result<Vec<SurveyOption>, CoreError> {
    let Some(value) = value.filter(|v| !document::is_blank(v)) else {
        return Ok(Vec::new());
    };
    document::decode_first(value, CANDIDATES)
        .ok_or_else(|| CoreError::InvalidOptions(value.to_string()))
}
