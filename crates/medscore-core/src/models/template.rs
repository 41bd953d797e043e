use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

use super::option::{decode_options, SurveyOption};
use crate::document::{self, Candidate};
use crate::error::CoreError;

/// A versioned questionnaire for one clinical instrument.
///
/// `questions`, `scoring_logic`, and `interpretation_rules` are kept as
/// opaque documents and decoded on access, so templates of different shapes
/// can live side by side. Scoring is selected by the exact `code` string.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyTemplate {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub questions: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_logic: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation_rules: Option<Value>,
    pub version: u32,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl SurveyTemplate {
    /// A fresh, active, first-version template.
    pub fn new(code: impl Into<String>, name: impl Into<String>, questions: Value) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            questions,
            scoring_logic: None,
            interpretation_rules: None,
            version: 1,
            is_active: true,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_scoring_logic(mut self, logic: Value) -> Self {
        self.scoring_logic = Some(logic);
        self
    }

    pub fn with_interpretation_rules(mut self, rules: Value) -> Self {
        self.interpretation_rules = Some(rules);
        self
    }

    /// Decode the questions document into sections.
    pub fn sections(&self) -> Result<Vec<SurveySection>, CoreError> {
        let sections: Option<Vec<SurveySection>> =
            document::as_is(&self.questions).map_err(CoreError::MalformedQuestions)?;
        Ok(sections.unwrap_or_default())
    }

    /// Decode the scoring-logic descriptor, if the template has one.
    pub fn scoring_logic(&self) -> Result<Option<ScoringLogic>, CoreError> {
        match &self.scoring_logic {
            None | Some(Value::Null) => Ok(None),
            Some(value) => document::as_is(value)
                .map(Some)
                .map_err(CoreError::MalformedScoringLogic),
        }
    }

    /// Decode the interpretation ranges, if the template has any.
    ///
    /// Accepts both `{"ranges": [...]}` and a bare list of ranges.
    pub fn interpretation_rules(&self) -> Result<Option<InterpretationRules>, CoreError> {
        match &self.interpretation_rules {
            None | Some(Value::Null) => Ok(None),
            Some(value) => document::decode_first(value, RULE_CANDIDATES)
                .map(Some)
                .ok_or_else(|| CoreError::MalformedRules(value.to_string())),
        }
    }

    /// Find a question by id across all sections.
    pub fn find_question(&self, id: &str) -> Result<Option<SurveyQuestion>, CoreError> {
        Ok(self
            .sections()?
            .into_iter()
            .flat_map(|s| s.questions)
            .find(|q| q.id == id))
    }
}

/// A titled group of questions. Order matters for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveySection {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<SurveyQuestion>,
}

/// Advisory input kind of a question. Not enforced by scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Boolean,
    Number,
    Scale,
    Select,
    Text,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyQuestion {
    /// Key of this question in the answer map.
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    /// Per-question weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Options as stored; see [`SurveyQuestion::options`].
    #[serde(rename = "options", default, skip_serializing_if = "Option::is_none")]
    pub raw_options: Option<Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, Value>,
}

impl SurveyQuestion {
    /// The stored weight, 0 when unset.
    pub fn weight(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    /// Decode this question's options.
    pub fn options(&self) -> Result<Vec<SurveyOption>, CoreError> {
        decode_options(self.raw_options.as_ref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringKind {
    Sum,
    Formula,
    Custom,
    #[default]
    #[serde(other)]
    Other,
}

/// Documentation of how a template is scored. Never executed: the actual
/// computation is fixed per instrument code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringLogic {
    #[serde(rename = "type", default)]
    pub kind: ScoringKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
}

/// A closed score band mapped to a clinical category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationRule {
    pub min: f64,
    pub max: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl InterpretationRule {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationRules {
    #[serde(default)]
    pub ranges: Vec<InterpretationRule>,
}

impl InterpretationRules {
    /// First range, in document order, that contains `score`.
    pub fn resolve(&self, score: f64) -> Option<&InterpretationRule> {
        self.ranges.iter().find(|r| r.contains(score))
    }
}

fn bare_ranges(value: &Value) -> Result<InterpretationRules, serde_json::Error> {
    Ok(InterpretationRules {
        ranges: document::as_is(value)?,
    })
}

const RULE_CANDIDATES: &[Candidate<InterpretationRules>] =
    &[document::as_is::<InterpretationRules>, bare_ranges];
