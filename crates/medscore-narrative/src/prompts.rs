//! System prompts for the two narrative kinds.
//!
//! Prompts are configuration, not code: the defaults below can be replaced
//! wholesale or per field from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::NarrativeError;

const PATIENT_ADVICE_PROMPT: &str = "Ты — медицинский информационный помощник для пациента.
Твои ответы должны быть безопасными и не содержать постановки диагноза, назначения рецептурных препаратов или дозировок.
Пиши простым русским языком.
Не добавляй дисклеймеры/предупреждения в стиле \"Важно:\" — приложение покажет стандартное предупреждение отдельно.
Структура ответа:
1) Короткое резюме результата (1-2 предложения)
2) Что это может означать (общими словами)
3) Что можно сделать сейчас (общие меры, без лечения/доз)
4) Когда обратиться к врачу срочно
5) Вопросы для обсуждения с врачом";

const SURVEY_INTERPRETATION_PROMPT: &str = "Ты — медицинский AI-ассистент. Твоя задача — интерпретировать результаты медицинских опросников (BVAS, DAS28, BASDAI и др.) для врача.
Отвечай кратко и по делу. Используй медицинскую терминологию. Укажи степень активности заболевания и возможные рекомендации по дальнейшему обследованию.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSet {
    /// Patient-facing advice in plain language.
    pub patient_advice: String,
    /// Clinician-facing interpretation of a submitted response.
    pub survey_interpretation: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            patient_advice: PATIENT_ADVICE_PROMPT.to_string(),
            survey_interpretation: SURVEY_INTERPRETATION_PROMPT.to_string(),
        }
    }
}

impl PromptSet {
    /// Load prompts from a JSON file. Fields missing from the file keep
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self, NarrativeError> {
        let raw = std::fs::read_to_string(path)?;
        let prompts = serde_json::from_str(&raw)?;
        info!(path = %path.display(), "loaded prompt set");
        Ok(prompts)
    }
}
