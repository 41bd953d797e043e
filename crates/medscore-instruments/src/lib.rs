//! medscore-instruments
//!
//! Clinical scoring instruments. Pure computation without I/O or clock
//! access: a template and an answer map go in, a score with its category
//! and breakdown comes out.

pub mod error;
pub mod instruments;
pub mod scoring;

use medscore_core::models::answer::Answers;
use medscore_core::models::template::{SurveySection, SurveyTemplate};
use serde::{Deserialize, Serialize};

use error::ScoringError;
use instruments::{asa, basdai, bvas_v3, caprini, das28_crp, goldman, rcri, weighted};
use scoring::ScoreResult;

/// The scoring strategy for a template, keyed by its instrument code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// Birmingham Vasculitis Activity Score v3.
    BvasV3,
    /// Disease Activity Score (28 joints) with C-reactive protein.
    Das28Crp,
    /// Bath Ankylosing Spondylitis Disease Activity Index.
    Basdai,
    /// ASA Physical Status Classification.
    Asa,
    /// Revised Cardiac Risk Index (Lee).
    Rcri,
    /// Goldman Cardiac Risk Index.
    Goldman,
    /// Caprini VTE risk score.
    Caprini,
    /// Weighted boolean sum for any template without a dedicated algorithm.
    Generic,
}

impl Instrument {
    /// Every instrument with a dedicated algorithm.
    pub const ALL: [Instrument; 7] = [
        Instrument::BvasV3,
        Instrument::Das28Crp,
        Instrument::Basdai,
        Instrument::Asa,
        Instrument::Rcri,
        Instrument::Goldman,
        Instrument::Caprini,
    ];

    /// Select a strategy by exact template code. Unrecognized codes,
    /// including the empty string, fall back to [`Instrument::Generic`].
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|i| i.code() == Some(code))
            .unwrap_or(Instrument::Generic)
    }

    /// The template code this instrument answers to.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Instrument::BvasV3 => Some("BVAS_V3"),
            Instrument::Das28Crp => Some("DAS28_CRP"),
            Instrument::Basdai => Some("BASDAI"),
            Instrument::Asa => Some("ASA"),
            Instrument::Rcri => Some("RCRI"),
            Instrument::Goldman => Some("GOLDMAN"),
            Instrument::Caprini => Some("CAPRINI"),
            Instrument::Generic => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Instrument::BvasV3 => "BVAS v3",
            Instrument::Das28Crp => "DAS28-CRP",
            Instrument::Basdai => "BASDAI",
            Instrument::Asa => "ASA Physical Status",
            Instrument::Rcri => "RCRI (Lee Index)",
            Instrument::Goldman => "Goldman Cardiac Risk Index",
            Instrument::Caprini => "Caprini VTE Risk Score",
            Instrument::Generic => "Generic weighted sum",
        }
    }

    /// Run this instrument's algorithm over already-decoded sections.
    pub fn score(
        self,
        template: &SurveyTemplate,
        sections: &[SurveySection],
        answers: &Answers,
    ) -> ScoreResult {
        match self {
            Instrument::BvasV3 => {
                // A rules document that does not parse leaves the score
                // without a category rather than failing the request.
                let rules = template.interpretation_rules().ok().flatten();
                bvas_v3::score(sections, rules.as_ref(), answers)
            }
            Instrument::Das28Crp => das28_crp::score(answers),
            Instrument::Basdai => basdai::score(answers),
            Instrument::Asa => asa::score(answers),
            Instrument::Rcri => rcri::score(answers),
            Instrument::Goldman => goldman::score(sections, answers),
            Instrument::Caprini => caprini::score(sections, answers),
            Instrument::Generic => weighted::generic(sections, answers),
        }
    }
}

/// Score a submission against its template.
///
/// Fails only when the template's questions document is malformed. Missing
/// or mistyped answers read as `false`/`0`.
pub fn calculate(template: &SurveyTemplate, answers: &Answers) -> Result<ScoreResult, ScoringError> {
    let sections = template
        .sections()
        .map_err(|source| ScoringError::MalformedTemplate {
            code: template.code.clone(),
            source,
        })?;

    Ok(Instrument::from_code(&template.code).score(template, &sections, answers))
}
