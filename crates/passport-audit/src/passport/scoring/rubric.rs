use serde::{Deserialize, Serialize};

pub(crate) const SIREN_DIGITS: usize = 9;
pub(crate) const SIRET_DIGITS: usize = 14;

/// Weights turning audit signals into the 0-100 score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRubric {
    pub required_fields_penalty: i64,
    pub warning_penalty: i64,
    pub error_penalty: i64,
    pub missing_document_warnings: u32,
    pub malformed_siren_warnings: u32,
    pub malformed_siret_warnings: u32,
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self {
            required_fields_penalty: 15,
            warning_penalty: 5,
            error_penalty: 25,
            missing_document_warnings: 2,
            malformed_siren_warnings: 2,
            malformed_siret_warnings: 1,
        }
    }
}

impl ScoringRubric {
    pub fn score(&self, required_fields_ok: bool, warnings: u32, errors: u32) -> u8 {
        let required_penalty = if required_fields_ok {
            0
        } else {
            self.required_fields_penalty
        };

        let raw = 100_i64
            .saturating_sub(required_penalty)
            .saturating_sub(self.warning_penalty.saturating_mul(i64::from(warnings)))
            .saturating_sub(self.error_penalty.saturating_mul(i64::from(errors)));

        clamp_score(raw)
    }
}

pub(crate) fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}
