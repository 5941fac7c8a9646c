mod rubric;
mod rules;

pub use rubric::ScoringRubric;

use super::document::CompanionDocument;
use super::domain::PassportDataset;
use super::facts::FactStore;
use super::findings::Finding;
use super::gate;
use super::insights::{self, PassportInsights};
use serde::{Serialize, Serializer};
use tracing::debug;

/// Stateless engine scoring a passport against the rubric.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rubric: ScoringRubric,
}

impl ScoringEngine {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    pub fn score(
        &self,
        dataset: &PassportDataset,
        document: Option<&CompanionDocument>,
    ) -> ScoreResult {
        self.audit(dataset, document).result
    }

    /// Scores the passport and keeps the trail of findings behind the score.
    pub fn audit(
        &self,
        dataset: &PassportDataset,
        document: Option<&CompanionDocument>,
    ) -> AuditReport {
        let store = FactStore::new(dataset);
        let insights = insights::summarize(dataset, &store);

        let gate = gate::evaluate(document, &self.rubric);
        let mut findings = gate.findings;
        // Reserved for hard-error rules; nothing populates it yet.
        let errors = 0;

        if !gate.passed {
            debug!(warnings = gate.warnings, "hard gate failed, skipping business rules");
            return AuditReport {
                result: ScoreResult {
                    score: 0,
                    details: ScoreDetails::GateFailed {
                        hard_gate: 0,
                        warnings: gate.warnings,
                        errors,
                    },
                },
                findings,
                insights,
            };
        }

        let signals = rules::evaluate_rules(&store, &self.rubric);
        let warnings = gate.warnings + signals.warnings;
        findings.extend(signals.findings);

        let score = self
            .rubric
            .score(signals.required_fields_ok, warnings, errors);
        debug!(
            score,
            warnings,
            required_fields_ok = signals.required_fields_ok,
            "passport scored"
        );

        AuditReport {
            result: ScoreResult {
                score,
                details: ScoreDetails::Scored {
                    hard_gate: 1,
                    warnings_count: warnings,
                    errors_count: errors,
                    required_fields_ok: signals.required_fields_ok,
                    has_identifiers: signals.has_identifiers,
                },
            },
            findings,
            insights,
        }
    }
}

/// Scores a passport with the default rubric.
pub fn score_profile(dataset: &PassportDataset, document: Option<&CompanionDocument>) -> ScoreResult {
    ScoringEngine::default().score(dataset, document)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub details: ScoreDetails,
}

/// Diagnostic breakdown. The gate-failure shape carries fewer keys than the
/// scored shape, and both serialize flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScoreDetails {
    GateFailed {
        hard_gate: u8,
        warnings: u32,
        errors: u32,
    },
    Scored {
        hard_gate: u8,
        warnings_count: u32,
        errors_count: u32,
        #[serde(serialize_with = "as_flag")]
        required_fields_ok: bool,
        #[serde(serialize_with = "as_flag")]
        has_identifiers: bool,
    },
}

impl ScoreDetails {
    pub fn hard_gate_passed(&self) -> bool {
        matches!(self, ScoreDetails::Scored { .. })
    }

    pub fn warnings(&self) -> u32 {
        match self {
            ScoreDetails::GateFailed { warnings, .. } => *warnings,
            ScoreDetails::Scored { warnings_count, .. } => *warnings_count,
        }
    }

    pub fn errors(&self) -> u32 {
        match self {
            ScoreDetails::GateFailed { errors, .. } => *errors,
            ScoreDetails::Scored { errors_count, .. } => *errors_count,
        }
    }

    /// `None` when the gate short-circuited before the check ran.
    pub fn required_fields_ok(&self) -> Option<bool> {
        match self {
            ScoreDetails::GateFailed { .. } => None,
            ScoreDetails::Scored {
                required_fields_ok, ..
            } => Some(*required_fields_ok),
        }
    }

    pub fn has_identifiers(&self) -> Option<bool> {
        match self {
            ScoreDetails::GateFailed { .. } => None,
            ScoreDetails::Scored {
                has_identifiers, ..
            } => Some(*has_identifiers),
        }
    }
}

/// Score plus the evidence trail and profile insights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub findings: Vec<Finding>,
    pub insights: PassportInsights,
}

fn as_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}
