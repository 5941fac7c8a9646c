//! Organization passport auditing.
//!
//! A passport is a flat list of attribute facts, each carrying a validation
//! status. Scoring resolves one authoritative value per attribute, runs the
//! structural gate on the optional companion document, then applies the
//! business rules to produce a 0-100 score and its diagnostic details.

pub mod document;
pub mod domain;
pub mod facts;
pub mod findings;
pub mod gate;
pub mod importer;
pub mod insights;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use document::{CompanionDocument, DocumentError};
pub use domain::{AttributeFact, PassportDataset, Provenance, UnknownStatus, ValidationStatus};
pub use facts::{attributes_by_prefix, is_missing, present, present_by_prefix, resolve, FactStore};
pub use findings::{Finding, FindingKind};
pub use gate::{evaluate_gate, GateOutcome};
pub use importer::{PassportImportError, PassportImporter};
pub use insights::{certified_ratio, PassportInsights};
pub use router::{passport_router, ScoreRequest, ScoreRequestError};
pub use scoring::{score_profile, AuditReport, ScoreDetails, ScoreResult, ScoringEngine, ScoringRubric};
