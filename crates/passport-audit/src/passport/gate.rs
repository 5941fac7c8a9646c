use super::document::CompanionDocument;
use super::findings::{Finding, FindingKind};
use super::scoring::ScoringRubric;
use serde_json::Value;
use tracing::debug;

const EXPECTED_TYPE: &str = "Organization";

/// Result of the structural hard gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    pub passed: bool,
    pub warnings: u32,
    pub findings: Vec<Finding>,
}

/// Evaluates the companion document with the default rubric.
pub fn evaluate_gate(document: Option<&CompanionDocument>) -> GateOutcome {
    evaluate(document, &ScoringRubric::default())
}

pub(crate) fn evaluate(document: Option<&CompanionDocument>, rubric: &ScoringRubric) -> GateOutcome {
    let Some(document) = document else {
        let warnings = rubric.missing_document_warnings;
        return GateOutcome {
            passed: true,
            warnings,
            findings: vec![Finding::new(
                FindingKind::DocumentAbsent,
                warnings,
                "no companion document supplied, structure cannot be verified",
            )],
        };
    };

    let Value::Object(fields) = document.as_value() else {
        return failed(Finding::new(
            FindingKind::DocumentNotObject,
            0,
            format!("expected a key/value object, found {}", kind_of(document.as_value())),
        ));
    };

    if let Err(err) = serde_json::to_string(document.as_value()) {
        return failed(Finding::new(
            FindingKind::DocumentUnserializable,
            0,
            format!("document cannot be serialized: {err}"),
        ));
    }

    let mut failures = Vec::new();

    match fields.get("@context") {
        Some(Value::String(context)) if context.starts_with("http") => {}
        Some(other) => failures.push(Finding::new(
            FindingKind::InvalidContext,
            0,
            format!("@context must be an absolute URL, found {other}"),
        )),
        None => failures.push(Finding::new(
            FindingKind::InvalidContext,
            0,
            "@context is missing",
        )),
    }

    match fields.get("@type") {
        Some(Value::String(kind)) if kind == EXPECTED_TYPE => {}
        Some(other) => failures.push(Finding::new(
            FindingKind::InvalidType,
            0,
            format!("@type must be \"{EXPECTED_TYPE}\", found {other}"),
        )),
        None => failures.push(Finding::new(FindingKind::InvalidType, 0, "@type is missing")),
    }

    if !failures.is_empty() {
        debug!(failures = failures.len(), "companion document failed the structural gate");
        return GateOutcome {
            passed: false,
            warnings: 0,
            findings: failures,
        };
    }

    let mut outcome = GateOutcome {
        passed: true,
        warnings: 0,
        findings: Vec::new(),
    };

    if !fields.contains_key("name") {
        outcome.warnings += 1;
        outcome.findings.push(Finding::new(
            FindingKind::DocumentNameMissing,
            1,
            "companion document does not assert a name",
        ));
    }

    if let Some(identifier) = fields.get("identifier") {
        if !(identifier.is_array() || identifier.is_object()) {
            outcome.warnings += 1;
            outcome.findings.push(
                Finding::new(
                    FindingKind::IdentifierShape,
                    1,
                    format!(
                        "identifier should be a list or an object, found {}",
                        kind_of(identifier)
                    ),
                )
                .for_attribute("identifier"),
            );
        }
    }

    outcome
}

fn failed(finding: Finding) -> GateOutcome {
    debug!(kind = ?finding.kind, "companion document failed the structural gate");
    GateOutcome {
        passed: false,
        warnings: 0,
        findings: vec![finding],
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
