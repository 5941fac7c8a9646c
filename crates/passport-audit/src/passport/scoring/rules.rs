use super::super::facts::{is_missing, FactStore};
use super::super::findings::{Finding, FindingKind};
use super::rubric::{ScoringRubric, SIREN_DIGITS, SIRET_DIGITS};
use tracing::debug;

const NAME: &str = "name";
const URL: &str = "url";
const SUBJECT_OF_PREFIX: &str = "subjectOf";
const SIREN: &str = "identifier.siren";
const SIRET_PREFIX: &str = "identifier.siret";

pub(crate) struct RuleSignals {
    pub required_fields_ok: bool,
    pub has_identifiers: bool,
    pub warnings: u32,
    pub findings: Vec<Finding>,
}

pub(crate) fn evaluate_rules(store: &FactStore<'_>, rubric: &ScoringRubric) -> RuleSignals {
    let mut findings = Vec::new();
    let mut warnings = 0;

    let has_name = store.present(NAME);
    let has_location = store.present(URL) || store.present_by_prefix(SUBJECT_OF_PREFIX);
    let required_fields_ok = has_name && has_location;

    if !required_fields_ok {
        let mut missing = Vec::new();
        if !has_name {
            missing.push(NAME);
        }
        if !has_location {
            missing.push("url or subjectOf");
        }
        debug!(?missing, "required passport fields missing");
        findings.push(Finding::new(
            FindingKind::RequiredFieldsMissing,
            0,
            format!("missing {}", missing.join(", ")),
        ));
    }

    let has_identifiers = store.present(SIREN) || store.present_by_prefix(SIRET_PREFIX);

    if let Some(siren) = store.resolve(SIREN).filter(|value| !is_missing(Some(*value))) {
        let digits = digit_count(siren);
        if digits != SIREN_DIGITS {
            warnings += rubric.malformed_siren_warnings;
            debug!(digits, "malformed SIREN");
            findings.push(
                Finding::new(
                    FindingKind::MalformedSiren,
                    rubric.malformed_siren_warnings,
                    format!("SIREN has {digits} digit(s), expected {SIREN_DIGITS}"),
                )
                .for_attribute(SIREN),
            );
        }
    }

    for attribute in store.attributes_by_prefix(SIRET_PREFIX) {
        let Some(siret) = store.resolve(attribute).filter(|value| !is_missing(Some(*value))) else {
            continue;
        };

        let digits = digit_count(siret);
        if digits != SIRET_DIGITS {
            warnings += rubric.malformed_siret_warnings;
            debug!(attribute, digits, "malformed SIRET");
            findings.push(
                Finding::new(
                    FindingKind::MalformedSiret,
                    rubric.malformed_siret_warnings,
                    format!("SIRET has {digits} digit(s), expected {SIRET_DIGITS}"),
                )
                .for_attribute(attribute),
            );
        }
    }

    RuleSignals {
        required_fields_ok,
        has_identifiers,
        warnings,
        findings,
    }
}

/// Counts ASCII digits only; separators such as spaces and dots are ignored.
fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}
