use super::common::*;
use serde_json::{json, Value};

use crate::passport::domain::PassportDataset;
use crate::passport::findings::FindingKind;
use crate::passport::scoring::{score_profile, ScoreDetails, ScoringEngine, ScoringRubric};
use crate::passport::CompanionDocument;

#[test]
fn absent_document_costs_two_warnings() {
    let result = score_profile(&minimal_passport(), None);

    assert_eq!(result.score, 90);
    assert_eq!(
        result.details,
        ScoreDetails::Scored {
            hard_gate: 1,
            warnings_count: 2,
            errors_count: 0,
            required_fields_ok: true,
            has_identifiers: false,
        }
    );
}

#[test]
fn complete_passport_with_valid_document_scores_full_marks() {
    let result = score_profile(&complete_passport(), Some(&organization_document()));

    assert_eq!(result.score, 100);
    assert_eq!(result.details.warnings(), 0);
    assert_eq!(result.details.has_identifiers(), Some(true));
    assert_eq!(result.details.required_fields_ok(), Some(true));
}

#[test]
fn wrong_document_type_zeroes_the_score() {
    let document = CompanionDocument::new(json!({
        "@context": "http://schema.org",
        "@type": "Person",
    }));

    let result = score_profile(&complete_passport(), Some(&document));

    assert_eq!(result.score, 0);
    assert!(!result.details.hard_gate_passed());
    assert_eq!(
        result.details,
        ScoreDetails::GateFailed {
            hard_gate: 0,
            warnings: 0,
            errors: 0,
        }
    );
    assert_eq!(result.details.required_fields_ok(), None);
}

#[test]
fn gate_failure_skips_business_findings() {
    let dataset = PassportDataset::new(vec![certified("identifier.siren", "12")]);
    let document = CompanionDocument::new(json!(["not", "an", "object"]));

    let report = ScoringEngine::default().audit(&dataset, Some(&document));

    assert_eq!(report.result.score, 0);
    assert!(report
        .findings
        .iter()
        .all(|finding| finding.kind.is_gate_failure()));
}

#[test]
fn malformed_siren_adds_two_warnings() {
    let mut facts = minimal_passport().facts().to_vec();
    facts.push(certified("identifier.siren", "12345"));
    let dataset = PassportDataset::new(facts);

    let with_document = score_profile(&dataset, Some(&organization_document()));
    assert_eq!(with_document.details.warnings(), 2);
    assert_eq!(with_document.score, 90);

    let without_document = score_profile(&dataset, None);
    assert_eq!(without_document.details.warnings(), 4);
    assert_eq!(without_document.score, 80);
}

#[test]
fn only_malformed_siret_entries_are_penalized() {
    let mut facts = minimal_passport().facts().to_vec();
    facts.push(certified("identifier.siret.0", "55210055400013"));
    facts.push(certified("identifier.siret.1", "5521005540"));
    let dataset = PassportDataset::new(facts);

    let report = ScoringEngine::default().audit(&dataset, Some(&organization_document()));

    assert_eq!(report.result.details.warnings(), 1);
    assert_eq!(report.result.score, 95);
    let siret_findings: Vec<_> = report
        .findings
        .iter()
        .filter(|finding| finding.kind == FindingKind::MalformedSiret)
        .collect();
    assert_eq!(siret_findings.len(), 1);
    assert_eq!(
        siret_findings[0].attribute.as_deref(),
        Some("identifier.siret.1")
    );
}

#[test]
fn placeholder_and_rejected_identifiers_are_not_checked() {
    let mut facts = minimal_passport().facts().to_vec();
    facts.push(certified("identifier.siren", "\u{2014}"));
    facts.push(rejected("identifier.siret.0", "123"));
    facts.push(pending("identifier.siret.1", "NaN"));
    let dataset = PassportDataset::new(facts);

    let result = score_profile(&dataset, Some(&organization_document()));

    assert_eq!(result.score, 100);
    assert_eq!(result.details.has_identifiers(), Some(false));
}

#[test]
fn missing_name_costs_required_field_penalty() {
    let dataset = PassportDataset::new(vec![
        rejected("name", "Boulangerie Martin"),
        certified("url", "https://boulangerie-martin.fr"),
    ]);

    let report = ScoringEngine::default().audit(&dataset, Some(&organization_document()));

    assert_eq!(report.result.score, 85);
    assert_eq!(report.result.details.required_fields_ok(), Some(false));
    assert!(report
        .findings
        .iter()
        .any(|finding| finding.kind == FindingKind::RequiredFieldsMissing));
}

#[test]
fn subject_of_can_stand_in_for_url() {
    let dataset = PassportDataset::new(vec![
        certified("name", "Boulangerie Martin"),
        pending("subjectOf.0.url", "https://annuaire.example/martin"),
    ]);

    let result = score_profile(&dataset, Some(&organization_document()));

    assert_eq!(result.details.required_fields_ok(), Some(true));
    assert_eq!(result.score, 100);
}

#[test]
fn document_shape_warnings_reduce_score() {
    let document = CompanionDocument::new(json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "identifier": "552100554",
    }));

    let result = score_profile(&complete_passport(), Some(&document));

    assert_eq!(result.details.warnings(), 2);
    assert_eq!(result.score, 90);
}

#[test]
fn score_is_clamped_at_zero() {
    let mut facts = vec![rejected("name", "Boulangerie Martin")];
    for index in 0..20 {
        facts.push(certified(&format!("identifier.siret.{index}"), "123"));
    }
    let dataset = PassportDataset::new(facts);

    let result = score_profile(&dataset, None);

    assert_eq!(result.details.warnings(), 22);
    assert_eq!(result.score, 0);
}

#[test]
fn custom_rubric_weights_are_applied() {
    let engine = ScoringEngine::new(ScoringRubric {
        malformed_siret_warnings: 2,
        ..ScoringRubric::default()
    });
    let mut facts = minimal_passport().facts().to_vec();
    facts.push(certified("identifier.siret.0", "5521005540"));
    let dataset = PassportDataset::new(facts);

    let result = engine.score(&dataset, Some(&organization_document()));

    assert_eq!(result.details.warnings(), 2);
    assert_eq!(result.score, 90);
}

#[test]
fn scoring_is_idempotent() {
    let dataset = complete_passport();
    let document = organization_document();

    let first = score_profile(&dataset, Some(&document));
    let second = score_profile(&dataset, Some(&document));

    assert_eq!(first, second);
    assert_eq!(dataset, complete_passport());
}

#[test]
fn details_serialize_with_path_specific_keys() {
    let scored = serde_json::to_value(score_profile(&minimal_passport(), None)).expect("json");
    assert_eq!(
        scored,
        json!({
            "score": 90,
            "details": {
                "hard_gate": 1,
                "warnings_count": 2,
                "errors_count": 0,
                "required_fields_ok": 1,
                "has_identifiers": 0,
            }
        })
    );

    let document = CompanionDocument::new(json!({"@context": "urn:x", "@type": "Organization"}));
    let failed =
        serde_json::to_value(score_profile(&minimal_passport(), Some(&document))).expect("json");
    assert_eq!(
        failed,
        json!({
            "score": 0,
            "details": {"hard_gate": 0, "warnings": 0, "errors": 0}
        })
    );
}

#[test]
fn audit_report_flattens_result_and_adds_trail() {
    let report = ScoringEngine::default().audit(&minimal_passport(), None);
    let value = serde_json::to_value(&report).expect("json");

    assert_eq!(value["score"], json!(90));
    assert_eq!(value["findings"][0]["kind"], json!("document_absent"));
    assert_eq!(value["findings"][0]["warnings"], json!(2));
    assert_eq!(value["insights"]["fact_count"], json!(2));
    assert_eq!(value["insights"]["certified_ratio"], json!(1.0));
    assert!(matches!(value["details"], Value::Object(_)));
}
