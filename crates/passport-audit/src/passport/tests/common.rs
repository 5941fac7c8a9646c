use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{json, Value};

use crate::passport::domain::{AttributeFact, PassportDataset, ValidationStatus};
use crate::passport::CompanionDocument;

pub(super) fn certified(attribute: &str, value: &str) -> AttributeFact {
    AttributeFact::new(attribute, ValidationStatus::Certified, value)
}

pub(super) fn pending(attribute: &str, value: &str) -> AttributeFact {
    AttributeFact::new(attribute, ValidationStatus::PendingValidation, value)
}

pub(super) fn rejected(attribute: &str, value: &str) -> AttributeFact {
    AttributeFact::new(attribute, ValidationStatus::Rejected, value)
}

/// Name and url certified, no identifiers.
pub(super) fn minimal_passport() -> PassportDataset {
    PassportDataset::new(vec![
        certified("name", "Boulangerie Martin"),
        certified("url", "https://boulangerie-martin.fr"),
    ])
}

pub(super) fn complete_passport() -> PassportDataset {
    PassportDataset::new(vec![
        certified("name", "Boulangerie Martin"),
        pending("url", "https://boulangerie-martin.fr"),
        certified("identifier.siren", "552 100 554"),
        certified("identifier.siret.0", "552 100 554 00013"),
        pending("identifier.siret.1", "55210055400021"),
        certified("address.postalCode", "75011"),
    ])
}

pub(super) fn organization_document() -> CompanionDocument {
    CompanionDocument::new(json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Boulangerie Martin",
        "identifier": [
            {"@type": "PropertyValue", "propertyID": "SIREN", "value": "552100554"}
        ],
    }))
}

pub(super) async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}

pub(super) fn assert_bad_request(response: &Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
