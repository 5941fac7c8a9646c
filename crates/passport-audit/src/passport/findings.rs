use serde::{Deserialize, Serialize};

/// Rule that produced a finding during an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    DocumentAbsent,
    DocumentNotObject,
    DocumentUnserializable,
    InvalidContext,
    InvalidType,
    DocumentNameMissing,
    IdentifierShape,
    RequiredFieldsMissing,
    MalformedSiren,
    MalformedSiret,
}

impl FindingKind {
    /// Findings that fail the structural gate and zero the score.
    pub fn is_gate_failure(self) -> bool {
        matches!(
            self,
            FindingKind::DocumentNotObject
                | FindingKind::DocumentUnserializable
                | FindingKind::InvalidContext
                | FindingKind::InvalidType
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            FindingKind::DocumentAbsent => "Companion document absent",
            FindingKind::DocumentNotObject => "Companion document is not an object",
            FindingKind::DocumentUnserializable => "Companion document cannot be serialized",
            FindingKind::InvalidContext => "Invalid @context",
            FindingKind::InvalidType => "Invalid @type",
            FindingKind::DocumentNameMissing => "Companion document has no name",
            FindingKind::IdentifierShape => "Companion identifier has unexpected shape",
            FindingKind::RequiredFieldsMissing => "Required fields missing",
            FindingKind::MalformedSiren => "Malformed SIREN",
            FindingKind::MalformedSiret => "Malformed SIRET",
        }
    }
}

/// One entry of the audit trail, explaining a warning, a penalty or a gate
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub warnings: u32,
    pub note: String,
}

impl Finding {
    pub(crate) fn new(kind: FindingKind, warnings: u32, note: impl Into<String>) -> Self {
        Self {
            kind,
            attribute: None,
            warnings,
            note: note.into(),
        }
    }

    pub(crate) fn for_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}
