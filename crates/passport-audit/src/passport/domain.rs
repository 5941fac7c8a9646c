use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Trust level attached to a single passport fact.
///
/// Variants are declared from least to most trusted so the derived ordering
/// matches [`ValidationStatus::priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ValidationStatus {
    Rejected,
    PendingValidation,
    Certified,
}

impl ValidationStatus {
    /// Parses the source token used by passport exports.
    ///
    /// Accepts the French labels (with or without accents) and the English
    /// variant names. Anything else is rejected instead of defaulting.
    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = value
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match normalized.as_str() {
            "certifié" | "certifie" | "certified" => Some(Self::Certified),
            "à valider" | "a valider" | "pendingvalidation" | "pending validation" => {
                Some(Self::PendingValidation)
            }
            "rejeté" | "rejete" | "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ValidationStatus::Certified => "Certifié",
            ValidationStatus::PendingValidation => "À valider",
            ValidationStatus::Rejected => "Rejeté",
        }
    }

    /// Resolution weight. Facts at priority 0 are never surfaced.
    pub fn priority(self) -> u8 {
        match self {
            ValidationStatus::Certified => 2,
            ValidationStatus::PendingValidation => 1,
            ValidationStatus::Rejected => 0,
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized validation status '{0}'")]
pub struct UnknownStatus(pub String);

impl TryFrom<String> for ValidationStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or(UnknownStatus(value))
    }
}

impl From<ValidationStatus> for String {
    fn from(value: ValidationStatus) -> Self {
        value.label().to_string()
    }
}

/// One row of evidence about an attribute of the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFact {
    pub attribute: String,
    pub validation_status: ValidationStatus,
    /// The key must be present; `null` stands for an empty export cell.
    #[serde(deserialize_with = "nullable_value")]
    pub site_value: Option<String>,
}

fn nullable_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(deserializer)
}

impl AttributeFact {
    pub fn new(
        attribute: impl Into<String>,
        validation_status: ValidationStatus,
        site_value: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            validation_status,
            site_value: Some(site_value.into()),
        }
    }

    pub fn without_value(attribute: impl Into<String>, validation_status: ValidationStatus) -> Self {
        Self {
            attribute: attribute.into(),
            validation_status,
            site_value: None,
        }
    }
}

/// Which external registries contributed to the export, when the source
/// table carries provenance columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub wikidata: bool,
    pub insee_siren: bool,
    pub insee_siret: bool,
}

impl Provenance {
    pub fn has_insee(&self) -> bool {
        self.insee_siren || self.insee_siret
    }
}

/// Ordered set of facts making up an organization passport.
///
/// Ingestion order is kept because it decides ties between facts of equal
/// status for the same attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportDataset {
    facts: Vec<AttributeFact>,
    #[serde(default)]
    provenance: Provenance,
}

impl PassportDataset {
    pub fn new(facts: Vec<AttributeFact>) -> Self {
        Self {
            facts,
            provenance: Provenance::default(),
        }
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn facts(&self) -> &[AttributeFact] {
        &self.facts
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl FromIterator<AttributeFact> for PassportDataset {
    fn from_iter<I: IntoIterator<Item = AttributeFact>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
