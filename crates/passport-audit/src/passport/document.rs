use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Failures loading a companion document. These are caller faults and are
/// never folded into the score.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read companion document: {0}")]
    Io(#[from] std::io::Error),
    #[error("companion document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Untyped structured-data assertion (typically JSON-LD) about the same
/// organization as the passport.
///
/// Any JSON value is accepted here; whether its shape is usable is decided by
/// the structural gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanionDocument(Value);

impl CompanionDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        let value = serde_json::from_reader(reader)?;
        Ok(Self(value))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl FromStr for CompanionDocument {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str(s)?;
        Ok(Self(value))
    }
}

impl From<Value> for CompanionDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
