use super::domain::{AttributeFact, PassportDataset, Provenance, ValidationStatus};
use super::facts::is_missing;
use csv::StringRecord;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const ATTRIBUTE_COLUMN: &str = "Attribut";
const STATUS_COLUMN: &str = "Statut de Validation";
const SITE_VALUE_COLUMN: &str = "Donnée Site";
const REQUIRED_COLUMNS: [&str; 3] = [ATTRIBUTE_COLUMN, STATUS_COLUMN, SITE_VALUE_COLUMN];

/// Caller faults raised while reading a passport export.
#[derive(Debug, thiserror::Error)]
pub enum PassportImportError {
    #[error("failed to read passport export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid passport CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("passport export is missing the '{column}' column")]
    MissingColumn { column: &'static str },
    #[error("unrecognized validation status '{value}' on line {line}")]
    UnknownStatus { line: u64, value: String },
}

/// Loads passport exports (one fact per row) into a [`PassportDataset`].
pub struct PassportImporter;

impl PassportImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PassportDataset, PassportImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Imports an export already held in memory, such as an HTTP request body.
    pub fn from_str(csv: &str) -> Result<PassportDataset, PassportImportError> {
        Self::from_reader(csv.as_bytes())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<PassportDataset, PassportImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: StringRecord = csv_reader.headers()?.iter().map(normalize_header).collect();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(PassportImportError::MissingColumn { column });
            }
        }

        let mut facts = Vec::new();
        let mut provenance = Provenance::default();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|position| position.line()).unwrap_or(0);
            let row: PassportRow = record.deserialize(Some(&headers))?;

            let validation_status = ValidationStatus::from_label(&row.status).ok_or_else(|| {
                PassportImportError::UnknownStatus {
                    line,
                    value: row.status.clone(),
                }
            })?;

            provenance.wikidata |= !is_missing(row.wikidata.as_deref());
            provenance.insee_siren |= !is_missing(row.insee_siren.as_deref());
            provenance.insee_siret |= !is_missing(row.insee_siret.as_deref());

            facts.push(AttributeFact {
                attribute: row.attribute,
                validation_status,
                site_value: row.site_value,
            });
        }

        debug!(facts = facts.len(), "passport export imported");
        Ok(PassportDataset::new(facts).with_provenance(provenance))
    }
}

#[derive(Debug, Deserialize)]
struct PassportRow {
    #[serde(rename = "Attribut")]
    attribute: String,
    #[serde(rename = "Statut de Validation")]
    status: String,
    #[serde(rename = "Donnée Site", default)]
    site_value: Option<String>,
    #[serde(rename = "Source Wikidata (ID)", default)]
    wikidata: Option<String>,
    #[serde(rename = "Source INSEE/SIREN", default)]
    insee_siren: Option<String>,
    #[serde(rename = "Source INSEE/SIRET", default)]
    insee_siret: Option<String>,
}

fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
