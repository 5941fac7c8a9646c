use super::domain::{PassportDataset, ValidationStatus};
use super::facts::FactStore;
use serde::Serialize;

/// Informational summary of a passport. Never feeds into the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassportInsights {
    pub fact_count: usize,
    pub distinct_attributes: usize,
    pub certified_ratio: f64,
    pub has_wikidata_source: bool,
    pub has_insee_source: bool,
}

pub(crate) fn summarize(dataset: &PassportDataset, store: &FactStore<'_>) -> PassportInsights {
    let provenance = dataset.provenance();

    PassportInsights {
        fact_count: dataset.len(),
        distinct_attributes: store.distinct_attributes(),
        certified_ratio: certified_ratio(dataset),
        has_wikidata_source: provenance.wikidata,
        has_insee_source: provenance.has_insee(),
    }
}

/// Share of facts carrying `Certified` status, 0.0 for an empty passport.
pub fn certified_ratio(dataset: &PassportDataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }

    let certified = dataset
        .facts()
        .iter()
        .filter(|fact| fact.validation_status == ValidationStatus::Certified)
        .count();

    certified as f64 / dataset.len() as f64
}
