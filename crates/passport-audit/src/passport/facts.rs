use super::domain::{AttributeFact, PassportDataset};
use std::collections::HashMap;

/// Placeholder tokens exports use for "no value", compared after trimming and
/// lower-casing.
const EMPTY_TOKENS: &[&str] = &["", "\u{2014}", "none", "null", "nan"];

/// Returns true when a value is absent or one of the recognised empty tokens.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(raw) => {
            let normalized = raw.trim().to_lowercase();
            EMPTY_TOKENS.contains(&normalized.as_str())
        }
    }
}

/// Read-only view over a [`PassportDataset`] indexed by attribute name.
///
/// The index is built once so the prefix and format checks do not rescan the
/// raw rows for every lookup.
#[derive(Debug)]
pub struct FactStore<'a> {
    by_attribute: HashMap<&'a str, Vec<&'a AttributeFact>>,
    first_seen: Vec<&'a str>,
}

impl<'a> FactStore<'a> {
    pub fn new(dataset: &'a PassportDataset) -> Self {
        let mut by_attribute: HashMap<&'a str, Vec<&'a AttributeFact>> = HashMap::new();
        let mut first_seen = Vec::new();

        for fact in dataset.facts() {
            let name = fact.attribute.as_str();
            let candidates = by_attribute.entry(name).or_default();
            if candidates.is_empty() {
                first_seen.push(name);
            }
            candidates.push(fact);
        }

        Self {
            by_attribute,
            first_seen,
        }
    }

    /// Picks the authoritative value for an exact attribute name.
    ///
    /// The highest status wins and the earliest fact wins among equals. When
    /// the winner is `Rejected` nothing is returned, even if it carries text.
    pub fn resolve(&self, attribute: &str) -> Option<&'a str> {
        let candidates = self.by_attribute.get(attribute)?;

        let mut winner: Option<&'a AttributeFact> = None;
        for fact in candidates.iter().copied() {
            let replaces = match winner {
                Some(current) => {
                    fact.validation_status.priority() > current.validation_status.priority()
                }
                None => true,
            };
            if replaces {
                winner = Some(fact);
            }
        }

        let winner = winner?;
        if winner.validation_status.priority() == 0 {
            return None;
        }
        winner.site_value.as_deref()
    }

    pub fn present(&self, attribute: &str) -> bool {
        match self.resolve(attribute) {
            Some(value) => !is_missing(Some(value)),
            None => false,
        }
    }

    /// Raw string prefix match, so `identifier.siret` also covers
    /// `identifier.siret.0` and `identifier.siret.1`.
    pub fn present_by_prefix(&self, prefix: &str) -> bool {
        self.attributes_by_prefix(prefix)
            .into_iter()
            .any(|attribute| self.present(attribute))
    }

    /// Distinct attribute names starting with `prefix`, in first-seen order.
    pub fn attributes_by_prefix(&self, prefix: &str) -> Vec<&'a str> {
        self.first_seen
            .iter()
            .copied()
            .filter(|attribute| attribute.starts_with(prefix))
            .collect()
    }

    pub fn distinct_attributes(&self) -> usize {
        self.first_seen.len()
    }
}

pub fn resolve<'a>(dataset: &'a PassportDataset, attribute: &str) -> Option<&'a str> {
    FactStore::new(dataset).resolve(attribute)
}

pub fn present(dataset: &PassportDataset, attribute: &str) -> bool {
    FactStore::new(dataset).present(attribute)
}

pub fn present_by_prefix(dataset: &PassportDataset, prefix: &str) -> bool {
    FactStore::new(dataset).present_by_prefix(prefix)
}

pub fn attributes_by_prefix<'a>(dataset: &'a PassportDataset, prefix: &str) -> Vec<&'a str> {
    FactStore::new(dataset).attributes_by_prefix(prefix)
}
