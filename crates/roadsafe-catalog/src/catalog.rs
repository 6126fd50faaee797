//! Catalog: ordered, id-indexed, immutable collection of interventions.

use std::collections::HashMap;

use roadsafe_core::errors::CatalogError;
use roadsafe_core::InterventionRecord;

/// The fixed set of interventions available for matching.
///
/// Record order is the load order; it is the tie-break order for equal
/// scores and the order of the unscored fallback context.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<InterventionRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids.
    pub fn from_records(records: Vec<InterventionRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if by_id.insert(record.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                    position,
                });
            }
        }
        Ok(Self { records, by_id })
    }

    /// A catalog with no interventions. Matching always yields nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InterventionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&InterventionRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// First record with this exact name, in catalog order.
    pub fn find_by_name(&self, name: &str) -> Option<&InterventionRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// The first `n` records in catalog order.
    pub fn head(&self, n: usize) -> &[InterventionRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterventionRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a InterventionRecord;
    type IntoIter = std::slice::Iter<'a, InterventionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
