// In memory motorcycle catalog.
//
// Purpose
// - Hold the record set loaded at startup as an immutable snapshot.
//
// Responsibilities
// - Keep records in their load order.
// - Answer lookups by linear scan and listings by cloning the slice.

use crate::modules::motorcycles::adapters::outbound::queries::MotorcycleQueries;
use crate::modules::motorcycles::core::motorcycle::Motorcycle;
use crate::modules::motorcycles::use_cases::lookup_motorcycle::query::LookupMotorcycle;
use crate::shared::infrastructure::json_file::{JsonFileError, read_json_array};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    motorcycles: Arc<[Motorcycle]>,
}

impl InMemoryCatalog {
    pub fn new(motorcycles: Vec<Motorcycle>) -> Self {
        Self {
            motorcycles: motorcycles.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, JsonFileError> {
        let motorcycles = read_json_array::<Motorcycle>(path)?;
        Ok(Self::new(motorcycles))
    }

    pub fn len(&self) -> usize {
        self.motorcycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motorcycles.is_empty()
    }

    pub fn first_match(&self, lookup: &LookupMotorcycle) -> Option<&Motorcycle> {
        self.motorcycles.iter().find(|m| lookup.matches(m))
    }

    pub fn as_slice(&self) -> &[Motorcycle] {
        &self.motorcycles
    }
}

#[async_trait::async_trait]
impl MotorcycleQueries for InMemoryCatalog {
    async fn find_first(&self, lookup: &LookupMotorcycle) -> anyhow::Result<Option<Motorcycle>> {
        Ok(self.first_match(lookup).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Motorcycle>> {
        Ok(self.motorcycles.to_vec())
    }
}
