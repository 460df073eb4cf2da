// Read port over the motorcycle record set.
//
// Purpose
// - Let the inbound adapters query records without knowing where they live.

use crate::modules::motorcycles::core::motorcycle::Motorcycle;
use crate::modules::motorcycles::use_cases::lookup_motorcycle::query::LookupMotorcycle;
use async_trait::async_trait;

#[async_trait]
pub trait MotorcycleQueries {
    /// First record in load order matching the lookup, if any.
    async fn find_first(&self, lookup: &LookupMotorcycle) -> anyhow::Result<Option<Motorcycle>>;

    async fn list_all(&self) -> anyhow::Result<Vec<Motorcycle>>;
}
