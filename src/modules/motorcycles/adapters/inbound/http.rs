use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::motorcycles::core::motorcycle::Motorcycle;

/// JSON shape of a motorcycle on the REST routes; mirrors the GraphQL field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorcycleView {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: DateTime<Utc>,
    pub image_url: String,
}

impl From<Motorcycle> for MotorcycleView {
    fn from(m: Motorcycle) -> Self {
        Self {
            id: m.id,
            make: m.make,
            model: m.model,
            year: m.year,
            image_url: m.image_url,
        }
    }
}
