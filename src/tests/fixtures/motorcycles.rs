// Shared test fixtures for motorcycle records.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::motorcycles::adapters::outbound::catalog_in_memory::InMemoryCatalog;
use crate::modules::motorcycles::core::motorcycle::Motorcycle;
use crate::shell::state::AppState;
use chrono::{DateTime, Utc};
use std::sync::Arc;

const MOTORCYCLES_JSON: &str = include_str!("json/motorcycles.json");

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap()
}

/// The four fixture records, in file order. Records 1 and 3 share a key.
pub fn make_motorcycles() -> Vec<Motorcycle> {
    serde_json::from_str(MOTORCYCLES_JSON).unwrap()
}

pub fn make_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(make_motorcycles())
}

pub fn make_state() -> AppState {
    AppState {
        queries: Arc::new(make_catalog()),
    }
}

pub struct MotorcycleBuilder {
    inner: Motorcycle,
}

impl Default for MotorcycleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorcycleBuilder {
    pub fn new() -> Self {
        Self {
            inner: make_motorcycles().remove(0),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn make(mut self, v: impl Into<String>) -> Self {
        self.inner.make = v.into();
        self
    }

    pub fn model(mut self, v: impl Into<String>) -> Self {
        self.inner.model = v.into();
        self
    }

    pub fn year(mut self, v: DateTime<Utc>) -> Self {
        self.inner.year = v;
        self
    }

    pub fn image_url(mut self, v: impl Into<String>) -> Self {
        self.inner.image_url = v.into();
        self
    }

    pub fn build(self) -> Motorcycle {
        self.inner
    }
}

#[cfg(test)]
mod motorcycle_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = MotorcycleBuilder::default().build();

        assert_eq!(built.id, 1);
        assert_eq!(built.make, "Honda");
        assert_eq!(built.model, "CBR600RR");
        assert_eq!(built.year, at("2020-01-01T00:00:00Z"));
        assert_eq!(built.image_url, "http://x/a.jpg");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = MotorcycleBuilder::new()
            .id(42)
            .make("BMW")
            .model("R 1250 GS")
            .year(at("2023-05-05T05:05:05Z"))
            .image_url("http://x/z.jpg")
            .build();

        assert_eq!(custom.id, 42);
        assert_eq!(custom.make, "BMW");
        assert_eq!(custom.model, "R 1250 GS");
        assert_eq!(custom.year, at("2023-05-05T05:05:05Z"));
        assert_eq!(custom.image_url, "http://x/z.jpg");
    }
}
