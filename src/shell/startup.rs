use axum::Router;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::modules::motorcycles::adapters::outbound::catalog_in_memory::InMemoryCatalog;
use crate::shared::infrastructure::json_file::JsonFileError;
use crate::shell::config::AppConfig;
use crate::shell::graphql::build_schema;
use crate::shell::http::router;
use crate::shell::state::AppState;

#[derive(Debug, Error)]
pub enum StartupLoadError {
    #[error("failed to load motorcycles from {path}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: JsonFileError,
    },
}

pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, StartupLoadError> {
    let catalog = InMemoryCatalog::load(path).map_err(|source| StartupLoadError::Catalog {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = catalog.len(), "loaded motorcycles");
    Ok(catalog)
}

pub fn load_state(config: &AppConfig) -> Result<AppState, StartupLoadError> {
    let catalog = load_catalog(&config.data_path)?;
    Ok(AppState {
        queries: Arc::new(catalog),
    })
}

/// Loads the record set and wires the router. Nothing is served on failure.
pub fn build_app(config: &AppConfig) -> Result<Router, StartupLoadError> {
    let state = load_state(config)?;
    let schema = build_schema(state.clone());
    Ok(router(state, schema, config.graphiql))
}
