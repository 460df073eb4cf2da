use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("cannot read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("cannot parse file as a JSON array: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads a whole file and deserializes it as a JSON array of `T`.
pub fn read_json_array<T>(path: &Path) -> Result<Vec<T>, JsonFileError>
where
    T: DeserializeOwned,
{
    let content = std::fs::read_to_string(path)?;
    let items = serde_json::from_str::<Vec<T>>(&content)?;
    tracing::debug!(path = %path.display(), count = items.len(), "read json array");
    Ok(items)
}
