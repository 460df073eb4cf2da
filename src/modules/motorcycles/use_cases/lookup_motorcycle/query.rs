use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::modules::motorcycles::core::motorcycle::Motorcycle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("missing required argument '{0}'")]
    Missing(&'static str),

    #[error("argument 'year' is not an RFC 3339 date-time ({value}): {reason}")]
    InvalidYear { value: String, reason: String },
}

/// Exact composite key of a lookup. All three parts are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupMotorcycle {
    pub make: String,
    pub model: String,
    pub year: DateTime<Utc>,
}

impl LookupMotorcycle {
    /// Builds the lookup from untyped transport parameters.
    pub fn from_params(
        make: Option<String>,
        model: Option<String>,
        year: Option<String>,
    ) -> Result<Self, ArgumentError> {
        let make = make.ok_or(ArgumentError::Missing("make"))?;
        let model = model.ok_or(ArgumentError::Missing("model"))?;
        let raw_year = year.ok_or(ArgumentError::Missing("year"))?;
        let year = DateTime::parse_from_rfc3339(&raw_year)
            .map_err(|e| ArgumentError::InvalidYear {
                value: raw_year.clone(),
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);

        Ok(Self { make, model, year })
    }

    // Case-sensitive on make and model, same instant on year.
    pub fn matches(&self, motorcycle: &Motorcycle) -> bool {
        motorcycle.make == self.make
            && motorcycle.model == self.model
            && motorcycle.year == self.year
    }
}
