use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, SimpleObject, Value};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::motorcycles::core::motorcycle::Motorcycle;

/// RFC 3339 instant, written in UTC with a `Z` suffix like the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GqlDateTime(pub DateTime<Utc>);

#[Scalar(name = "DateTime")]
impl ScalarType for GqlDateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => Ok(Self(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "Motorcycle")]
pub struct GqlMotorcycle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: GqlDateTime,
    pub image_url: String,
}

impl From<Motorcycle> for GqlMotorcycle {
    fn from(m: Motorcycle) -> Self {
        Self {
            id: m.id,
            make: m.make,
            model: m.model,
            year: GqlDateTime(m.year),
            image_url: m.image_url,
        }
    }
}
