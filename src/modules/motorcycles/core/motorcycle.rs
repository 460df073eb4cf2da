use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

// 0001-01-01T00:00:00Z, the zero time of the data files this service reads.
const ZERO_YEAR_SECS: i64 = -62_135_596_800;

pub fn zero_year() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ZERO_YEAR_SECS, 0).unwrap_or_default()
}

/// One motorcycle as stored in the data file.
///
/// The JSON mapping is fixed: the identifier is read from `name`, the image
/// from `imageUrl`. Unknown keys are ignored. Missing keys and `null` values
/// fall back to the zero value of the field type (`0001-01-01T00:00:00Z` for
/// `year`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Motorcycle {
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub make: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_zero_year")]
    pub year: DateTime<Utc>,
    #[serde(rename = "imageUrl", deserialize_with = "null_as_default")]
    pub image_url: String,
}

impl Default for Motorcycle {
    fn default() -> Self {
        Self {
            id: 0,
            make: String::new(),
            model: String::new(),
            year: zero_year(),
            image_url: String::new(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero_year<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(zero_year))
}
