use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field name to submitted value; only the presence of a key is ever checked.
pub type DocumentFields = BTreeMap<String, Value>;

/// Category name to the fields submitted for it.
pub type Documents = BTreeMap<String, DocumentFields>;

/// One visa applicant as submitted by the caller.
///
/// Scalar fields are decoded leniently: a missing, `null` or wrongly typed
/// value falls back to the field default instead of failing the decode.
/// Any JSON number is kept as given, fractions and out-of-range integers included.
/// Only `documents` is strict, because its shape drives validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default, deserialize_with = "lenient_number")]
    pub age: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub income: f64,
    #[serde(default, deserialize_with = "lenient_travel_history")]
    pub travel_history: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bank_balance: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub employment_duration: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub previous_rejections: f64,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_previous_visa: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_property: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_strong_ties: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub previous_overstay: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub criminal_record: bool,
    #[serde(default, deserialize_with = "nullable_documents")]
    pub documents: Documents,
}

impl ApplicationRecord {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde_json::Error::custom(
                "application record must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(input)?)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or_default())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

fn lenient_travel_history<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(country) => country,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(entries)
}

fn nullable_documents<'de, D>(deserializer: D) -> Result<Documents, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Documents>::deserialize(deserializer)?.unwrap_or_default())
}
