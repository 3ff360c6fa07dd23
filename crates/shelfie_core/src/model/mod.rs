//! Domain records flowing from the remote book-tracking API.
//!
//! # Responsibility
//! - Define the canonical serde shapes for every collection item.
//! - Keep field names aligned with the backend's JSON, renames included.
//!
//! # Invariants
//! - Records are immutable once fetched except for the fields explicitly
//!   patched by optimistic mutations (`starred`, `is_following`, `review`).

pub mod book;
pub mod social;
pub mod stats;

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    // MySQL DECIMAL columns arrive as JSON strings through the backend;
    // numbers, strings and null must all decode.
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}
