//! Deserialization helpers for snapshot input forms.

use serde::{Deserialize, Deserializer};

/// Survey exports sometimes wrap a number with collection metadata, e.g.
/// `{ value: 200000, confidence: high }`. Accept both that form and a bare
/// number for every snapshot field.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlexibleNumber {
    Plain(f64),
    Wrapped { value: f64 },
}

pub fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match FlexibleNumber::deserialize(deserializer)? {
        FlexibleNumber::Plain(value) => Ok(value),
        FlexibleNumber::Wrapped { value } => Ok(value),
    }
}
