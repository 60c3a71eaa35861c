//! Per-subset field validation.
//!
//! Validates one subset descriptor in isolation. Cross-subset logic lives
//! in [`crate::pair`].

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::model::Subset;
use crate::provider::resolve_provider;
use crate::timestamp::parse_timestamp;

/// Validate a raw subset object into a [`Subset`].
///
/// `field` is the path of the subset within the document, e.g. `subsets[0]`;
/// errors carry the full path of the offending field.
pub fn validate_subset(field: &str, raw: &Value) -> ValidationResult<Subset> {
    let obj = raw.as_object().ok_or_else(|| ValidationError::MissingField {
        field: field.to_string(),
    })?;

    let site = require_string(obj, field, "site")?.trim().to_string();

    let provider_raw = require_string(obj, field, "client_provider")?;
    let client_provider = resolve_provider(provider_raw);
    if client_provider.is_empty() {
        return Err(ValidationError::MissingField {
            field: format!("{}.client_provider", field),
        });
    }

    let start_raw = require_string(obj, field, "start_time")?;
    let start_time = parse_timestamp(&format!("{}.start_time", field), start_raw)?;

    Ok(Subset {
        site,
        client_provider,
        start_time,
    })
}

fn require_string<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &str,
    key: &str,
) -> ValidationResult<&'a str> {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ValidationError::MissingField {
            field: format!("{}.{}", field, key),
        }),
    }
}
