//! Top-level selector document validation.
//!
//! Checks run in a fixed order and fail fast: format version, duration,
//! metric, ip_translation, subset count, per-subset fields, pair
//! consistency. A document either validates completely into a [`Selector`]
//! or produces exactly one error.

use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::duration::parse_duration;
use crate::error::{ValidationError, ValidationResult};
use crate::metric::Metric;
use crate::model::{IpStrategy, IpTranslation, Selector};
use crate::timestamp::parse_snapshot_date;
use crate::{pair, subset, SELECTOR_FORMAT_VERSION};

/// Validate a parsed selector document.
///
/// The input is the generic tree an external JSON parser produced; this
/// function never touches raw bytes.
pub fn validate_selector(doc: &Value) -> ValidationResult<Selector> {
    let root = doc
        .as_object()
        .ok_or_else(|| ValidationError::Parse("selector document must be a JSON object".into()))?;

    let format_version = validate_format_version(root)?;
    let duration_days = parse_duration("duration", require_string(root, "duration")?)?;
    let metric = Metric::parse("metric", require_string(root, "metric")?)?;
    let ip_translation = validate_ip_translation(root.get("ip_translation"))?;

    let raw_subsets = root
        .get("subsets")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("subsets"))?;
    if raw_subsets.is_empty() || raw_subsets.len() > 2 {
        return Err(ValidationError::InvalidSubsetCount {
            field: "subsets".into(),
            found: raw_subsets.len(),
        });
    }

    let mut subsets = Vec::with_capacity(raw_subsets.len());
    for (idx, raw) in raw_subsets.iter().enumerate() {
        subsets.push(subset::validate_subset(&format!("subsets[{}]", idx), raw)?);
    }

    let varying_dimension = match subsets.as_slice() {
        [a, b] => Some(pair::check_pair("subsets", a, b)?),
        _ => None,
    };

    Ok(Selector {
        format_version,
        duration_days,
        metric,
        ip_translation,
        subsets,
        varying_dimension,
    })
}

fn validate_format_version(root: &Map<String, Value>) -> ValidationResult<i64> {
    let version = root
        .get("file_format_version")
        .ok_or_else(|| missing("file_format_version"))?;
    match version.as_i64() {
        Some(v) if v == SELECTOR_FORMAT_VERSION => Ok(v),
        _ => Err(ValidationError::UnsupportedVersion {
            field: "file_format_version".into(),
            found: version.to_string(),
        }),
    }
}

fn validate_ip_translation(raw: Option<&Value>) -> ValidationResult<IpTranslation> {
    let obj = raw
        .and_then(Value::as_object)
        .ok_or_else(|| missing("ip_translation"))?;

    let strategy_raw = obj
        .get("strategy")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("ip_translation.strategy"))?;
    let strategy =
        IpStrategy::parse(strategy_raw).ok_or_else(|| ValidationError::UnknownIpStrategy {
            field: "ip_translation.strategy".into(),
            value: strategy_raw.to_string(),
        })?;

    // db_snapshots is optional; absence and emptiness are equivalent.
    // Duplicate dates are silently de-duplicated by the set.
    let mut db_snapshots = BTreeSet::new();
    if let Some(params) = obj.get("params").and_then(Value::as_object) {
        if let Some(snapshots) = params.get("db_snapshots") {
            let entries = snapshots
                .as_array()
                .ok_or_else(|| missing("ip_translation.params.db_snapshots"))?;
            for (idx, entry) in entries.iter().enumerate() {
                let path = format!("ip_translation.params.db_snapshots[{}]", idx);
                let date_raw = entry.as_str().ok_or_else(|| ValidationError::MalformedDate {
                    field: path.clone(),
                    value: entry.to_string(),
                })?;
                db_snapshots.insert(parse_snapshot_date(&path, date_raw)?);
            }
        }
    }

    Ok(IpTranslation {
        strategy,
        db_snapshots,
    })
}

fn missing(field: &str) -> ValidationError {
    ValidationError::MissingField {
        field: field.to_string(),
    }
}

fn require_string<'a>(root: &'a Map<String, Value>, key: &str) -> ValidationResult<&'a str> {
    match root.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(missing(key)),
    }
}
