//! The validated selector domain model.
//!
//! A [`Selector`] is constructed once by [`crate::validate::validate_selector`]
//! and is read-only thereafter; re-validation means building a new value from
//! new input.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::error::{ValidationError, ValidationResult};
use crate::metric::Metric;

/// IP-to-provider translation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpStrategy {
    Maxmind,
}

impl IpStrategy {
    /// The wire name used in selector files.
    pub fn name(&self) -> &'static str {
        match self {
            IpStrategy::Maxmind => "maxmind",
        }
    }

    /// Parse a strategy name. Unknown strategies are a hard failure for
    /// the caller, not a warning.
    pub fn parse(raw: &str) -> Option<IpStrategy> {
        match raw {
            "maxmind" => Some(IpStrategy::Maxmind),
            _ => None,
        }
    }
}

impl fmt::Display for IpStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How IP addresses are translated into provider names.
///
/// `db_snapshots` is an unordered, de-duplicated set of calendar dates;
/// an empty set means "use the nearest available database, no warning".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpTranslation {
    pub strategy: IpStrategy,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub db_snapshots: BTreeSet<NaiveDate>,
}

/// One data-subset descriptor within a selector.
///
/// `client_provider` holds the resolved canonical form (see
/// [`crate::provider::resolve_provider`]); the end of the query window is
/// implicit, computed from the selector-level duration via
/// [`Selector::end_time`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subset {
    pub site: String,
    pub client_provider: String,
    pub start_time: DateTime<Utc>,
}

/// The subset fields an A/B pair may differ in.
///
/// When a selector carries two subsets, exactly one of these is the
/// recorded varying dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsetField {
    Site,
    ClientProvider,
    StartTime,
}

impl fmt::Display for SubsetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubsetField::Site => "site",
            SubsetField::ClientProvider => "client_provider",
            SubsetField::StartTime => "start_time",
        };
        write!(f, "{}", name)
    }
}

/// A fully validated selector document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    /// Always [`crate::SELECTOR_FORMAT_VERSION`].
    pub format_version: i64,

    /// Length of the query window in whole days, at least 1.
    pub duration_days: u32,

    pub metric: Metric,

    pub ip_translation: IpTranslation,

    /// One subset, or an A/B pair of two.
    pub subsets: Vec<Subset>,

    /// The single field that differs between a two-subset pair.
    /// `None` for single-subset selectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub varying_dimension: Option<SubsetField>,
}

impl Selector {
    /// Validate a selector document from its JSON text.
    pub fn from_json(contents: &str) -> ValidationResult<Selector> {
        let doc: serde_json::Value = serde_json::from_str(contents)
            .map_err(|e| ValidationError::Parse(e.to_string()))?;
        crate::validate::validate_selector(&doc)
    }

    /// Read and validate a selector file.
    pub fn from_file(path: &Path) -> ValidationResult<Selector> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::Io(format!("{}: {}", path.display(), e)))?;
        Selector::from_json(&contents)
    }

    /// Whether this selector describes an A/B pair.
    pub fn is_pair(&self) -> bool {
        self.subsets.len() == 2
    }

    /// The end of a subset's query window: `start_time + duration`.
    pub fn end_time(&self, subset: &Subset) -> DateTime<Utc> {
        subset.start_time + Duration::days(i64::from(self.duration_days))
    }
}
