//! Validation errors for selector files.
//!
//! Every error carries the path of the offending field (e.g.
//! `subsets[1].start_time`) and enough of the offending value to render a
//! precise message without re-deriving context. Validation is fail-fast: a
//! document either validates completely or produces exactly one error.
//!
//! Errors also expose a stable numeric code and a snake_case kind for
//! machine parsing, and can be serialized as a [`StructuredError`] for
//! agent-facing JSON output.

use crate::model::SubsetField;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for selector validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors produced while validating a selector document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{field}: unsupported selector format version {found}, expected {}", crate::SELECTOR_FORMAT_VERSION)]
    UnsupportedVersion { field: String, found: String },

    #[error("{field}: malformed duration {value:?}, expected a whole day count such as \"30d\"")]
    MalformedDuration { field: String, value: String },

    #[error("{field}: unknown metric {value:?}, expected one of: {allowed}")]
    UnknownMetric {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("{field}: unknown IP translation strategy {value:?}")]
    UnknownIpStrategy { field: String, value: String },

    #[error("{field}: malformed date {value:?}, expected YYYY-MM-DD")]
    MalformedDate { field: String, value: String },

    #[error("{field}: a selector must describe 1 or 2 subsets, found {found}")]
    InvalidSubsetCount { field: String, found: usize },

    #[error("{field}: missing or empty required field")]
    MissingField { field: String },

    #[error("{field}: malformed timestamp {value:?}, expected ISO-8601 UTC with a trailing Z")]
    MalformedTimestamp { field: String, value: String },

    #[error("{field}: both subsets are identical; an A/B pair must differ in exactly one field")]
    DegenerateSubsetPair { field: String },

    #[error("{field}: subsets differ in {}; exactly one field may vary", join_fields(.differing))]
    InconsistentSubsetPair {
        field: String,
        differing: Vec<SubsetField>,
    },
}

/// Error kinds for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Io,
    Parse,
    UnsupportedVersion,
    MalformedDuration,
    UnknownMetric,
    UnknownIpStrategy,
    MalformedDate,
    InvalidSubsetCount,
    MissingField,
    MalformedTimestamp,
    DegenerateSubsetPair,
    InconsistentSubsetPair,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
            ErrorKind::UnsupportedVersion => "unsupported_version",
            ErrorKind::MalformedDuration => "malformed_duration",
            ErrorKind::UnknownMetric => "unknown_metric",
            ErrorKind::UnknownIpStrategy => "unknown_ip_strategy",
            ErrorKind::MalformedDate => "malformed_date",
            ErrorKind::InvalidSubsetCount => "invalid_subset_count",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::MalformedTimestamp => "malformed_timestamp",
            ErrorKind::DegenerateSubsetPair => "degenerate_subset_pair",
            ErrorKind::InconsistentSubsetPair => "inconsistent_subset_pair",
        };
        write!(f, "{}", name)
    }
}

impl ValidationError {
    /// Returns the error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Io(_) => ErrorKind::Io,
            ValidationError::Parse(_) => ErrorKind::Parse,
            ValidationError::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            ValidationError::MalformedDuration { .. } => ErrorKind::MalformedDuration,
            ValidationError::UnknownMetric { .. } => ErrorKind::UnknownMetric,
            ValidationError::UnknownIpStrategy { .. } => ErrorKind::UnknownIpStrategy,
            ValidationError::MalformedDate { .. } => ErrorKind::MalformedDate,
            ValidationError::InvalidSubsetCount { .. } => ErrorKind::InvalidSubsetCount,
            ValidationError::MissingField { .. } => ErrorKind::MissingField,
            ValidationError::MalformedTimestamp { .. } => ErrorKind::MalformedTimestamp,
            ValidationError::DegenerateSubsetPair { .. } => ErrorKind::DegenerateSubsetPair,
            ValidationError::InconsistentSubsetPair { .. } => ErrorKind::InconsistentSubsetPair,
        }
    }

    /// Returns the stable error code for this error.
    ///
    /// Codes are grouped by where the failure was detected:
    /// - 10-29: document-level fields
    /// - 30-49: subset fields and pair consistency
    /// - 60-69: file reading and JSON parsing (loading layer only)
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::UnsupportedVersion { .. } => 10,
            ValidationError::MalformedDuration { .. } => 11,
            ValidationError::UnknownMetric { .. } => 12,
            ValidationError::UnknownIpStrategy { .. } => 13,
            ValidationError::MalformedDate { .. } => 14,
            ValidationError::InvalidSubsetCount { .. } => 15,
            ValidationError::MissingField { .. } => 30,
            ValidationError::MalformedTimestamp { .. } => 31,
            ValidationError::DegenerateSubsetPair { .. } => 40,
            ValidationError::InconsistentSubsetPair { .. } => 41,
            ValidationError::Io(_) => 60,
            ValidationError::Parse(_) => 61,
        }
    }

    /// Returns the path of the field that failed validation, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Io(_) | ValidationError::Parse(_) => None,
            ValidationError::UnsupportedVersion { field, .. }
            | ValidationError::MalformedDuration { field, .. }
            | ValidationError::UnknownMetric { field, .. }
            | ValidationError::UnknownIpStrategy { field, .. }
            | ValidationError::MalformedDate { field, .. }
            | ValidationError::InvalidSubsetCount { field, .. }
            | ValidationError::MissingField { field }
            | ValidationError::MalformedTimestamp { field, .. }
            | ValidationError::DegenerateSubsetPair { field }
            | ValidationError::InconsistentSubsetPair { field, .. } => Some(field),
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            ValidationError::Io(_) => "File Error",
            ValidationError::Parse(_) => "Invalid JSON",
            ValidationError::UnsupportedVersion { .. } => "Unsupported Format Version",
            ValidationError::MalformedDuration { .. } => "Malformed Duration",
            ValidationError::UnknownMetric { .. } => "Unknown Metric",
            ValidationError::UnknownIpStrategy { .. } => "Unknown IP Translation Strategy",
            ValidationError::MalformedDate { .. } => "Malformed Snapshot Date",
            ValidationError::InvalidSubsetCount { .. } => "Invalid Subset Count",
            ValidationError::MissingField { .. } => "Missing Field",
            ValidationError::MalformedTimestamp { .. } => "Malformed Timestamp",
            ValidationError::DegenerateSubsetPair { .. } => "Identical Subsets",
            ValidationError::InconsistentSubsetPair { .. } => "Inconsistent Subset Pair",
        }
    }

    /// Returns a remediation hint for the author of the file.
    pub fn remediation(&self) -> &'static str {
        match self {
            ValidationError::Io(_) => "Check that the file exists and is readable.",
            ValidationError::Parse(_) => {
                "The file is not valid JSON. Check syntax with 'cat <file> | jq .'."
            }
            ValidationError::UnsupportedVersion { .. } => {
                "Set file_format_version to 1. Older and newer formats are not accepted."
            }
            ValidationError::MalformedDuration { .. } => {
                "Write the duration as a positive whole day count with a 'd' suffix, e.g. \"30d\"."
            }
            ValidationError::UnknownMetric { .. } => {
                "Pick one of the supported metrics listed in the error message."
            }
            ValidationError::UnknownIpStrategy { .. } => {
                "Only the \"maxmind\" strategy is supported."
            }
            ValidationError::MalformedDate { .. } => {
                "Write db_snapshots entries as calendar dates, e.g. \"2014-08-04\"."
            }
            ValidationError::InvalidSubsetCount { .. } => {
                "Describe either a single subset or an A/B pair of exactly two subsets."
            }
            ValidationError::MissingField { .. } => {
                "Add the named field with a non-empty value."
            }
            ValidationError::MalformedTimestamp { .. } => {
                "Write start_time as an ISO-8601 UTC timestamp ending in Z, e.g. \"2014-07-01T00:00:00Z\"."
            }
            ValidationError::DegenerateSubsetPair { .. } => {
                "Change one field of one subset, or drop the duplicate subset."
            }
            ValidationError::InconsistentSubsetPair { .. } => {
                "An A/B pair must hold everything constant except one of site, client_provider, or start_time."
            }
        }
    }
}

pub(crate) fn join_fields(fields: &[SubsetField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Structured error shape for machine-readable JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error kind.
    pub kind: ErrorKind,

    /// Path of the field that failed validation, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Human-readable error message.
    pub message: String,
}

impl From<&ValidationError> for StructuredError {
    fn from(err: &ValidationError) -> Self {
        StructuredError {
            code: err.code(),
            kind: err.kind(),
            field: err.field().map(str::to_string),
            message: err.to_string(),
        }
    }
}

impl StructuredError {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}
