//! The closed catalog of supported metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ValidationError, ValidationResult};

/// A measurement metric a selector may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    All,
    AverageRtt,
    MinimumRtt,
    DownloadThroughput,
    UploadThroughput,
    PacketRetransmitRate,
}

/// Every supported metric, in wire-name order.
pub const ALL_METRICS: [Metric; 6] = [
    Metric::All,
    Metric::AverageRtt,
    Metric::MinimumRtt,
    Metric::DownloadThroughput,
    Metric::UploadThroughput,
    Metric::PacketRetransmitRate,
];

impl Metric {
    /// The wire name used in selector files.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::All => "all",
            Metric::AverageRtt => "average_rtt",
            Metric::MinimumRtt => "minimum_rtt",
            Metric::DownloadThroughput => "download_throughput",
            Metric::UploadThroughput => "upload_throughput",
            Metric::PacketRetransmitRate => "packet_retransmit_rate",
        }
    }

    /// The measurement project whose dataset holds this metric.
    ///
    /// Every currently supported metric lives in the NDT dataset.
    pub fn dataset(&self) -> &'static str {
        "ndt"
    }

    /// Parse a metric name, failing with `UnknownMetric` listing the
    /// allowed values.
    pub fn parse(field: &str, raw: &str) -> ValidationResult<Metric> {
        ALL_METRICS
            .iter()
            .copied()
            .find(|m| m.name() == raw)
            .ok_or_else(|| ValidationError::UnknownMetric {
                field: field.to_string(),
                value: raw.to_string(),
                allowed: allowed_list(),
            })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn allowed_list() -> String {
    ALL_METRICS
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}
