//! Validating parser for telescope selector files.
//!
//! A selector file describes a subset (or an A/B pair of subsets) of
//! networking-measurement data to analyze: a metric, a time window, an
//! IP-to-provider translation strategy, and one or two subset descriptors.
//! This crate turns an already-parsed JSON document into a strongly-typed
//! [`Selector`], or rejects it with a single [`ValidationError`] carrying
//! the offending field path.
//!
//! The crate provides:
//! - Leaf parsers for durations, timestamps, and snapshot dates
//! - Provider metaname expansion into canonical labels
//! - The closed metric catalog
//! - Per-subset validation and the pairwise single-difference check
//! - Top-level document validation and re-encoding
//!
//! Validation is a pure function over the input tree: no I/O, no logging,
//! no shared state. Callers may validate documents concurrently without
//! coordination. The only I/O in this crate is the explicit
//! [`Selector::from_file`] convenience.

pub mod duration;
pub mod encode;
pub mod error;
pub mod metric;
pub mod model;
pub mod pair;
pub mod provider;
pub mod subset;
pub mod timestamp;
pub mod validate;

pub use error::{ErrorKind, StructuredError, ValidationError, ValidationResult};
pub use metric::Metric;
pub use model::{IpStrategy, IpTranslation, Selector, Subset, SubsetField};
pub use provider::resolve_provider;
pub use validate::validate_selector;

/// The only selector file format version this crate accepts.
pub const SELECTOR_FORMAT_VERSION: i64 = 1;
