//! Pairwise subset consistency.
//!
//! An A/B pair is only a meaningful single-parameter comparison when
//! exactly one of {site, client_provider, start_time} differs between the
//! two subsets. An identical pair is rejected as a likely authoring
//! mistake; a pair differing in two or more fields is rejected naming
//! every differing field.

use crate::error::{ValidationError, ValidationResult};
use crate::model::{Subset, SubsetField};

/// Check a two-subset pair and return its varying dimension.
///
/// Comparisons are case-sensitive on the already-resolved provider values
/// and exact-instant on start times.
pub fn check_pair(field: &str, a: &Subset, b: &Subset) -> ValidationResult<SubsetField> {
    let mut differing = Vec::new();
    if a.site != b.site {
        differing.push(SubsetField::Site);
    }
    if a.client_provider != b.client_provider {
        differing.push(SubsetField::ClientProvider);
    }
    if a.start_time != b.start_time {
        differing.push(SubsetField::StartTime);
    }

    match differing.as_slice() {
        [] => Err(ValidationError::DegenerateSubsetPair {
            field: field.to_string(),
        }),
        [dimension] => Ok(*dimension),
        _ => Err(ValidationError::InconsistentSubsetPair {
            field: field.to_string(),
            differing,
        }),
    }
}
