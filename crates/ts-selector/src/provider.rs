//! Provider metaname expansion.
//!
//! Selector files may name a client provider either literally or with a
//! short metaname such as `twc`. Metanames expand to the canonical provider
//! label used for subset comparison and for downstream AS-name matching.
//! Adding a provider is a data change to [`PROVIDER_METANAMES`], not a code
//! change.

/// Fixed mapping from lower-cased metaname to canonical provider label.
pub const PROVIDER_METANAMES: &[(&str, &str)] = &[
    ("cablevision", "Cablevision Communications"),
    ("centurylink", "CenturyLink"),
    ("level3", "Level 3 Communications"),
    ("twc", "Time Warner Cable"),
];

/// Resolve a raw provider name into its canonical form.
///
/// The input is trimmed and lower-cased. A metaname (or a canonical label
/// in any casing) yields the canonical label; anything else yields the
/// trimmed lower-cased literal, so identical literals in different casing
/// compare equal. Resolution is idempotent. Downstream consumers treat a
/// non-metaname result as a literal substring to match against AS names.
pub fn resolve_provider(raw: &str) -> String {
    let needle = raw.trim().to_lowercase();
    for (metaname, canonical) in PROVIDER_METANAMES {
        if needle == *metaname || needle == canonical.to_lowercase() {
            return (*canonical).to_string();
        }
    }
    needle
}
