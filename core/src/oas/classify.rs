#![deny(missing_docs)]

//! # Path Classification
//!
//! Derives the owning service of an OpenAPI path from its segments alone.
//!
//! e.g. `/v1/account/get_by_id` -> `account`, `/payments/charge` -> `payments`

/// Service name used for paths that carry no service segment (`/`, `/v1`).
pub const COMMON_SERVICE: &str = "common";

/// Returns the service that owns `path`.
///
/// Empty segments are ignored, so leading, trailing and doubled slashes do not
/// matter. A leading version marker (`v1`, `v2`, ...) is skipped and the next
/// segment names the service.
pub fn classify(path: &str) -> String {
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let service = match segments.next() {
        Some(first) if is_version_marker(first) => segments.next(),
        other => other,
    };

    service.unwrap_or(COMMON_SERVICE).to_string()
}

/// `v` followed by one or more ASCII digits, nothing else.
pub(crate) fn is_version_marker(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
