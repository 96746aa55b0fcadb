//! GitHub App installation flow
//!
//! Installing happens entirely in the browser. When it is done GitHub sends the
//! user back with an `installation_id` query parameter, which we only remove so
//! that revisiting the address does not replay the callback.

use url::{Url, form_urlencoded};

/// Query parameter added by the installation callback
pub const INSTALLATION_MARKER: &str = "installation_id";

/// Whether `address` is the address the installation flow returned to
pub fn has_installation_marker(address: &Url) -> bool {
    address
        .query_pairs()
        .any(|(key, _)| key == INSTALLATION_MARKER)
}

/// Whether the raw query `segment` is the installation marker, with or without a value
fn is_marker_segment(segment: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == INSTALLATION_MARKER)
}

/// Remove the installation marker from `address`, leaving the rest of it untouched.
///
/// The other query segments are kept as they were written, encoding included.
/// Returns `false` if there was nothing to remove
pub fn strip_installation_marker(address: &mut Url) -> bool {
    let Some(query) = address.query() else {
        return false;
    };

    let segments: Vec<&str> = query.split('&').collect();
    if !segments.iter().any(|segment| is_marker_segment(segment)) {
        return false;
    }

    let remaining = segments
        .into_iter()
        .filter(|segment| !is_marker_segment(segment))
        .collect::<Vec<_>>()
        .join("&");

    if remaining.is_empty() {
        address.set_query(None);
    } else {
        address.set_query(Some(&remaining));
    }

    true
}
