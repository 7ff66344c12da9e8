//! Office membership encoding.
//!
//! An event stores its offices as text: either [`OUTSIDE_OFFICE`] or a JSON
//! array of office id strings such as `["1","12"]`. Filtering encodes the
//! requested office as a quoted JSON scalar and looks for it inside that text.
//!
//! Matching is substring containment, not array membership. A malformed
//! stored value simply fails to match; nothing is parsed or reported.

use crate::constants::OUTSIDE_OFFICE;

/// ## Summary
/// Encodes an office id into the probe used for matching.
///
/// `Some(5)` becomes `"5"` (quotes included); `None` becomes [`OUTSIDE_OFFICE`].
#[must_use]
pub fn encode(office_id: Option<i32>) -> String {
    office_id.map_or_else(|| OUTSIDE_OFFICE.to_owned(), |id| format!("\"{id}\""))
}

/// Returns true when the value is the outside-office marker.
#[must_use]
pub fn is_outside_office(value: &str) -> bool {
    value == OUTSIDE_OFFICE
}

/// ## Summary
/// Tests whether an event's stored offices admit the encoded probe.
///
/// True when the probe is the outside-office marker, when the event itself is
/// stored as outside-office, or when the stored text contains the probe.
#[must_use]
pub fn matches(stored: &str, probe: &str) -> bool {
    is_outside_office(probe) || is_outside_office(stored) || stored.contains(probe)
}

/// ## Summary
/// Decodes stored offices into office id strings.
///
/// Returns an empty list for the outside-office marker and for values that are
/// not a JSON string array.
#[must_use]
pub fn decode(stored: &str) -> Vec<String> {
    if is_outside_office(stored) {
        return Vec::new();
    }
    serde_json::from_str::<Vec<String>>(stored).unwrap_or_else(|err| {
        tracing::trace!(error = %err, stored, "Stored offices are not a JSON string array");
        Vec::new()
    })
}
