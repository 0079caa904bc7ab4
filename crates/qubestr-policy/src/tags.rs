//! Read-only lookups over an event's tags.
//!
//! Matching is exact and case-sensitive. Tags too short to carry the
//! requested element are skipped, so malformed tags read as "not found".

use qubestr_types::Event;

/// Returns `true` if any tag is named `name`.
pub fn has_tag(event: &Event, name: &str) -> bool {
    event.tags.iter().any(|tag| tag.name() == Some(name))
}

/// Returns `true` if any tag is named `name` and has primary value `value`.
///
/// Every tag is considered, not just the first one with that name.
pub fn has_tag_with_value(event: &Event, name: &str, value: &str) -> bool {
    event
        .tags
        .iter()
        .any(|tag| tag.name() == Some(name) && tag.value() == Some(value))
}

/// Returns the primary value of the first tag named `name` that has one.
pub fn tag_value<'a>(event: &'a Event, name: &str) -> Option<&'a str> {
    event
        .tags
        .iter()
        .filter(|tag| tag.name() == Some(name))
        .find_map(|tag| tag.value())
}
