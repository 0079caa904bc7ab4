//! Nostr events and tags.

use serde::{Deserialize, Serialize};

/// A single event tag: an ordered list of strings.
///
/// Element 0 is the tag name and element 1, when present, is its primary
/// value. Serialized as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Builds a tag from its elements.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Returns the tag name, or `None` for an empty tag.
    pub fn name(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns the primary value, or `None` if the tag has no second element.
    pub fn value(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// Returns all elements of the tag.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// A signed Nostr event as received from a publisher.
///
/// The relay never mutates an event once it has been received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Hex-encoded event id.
    pub id: String,
    /// Hex-encoded author public key.
    pub pubkey: String,
    /// Creation time in unix seconds.
    #[serde(default)]
    pub created_at: u64,
    /// Kind code.
    pub kind: u32,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Free-form content.
    #[serde(default)]
    pub content: String,
    /// Hex-encoded Schnorr signature.
    #[serde(default)]
    pub sig: String,
}
