//! The set of public keys allowed to publish HyperSignal events.

use std::collections::HashSet;

/// Length of a hex-encoded x-only public key.
pub const PUBKEY_HEX_LEN: usize = 64;

/// Authorization roster, built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    keys: HashSet<String>,
}

impl Roster {
    /// Builds a roster from explicit keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma-separated list of public keys.
    ///
    /// Entries are trimmed and empty entries dropped, so `""` yields an empty
    /// roster that authorizes nobody. Entries that do not look like a 32-byte
    /// hex key are kept, since matching is by exact string, but are logged.
    pub fn parse(list: &str) -> Self {
        let keys: HashSet<String> = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        for key in &keys {
            if !is_hex_pubkey(key) {
                tracing::warn!(
                    key = %key,
                    "authorized pubkey is not {} hex characters; it will only match identical strings",
                    PUBKEY_HEX_LEN
                );
            }
        }

        Self { keys }
    }

    /// Returns `true` if `pubkey` is on the roster.
    pub fn contains(&self, pubkey: &str) -> bool {
        self.keys.contains(pubkey)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the keys in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

fn is_hex_pubkey(key: &str) -> bool {
    key.len() == PUBKEY_HEX_LEN && hex::decode(key).is_ok()
}
