//! NIP-11 relay information document.

use serde::{Deserialize, Serialize};

/// Metadata served to clients that request `application/nostr+json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayInfo {
    pub name: String,
    pub description: String,
    /// Administrative contact key. Omitted when not configured.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pubkey: String,
    pub supported_nips: Vec<u16>,
    pub software: String,
    pub version: String,
}

impl Default for RelayInfo {
    fn default() -> Self {
        Self {
            name: "Qubestr: A Specialized Nostr Relay for HyperQube Network".to_string(),
            description: "Supports HyperQube's custom events (kinds 33321 and 3333) for managing HyperQube nodes.".to_string(),
            pubkey: String::new(),
            supported_nips: vec![1, 11, 33, 42],
            software: "https://github.com/coinselor/qubestr".to_string(),
            version: String::new(),
        }
    }
}
