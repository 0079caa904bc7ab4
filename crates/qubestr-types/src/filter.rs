//! NIP-01 subscription filters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A subscription filter as sent in a `REQ` message.
///
/// The policy layer never looks inside a filter; it only decides whether the
/// requester may read at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Tag queries keyed by `#<name>`, e.g. `#d` or `#a`.
    #[serde(flatten)]
    pub tags: BTreeMap<String, Vec<String>>,
}
