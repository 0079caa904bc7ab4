//! Shared types and constants for the Qubestr relay.
//!
//! This crate provides the wire-level Nostr types the relay passes around
//! (events, tags, subscription filters), the HyperQube kind codes, the
//! per-request authentication context, and the outcome type returned by the
//! admission hooks.
//!
//! Both `qubestr-policy` and `qubestr-server` depend on this crate for
//! cross-cutting definitions so neither has to depend on the other's internals.

use serde::{Deserialize, Serialize};

mod event;
mod filter;
mod info;
mod outcome;

pub use event::{Event, Tag};
pub use filter::Filter;
pub use info::RelayInfo;
pub use outcome::{RequestContext, ValidationOutcome};

/// Kind code of HyperSignal events (parameterized replaceable range).
pub const HYPER_SIGNAL_KIND: u32 = 33321;

/// Kind code of QubeManager events.
pub const QUBE_MANAGER_KIND: u32 = 3333;

/// Value of the `d` tag every HyperSignal event must carry, and the trailing
/// identifier of the `a` tag QubeManager events use to reference them.
pub const HYPERQUBE_IDENTIFIER: &str = "hyperqube";

/// The event kinds this relay accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A release signal published by an authorized operator.
    HyperSignal,
    /// A node's report on how it handled a signal.
    QubeManager,
}

impl EventKind {
    /// Returns the numeric kind code.
    pub fn as_u32(self) -> u32 {
        match self {
            Self::HyperSignal => HYPER_SIGNAL_KIND,
            Self::QubeManager => QUBE_MANAGER_KIND,
        }
    }

    /// Maps a numeric kind code to a supported kind.
    ///
    /// Returns `None` for every kind the relay does not accept.
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            HYPER_SIGNAL_KIND => Some(Self::HyperSignal),
            QUBE_MANAGER_KIND => Some(Self::QubeManager),
            _ => None,
        }
    }

    /// Returns the prefix used for rejection reasons specific to this kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::HyperSignal => "hyperqube",
            Self::QubeManager => "qube-manager",
        }
    }
}
