//! Admission policy for the Qubestr relay.
//!
//! Decides, per inbound event and per inbound subscription filter, whether the
//! relay accepts the request. Events pass through an ordered chain of rules:
//!
//! 1. the kind gate, which drops every kind other than HyperSignal (33321) and
//!    QubeManager (3333);
//! 2. the HyperSignal validator, which requires an authenticated publisher on
//!    the authorization roster and a complete release descriptor;
//! 3. the QubeManager validator, which requires an authenticated publisher and
//!    a well-formed status report referencing a HyperSignal.
//!
//! The first rule to reject ends evaluation. Filters pass through a single
//! gate that refuses all reads from unauthenticated connections.
//!
//! Every rule is a pure, synchronous function of the event, the request
//! context and the read-only [`Roster`], so the chain can be shared across
//! connections behind an `Arc` without locking.

pub mod filter;
pub mod hooks;
pub mod kind;
pub mod manager;
pub mod rejection;
pub mod roster;
pub mod signal;
pub mod tags;

pub use filter::require_auth;
pub use hooks::{EventHook, EventRule, FilterHook, FilterRule, HookChain};
pub use kind::check_kind;
pub use manager::validate_qube_manager;
pub use rejection::Rejection;
pub use roster::Roster;
pub use signal::SignalValidator;
pub use tags::{has_tag, has_tag_with_value, tag_value};

/// Values accepted in the `action` tag of both event kinds.
pub const ACTIONS: [&str; 2] = ["upgrade", "reboot"];

/// Values accepted in the `status` tag of QubeManager events.
pub const STATUSES: [&str; 2] = ["success", "failure"];
