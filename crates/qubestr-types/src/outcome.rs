//! Admission outcomes and the per-request context hooks receive.

use serde::{Deserialize, Serialize};

/// Result of running an admission hook.
///
/// `reason` is empty when the request is accepted; otherwise it is the
/// machine-prefixed message returned to the client (e.g. `auth-required: ...`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub reject: bool,
    pub reason: String,
}

impl ValidationOutcome {
    /// An accepting outcome with an empty reason.
    pub fn accept() -> Self {
        Self::default()
    }

    /// A rejecting outcome carrying `reason`.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            reject: true,
            reason: reason.into(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.reject
    }
}

/// Request-scoped state handed to every hook.
///
/// Carries the public key established by the connection's authentication
/// exchange, if any. An empty key counts as unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    authed: Option<String>,
}

impl RequestContext {
    /// A context with no authenticated identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context bound to `pubkey`. An empty key yields an anonymous context.
    pub fn authenticated(pubkey: impl Into<String>) -> Self {
        let pubkey = pubkey.into();
        Self {
            authed: (!pubkey.is_empty()).then_some(pubkey),
        }
    }

    /// Returns the authenticated public key, if any.
    pub fn authed_pubkey(&self) -> Option<&str> {
        self.authed.as_deref()
    }
}
