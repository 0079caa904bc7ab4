//! Read access gate.

use crate::Rejection;
use qubestr_types::{Filter, RequestContext};

/// Refuses every filter from an unauthenticated connection.
///
/// The filter itself is not inspected: reading anything requires
/// authentication, whatever kinds or authors are requested.
pub fn require_auth(ctx: &RequestContext, _filter: &Filter) -> Result<(), Rejection> {
    match ctx.authed_pubkey() {
        Some(_) => Ok(()),
        None => Err(Rejection::ReadAuthRequired),
    }
}
