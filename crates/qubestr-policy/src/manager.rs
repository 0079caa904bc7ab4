//! QubeManager (kind 3333) validation.
//!
//! Any authenticated publisher may report; there is no roster check for this
//! kind.

use crate::rejection::log_rejection;
use crate::roster::PUBKEY_HEX_LEN;
use crate::tags::{has_tag, tag_value};
use crate::{Rejection, ACTIONS, STATUSES};
use qubestr_types::{
    Event, EventKind, RequestContext, HYPERQUBE_IDENTIFIER, HYPER_SIGNAL_KIND, QUBE_MANAGER_KIND,
};

/// Tags every QubeManager event must carry, checked in this order.
pub const REQUIRED_TAGS: [&str; 7] = [
    "a",
    "version",
    "network",
    "action",
    "status",
    "node_id",
    "action_at",
];

/// Validates `event` if it is a QubeManager report; other kinds pass untouched.
pub fn validate_qube_manager(ctx: &RequestContext, event: &Event) -> Result<(), Rejection> {
    if event.kind != QUBE_MANAGER_KIND {
        return Ok(());
    }
    check(ctx, event).inspect_err(|rejection| log_rejection(event, rejection))
}

fn check(ctx: &RequestContext, event: &Event) -> Result<(), Rejection> {
    let kind = EventKind::QubeManager;

    if ctx.authed_pubkey().is_none() {
        return Err(Rejection::PublishAuthRequired(kind));
    }

    if let Some(tag) = REQUIRED_TAGS.into_iter().find(|tag| !has_tag(event, tag)) {
        return Err(Rejection::MissingTag { kind, tag });
    }

    if !is_signal_reference(tag_value(event, "a").unwrap_or_default()) {
        return Err(Rejection::InvalidSignalReference);
    }

    if !ACTIONS.contains(&tag_value(event, "action").unwrap_or_default()) {
        return Err(Rejection::InvalidAction(kind));
    }

    let status = tag_value(event, "status").unwrap_or_default();
    if !STATUSES.contains(&status) {
        return Err(Rejection::InvalidStatus);
    }

    if status == "failure" && !has_tag(event, "error") {
        return Err(Rejection::FailureWithoutError);
    }

    if event.content.is_empty() {
        return Err(Rejection::EmptyContent(kind));
    }

    Ok(())
}

/// Checks an `a` tag value of the form `33321:<pubkey>:hyperqube`.
///
/// The pubkey segment must be exactly 64 bytes long; its alphabet is not
/// checked.
fn is_signal_reference(value: &str) -> bool {
    let parts: Vec<&str> = value.split(':').collect();
    let [kind, pubkey, ident] = parts.as_slice() else {
        return false;
    };
    *kind == HYPER_SIGNAL_KIND.to_string()
        && pubkey.len() == PUBKEY_HEX_LEN
        && *ident == HYPERQUBE_IDENTIFIER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_reference_shapes() {
        let pk = "f".repeat(64);
        assert!(is_signal_reference(&format!("33321:{pk}:hyperqube")));
        assert!(!is_signal_reference(&format!("3333:{pk}:hyperqube")));
        assert!(!is_signal_reference(&format!("33321:{pk}:hyperqube:extra")));
        assert!(!is_signal_reference(&format!("33321:{}:hyperqube", &pk[..63])));
        assert!(!is_signal_reference(&format!("33321:{pk}f:hyperqube")));
        assert!(!is_signal_reference(&format!("33321:{pk}:HyperQube")));
        assert!(!is_signal_reference(""));
    }

    #[test]
    fn pubkey_segment_is_measured_in_bytes() {
        let not_hex = "z".repeat(64);
        assert!(is_signal_reference(&format!("33321:{not_hex}:hyperqube")));

        // 64 chars but 128 bytes.
        let wide = "é".repeat(64);
        assert!(!is_signal_reference(&format!("33321:{wide}:hyperqube")));

        // 32 chars, 64 bytes.
        let narrow = "é".repeat(32);
        assert!(is_signal_reference(&format!("33321:{narrow}:hyperqube")));
    }
}
