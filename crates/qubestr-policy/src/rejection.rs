//! Rejection reasons returned to publishers and subscribers.

use qubestr_types::{Event, EventKind, ValidationOutcome, HYPERQUBE_IDENTIFIER, HYPER_SIGNAL_KIND};
use thiserror::Error;

/// Why a rule refused an event or filter.
///
/// The `Display` output is the exact reason string sent back over the wire,
/// prefixed with a category token (`auth-required`, `restricted`) or with the
/// label of the event kind that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("unsupported kind: {0}")]
    UnsupportedKind(u32),

    #[error("auth-required: publishing Kind {} requires authentication", .0.as_u32())]
    PublishAuthRequired(EventKind),

    #[error("auth-required: this relay requires authentication to read events")]
    ReadAuthRequired,

    #[error("restricted: your public key is not authorized to publish Kind {} events", .0.as_u32())]
    NotAuthorized(EventKind),

    #[error(
        "{}: missing required 'd' tag with value '{ident}'",
        EventKind::HyperSignal.label(),
        ident = HYPERQUBE_IDENTIFIER
    )]
    MissingIdentifier,

    #[error("{}: missing required '{tag}' tag", .kind.label())]
    MissingTag { kind: EventKind, tag: &'static str },

    #[error("{}: 'action' tag must be either 'upgrade' or 'reboot'", .0.label())]
    InvalidAction(EventKind),

    #[error(
        "{}: 'reboot' action requires 'genesis_url' and 'required_by' tags",
        EventKind::HyperSignal.label()
    )]
    IncompleteReboot,

    #[error(
        "{}: invalid 'a' tag format (should be '{signal}:<64_hex_pubkey>:{ident}')",
        EventKind::QubeManager.label(),
        signal = HYPER_SIGNAL_KIND,
        ident = HYPERQUBE_IDENTIFIER
    )]
    InvalidSignalReference,

    #[error(
        "{}: 'status' tag should be 'success' or 'failure'",
        EventKind::QubeManager.label()
    )]
    InvalidStatus,

    #[error(
        "{}: 'failure' status requires 'error' tag",
        EventKind::QubeManager.label()
    )]
    FailureWithoutError,

    #[error("{}: content must be a human-readable string", .0.label())]
    EmptyContent(EventKind),
}

impl From<Rejection> for ValidationOutcome {
    fn from(rejection: Rejection) -> Self {
        ValidationOutcome::rejected(rejection.to_string())
    }
}

/// Records a validator rejection. Never affects the outcome.
pub(crate) fn log_rejection(event: &Event, rejection: &Rejection) {
    tracing::info!(
        event_id = %event.id,
        kind = event.kind,
        pubkey = %event.pubkey,
        reason = %rejection,
        "event rejected"
    );
}

/// Collapses a rule result into the outcome handed back to the host.
pub(crate) fn into_outcome(result: Result<(), Rejection>) -> ValidationOutcome {
    match result {
        Ok(()) => ValidationOutcome::accept(),
        Err(rejection) => rejection.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_match_wire_format() {
        assert_eq!(
            Rejection::UnsupportedKind(1).to_string(),
            "unsupported kind: 1"
        );
        assert_eq!(
            Rejection::PublishAuthRequired(EventKind::HyperSignal).to_string(),
            "auth-required: publishing Kind 33321 requires authentication"
        );
        assert_eq!(
            Rejection::PublishAuthRequired(EventKind::QubeManager).to_string(),
            "auth-required: publishing Kind 3333 requires authentication"
        );
        assert_eq!(
            Rejection::NotAuthorized(EventKind::HyperSignal).to_string(),
            "restricted: your public key is not authorized to publish Kind 33321 events"
        );
        assert_eq!(
            Rejection::MissingIdentifier.to_string(),
            "hyperqube: missing required 'd' tag with value 'hyperqube'"
        );
        assert_eq!(
            Rejection::MissingTag {
                kind: EventKind::QubeManager,
                tag: "node_id"
            }
            .to_string(),
            "qube-manager: missing required 'node_id' tag"
        );
        assert_eq!(
            Rejection::InvalidSignalReference.to_string(),
            "qube-manager: invalid 'a' tag format (should be '33321:<64_hex_pubkey>:hyperqube')"
        );
        assert_eq!(
            Rejection::ReadAuthRequired.to_string(),
            "auth-required: this relay requires authentication to read events"
        );
    }

    #[test]
    fn outcome_conversion() {
        let outcome = into_outcome(Err(Rejection::InvalidStatus));
        assert!(outcome.reject);
        assert_eq!(
            outcome.reason,
            "qube-manager: 'status' tag should be 'success' or 'failure'"
        );
        assert_eq!(into_outcome(Ok(())), ValidationOutcome::accept());
    }
}
