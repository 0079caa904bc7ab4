//! HyperSignal (kind 33321) validation.

use crate::rejection::log_rejection;
use crate::tags::{has_tag, has_tag_with_value, tag_value};
use crate::{Rejection, Roster, ACTIONS};
use qubestr_types::{Event, EventKind, RequestContext, HYPERQUBE_IDENTIFIER, HYPER_SIGNAL_KIND};
use std::sync::Arc;

/// Tags every HyperSignal must carry, checked in this order.
pub const REQUIRED_TAGS: [&str; 4] = ["version", "hash", "network", "action"];

/// Tags a `reboot` signal must carry in addition to [`REQUIRED_TAGS`].
pub const REBOOT_TAGS: [&str; 2] = ["genesis_url", "required_by"];

/// Validates HyperSignal events against the authorization roster.
#[derive(Debug, Clone, Default)]
pub struct SignalValidator {
    roster: Arc<Roster>,
}

impl SignalValidator {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }

    /// Validates `event` if it is a HyperSignal; other kinds pass untouched.
    pub fn validate(&self, ctx: &RequestContext, event: &Event) -> Result<(), Rejection> {
        if event.kind != HYPER_SIGNAL_KIND {
            return Ok(());
        }
        self.check(ctx, event)
            .inspect_err(|rejection| log_rejection(event, rejection))
    }

    fn check(&self, ctx: &RequestContext, event: &Event) -> Result<(), Rejection> {
        let kind = EventKind::HyperSignal;

        let pubkey = ctx
            .authed_pubkey()
            .ok_or(Rejection::PublishAuthRequired(kind))?;
        if !self.roster.contains(pubkey) {
            return Err(Rejection::NotAuthorized(kind));
        }

        if !has_tag_with_value(event, "d", HYPERQUBE_IDENTIFIER) {
            return Err(Rejection::MissingIdentifier);
        }

        if let Some(tag) = REQUIRED_TAGS.into_iter().find(|tag| !has_tag(event, tag)) {
            return Err(Rejection::MissingTag { kind, tag });
        }

        let action = tag_value(event, "action").unwrap_or_default();
        if !ACTIONS.contains(&action) {
            return Err(Rejection::InvalidAction(kind));
        }

        if action == "reboot" && !REBOOT_TAGS.iter().all(|tag| has_tag(event, tag)) {
            return Err(Rejection::IncompleteReboot);
        }

        if event.content.is_empty() {
            return Err(Rejection::EmptyContent(kind));
        }

        Ok(())
    }
}
