//! Admission hooks and the ordered chains the relay runs them in.
//!
//! A hook receives the request context and the inbound item and returns a
//! [`ValidationOutcome`]. Hooks are evaluated in registration order and the
//! first rejection wins; later hooks never see the item.

use crate::rejection::into_outcome;
use crate::{check_kind, require_auth, validate_qube_manager, Rejection, Roster, SignalValidator};
use qubestr_types::{Event, Filter, RequestContext, ValidationOutcome};
use std::fmt;
use std::sync::Arc;

/// Decides whether an inbound event may be stored and broadcast.
pub trait EventHook: Send + Sync {
    fn reject_event(&self, ctx: &RequestContext, event: &Event) -> ValidationOutcome;
}

/// Decides whether a subscription filter may be run against storage.
pub trait FilterHook: Send + Sync {
    fn reject_filter(&self, ctx: &RequestContext, filter: &Filter) -> ValidationOutcome;
}

impl<F> EventHook for F
where
    F: Fn(&RequestContext, &Event) -> ValidationOutcome + Send + Sync,
{
    fn reject_event(&self, ctx: &RequestContext, event: &Event) -> ValidationOutcome {
        self(ctx, event)
    }
}

impl<F> FilterHook for F
where
    F: Fn(&RequestContext, &Filter) -> ValidationOutcome + Send + Sync,
{
    fn reject_filter(&self, ctx: &RequestContext, filter: &Filter) -> ValidationOutcome {
        self(ctx, filter)
    }
}

/// The event rules this crate provides.
#[derive(Debug, Clone)]
pub enum EventRule {
    /// Drops unsupported kinds.
    KindGate,
    /// Validates HyperSignal events against a roster.
    HyperSignal(SignalValidator),
    /// Validates QubeManager reports.
    QubeManager,
}

impl EventRule {
    pub fn evaluate(&self, ctx: &RequestContext, event: &Event) -> Result<(), Rejection> {
        match self {
            Self::KindGate => check_kind(event),
            Self::HyperSignal(validator) => validator.validate(ctx, event),
            Self::QubeManager => validate_qube_manager(ctx, event),
        }
    }
}

impl EventHook for EventRule {
    fn reject_event(&self, ctx: &RequestContext, event: &Event) -> ValidationOutcome {
        into_outcome(self.evaluate(ctx, event))
    }
}

/// The filter rules this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// Refuses reads from unauthenticated connections.
    RequireAuth,
}

impl FilterRule {
    pub fn evaluate(&self, ctx: &RequestContext, filter: &Filter) -> Result<(), Rejection> {
        match self {
            Self::RequireAuth => require_auth(ctx, filter),
        }
    }
}

impl FilterHook for FilterRule {
    fn reject_filter(&self, ctx: &RequestContext, filter: &Filter) -> ValidationOutcome {
        into_outcome(self.evaluate(ctx, filter))
    }
}

/// Ordered event and filter hooks.
#[derive(Clone, Default)]
pub struct HookChain {
    reject_event: Vec<Arc<dyn EventHook>>,
    reject_filter: Vec<Arc<dyn FilterHook>>,
}

impl HookChain {
    /// An empty chain that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The relay's standard policy: kind gate, HyperSignal validator and
    /// QubeManager validator for events; authentication for filters.
    pub fn standard(roster: Arc<Roster>) -> Self {
        Self::new()
            .on_event(EventRule::KindGate)
            .on_event(EventRule::HyperSignal(SignalValidator::new(roster)))
            .on_event(EventRule::QubeManager)
            .on_filter(FilterRule::RequireAuth)
    }

    /// Appends an event hook after the existing ones.
    pub fn on_event(mut self, hook: impl EventHook + 'static) -> Self {
        self.reject_event.push(Arc::new(hook));
        self
    }

    /// Appends a filter hook after the existing ones.
    pub fn on_filter(mut self, hook: impl FilterHook + 'static) -> Self {
        self.reject_filter.push(Arc::new(hook));
        self
    }

    /// Runs the event hooks in order; the first rejection is returned.
    pub fn check_event(&self, ctx: &RequestContext, event: &Event) -> ValidationOutcome {
        self.reject_event
            .iter()
            .map(|hook| hook.reject_event(ctx, event))
            .find(ValidationOutcome::is_rejected)
            .unwrap_or_default()
    }

    /// Runs the filter hooks in order; the first rejection is returned.
    pub fn check_filter(&self, ctx: &RequestContext, filter: &Filter) -> ValidationOutcome {
        self.reject_filter
            .iter()
            .map(|hook| hook.reject_filter(ctx, filter))
            .find(ValidationOutcome::is_rejected)
            .unwrap_or_default()
    }

    pub fn event_hooks(&self) -> usize {
        self.reject_event.len()
    }

    pub fn filter_hooks(&self) -> usize {
        self.reject_filter.len()
    }
}

impl fmt::Debug for HookChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("reject_event", &self.reject_event.len())
            .field("reject_filter", &self.reject_filter.len())
            .finish()
    }
}
