//! Kind gate: the first rule every event meets.

use crate::Rejection;
use qubestr_types::{Event, EventKind};

/// Rejects any event whose kind the relay does not serve.
///
/// This is the only rule that produces an "unsupported kind" reason. It does
/// not log; kind validators log their own rejections.
pub fn check_kind(event: &Event) -> Result<(), Rejection> {
    match EventKind::from_u32(event.kind) {
        Some(_) => Ok(()),
        None => Err(Rejection::UnsupportedKind(event.kind)),
    }
}
