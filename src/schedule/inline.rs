//! Same-turn scheduler.

use std::sync::Arc;

use crate::events::Event;

use super::schedule::{ListenFn, Schedule};
use super::invoke;

/// Invokes every callback immediately, in dispatch order.
///
/// The deferral flag is ignored: async-flagged listeners run in the same
/// turn as synchronous ones. Useful in tests and in hosts that never leave
/// a single logical turn.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineScheduler;

impl Schedule for InlineScheduler {
    fn schedule(&self, callback: ListenFn, event: Arc<Event>, _run_async: bool) {
        invoke(&callback, &event);
    }
}
