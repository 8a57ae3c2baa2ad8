//! Tokio-backed deferring scheduler.

use std::sync::Arc;

use crate::events::Event;

use super::schedule::{ListenFn, Schedule};
use super::invoke;

/// Default scheduler: defers async-flagged callbacks via `tokio::spawn`.
///
/// ## Rules
/// - `run_async = false`: the callback runs inline, before `schedule`
///   returns.
/// - `run_async = true`: the callback is queued on the current tokio runtime
///   and runs on a later turn. Outside a runtime the invocation degrades to
///   inline with a warning rather than being dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpawnScheduler;

impl Schedule for SpawnScheduler {
    fn schedule(&self, callback: ListenFn, event: Arc<Event>, run_async: bool) {
        if !run_async {
            invoke(&callback, &event);
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    invoke(&callback, &event);
                });
            }
            Err(_) => {
                tracing::warn!(
                    seq = event.seq,
                    "no tokio runtime for deferred listener; invoking inline"
                );
                invoke(&callback, &event);
            }
        }
    }
}
