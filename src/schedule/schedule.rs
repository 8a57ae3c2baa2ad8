//! Core scheduling trait.
//!
//! [`Schedule`] is the seam between the matching engine and whatever invokes
//! the callbacks. The contract mirrors a `schedule(target, callback, payload,
//! async)` primitive: the callback receives the event as its sole argument,
//! either in the same turn or on a later one depending on `run_async`.

use std::sync::Arc;

use crate::events::Event;

/// A listener callback.
///
/// Held behind `Arc` so the subscribe-time dedup can compare callbacks by
/// pointer identity; pass the **same** `Arc` twice to get the same listener
/// handle back.
pub type ListenFn = Arc<dyn Fn(&Event) + Send + Sync + 'static>;

/// Contract for invoking matched listener callbacks.
///
/// ## Rules
/// - `run_async = false`: invoke before returning, so synchronous listeners
///   of one broadcast run in registration order.
/// - `run_async = true`: invocation may be deferred to a later turn; ordering
///   relative to other deferred invocations is unspecified.
/// - A scheduled invocation cannot be cancelled; unsubscribing only prevents
///   future matches.
/// - Implementations isolate callback panics so one failing listener never
///   starves the rest of a broadcast.
pub trait Schedule: Send + Sync + 'static {
    /// Schedules one callback invocation for `event`.
    fn schedule(&self, callback: ListenFn, event: Arc<Event>, run_async: bool);
}
