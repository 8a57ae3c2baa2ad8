//! # Callback scheduling for listener dispatch.
//!
//! The dispatch layer never invokes a listener callback directly; it hands
//! `(callback, event, run_async)` to a [`Schedule`] implementation. Two are
//! built in:
//!
//! - [`SpawnScheduler`] (default) — defers async-flagged callbacks onto the
//!   tokio runtime, runs the rest inline;
//! - [`InlineScheduler`] — runs everything inline, in dispatch order
//!   (tests, strictly synchronous hosts).
//!
//! ## Panic handling
//! Both schedulers isolate callback panics with `catch_unwind`:
//! - the panic is caught and reported via `tracing::error!`;
//! - the remaining listeners of the same broadcast still run.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state
//! inconsistent if a callback panics while holding a lock.

mod inline;
mod schedule;
mod spawn;

pub use inline::InlineScheduler;
pub use schedule::{ListenFn, Schedule};
pub use spawn::SpawnScheduler;

use crate::events::Event;

/// Invokes one callback with panic isolation.
pub(crate) fn invoke(callback: &ListenFn, event: &Event) {
    let call = std::panic::AssertUnwindSafe(|| callback(event));
    if let Err(panic_err) = std::panic::catch_unwind(call) {
        let info = {
            let any = &*panic_err;
            if let Some(msg) = any.downcast_ref::<&'static str>() {
                (*msg).to_string()
            } else if let Some(msg) = any.downcast_ref::<String>() {
                msg.clone()
            } else {
                "unknown panic".to_string()
            }
        };
        tracing::error!(seq = event.seq, panic = %info, "listener callback panicked");
    }
}
