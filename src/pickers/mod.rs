//! # Pickers — reference-counted aggregation barriers.
//!
//! A picker collects [`Note`](crate::Note)s from several concurrent
//! producers and fires **one** broadcast when every producer has completed.
//!
//! ## Architecture
//! ```text
//! producer A ── open_picker("task.x") ──┐            (wait = 1, cached)
//! producer B ── open_picker("task.x") ──┤ same Arc<Picker>  (wait = 2)
//!                                       │
//!            A: add_note / B: add_note  │
//!                                       │
//! A: complete() ── wait 2 → 1 ── Pending
//! B: complete() ── wait 1 → 0 ──┬─ notes empty, !fire_on_empty → Skipped
//!                               └─ else: drop cache slot, broadcast once
//!                                  (repeat = true, notes attached) → Fired
//! ```
//!
//! ## Rules
//! - At most one live picker per `(cache, treat)`; `treat` is the first
//!   dot-segment of the batch action.
//! - Firing is terminal: the cache slot is freed, a later open starts fresh.
//! - A skipped (empty) batch keeps its slot at wait 0; the next open rejoins
//!   it instead of creating a new picker.
//! - `complete()` on a fired or drained picker reports
//!   [`EventError::PickerSpent`](crate::EventError::PickerSpent) — that is a
//!   reference-count bug in the caller, never ignored silently.
//! - The wait count serializes logical joins within one cooperative unit of
//!   work; it is not a thread barrier.

mod cache;
mod picker;
mod spec;

pub use cache::PickerCache;
pub use picker::{Completion, Picker};
pub use spec::PickerSpec;

/// Batch action used when the caller names none.
pub const DEFAULT_PICKER_ACTION: &str = "task";
