//! # hubcast
//!
//! **hubcast** is an in-process publish/subscribe library. Attach an
//! [`EventHub`] to any host object to register pattern-filtered listeners,
//! broadcast notifications up an ownership chain, and aggregate contributions
//! from several concurrent producers into a single batched notification.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   producer A ──┐                                   ┌──► Listener (sync)
//!   producer B ──┼─ open_picker("task.x") ─► Picker  │      callback inline,
//!   producer C ──┘        (wait count,      (notes)  │      registration order
//!                          shared batch)       │     │
//!                                   complete() ▼     │
//! ┌───────────────────────────────────────────────┐  │
//! │ EventHub (per host object)                    │  │
//! │  - ListenerRegistry (ordered, deduplicated)   ──┼──► Listener (async)
//! │  - PickerCache (treat → live Picker)          │  │      deferred via
//! │  - Schedule (inline / tokio spawn)            │  │      tokio::spawn
//! │  - parent: Option<Arc<EventHub>>              │  │
//! └──────────────────────┬────────────────────────┘  │
//!                        │ repeat = true             │
//!                        ▼                           │
//!               parent EventHub ─────────────────────┘
//!                 (same event, same filters, own listeners)
//! ```
//!
//! ### Batch lifecycle
//! ```text
//! open_picker ──► new Picker (wait = 1) cached under treat
//!    │                 │
//!    │  open_picker ───┤ joins: wait += 1
//!    │                 │
//!    │  add_note ──────┤ notes grouped by name (default "own")
//!    │                 │
//!    └─ complete() ────┤ wait -= 1
//!                      ├─ wait > 0          ─► Pending (keep collecting)
//!                      ├─ empty, not forced ─► Skipped (slot kept, rejoinable)
//!                      └─ else              ─► Fired: slot freed, ONE broadcast
//!                                              carrying the notes, repeated
//!                                              up the parent chain
//! ```
//!
//! ## Features
//! | Area          | Description                                             | Key types                              |
//! |---------------|---------------------------------------------------------|----------------------------------------|
//! | **Filters**   | Prefix/exact pattern matching over literal token lists. | [`Filter`], [`FilterSpec`]             |
//! | **Listeners** | Deduplicated, ordered subscriptions with note gates.    | [`ListenerSpec`], [`Listener`]         |
//! | **Events**    | Sequenced notification records with upward propagation. | [`Event`], [`HostId`]                  |
//! | **Pickers**   | Reference-counted batch aggregation barriers.           | [`PickerSpec`], [`Picker`], [`Completion`] |
//! | **Notes**     | Keyed multiset of batch contributions.                  | [`Note`], [`NoteCollector`]            |
//! | **Scheduling**| Inline or tokio-deferred callback invocation.           | [`Schedule`], [`SpawnScheduler`], [`InlineScheduler`] |
//! | **Errors**    | Fail-fast programmer errors.                            | [`EventError`]                         |
//!
//! ## Example
//! ```rust
//! use hubcast::{Event, EventHub, ListenerSpec, Note, PickerSpec};
//!
//! let hub = EventHub::new();
//!
//! hub.subscribe(ListenerSpec::new(|e| {
//!     if let Some(notes) = &e.notes {
//!         println!("batch {:?}: {} notes", e.action, notes.count(None));
//!     }
//! }).with_action("task")).unwrap();
//!
//! // two producers join the same batch
//! let a = hub.open_picker(PickerSpec::new().with_action("task.sync"));
//! let b = hub.open_picker(PickerSpec::new().with_action("task.sync"));
//!
//! a.add_note(Note::new().with_action("update").with_path("doc.title"));
//! a.complete().unwrap(); // still waiting on b
//! b.complete().unwrap(); // fires exactly one broadcast
//! ```

mod error;
mod events;
mod filters;
mod hub;
mod listeners;
mod notes;
mod pickers;
mod schedule;

// ---- Public re-exports ----

pub use error::EventError;
pub use events::Event;
pub use filters::{Filter, FilterSpec};
pub use hub::{EventHub, HostId, HubBuilder};
pub use listeners::{Listener, ListenerRegistry, ListenerSpec};
pub use notes::{Note, NoteCollector, DEFAULT_NOTE_GROUP};
pub use pickers::{Completion, Picker, PickerCache, PickerSpec, DEFAULT_PICKER_ACTION};
pub use schedule::{InlineScheduler, ListenFn, Schedule, SpawnScheduler};
