//! The aggregation barrier itself.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::error::EventError;
use crate::events::Event;
use crate::hub::EventHub;
use crate::notes::{Note, NoteCollector};

use super::cache::PickerCache;

/// Outcome of one [`Picker::complete`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Other producers are still between open and complete.
    Pending {
        /// Completes still outstanding.
        waiting: u32,
    },
    /// The batch drained with no notes and `fire_on_empty` unset; nothing
    /// was broadcast. The picker keeps its cache slot and can be rejoined.
    Skipped,
    /// The batch fired exactly one broadcast. Terminal.
    Fired,
}

struct PickerState {
    wait: u32,
    fired: bool,
    notes: NoteCollector,
}

/// Reference-counted accumulator for one batch of notes.
///
/// Obtained from [`EventHub::open_picker`]; every open (and every explicit
/// [`wait`](Picker::wait)) must be balanced by exactly one
/// [`complete`](Picker::complete). When the count drains, the picker either
/// fires one broadcast through its hub — carrying the collected notes and
/// propagating upward like any other event — or skips silently when empty.
pub struct Picker {
    hub: Weak<EventHub>,
    cache: Arc<PickerCache>,
    action: Arc<str>,
    treat: Arc<str>,
    path: Option<Arc<str>>,
    fire_on_empty: bool,
    state: Mutex<PickerState>,
}

impl Picker {
    pub(crate) fn new(
        hub: Weak<EventHub>,
        cache: Arc<PickerCache>,
        action: Arc<str>,
        treat: Arc<str>,
        path: Option<Arc<str>>,
        fire_on_empty: bool,
    ) -> Self {
        Self {
            hub,
            cache,
            action,
            treat,
            path,
            fire_on_empty,
            state: Mutex::new(PickerState {
                wait: 1,
                fired: false,
                notes: NoteCollector::new(),
            }),
        }
    }

    /// The full batch action.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The cache key (first dot-segment of the action).
    pub fn treat(&self) -> &str {
        &self.treat
    }

    /// The batch path, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Current number of outstanding completes.
    pub fn waiting(&self) -> u32 {
        self.lock_state().wait
    }

    /// Joins the batch as one more producer.
    pub fn wait(&self) -> &Self {
        let mut state = self.lock_state();
        if state.fired {
            tracing::warn!(treat = %self.treat, "wait() on a fired picker ignored");
            return self;
        }
        state.wait += 1;
        self
    }

    /// Appends a note to the batch; the target group comes from the note
    /// itself (default `"own"`). Chainable; callable any number of times
    /// before the final complete.
    pub fn add_note(&self, note: Note) -> &Self {
        self.add_note_in_opt(None, note)
    }

    /// Appends a note into a named group (unless the note names its own).
    pub fn add_note_in(&self, group: &str, note: Note) -> &Self {
        self.add_note_in_opt(Some(group), note)
    }

    fn add_note_in_opt(&self, group: Option<&str>, note: Note) -> &Self {
        let mut state = self.lock_state();
        if state.fired {
            tracing::warn!(treat = %self.treat, "note for a fired picker dropped");
            return self;
        }
        state.notes.add(note, group);
        self
    }

    /// Releases one producer's hold on the batch.
    ///
    /// - While other producers are outstanding: [`Completion::Pending`].
    /// - Draining an empty batch without `fire_on_empty`:
    ///   [`Completion::Skipped`] — no broadcast, slot kept.
    /// - Otherwise: frees the cache slot and broadcasts one event carrying
    ///   the notes, with upward propagation — [`Completion::Fired`].
    ///
    /// # Errors
    /// [`EventError::PickerSpent`] when the picker has already fired or its
    /// wait count is already zero (a double-release in the caller).
    pub fn complete(&self) -> Result<Completion, EventError> {
        let notes = {
            let mut state = self.lock_state();
            if state.fired || state.wait == 0 {
                return Err(EventError::PickerSpent {
                    treat: self.treat.to_string(),
                });
            }

            state.wait -= 1;
            if state.wait > 0 {
                return Ok(Completion::Pending {
                    waiting: state.wait,
                });
            }

            if state.notes.is_empty(None) && !self.fire_on_empty {
                tracing::debug!(treat = %self.treat, "empty batch skipped");
                return Ok(Completion::Skipped);
            }

            state.fired = true;
            std::mem::take(&mut state.notes)
        };

        self.cache.remove(&self.treat);

        let mut event = Event::new()
            .with_action(Arc::clone(&self.action))
            .with_repeat()
            .with_notes(Arc::new(notes));
        if let Some(path) = &self.path {
            event = event.with_path(Arc::clone(path));
        }

        match self.hub.upgrade() {
            Some(hub) => {
                tracing::debug!(treat = %self.treat, seq = event.seq, "batch fired");
                hub.broadcast(event);
            }
            None => tracing::warn!(treat = %self.treat, "batch fired after its hub was dropped"),
        }

        Ok(Completion::Fired)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PickerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
