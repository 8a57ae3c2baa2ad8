//! A single compiled subscription.

use std::sync::Arc;

use crate::error::EventError;
use crate::events::Event;
use crate::filters::Filter;
use crate::hub::HostId;
use crate::notes::DEFAULT_NOTE_GROUP;
use crate::schedule::{ListenFn, Schedule};

use super::spec::ListenerSpec;

/// A compiled subscription: match predicate plus invocation target.
///
/// Owned by exactly one [`ListenerRegistry`](crate::ListenerRegistry);
/// immutable after construction. The handle returned by `subscribe` doubles
/// as the removal token for `unsubscribe`.
pub struct Listener {
    callback: ListenFn,
    self_id: HostId,
    run_async: bool,
    action: Option<Filter>,
    path: Option<Filter>,
    note_action: Option<Filter>,
    note_path: Option<Filter>,
    note_group: Arc<str>,
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("self_id", &self.self_id)
            .field("run_async", &self.run_async)
            .field("action", &self.action)
            .field("path", &self.path)
            .field("note_action", &self.note_action)
            .field("note_path", &self.note_path)
            .field("note_group", &self.note_group)
            .finish_non_exhaustive()
    }
}

impl Listener {
    /// Compiles a spec into a listener, defaulting `self` to the subscribing
    /// hub. Filter compilation failures surface here, before the listener is
    /// registered.
    pub(crate) fn compile(spec: ListenerSpec, default_self: HostId) -> Result<Self, EventError> {
        Ok(Self {
            callback: spec.callback,
            self_id: spec.self_id.unwrap_or(default_self),
            run_async: spec.run_async,
            action: spec.action.map(Filter::prefix).transpose()?,
            path: spec.path.map(Filter::exact).transpose()?,
            note_action: spec.note_action.map(Filter::prefix).transpose()?,
            note_path: spec.note_path.map(Filter::exact).transpose()?,
            note_group: spec
                .note_group
                .unwrap_or_else(|| DEFAULT_NOTE_GROUP.into()),
        })
    }

    /// Whether this listener should fire for `event`.
    ///
    /// Fails on the first of:
    /// 1. the event's exporter is this listener's own host (self-exclusion);
    /// 2. a present action filter does not match the event's action;
    /// 3. a present path filter does not match the event's path;
    /// 4. note filters are present and the event carries no notes, the
    ///    listener's note group is empty, or any note in that group fails a
    ///    present note filter (all notes must pass).
    pub fn matches(&self, event: &Event) -> bool {
        if event.exporter == Some(self.self_id) {
            return false;
        }

        if let Some(action) = &self.action {
            if !action.matches_opt(event.action.as_deref()) {
                return false;
            }
        }

        if let Some(path) = &self.path {
            if !path.matches_opt(event.path.as_deref()) {
                return false;
            }
        }

        if self.note_action.is_some() || self.note_path.is_some() {
            let Some(notes) = &event.notes else {
                return false;
            };
            let group = notes.group(Some(&self.note_group));
            if group.is_empty() {
                return false;
            }
            for note in group {
                if let Some(note_action) = &self.note_action {
                    if !note_action.matches_opt(note.action.as_deref()) {
                        return false;
                    }
                }
                if let Some(note_path) = &self.note_path {
                    if !note_path.matches_opt(note.path.as_deref()) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Schedules the callback when the event matches.
    pub(crate) fn dispatch(&self, event: &Arc<Event>, scheduler: &dyn Schedule) {
        if !self.matches(event) {
            return;
        }
        tracing::trace!(seq = event.seq, "dispatching listener callback");
        scheduler.schedule(Arc::clone(&self.callback), Arc::clone(event), self.run_async);
    }

    /// Structural identity for subscribe-time dedup: the same callback
    /// handle and action specifiers that are both absent or equal by their
    /// source value. Path and note filters do not participate.
    pub(crate) fn is_equivalent_to(&self, spec: &ListenerSpec) -> bool {
        if !Arc::ptr_eq(&self.callback, &spec.callback) {
            return false;
        }
        match (&self.action, &spec.action) {
            (None, None) => true,
            (Some(mine), Some(theirs)) => mine.spec() == theirs,
            _ => false,
        }
    }
}
