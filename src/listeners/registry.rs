//! Per-host collection of listeners.

use std::sync::Arc;

use crate::error::EventError;
use crate::events::Event;
use crate::hub::HostId;
use crate::schedule::Schedule;

use super::listener::Listener;
use super::spec::ListenerSpec;

/// Ordered, deduplicating collection of the listeners of one host.
///
/// Insertion order is dispatch order. One registry per host, created with
/// the hub and living for the host's lifetime.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Arc<Listener>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener, reusing an equivalent existing one.
    ///
    /// The scan is linear; listener counts are expected in the tens, not
    /// thousands. Filter compilation failures surface here, before anything
    /// is appended.
    pub fn subscribe(
        &mut self,
        spec: ListenerSpec,
        default_self: HostId,
    ) -> Result<Arc<Listener>, EventError> {
        for listener in &self.listeners {
            if listener.is_equivalent_to(&spec) {
                return Ok(Arc::clone(listener));
            }
        }

        let listener = Arc::new(Listener::compile(spec, default_self)?);
        self.listeners.push(Arc::clone(&listener));
        Ok(listener)
    }

    /// Dispatches `event` to every listener in insertion order.
    ///
    /// Iterates a defensive snapshot: a callback that unsubscribes (itself
    /// or others) mid-broadcast cannot disturb the remaining iteration. No
    /// short-circuit; panic isolation is the scheduler's job.
    pub fn broadcast(&self, event: &Arc<Event>, scheduler: &dyn Schedule) {
        for listener in self.snapshot() {
            listener.dispatch(event, scheduler);
        }
    }

    /// Removes the first entry identical to `handle`; no-op when absent.
    pub fn unsubscribe(&mut self, handle: &Arc<Listener>) {
        if let Some(pos) = self
            .listeners
            .iter()
            .position(|l| Arc::ptr_eq(l, handle))
        {
            self.listeners.remove(pos);
        }
    }

    /// Copy of the current listener list, for lock-free dispatch.
    pub(crate) fn snapshot(&self) -> Vec<Arc<Listener>> {
        self.listeners.clone()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
