//! The notification record broadcast through a hub.
//!
//! ## Ordering
//! Each event gets a globally unique, monotonically increasing sequence
//! number (`seq`). Deferred listener invocations are unordered relative to
//! each other; `seq` restores the publish order when needed.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use crate::hub::HostId;
use crate::notes::NoteCollector;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// A notification travelling through one or more hub registries.
///
/// Built with `with_*` setters, then handed to
/// [`EventHub::broadcast`](crate::EventHub::broadcast), which stamps the
/// originating hub id and delivers the same shared record to every matching
/// listener.
///
/// ## Example
/// ```
/// use hubcast::Event;
///
/// let ev = Event::new().with_action("update.doc").with_path("doc.title");
/// assert_eq!(ev.action.as_deref(), Some("update.doc"));
/// assert!(!ev.repeat);
/// ```
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,

    /// Dot-segmented name of what happened.
    pub action: Option<Arc<str>>,
    /// Name of where it happened.
    pub path: Option<Arc<str>>,
    /// Identity of the producing host; listeners subscribed with the same
    /// identity are skipped (a producer never notifies itself).
    pub exporter: Option<HostId>,
    /// Identity of the hub whose facade was called. Stamped by `broadcast`
    /// and preserved unchanged while the event repeats up the parent chain.
    pub hub: Option<HostId>,
    /// Propagate into the parent hub after local dispatch. Off by default,
    /// so a broadcast does not bubble unless asked.
    pub repeat: bool,
    /// Batch notes; present only on picker-fired events.
    pub notes: Option<Arc<NoteCollector>>,
}

impl Event {
    /// Creates an empty event with the current timestamp and the next
    /// sequence number.
    pub fn new() -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            action: None,
            path: None,
            exporter: None,
            hub: None,
            repeat: false,
            notes: None,
        }
    }

    /// Attaches an action name.
    #[inline]
    pub fn with_action(mut self, action: impl Into<Arc<str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attaches a path name.
    #[inline]
    pub fn with_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Marks the producing host, enabling self-exclusion on its listeners.
    #[inline]
    pub fn with_exporter(mut self, exporter: HostId) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Requests upward propagation into the parent chain.
    #[inline]
    pub fn with_repeat(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Attaches the collected batch notes (picker firing path).
    #[inline]
    pub(crate) fn with_notes(mut self, notes: Arc<NoteCollector>) -> Self {
        self.notes = Some(notes);
        self
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}
