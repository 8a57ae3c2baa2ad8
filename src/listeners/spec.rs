//! Subscribe-time option bag.

use std::sync::Arc;

use crate::events::Event;
use crate::filters::FilterSpec;
use crate::hub::HostId;
use crate::schedule::ListenFn;

/// Options for one subscription, built with `with_*` setters and handed to
/// [`EventHub::subscribe`](crate::EventHub::subscribe).
///
/// Only the callback is required. Filters left absent match everything.
///
/// ## Example
/// ```
/// use hubcast::ListenerSpec;
///
/// let spec = ListenerSpec::new(|e| println!("{:?}", e.action))
///     .with_action("update")
///     .with_path("doc");
/// # let _ = spec;
/// ```
#[derive(Clone)]
pub struct ListenerSpec {
    pub(crate) callback: ListenFn,
    pub(crate) self_id: Option<HostId>,
    pub(crate) run_async: bool,
    pub(crate) action: Option<FilterSpec>,
    pub(crate) path: Option<FilterSpec>,
    pub(crate) note_action: Option<FilterSpec>,
    pub(crate) note_path: Option<FilterSpec>,
    pub(crate) note_group: Option<Arc<str>>,
}

impl ListenerSpec {
    /// Creates a spec around a fresh callback.
    ///
    /// Dedup compares callbacks by `Arc` identity; when idempotent
    /// re-subscribe matters, build the callback once with
    /// [`ListenerSpec::from_arc`] and reuse it.
    pub fn new(callback: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self::from_arc(Arc::new(callback))
    }

    /// Creates a spec around a shared callback handle.
    pub fn from_arc(callback: ListenFn) -> Self {
        Self {
            callback,
            self_id: None,
            run_async: false,
            action: None,
            path: None,
            note_action: None,
            note_path: None,
            note_group: None,
        }
    }

    /// Overrides the listener's own identity (defaults to the subscribing
    /// hub). A broadcast whose `exporter` equals this identity is skipped.
    #[inline]
    pub fn with_self(mut self, id: HostId) -> Self {
        self.self_id = Some(id);
        self
    }

    /// Defers the callback to a later turn instead of invoking it inline.
    #[inline]
    pub fn with_async(mut self) -> Self {
        self.run_async = true;
        self
    }

    /// Filters on the event's action name (prefix semantics).
    #[inline]
    pub fn with_action(mut self, spec: impl Into<FilterSpec>) -> Self {
        self.action = Some(spec.into());
        self
    }

    /// Filters on the event's path name (exact semantics).
    #[inline]
    pub fn with_path(mut self, spec: impl Into<FilterSpec>) -> Self {
        self.path = Some(spec.into());
        self
    }

    /// Filters picker-fired events by their notes' action names.
    #[inline]
    pub fn with_note_action(mut self, spec: impl Into<FilterSpec>) -> Self {
        self.note_action = Some(spec.into());
        self
    }

    /// Filters picker-fired events by their notes' path names.
    #[inline]
    pub fn with_note_path(mut self, spec: impl Into<FilterSpec>) -> Self {
        self.note_path = Some(spec.into());
        self
    }

    /// Names the note group the note filters inspect (default `"own"`).
    #[inline]
    pub fn with_note_group(mut self, group: impl Into<Arc<str>>) -> Self {
        self.note_group = Some(group.into());
        self
    }
}
