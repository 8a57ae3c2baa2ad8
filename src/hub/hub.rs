//! The façade itself.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::EventError;
use crate::events::Event;
use crate::listeners::{Listener, ListenerRegistry, ListenerSpec};
use crate::pickers::{Picker, PickerCache, PickerSpec, DEFAULT_PICKER_ACTION};
use crate::schedule::Schedule;

use super::builder::HubBuilder;
use super::HostId;

/// Zero-argument path accessor a host may expose.
pub type PathFn = Box<dyn Fn() -> Arc<str> + Send + Sync>;

/// The publish/subscribe façade of one host object.
///
/// Create one per host via [`EventHub::new`] or [`EventHub::builder`]; it is
/// returned as `Arc<EventHub>` and lives for the host's lifetime.
///
/// ## Example
/// ```
/// use hubcast::{Event, EventHub, ListenerSpec};
///
/// let hub = EventHub::new();
/// hub.subscribe(ListenerSpec::new(|e| {
///     println!("heard: {:?}", e.action);
/// }).with_action("update")).unwrap();
///
/// hub.broadcast(Event::new().with_action("update.doc"));
/// ```
pub struct EventHub {
    pub(super) id: HostId,
    pub(super) name: Arc<str>,
    pub(super) registry: Mutex<ListenerRegistry>,
    pub(super) parent: Option<Arc<EventHub>>,
    pub(super) pickers: Arc<PickerCache>,
    pub(super) scheduler: Arc<dyn Schedule>,
    pub(super) path_of: Option<PathFn>,
}

impl EventHub {
    /// Creates a hub with all defaults (no parent, spawn scheduler).
    pub fn new() -> Arc<Self> {
        Self::builder().build()
    }

    /// Starts configuring a hub.
    pub fn builder() -> HubBuilder {
        HubBuilder::default()
    }

    /// This hub's host identity.
    pub fn id(&self) -> HostId {
        self.id
    }

    /// The hub's log name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a listener, defaulting its `self` to this hub.
    ///
    /// Idempotent per callback handle and action specifier: re-subscribing
    /// returns the existing [`Listener`].
    ///
    /// # Errors
    /// [`EventError::BadFilter`] when a raw filter pattern does not compile.
    pub fn subscribe(&self, spec: ListenerSpec) -> Result<Arc<Listener>, EventError> {
        self.lock_registry().subscribe(spec, self.id)
    }

    /// Removes a listener by handle; no-op when absent. An invocation that
    /// is already scheduled still runs.
    pub fn unsubscribe(&self, handle: &Arc<Listener>) {
        self.lock_registry().unsubscribe(handle);
    }

    /// Broadcasts an event through this hub's listeners.
    ///
    /// Stamps the event's `hub` identity (unless already set by an inner
    /// hub repeating upward) and dispatches in registration order. When the
    /// event's `repeat` flag is set and a parent is linked, the same shared
    /// event then repeats through each ancestor's listeners in turn.
    pub fn broadcast(&self, mut event: Event) {
        if event.hub.is_none() {
            event.hub = Some(self.id);
        }
        let event = Arc::new(event);

        self.deliver(&event);

        if event.repeat {
            let mut ancestor = self.parent.clone();
            while let Some(hub) = ancestor {
                hub.deliver(&event);
                ancestor = hub.parent.clone();
            }
        }
    }

    /// Opens (or joins) the picker for a batch action.
    ///
    /// The cache slot defaults to this hub's own cache, the action to
    /// `"task"`, and the path to the host's path accessor when configured.
    /// While a live picker exists for the action's treat, every further call
    /// joins it and bumps its wait count.
    pub fn open_picker(self: &Arc<Self>, spec: PickerSpec) -> Arc<Picker> {
        let cache = spec
            .cache
            .unwrap_or_else(|| Arc::clone(&self.pickers));
        let action: Arc<str> = spec
            .action
            .unwrap_or_else(|| DEFAULT_PICKER_ACTION.into());
        let treat: Arc<str> = action.split('.').next().unwrap_or(&action).into();

        let slot = Arc::clone(&cache);
        cache.checkout(&treat, || {
            let path = spec
                .path
                .or_else(|| self.path_of.as_ref().map(|f| f()));
            tracing::debug!(hub = %self.name, treat = %treat, "opening picker");
            Arc::new(Picker::new(
                Arc::downgrade(self),
                slot,
                Arc::clone(&action),
                Arc::clone(&treat),
                path,
                spec.fire_on_empty,
            ))
        })
    }

    /// Dispatches into this hub's own listeners only (no propagation).
    fn deliver(&self, event: &Arc<Event>) {
        tracing::debug!(
            hub = %self.name,
            seq = event.seq,
            action = event.action.as_deref().unwrap_or(""),
            "broadcast"
        );
        let snapshot = self.lock_registry().snapshot();
        for listener in snapshot {
            listener.dispatch(event, self.scheduler.as_ref());
        }
    }

    fn lock_registry(&self) -> std::sync::MutexGuard<'_, ListenerRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Note;
    use crate::pickers::Completion;
    use crate::schedule::{InlineScheduler, ListenFn};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    fn inline_hub() -> Arc<EventHub> {
        EventHub::builder().with_scheduler(Arc::new(InlineScheduler)).build()
    }

    fn recording(log: &Arc<StdMutex<Vec<String>>>, tag: &'static str) -> ListenFn {
        let log = Arc::clone(log);
        Arc::new(move |e: &Event| {
            log.lock().unwrap().push(format!(
                "{tag}:{}",
                e.action.as_deref().unwrap_or("-")
            ));
        })
    }

    #[test]
    fn test_subscribe_then_broadcast_scenario() {
        let hub = inline_hub();
        let log = Arc::new(StdMutex::new(Vec::new()));

        hub.subscribe(ListenerSpec::from_arc(recording(&log, "l")).with_action("update"))
            .unwrap();

        hub.broadcast(Event::new().with_action("update.doc"));
        hub.broadcast(Event::new().with_action("other"));

        assert_eq!(*log.lock().unwrap(), vec!["l:update.doc"]);
    }

    #[test]
    fn test_resubscribe_returns_same_handle() {
        let hub = inline_hub();
        let cb: ListenFn = Arc::new(|_| {});

        let a = hub
            .subscribe(ListenerSpec::from_arc(cb.clone()).with_action("update"))
            .unwrap();
        let b = hub
            .subscribe(ListenerSpec::from_arc(cb).with_action("update"))
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_self_exclusion_via_exporter() {
        let hub = inline_hub();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();

        hub.subscribe(ListenerSpec::new(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        }))
        .unwrap();

        hub.broadcast(Event::new().with_exporter(hub.id()));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        hub.broadcast(Event::new().with_exporter(HostId::next()));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_repeat_propagates_to_ancestors() {
        let grandparent = inline_hub();
        let parent = EventHub::builder()
            .with_scheduler(Arc::new(InlineScheduler))
            .with_parent(grandparent.clone())
            .build();
        let child = EventHub::builder()
            .with_scheduler(Arc::new(InlineScheduler))
            .with_parent(parent.clone())
            .build();

        let log = Arc::new(StdMutex::new(Vec::new()));
        parent
            .subscribe(ListenerSpec::from_arc(recording(&log, "parent")))
            .unwrap();
        grandparent
            .subscribe(ListenerSpec::from_arc(recording(&log, "grand")))
            .unwrap();

        child.broadcast(Event::new().with_action("update"));
        assert!(log.lock().unwrap().is_empty(), "no bubbling unless asked");

        child.broadcast(Event::new().with_action("update").with_repeat());
        assert_eq!(
            *log.lock().unwrap(),
            vec!["parent:update", "grand:update"]
        );
    }

    #[test]
    fn test_repeated_event_keeps_origin_identity() {
        let parent = inline_hub();
        let child = EventHub::builder()
            .with_scheduler(Arc::new(InlineScheduler))
            .with_parent(parent.clone())
            .build();

        let seen = Arc::new(StdMutex::new(None));
        let s = seen.clone();
        parent
            .subscribe(ListenerSpec::new(move |e: &Event| {
                *s.lock().unwrap() = e.hub;
            }))
            .unwrap();

        child.broadcast(Event::new().with_repeat());
        assert_eq!(*seen.lock().unwrap(), Some(child.id()));
    }

    #[test]
    fn test_two_producer_batch_fires_once() {
        let hub = inline_hub();
        let log = Arc::new(StdMutex::new(Vec::new()));
        hub.subscribe(ListenerSpec::from_arc(recording(&log, "batch")))
            .unwrap();

        let first = hub.open_picker(PickerSpec::new().with_action("task.x"));
        let second = hub.open_picker(PickerSpec::new().with_action("task.x"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.waiting(), 2);

        first.add_note(Note::new().with_action("update"));

        assert_eq!(
            first.complete().unwrap(),
            Completion::Pending { waiting: 1 }
        );
        assert!(log.lock().unwrap().is_empty(), "count=1, nothing fired yet");

        assert_eq!(second.complete().unwrap(), Completion::Fired);
        assert_eq!(*log.lock().unwrap(), vec!["batch:task.x"]);
    }

    #[test]
    fn test_fired_batch_delivers_notes() {
        let hub = inline_hub();
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let s = seen.clone();
        hub.subscribe(ListenerSpec::new(move |e: &Event| {
            if let Some(notes) = &e.notes {
                for n in notes.group(None) {
                    s.lock().unwrap().push(n.action.clone());
                }
            }
        }))
        .unwrap();

        let picker = hub.open_picker(PickerSpec::new());
        picker.add_note(Note::new().with_action("update"));
        picker.complete().unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![Some(Arc::from("update"))]);
    }

    #[test]
    fn test_empty_batch_policy() {
        let hub = inline_hub();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        hub.subscribe(ListenerSpec::new(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        }))
        .unwrap();

        hub.open_picker(PickerSpec::new()).complete().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0, "empty batch dropped");

        // a distinct treat: the skipped "task" batch still holds its slot
        hub.open_picker(PickerSpec::new().with_action("flush").fire_on_empty())
            .complete()
            .unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1, "fire_on_empty broadcasts");
    }

    #[test]
    fn test_fired_treat_starts_fresh() {
        let hub = inline_hub();
        let first = hub.open_picker(PickerSpec::new().with_action("task.a"));
        first.add_note(Note::new());
        first.complete().unwrap();

        let next = hub.open_picker(PickerSpec::new().with_action("task.b"));
        assert!(!Arc::ptr_eq(&first, &next), "same treat, new batch");
        assert_eq!(next.waiting(), 1);
    }

    #[test]
    fn test_caller_supplied_cache_scopes_batches() {
        let hub = inline_hub();
        let cache = Arc::new(PickerCache::new());

        let scoped = hub.open_picker(PickerSpec::new().with_cache(cache.clone()));
        let own = hub.open_picker(PickerSpec::new());
        assert!(!Arc::ptr_eq(&scoped, &own));
        assert!(cache.contains("task"));
    }

    #[test]
    fn test_picker_path_defaults_from_host_accessor() {
        let hub = EventHub::builder()
            .with_scheduler(Arc::new(InlineScheduler))
            .with_path_of(|| "doc".into())
            .build();

        let log = Arc::new(StdMutex::new(Vec::new()));
        let l = log.clone();
        hub.subscribe(
            ListenerSpec::new(move |e: &Event| {
                l.lock().unwrap().push(e.path.clone());
            })
            .with_path("doc"),
        )
        .unwrap();

        let picker = hub.open_picker(PickerSpec::new());
        assert_eq!(picker.path(), Some("doc"));
        picker.add_note(Note::new());
        picker.complete().unwrap();

        assert_eq!(*log.lock().unwrap(), vec![Some(Arc::from("doc"))]);

        // an explicit path wins over the accessor
        let explicit = hub.open_picker(PickerSpec::new().with_action("other").with_path("doc.a"));
        assert_eq!(explicit.path(), Some("doc.a"));
    }

    #[test]
    fn test_picker_fire_repeats_to_parent() {
        let parent = inline_hub();
        let child = EventHub::builder()
            .with_scheduler(Arc::new(InlineScheduler))
            .with_parent(parent.clone())
            .build();

        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        parent
            .subscribe(ListenerSpec::new(move |_| {
                h.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        let picker = child.open_picker(PickerSpec::new());
        picker.add_note(Note::new());
        picker.complete().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_note_filtered_listener_with_picker() {
        let hub = inline_hub();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        hub.subscribe(ListenerSpec::new(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        })
        .with_note_action("update"))
        .unwrap();

        // plain broadcast never satisfies a note filter
        hub.broadcast(Event::new().with_action("task"));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let matching = hub.open_picker(PickerSpec::new().with_action("task.m"));
        matching.add_note(Note::new().with_action("update.doc"));
        matching.complete().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let failing = hub.open_picker(PickerSpec::new().with_action("task.f"));
        failing.add_note(Note::new().with_action("update"));
        failing.add_note(Note::new().with_action("insert"));
        failing.complete().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1, "one failing note gates the batch");
    }

    #[test]
    fn test_panicking_listener_is_isolated() {
        let hub = inline_hub();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();

        hub.subscribe(ListenerSpec::new(|_| panic!("boom"))).unwrap();
        hub.subscribe(ListenerSpec::new(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        }))
        .unwrap();

        hub.broadcast(Event::new());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_via_hub() {
        let hub = inline_hub();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();

        let handle = hub
            .subscribe(ListenerSpec::new(move |_| {
                h.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        hub.broadcast(Event::new());
        hub.unsubscribe(&handle);
        hub.broadcast(Event::new());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_async_listener_defers_to_later_turn() {
        let hub = EventHub::new(); // SpawnScheduler by default
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();

        hub.subscribe(
            ListenerSpec::new(move |_| {
                h.fetch_add(1, Ordering::SeqCst);
            })
            .with_async(),
        )
        .unwrap();

        hub.broadcast(Event::new());
        assert_eq!(hits.load(Ordering::SeqCst), 0, "deferred past this turn");

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
