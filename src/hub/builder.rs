//! Builder for [`EventHub`].

use std::sync::{Arc, Mutex};

use crate::listeners::ListenerRegistry;
use crate::pickers::PickerCache;
use crate::schedule::{Schedule, SpawnScheduler};

use super::hub::{EventHub, PathFn};
use super::HostId;

/// Configures and builds an [`EventHub`].
///
/// ## Example
/// ```
/// use hubcast::EventHub;
///
/// let parent = EventHub::builder().with_name("document").build();
/// let child = EventHub::builder()
///     .with_name("section")
///     .with_parent(parent.clone())
///     .with_path_of(|| "doc.section".into())
///     .build();
/// # let _ = child;
/// ```
#[derive(Default)]
pub struct HubBuilder {
    name: Option<Arc<str>>,
    parent: Option<Arc<EventHub>>,
    scheduler: Option<Arc<dyn Schedule>>,
    path_of: Option<PathFn>,
}

impl HubBuilder {
    /// Names the hub for logs.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Links an explicit parent; broadcasts with `repeat` set propagate into
    /// it. Host graphs are expected to be acyclic ownership trees.
    pub fn with_parent(mut self, parent: Arc<EventHub>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Replaces the default [`SpawnScheduler`].
    pub fn with_scheduler(mut self, scheduler: Arc<dyn Schedule>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Installs the host's path accessor, used only to default a picker's
    /// path when the caller omitted one.
    pub fn with_path_of(
        mut self,
        path_of: impl Fn() -> Arc<str> + Send + Sync + 'static,
    ) -> Self {
        self.path_of = Some(Box::new(path_of));
        self
    }

    /// Builds the hub.
    pub fn build(self) -> Arc<EventHub> {
        Arc::new(EventHub {
            id: HostId::next(),
            name: self.name.unwrap_or_else(|| "hub".into()),
            registry: Mutex::new(ListenerRegistry::new()),
            parent: self.parent,
            pickers: Arc::new(PickerCache::new()),
            scheduler: self.scheduler.unwrap_or_else(|| Arc::new(SpawnScheduler)),
            path_of: self.path_of,
        })
    }
}
