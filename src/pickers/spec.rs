//! Open-time option bag for pickers.

use std::sync::Arc;

use super::cache::PickerCache;

/// Options for [`EventHub::open_picker`](crate::EventHub::open_picker).
///
/// Everything is optional: the action defaults to
/// [`DEFAULT_PICKER_ACTION`](super::DEFAULT_PICKER_ACTION), the cache to the
/// hub's own, and the path to the hub's path provider (when configured).
#[derive(Clone, Default)]
pub struct PickerSpec {
    pub(crate) cache: Option<Arc<PickerCache>>,
    pub(crate) action: Option<Arc<str>>,
    pub(crate) path: Option<Arc<str>>,
    pub(crate) fire_on_empty: bool,
}

impl PickerSpec {
    /// Creates an all-defaults spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a caller-owned cache instead of the hub's own, for batches
    /// scoped to something narrower than the host.
    #[inline]
    pub fn with_cache(mut self, cache: Arc<PickerCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Names the batch action; its first dot-segment is the cache key.
    #[inline]
    pub fn with_action(mut self, action: impl Into<Arc<str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Names the batch path carried on the fired event.
    #[inline]
    pub fn with_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Fires the batch even when no notes were collected.
    #[inline]
    pub fn fire_on_empty(mut self) -> Self {
        self.fire_on_empty = true;
        self
    }
}
