//! Keyed store of live pickers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::picker::Picker;

/// Explicit mapping from treat key to live picker.
///
/// One cache is owned by each hub; callers may supply their own via
/// [`PickerSpec::with_cache`](super::PickerSpec::with_cache) to scope batches
/// more narrowly. Slots are freed exactly when their picker fires.
#[derive(Default)]
pub struct PickerCache {
    slots: Mutex<HashMap<Arc<str>, Arc<Picker>>>,
}

impl PickerCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the live picker for `treat`, or installs the one produced by
    /// `create`. Joining increments the picker's wait count.
    pub(crate) fn checkout(
        &self,
        treat: &str,
        create: impl FnOnce() -> Arc<Picker>,
    ) -> Arc<Picker> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(picker) = slots.get(treat) {
            picker.wait();
            return Arc::clone(picker);
        }
        let picker = create();
        slots.insert(treat.into(), Arc::clone(&picker));
        picker
    }

    /// Frees the slot for `treat`; no-op when absent.
    pub(crate) fn remove(&self, treat: &str) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(treat);
    }

    /// Whether a live picker is cached under `treat`.
    pub fn contains(&self, treat: &str) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(treat)
    }
}
