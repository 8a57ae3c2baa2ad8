//! # The dispatch façade attached to a host object.
//!
//! An [`EventHub`] bundles the four operations a host exposes — subscribe,
//! broadcast, open-a-picker, unsubscribe — around one listener registry, one
//! picker cache, an optional typed parent link, and a scheduler.

mod builder;
mod hub;

pub use builder::HubBuilder;
pub use hub::EventHub;

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global sequence counter for host identities.
static HOST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Lightweight identity of a host object.
///
/// Used for self-exclusion: a listener never fires for a broadcast whose
/// `exporter` is the listener's own host. Allocated per hub; copyable and
/// comparable without holding the hub itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(u64);

impl HostId {
    pub(crate) fn next() -> Self {
        Self(HOST_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }
}
