//! # Listeners — compiled subscriptions and their per-host registry.
//!
//! ## Architecture
//! ```text
//! EventHub::subscribe(ListenerSpec)
//!         │
//!         ▼
//! ListenerRegistry ── dedup scan (is_equivalent_to) ──► existing Arc<Listener>
//!         │
//!         └─ else compile filters ──► new Arc<Listener> (appended, insertion
//!                                     order = dispatch order)
//!
//! EventHub::broadcast(Event)
//!         │
//!         ▼
//! ListenerRegistry::broadcast ── snapshot ──► Listener::dispatch for each
//!         (a callback removing listeners mid-broadcast cannot disturb
//!          the iteration)
//! ```
//!
//! ## Rules
//! - Dedup is subscribe-time only: same callback `Arc` plus the same
//!   original action specifier returns the existing handle.
//! - Removal is by handle identity and never cancels an already-scheduled
//!   invocation.

mod listener;
mod registry;
mod spec;

pub use listener::Listener;
pub use registry::ListenerRegistry;
pub use spec::ListenerSpec;
