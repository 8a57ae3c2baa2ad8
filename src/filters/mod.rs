//! # Filter compilation for listener matching.
//!
//! Subscriptions filter events by `action` and `path` strings. A filter is
//! given either as a space-separated list of literal tokens or as a raw
//! regular expression used verbatim; see [`FilterSpec`]. Compilation produces
//! a [`Filter`] with one of two anchoring flavors:
//!
//! - **prefix** — matches a literal and its dotted children (`update` matches
//!   `update` and `update.doc`, never `updated`); used for action names.
//! - **exact** — whole-string identity (`doc` matches `doc`, never
//!   `doc.child`); used for path names.
//!
//! An absent specifier is not a filter at all (the listener keeps `None` and
//! matches everything).

mod filter;

pub use filter::{Filter, FilterSpec};
