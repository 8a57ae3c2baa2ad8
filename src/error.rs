//! Error types used by the hubcast dispatch layer.
//!
//! All errors are programmer errors surfaced fail-fast at the API boundary:
//!
//! - [`EventError::BadFilter`] — a raw filter pattern failed to compile at
//!   subscribe/open time.
//! - [`EventError::PickerSpent`] — `complete()` was called on a picker that
//!   has already fired or drained its wait count (a double-release).
//!
//! Absent filter specifiers are **not** errors — they mean "match all".
//! Listener callback failures are isolated per listener by the scheduler and
//! never travel through these types.

use thiserror::Error;

/// Errors produced by the hubcast dispatch layer.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EventError {
    /// A raw filter pattern did not compile.
    ///
    /// Raised at subscribe/open time so a malformed specifier cannot
    /// silently degrade into a match-everything filter.
    #[error("invalid filter pattern `{spec}`: {source}")]
    BadFilter {
        /// The offending specifier, as given by the caller.
        spec: String,
        /// The underlying compilation failure.
        source: regex::Error,
    },

    /// `complete()` was called on a picker whose batch is already over.
    ///
    /// Indicates a reference-count bug in the caller: every `open`/`wait`
    /// must be balanced by exactly one `complete`.
    #[error("picker `{treat}` already completed")]
    PickerSpent {
        /// The treat key the picker was cached under.
        treat: String,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use hubcast::EventError;
    ///
    /// let err = EventError::PickerSpent { treat: "task".into() };
    /// assert_eq!(err.as_label(), "picker_spent");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::BadFilter { .. } => "bad_filter",
            EventError::PickerSpent { .. } => "picker_spent",
        }
    }
}
