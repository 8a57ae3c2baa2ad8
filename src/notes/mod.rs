//! # Notes — structured contributions collected during a batch.
//!
//! A [`Note`] is a small immutable record a producer attaches to an open
//! picker batch. The [`NoteCollector`] keeps notes grouped by name; the
//! default group is [`DEFAULT_NOTE_GROUP`] (`"own"`).

mod collector;
mod note;

pub use collector::NoteCollector;
pub use note::Note;

/// Group name used when neither the note nor the caller names one.
pub const DEFAULT_NOTE_GROUP: &str = "own";
