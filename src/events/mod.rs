//! # Event payloads delivered to listeners.
//!
//! One type, [`Event`], plays both roles the dispatch layer needs: the
//! option bag handed to [`EventHub::broadcast`](crate::EventHub::broadcast)
//! and the payload a matching listener callback receives. Picker-fired events
//! additionally carry the batch's [`NoteCollector`](crate::NoteCollector).

mod event;

pub use event::Event;
