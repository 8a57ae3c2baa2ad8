//! Append-only, keyed multiset of notes.

use std::collections::HashMap;
use std::sync::Arc;

use super::note::Note;
use super::DEFAULT_NOTE_GROUP;

/// Collects [`Note`]s grouped by name during one picker batch.
///
/// Groups are created lazily on first use. Insertion order is kept within
/// each group; there is no ordering between groups.
///
/// ## Example
/// ```
/// use hubcast::{Note, NoteCollector};
///
/// let mut notes = NoteCollector::new();
/// notes.add(Note::new().with_action("update"), None);
/// notes.add(Note::new().with_action("insert").with_group("alerts"), None);
///
/// assert_eq!(notes.count(None), 2);
/// assert_eq!(notes.count(Some("alerts")), 1);
/// assert_eq!(notes.group(Some("own")).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NoteCollector {
    groups: HashMap<Arc<str>, Vec<Note>>,
}

impl NoteCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mutable note list for `group` (default `"own"`),
    /// creating it when absent.
    pub fn list_of(&mut self, group: Option<&str>) -> &mut Vec<Note> {
        let key: Arc<str> = group.unwrap_or(DEFAULT_NOTE_GROUP).into();
        self.groups.entry(key).or_default()
    }

    /// Returns the notes of `group` (default `"own"`) without creating it.
    pub fn group(&self, group: Option<&str>) -> &[Note] {
        self.groups
            .get(group.unwrap_or(DEFAULT_NOTE_GROUP))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of notes in `group`, or the total over all groups when `group`
    /// is absent. A group that was never written counts as zero.
    pub fn count(&self, group: Option<&str>) -> usize {
        match group {
            Some(name) => self.groups.get(name).map_or(0, Vec::len),
            None => self.groups.values().map(Vec::len).sum(),
        }
    }

    /// `count(group) == 0`.
    pub fn is_empty(&self, group: Option<&str>) -> bool {
        self.count(group) == 0
    }

    /// Appends a note. The target group is the note's own `group` field,
    /// else the `group` argument, else `"own"`.
    pub fn add(&mut self, note: Note, group: Option<&str>) {
        let key = note.group.clone();
        let key = key.as_deref().or(group);
        self.list_of(key).push(note);
    }
}
