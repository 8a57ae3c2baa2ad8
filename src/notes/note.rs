//! A single batch contribution.

use std::sync::Arc;

/// One structured contribution to a picker batch.
///
/// Immutable after construction; built with `with_*` setters.
///
/// ## Example
/// ```
/// use hubcast::Note;
///
/// let note = Note::new()
///     .with_action("update")
///     .with_path("doc.title")
///     .with_group("alerts");
///
/// assert_eq!(note.action.as_deref(), Some("update"));
/// assert_eq!(note.group.as_deref(), Some("alerts"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Note {
    /// What happened (dot-segmented action name).
    pub action: Option<Arc<str>>,
    /// Where it happened (path name).
    pub path: Option<Arc<str>>,
    /// Target group inside the collector; defaults to `"own"` when absent.
    pub group: Option<Arc<str>>,
    /// Opaque extra payload carried to the listeners.
    pub body: Option<Arc<str>>,
}

impl Note {
    /// Creates an empty note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an action name.
    #[inline]
    pub fn with_action(mut self, action: impl Into<Arc<str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attaches a path name.
    #[inline]
    pub fn with_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Routes the note into a named group.
    #[inline]
    pub fn with_group(mut self, group: impl Into<Arc<str>>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Attaches an opaque payload.
    #[inline]
    pub fn with_body(mut self, body: impl Into<Arc<str>>) -> Self {
        self.body = Some(body.into());
        self
    }
}
