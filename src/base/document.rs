//! Documents, revisions and immutable text snapshots.
//!
//! The host editor owns the real text buffer. The classifier only needs two
//! things from it: the full text of one immutable version, and a value that
//! identifies that version so per-revision results can be cached.

use std::sync::Arc;

use text_size::TextSize;

/// Identifies one open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentId(pub u32);

impl DocumentId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

/// Identity of one immutable version of a document's text.
///
/// Two revisions are the same cache key exactly when they name the same
/// document and the same version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Revision {
    pub document: DocumentId,
    pub version: u64,
}

impl Revision {
    pub fn new(document: DocumentId, version: u64) -> Self {
        Self { document, version }
    }

    /// The revision that follows this one in the same document.
    pub fn next(self) -> Self {
        Self {
            document: self.document,
            version: self.version + 1,
        }
    }
}

/// Read access to one immutable revision of a document.
pub trait TextSnapshot {
    /// Cache key for this revision.
    fn revision(&self) -> Revision;

    /// The complete text of this revision.
    fn text(&self) -> &str;

    /// Length of the text in bytes.
    fn len(&self) -> TextSize {
        TextSize::of(self.text())
    }

    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// A cheaply clonable snapshot backed by shared text.
#[derive(Debug, Clone)]
pub struct Snapshot {
    revision: Revision,
    text: Arc<str>,
}

impl Snapshot {
    pub fn new(revision: Revision, text: impl Into<Arc<str>>) -> Self {
        Self {
            revision,
            text: text.into(),
        }
    }
}

impl TextSnapshot for Snapshot {
    fn revision(&self) -> Revision {
        self.revision
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// A minimal mutable text buffer.
///
/// Every call to [`Document::set_text`] produces a new revision; snapshots
/// taken earlier keep the text they were created with.
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    version: u64,
    text: Arc<str>,
}

impl Document {
    pub fn new(id: DocumentId, text: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            version: 0,
            text: text.into(),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn revision(&self) -> Revision {
        Revision::new(self.id, self.version)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text, moving the document to its next revision.
    pub fn set_text(&mut self, text: impl Into<Arc<str>>) -> Revision {
        self.text = text.into();
        self.version += 1;
        self.revision()
    }

    /// Take an immutable snapshot of the current revision.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision(),
            text: Arc::clone(&self.text),
        }
    }
}
