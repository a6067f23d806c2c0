//! ClassifierHost: one classifier per open Cobra document.
//!
//! The host hands out document ids for Cobra files, lazily creates the single
//! [`RangeClassifier`] of each open document, and shares one [`CommentCache`]
//! between all of them. Documents it never opened are not classified.
//!
//! ## Usage
//!
//! ```
//! use std::path::Path;
//! use vcobra::base::{Document, TextRange, TextSize};
//! use vcobra::ide::ClassifierHost;
//!
//! let mut host = ClassifierHost::default();
//! let id = host.open(Path::new("hello.cobra")).unwrap();
//!
//! let doc = Document::new(id, "class Hello\n");
//! let spans = host.classify(&doc.snapshot(), TextRange::up_to(TextSize::from(11)));
//! assert_eq!(spans.len(), 2);
//!
//! assert!(host.open(Path::new("notes.txt")).is_none());
//! ```

use std::path::Path;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use text_size::TextRange;
use tracing::debug;

use super::{ClassifiedSpan, ClassifierConfig, CommentCache, RangeClassifier};
use crate::base::constants::is_cobra_file;
use crate::base::{DocumentId, TextSnapshot};
use crate::parser::CobraTokenizer;

/// Owns the classifiers of all open documents.
#[derive(Debug)]
pub struct ClassifierHost {
    config: ClassifierConfig,
    comments: Arc<CommentCache>,
    open: FxHashSet<DocumentId>,
    classifiers: FxHashMap<DocumentId, RangeClassifier>,
    next_id: u32,
}

impl Default for ClassifierHost {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl ClassifierHost {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            comments: Arc::new(CommentCache::new()),
            open: FxHashSet::default(),
            classifiers: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Register a newly opened file.
    ///
    /// Returns `None` for files that are not Cobra source; those get no classifier.
    pub fn open(&mut self, path: &Path) -> Option<DocumentId> {
        if !is_cobra_file(path) {
            return None;
        }
        let id = DocumentId::new(self.next_id);
        self.next_id += 1;
        self.open.insert(id);
        debug!(?id, path = %path.display(), "opened cobra document");
        Some(id)
    }

    /// The classifier of `document`, created on first use.
    ///
    /// `None` unless `document` was handed out by [`ClassifierHost::open`] and
    /// not closed since.
    pub fn classifier(&mut self, document: DocumentId) -> Option<&mut RangeClassifier> {
        if !self.open.contains(&document) {
            return None;
        }
        let config = &self.config;
        let comments = &self.comments;
        Some(self.classifiers.entry(document).or_insert_with(|| {
            RangeClassifier::with_tokenizer(
                config.clone(),
                Arc::clone(comments),
                CobraTokenizer::new(),
            )
        }))
    }

    /// Classify `range` with the classifier of the snapshot's document.
    ///
    /// A document that is not open yields no spans.
    pub fn classify<S: TextSnapshot + ?Sized>(
        &mut self,
        snapshot: &S,
        range: TextRange,
    ) -> Vec<ClassifiedSpan> {
        let document = snapshot.revision().document;
        match self.classifier(document) {
            Some(classifier) => classifier.classify(snapshot, range),
            None => {
                debug!(?document, "classification requested for a document that is not open");
                Vec::new()
            }
        }
    }

    /// Forget `document`: drop its classifier and its cached comments.
    pub fn close(&mut self, document: DocumentId) {
        self.open.remove(&document);
        self.classifiers.remove(&document);
        self.comments.evict_document(document);
        debug!(?document, "closed cobra document");
    }

    /// True between [`ClassifierHost::open`] and [`ClassifierHost::close`].
    pub fn is_open(&self, document: DocumentId) -> bool {
        self.open.contains(&document)
    }

    /// True once `document`'s classifier has been created.
    pub fn has_classifier(&self, document: DocumentId) -> bool {
        self.classifiers.contains_key(&document)
    }

    /// Number of open documents.
    pub fn document_count(&self) -> usize {
        self.open.len()
    }

    pub fn comment_cache(&self) -> &Arc<CommentCache> {
        &self.comments
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}
