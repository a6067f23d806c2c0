//! Multi-line comment discovery and the per-revision comment cache.
//!
//! Whether a line sits inside a `"""` comment cannot be decided from that line
//! alone, so the whole revision is scanned once and the result is cached under
//! the revision's identity. Repaints of small ranges then reuse the scan.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use crate::base::constants::COMMENT_DELIMITER;
use crate::base::{DocumentId, Revision, TextSnapshot};

/// Find every multi-line comment in `text`.
///
/// Delimiters pair up left to right: each opening delimiter is closed by the
/// next delimiter after it, and the search for the following comment resumes
/// at the end of the closing one. A comment with no closing delimiter runs to
/// the end of the text.
///
/// The returned ranges are non-empty, non-overlapping and in ascending order.
pub fn find_comments(text: &str) -> Vec<TextRange> {
    let delimiter_len = COMMENT_DELIMITER.len();
    let mut comments = Vec::new();
    let mut from = 0;

    while let Some(found) = text[from..].find(COMMENT_DELIMITER) {
        let start = from + found;
        let body = start + delimiter_len;
        let end = match text[body..].find(COMMENT_DELIMITER) {
            Some(close) => body + close + delimiter_len,
            // no end, so run to the end of the file
            None => text.len(),
        };
        debug_assert!(end > start);
        comments.push(TextRange::new(
            TextSize::new(start as u32),
            TextSize::new(end as u32),
        ));
        if end >= text.len() {
            break;
        }
        from = end;
    }

    comments
}

/// The comments among `comments` that intersect `range`.
///
/// `comments` must be sorted and non-overlapping, as returned by
/// [`find_comments`]. An empty `range` intersects a comment when its offset
/// lies inside the comment.
pub fn comments_intersecting(comments: &[TextRange], range: TextRange) -> &[TextRange] {
    let lo = comments.partition_point(|c| c.end() <= range.start());
    let hi = if range.is_empty() {
        comments.partition_point(|c| c.start() <= range.start())
    } else {
        comments.partition_point(|c| c.start() < range.end())
    };
    &comments[lo..hi.max(lo)]
}

/// Hit/miss counters and size of a [`CommentCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// Comment ranges per revision, at most one revision per document.
///
/// Safe to share between documents and threads: a lookup and the insert that
/// follows a miss happen under one lock.
#[derive(Debug, Default)]
pub struct CommentCache {
    entries: Mutex<FxHashMap<Revision, Arc<[TextRange]>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CommentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The comment ranges of `snapshot`'s revision, scanning it on first use.
    ///
    /// Scanning a new revision drops the cached entry of any older revision of
    /// the same document.
    pub fn comments_for<S: TextSnapshot + ?Sized>(&self, snapshot: &S) -> Arc<[TextRange]> {
        let revision = snapshot.revision();
        let mut entries = self.entries.lock();

        if let Some(comments) = entries.get(&revision) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(?revision, "comment cache hit");
            return Arc::clone(comments);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let comments: Arc<[TextRange]> = find_comments(snapshot.text()).into();
        debug!(?revision, count = comments.len(), "scanned multi-line comments");

        let stale = entries
            .keys()
            .filter(|r| r.document == revision.document)
            .count();
        debug_assert!(stale <= 1, "{stale} cached revisions for {:?}", revision.document);
        entries.retain(|r, _| r.document != revision.document);

        entries.insert(revision, Arc::clone(&comments));
        comments
    }

    pub fn contains(&self, revision: Revision) -> bool {
        self.entries.lock().contains_key(&revision)
    }

    /// Drop every cached revision of `document`.
    pub fn evict_document(&self, document: DocumentId) {
        self.entries.lock().retain(|r, _| r.document != document);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
