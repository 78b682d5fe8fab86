//! Per-document annotations on changed line ranges.
//!
//! An editor integration keeps one [`AnnotationRegistry`] and calls
//! [`AnnotationRegistry::sync`] whenever a document is opened or saved. The
//! registry hands back whatever it replaced so the caller can tear down the
//! matching UI objects.

use crate::config::Config;
use crate::diff::{LineRange, changed_ranges};
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// An anchor on a range of added lines in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub id: u64,
    pub document: String,
    /// Zero-based inclusive lines.
    pub range: LineRange,
}

/// Tracks the live annotations of every document.
#[derive(Debug, Default)]
pub struct AnnotationRegistry {
    next_id: u64,
    by_document: HashMap<String, Vec<Annotation>>,
}

impl AnnotationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the annotations of `document` with one per range.
    ///
    /// Returns the annotations that were replaced. Syncing with no ranges
    /// clears the document.
    pub fn sync(&mut self, document: &str, ranges: &[LineRange]) -> Vec<Annotation> {
        let created: Vec<Annotation> = ranges
            .iter()
            .map(|&range| {
                self.next_id += 1;
                Annotation {
                    id: self.next_id,
                    document: document.to_string(),
                    range,
                }
            })
            .collect();

        let previous = if created.is_empty() {
            self.by_document.remove(document)
        } else {
            self.by_document.insert(document.to_string(), created)
        };
        previous.unwrap_or_default()
    }

    /// Stop tracking one annotation. Returns it if it was tracked.
    pub fn remove(&mut self, annotation_id: u64) -> Option<Annotation> {
        let (document, index) = self.by_document.iter().find_map(|(doc, list)| {
            list.iter()
                .position(|a| a.id == annotation_id)
                .map(|idx| (doc.clone(), idx))
        })?;

        let list = self.by_document.get_mut(&document)?;
        let removed = list.remove(index);
        if list.is_empty() {
            self.by_document.remove(&document);
        }
        Some(removed)
    }

    /// Live annotations of `document`, in range order.
    pub fn annotations(&self, document: &str) -> &[Annotation] {
        self.by_document
            .get(document)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of live annotations.
    pub fn len(&self) -> usize {
        self.by_document.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_document.is_empty()
    }
}

/// Fetch a file's added ranges and sync them into `registry`.
///
/// Files matching `ignore_globs` are cleared instead. Returns the replaced
/// annotations.
pub fn refresh_document<P: AsRef<Path>>(
    registry: &mut AnnotationRegistry,
    repo_root: P,
    relative_path: &str,
    config: &Config,
) -> Result<Vec<Annotation>> {
    if !config.is_annotatable(relative_path)? {
        return Ok(registry.sync(relative_path, &[]));
    }

    let ranges = changed_ranges(repo_root, relative_path, config.diff_mode)?;
    Ok(registry.sync(relative_path, &ranges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_file, create_test_repo};

    #[test]
    fn test_sync_creates_one_annotation_per_range() {
        let mut registry = AnnotationRegistry::new();
        let replaced = registry.sync("a.rs", &[LineRange::single(2), LineRange::new(5, 7)]);

        assert!(replaced.is_empty());
        assert_eq!(registry.len(), 2);
        let ranges: Vec<_> = registry.annotations("a.rs").iter().map(|a| a.range).collect();
        assert_eq!(ranges, vec![LineRange::single(2), LineRange::new(5, 7)]);
    }

    #[test]
    fn test_resync_returns_previous_and_issues_new_ids() {
        let mut registry = AnnotationRegistry::new();
        registry.sync("a.rs", &[LineRange::single(0)]);
        let first_id = registry.annotations("a.rs")[0].id;

        let replaced = registry.sync("a.rs", &[LineRange::single(1)]);

        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].id, first_id);
        assert!(registry.annotations("a.rs")[0].id > first_id);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_documents_are_independent() {
        let mut registry = AnnotationRegistry::new();
        registry.sync("a.rs", &[LineRange::single(0)]);
        registry.sync("b.rs", &[LineRange::single(3)]);

        let replaced = registry.sync("a.rs", &[]);

        assert_eq!(replaced.len(), 1);
        assert!(registry.annotations("a.rs").is_empty());
        assert_eq!(registry.annotations("b.rs").len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut registry = AnnotationRegistry::new();
        registry.sync("a.rs", &[LineRange::single(0), LineRange::single(4)]);
        let id = registry.annotations("a.rs")[0].id;

        let removed = registry.remove(id).unwrap();
        assert_eq!(removed.range, LineRange::single(0));
        assert_eq!(registry.len(), 1);
        assert!(registry.remove(id).is_none());

        let last = registry.annotations("a.rs")[0].id;
        registry.remove(last);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_refresh_document_from_repo() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "src/lib.rs", "a\nb\nc\n");
        std::fs::write(temp_dir.path().join("src/lib.rs"), "a\nnew\nb\nc\nmore\n").unwrap();

        let mut registry = AnnotationRegistry::new();
        refresh_document(&mut registry, temp_dir.path(), "src/lib.rs", &Config::default())
            .unwrap();

        let ranges: Vec<_> = registry
            .annotations("src/lib.rs")
            .iter()
            .map(|a| a.range)
            .collect();
        assert_eq!(ranges, vec![LineRange::single(1), LineRange::single(4)]);
    }

    #[test]
    fn test_refresh_document_skips_ignored_files() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "Cargo.lock", "x\n");
        std::fs::write(temp_dir.path().join("Cargo.lock"), "x\ny\n").unwrap();

        let config = Config {
            ignore_globs: vec!["*.lock".to_string()],
            ..Config::default()
        };
        let mut registry = AnnotationRegistry::new();
        registry.sync("Cargo.lock", &[LineRange::single(0)]);

        let replaced =
            refresh_document(&mut registry, temp_dir.path(), "Cargo.lock", &config).unwrap();

        assert_eq!(replaced.len(), 1);
        assert!(registry.is_empty());
    }
}
