use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Mapping from each keyword in a fixed set to the files that contain it.
///
/// The key set is fixed at construction time and never changes; only the
/// per-keyword file lists grow. Workers build a private `KeywordIndex` for
/// their chunk and the driver folds each one into the final index with
/// [`merge`](KeywordIndex::merge).
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    /// Keywords in their original input order, used for iteration and display
    keywords: Vec<String>,
    /// Files recorded under each keyword, in append order
    hits: HashMap<String, Vec<PathBuf>>,
}

impl KeywordIndex {
    /// Creates an index with the given key set and empty file lists
    pub fn new(keywords: &[String]) -> Self {
        let hits = keywords
            .iter()
            .map(|keyword| (keyword.clone(), Vec::new()))
            .collect();
        Self {
            keywords: keywords.to_vec(),
            hits,
        }
    }

    /// Records a hit for `keyword`. Keywords outside the fixed set are ignored.
    pub fn record(&mut self, keyword: &str, path: impl Into<PathBuf>) {
        if let Some(files) = self.hits.get_mut(keyword) {
            files.push(path.into());
        }
    }

    /// Appends another index's file lists onto this one.
    ///
    /// Merge is additive, not a set union: merging the same source twice
    /// doubles its contribution. Callers merge each worker's local index
    /// exactly once.
    pub fn merge(&mut self, other: KeywordIndex) {
        for (keyword, files) in other.hits {
            if let Some(dest) = self.hits.get_mut(&keyword) {
                dest.extend(files);
            }
        }
    }

    /// The fixed keyword set, in input order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Files recorded under `keyword`, or `None` if it is not in the key set
    pub fn files_for(&self, keyword: &str) -> Option<&[PathBuf]> {
        self.hits.get(keyword).map(Vec::as_slice)
    }

    /// Iterates `(keyword, files)` pairs in input keyword order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.keywords.iter().filter_map(move |keyword| {
            self.hits
                .get(keyword)
                .map(|files| (keyword.as_str(), files.as_slice()))
        })
    }

    /// Total number of recorded hits across all keywords
    pub fn total_hits(&self) -> usize {
        self.hits.values().map(Vec::len).sum()
    }

    /// Re-sorts every file list by position in `files`.
    ///
    /// Merge order depends on worker completion order, so the raw lists are
    /// not deterministic across runs. Normalizing against the original input
    /// list gives reproducible output. Paths not present in `files` sort last,
    /// keeping their relative append order.
    pub fn normalize(&mut self, files: &[PathBuf]) {
        let order: HashMap<&Path, usize> = files
            .iter()
            .enumerate()
            .map(|(index, path)| (path.as_path(), index))
            .collect();
        for list in self.hits.values_mut() {
            list.sort_by_key(|path| order.get(path.as_path()).copied().unwrap_or(usize::MAX));
        }
    }
}

impl fmt::Display for KeywordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (keyword, files) in self.iter() {
            if files.is_empty() {
                writeln!(f, "{}: (no matches)", keyword)?;
            } else {
                let joined = files
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(f, "{}: {}", keyword, joined)?;
            }
        }
        Ok(())
    }
}
