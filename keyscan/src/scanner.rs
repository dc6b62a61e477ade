use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

use crate::errors::{ScanError, ScanResult};
use crate::results::KeywordIndex;

/// Scans one file for every keyword in the set.
///
/// Reads the whole file as UTF-8 and records the path under each keyword
/// that appears as a substring of the content, at most once per keyword.
/// The returned index always has exactly the input keywords as keys.
///
/// A file that cannot be opened or decoded is absorbed rather than
/// propagated: the failure is logged with its path and cause, and the file
/// contributes no matches. The rest of the chunk is unaffected.
pub fn scan_file(path: &Path, keywords: &[String]) -> KeywordIndex {
    let mut index = KeywordIndex::new(keywords);

    let content = match read_file(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("skipping {}: {}", path.display(), err);
            return index;
        }
    };

    for keyword in keywords {
        if content.contains(keyword.as_str()) {
            trace!("keyword '{}' found in {}", keyword, path.display());
            index.record(keyword, path);
        }
    }

    debug!(
        "scanned {}: {} of {} keywords matched",
        path.display(),
        index.total_hits(),
        keywords.len()
    );
    index
}

fn read_file(path: &Path) -> ScanResult<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
        _ => ScanError::IoError(e),
    })?;
    String::from_utf8(bytes).map_err(|e| ScanError::encoding_error(path, e))
}
