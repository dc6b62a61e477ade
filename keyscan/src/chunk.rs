use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::debug;

/// Splits a file list into at most `cap` contiguous chunks, one per worker.
///
/// The effective worker count is `min(cap, N)`, so no chunk is ever empty;
/// an empty file list produces no chunks at all. Workers `0..W-1` receive
/// exactly `floor(N/W)` files and the last worker absorbs the remainder.
/// The chunks partition the input: disjoint, in order, nothing dropped.
pub fn split_chunks(files: &[PathBuf], cap: NonZeroUsize) -> Vec<&[PathBuf]> {
    if files.is_empty() {
        return Vec::new();
    }

    let workers = cap.get().min(files.len());
    let chunk_size = files.len() / workers;

    let mut chunks = Vec::with_capacity(workers);
    for i in 0..workers {
        let start = i * chunk_size;
        let end = if i == workers - 1 {
            files.len()
        } else {
            start + chunk_size
        };
        chunks.push(&files[start..end]);
    }

    debug!(
        "split {} files into {} chunks of ~{} files",
        files.len(),
        workers,
        chunk_size
    );
    chunks
}
