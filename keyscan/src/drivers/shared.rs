use rayon::prelude::*;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

use crate::chunk::split_chunks;
use crate::config::ScanConfig;
use crate::errors::{ScanError, ScanResult};
use crate::results::KeywordIndex;
use crate::scanner::scan_file;

/// Runs the scan with shared-memory workers.
///
/// Builds a thread pool sized to the chunk count and hands each worker one
/// chunk. A worker scans its files sequentially into a private index, then
/// merges that index into the shared one under the mutex. Scanning itself
/// is unsynchronized because chunks never overlap; the lock is held only
/// for the merge. Blocks until every worker has merged.
pub fn scan_shared(config: &ScanConfig) -> ScanResult<KeywordIndex> {
    let chunks = split_chunks(&config.files, config.worker_count);
    info!(
        "shared-memory scan: {} files across {} workers",
        config.files.len(),
        chunks.len()
    );

    let shared = Mutex::new(KeywordIndex::new(&config.keywords));
    if chunks.is_empty() {
        return Ok(shared.into_inner().unwrap_or_else(PoisonError::into_inner));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(chunks.len())
        .build()
        .map_err(|e| ScanError::thread_pool_error(e.to_string()))?;

    pool.install(|| {
        chunks.par_iter().for_each(|chunk| {
            let mut local = KeywordIndex::new(&config.keywords);
            for file in *chunk {
                local.merge(scan_file(file, &config.keywords));
            }
            debug!(
                "worker merging {} hits from a chunk of {} files",
                local.total_hits(),
                chunk.len()
            );
            let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
            guard.merge(local);
        });
    });

    Ok(shared.into_inner().unwrap_or_else(PoisonError::into_inner))
}
