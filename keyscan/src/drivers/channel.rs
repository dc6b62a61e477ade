use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info};

use crate::chunk::split_chunks;
use crate::config::ScanConfig;
use crate::errors::{ScanError, ScanResult};
use crate::results::KeywordIndex;
use crate::scanner::scan_file;

/// Runs the scan with isolated message-passing workers.
///
/// Each worker owns its chunk and keyword list outright and shares no
/// state with anyone. Its terminal action is sending the finished local
/// index through the channel. The driver joins every worker first, then
/// drains the channel and merges each received index in arrival order, so
/// no locking happens anywhere.
pub fn scan_channel(config: &ScanConfig) -> ScanResult<KeywordIndex> {
    let chunks = split_chunks(&config.files, config.worker_count);
    info!(
        "message-passing scan: {} files across {} workers",
        config.files.len(),
        chunks.len()
    );

    let mut merged = KeywordIndex::new(&config.keywords);
    if chunks.is_empty() {
        return Ok(merged);
    }

    let (sender, receiver) = mpsc::channel();
    let mut workers = Vec::with_capacity(chunks.len());

    for chunk in &chunks {
        let sender = sender.clone();
        let keywords = config.keywords.clone();
        let chunk: Vec<PathBuf> = chunk.to_vec();
        workers.push(thread::spawn(move || {
            let mut local = KeywordIndex::new(&keywords);
            for file in &chunk {
                local.merge(scan_file(file, &keywords));
            }
            // The receiver outlives every worker, so this send cannot fail
            let _ = sender.send(local);
        }));
    }
    // Workers hold the remaining senders; the channel closes when the last
    // one finishes.
    drop(sender);

    for worker in workers {
        worker
            .join()
            .map_err(|_| ScanError::worker_panic("scan worker panicked"))?;
    }

    for local in receiver {
        debug!("merging {} hits received from a worker", local.total_hits());
        merged.merge(local);
    }
    Ok(merged)
}
