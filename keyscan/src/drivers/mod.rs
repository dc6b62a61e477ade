/// This module implements the two parallel drivers that run the same
/// per-file keyword scan under different concurrency models, so the two
/// strategies can be timed against each other on identical inputs.
///
/// # Shared-Memory vs Message-Passing
///
/// Both drivers split the file list into contiguous chunks, give each
/// worker one chunk, and block until every worker has finished. They differ
/// only in how a worker's local result reaches the final index.
///
/// The shared-memory driver keeps one canonical index behind a mutex.
/// Workers scan without any synchronization (chunks are disjoint) and take
/// the lock only for their single merge:
/// ```rust,ignore
/// let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
/// guard.merge(local);
/// ```
///
/// The message-passing driver shares nothing. Each worker owns its chunk
/// outright, and its terminal action is sending the finished local index
/// through a channel; the driver merges entirely on its own side:
/// ```rust,ignore
/// sender.send(local); // worker
/// for local in receiver {
///     merged.merge(local); // driver, after all joins
/// }
/// ```
///
/// # Ordering
///
/// Within one worker, files are scanned in chunk order. Across workers,
/// merge order follows completion order, so per-keyword file lists can
/// differ between runs and between drivers. The file *set* per keyword is
/// always the same; callers that need reproducible output apply
/// [`KeywordIndex::normalize`](crate::results::KeywordIndex::normalize).
///
/// # Worker failure
///
/// The per-file scanner absorbs read and decode errors, so workers do not
/// fail on bad input files. A worker that panics anyway is fatal to the
/// whole run: the shared-memory driver propagates the panic out of the
/// pool, and the message-passing driver turns a failed join into
/// [`ScanError::WorkerPanic`](crate::errors::ScanError::WorkerPanic).
pub mod channel;
pub mod shared;

pub use channel::scan_channel;
pub use shared::scan_shared;
