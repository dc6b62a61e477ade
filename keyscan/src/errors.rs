use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while configuring or running a scan
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Invalid UTF-8 in file {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Worker pool error: {0}")]
    ThreadPoolError(String),
    #[error("Worker failed: {0}")]
    WorkerPanic(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ScanError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn thread_pool_error(msg: impl Into<String>) -> Self {
        Self::ThreadPoolError(msg.into())
    }

    pub fn worker_panic(msg: impl Into<String>) -> Self {
        Self::WorkerPanic(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let path = Path::new("file1.txt");
        let err = ScanError::file_not_found(path);
        assert!(matches!(err, ScanError::FileNotFound(_)));

        let err = ScanError::permission_denied(path);
        assert!(matches!(err, ScanError::PermissionDenied(_)));

        let err = ScanError::config_error("missing keyword list");
        assert!(matches!(err, ScanError::ConfigError(_)));

        let err = ScanError::worker_panic("scan worker panicked");
        assert!(matches!(err, ScanError::WorkerPanic(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = ScanError::file_not_found("file1.txt");
        assert_eq!(err.to_string(), "File not found: file1.txt");

        let err = ScanError::config_error("worker count must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: worker count must be positive"
        );

        let err = ScanError::worker_panic("scan worker panicked");
        assert_eq!(err.to_string(), "Worker failed: scan worker panicked");
    }

    #[test]
    fn test_encoding_error_names_file() {
        let bad = String::from_utf8(vec![0x66, 0x6f, 0xff]).unwrap_err();
        let err = ScanError::encoding_error("data.bin", bad);
        assert!(err.to_string().contains("data.bin"));
    }
}
