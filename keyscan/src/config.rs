use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::{ScanError, ScanResult};

/// Configuration for one scan run.
///
/// Can be loaded from YAML config files in order of precedence:
/// 1. Custom config file passed via `--config`
/// 2. Local `.keyscan.yaml` in the current directory
/// 3. Global `$HOME/.config/keyscan/config.yaml`
///
/// Example:
/// ```yaml
/// # Files to scan
/// files:
///   - "file1.txt"
///   - "file2.txt"
///
/// # Keywords to look for (plain substrings, not patterns)
/// keywords:
///   - "security"
///   - "error"
///
/// # Upper bound on workers per driver (effective count is min(cap, files))
/// worker_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// CLI arguments take precedence over config file values; the merging
/// behavior is defined in the `merge_with_cli` method. The defaults
/// reproduce the fixed demo inputs, so running with no configuration at
/// all scans `file1.txt..file4.txt` for the four demo keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Keywords to search for, as plain substrings
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Files to scan, in the order that defines normalized output
    #[serde(default = "default_files")]
    pub files: Vec<PathBuf>,

    /// Upper bound on workers per driver; the effective count is
    /// `min(worker_count, files.len())`
    #[serde(default = "default_worker_count")]
    pub worker_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// CLI values layered on top of a loaded config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub files: Vec<PathBuf>,
    pub keywords: Vec<String>,
    pub worker_count: Option<NonZeroUsize>,
    pub log_level: Option<String>,
}

fn default_keywords() -> Vec<String> {
    ["security", "error", "cyber", "cucumber"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_files() -> Vec<PathBuf> {
    (1..=4)
        .map(|i| PathBuf::from(format!("file{}.txt", i)))
        .collect()
}

fn default_worker_count() -> NonZeroUsize {
    NonZeroUsize::new(4).unwrap()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            files: default_files(),
            worker_count: default_worker_count(),
            log_level: default_log_level(),
        }
    }
}

impl ScanConfig {
    /// Loads configuration from the default locations
    pub fn load() -> ScanResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from an explicit file
    pub fn load_from(config_path: Option<&Path>) -> ScanResult<Self> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ScanError::config_error(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
        }

        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("keyscan/config.yaml")),
            // Local config
            Some(PathBuf::from(".keyscan.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ScanError::config_error(e.to_string()))
    }

    /// Merges CLI arguments with configuration file values.
    /// CLI values take precedence over config file values.
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if !cli.files.is_empty() {
            self.files = cli.files;
        }
        if !cli.keywords.is_empty() {
            self.keywords = cli.keywords;
        }
        if let Some(worker_count) = cli.worker_count {
            self.worker_count = worker_count;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }

    /// Pre-check: every input file must exist before any scanning starts.
    /// Fails on the first missing file so the caller can abort the run.
    pub fn validate(&self) -> ScanResult<()> {
        for file in &self.files {
            if !file.exists() {
                return Err(ScanError::file_not_found(file));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_reproduce_demo_inputs() {
        let config = ScanConfig::default();
        assert_eq!(config.keywords, vec!["security", "error", "cyber", "cucumber"]);
        assert_eq!(
            config.files,
            vec![
                PathBuf::from("file1.txt"),
                PathBuf::from("file2.txt"),
                PathBuf::from("file3.txt"),
                PathBuf::from("file4.txt"),
            ]
        );
        assert_eq!(config.worker_count, NonZeroUsize::new(4).unwrap());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            keywords: ["alpha", "beta"]
            files: ["notes.txt"]
            worker_count: 2
            log_level: "debug"
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = ScanConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.keywords, vec!["alpha", "beta"]);
        assert_eq!(config.files, vec![PathBuf::from("notes.txt")]);
        assert_eq!(config.worker_count, NonZeroUsize::new(2).unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            keywords: ["alpha"]
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = ScanConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.keywords, vec!["alpha"]);
        assert_eq!(config.files, ScanConfig::default().files);
        assert_eq!(config.worker_count, NonZeroUsize::new(4).unwrap());
    }

    #[test]
    fn test_merge_with_cli() {
        let config = ScanConfig::default();
        let merged = config.merge_with_cli(CliOverrides {
            files: vec![PathBuf::from("other.txt")],
            keywords: vec![],
            worker_count: Some(NonZeroUsize::new(8).unwrap()),
            log_level: None,
        });

        assert_eq!(merged.files, vec![PathBuf::from("other.txt")]); // CLI value
        assert_eq!(merged.keywords, ScanConfig::default().keywords); // config value
        assert_eq!(merged.worker_count, NonZeroUsize::new(8).unwrap()); // CLI value
        assert_eq!(merged.log_level, "warn"); // config value
    }

    #[test]
    fn test_validate_passes_when_all_files_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("present.txt");
        std::fs::write(&path, "content").unwrap();

        let config = ScanConfig {
            files: vec![path],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_names_the_missing_file() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("present.txt");
        std::fs::write(&present, "content").unwrap();
        let missing = dir.path().join("missing.txt");

        let config = ScanConfig {
            files: vec![present, missing.clone()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScanError::FileNotFound(ref p) if *p == missing));
    }

    #[test]
    fn test_load_nonexistent_explicit_file() {
        let result = ScanConfig::load_from(Some(Path::new("nonexistent.yaml")));
        assert!(result.is_err());
    }
}
