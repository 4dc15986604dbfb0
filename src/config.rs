//! Pipeline configuration.
//!
//! Hosts may tune the timing gates, history depth, and segmentation default
//! through a small YAML file; everything falls back to built-in defaults
//! when no file is found. Loading never fails — problems are collected as
//! warnings for the host to surface.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

/// Candidate config file names searched on disk.
const CONFIG_FILENAMES: &[&str] = &["engrave.yml", "engrave.yaml"];

/// Environment variable that overrides the config search path.
const CONFIG_ENV_VAR: &str = "ENGRAVE_CONFIG";

/// Tunable pipeline defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Quiet period before a parameter burst commits, in milliseconds
    pub commit_debounce_ms: u64,

    /// Delay before the loading indicator becomes visible, in milliseconds
    pub loading_delay_ms: u64,

    /// Number of undo snapshots retained
    pub history_capacity: usize,

    /// Default background-segmentation sensitivity
    pub background_sensitivity: u8,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            commit_debounce_ms: 100,
            loading_delay_ms: 500,
            history_capacity: 10,
            background_sensitivity: 30,
        }
    }
}

impl PrepConfig {
    pub fn commit_debounce(&self) -> Duration {
        Duration::from_millis(self.commit_debounce_ms)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    fn sanitize(mut self) -> Self {
        if self.history_capacity == 0 {
            self.history_capacity = 1;
        }
        self
    }
}

/// Loaded configuration plus its source path and any warnings.
pub struct PrepConfigHandle {
    pub config: PrepConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration from disk, optionally forcing a specific path.
pub fn load_prep_config(custom_path: Option<&Path>) -> PrepConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<PrepConfig>(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return PrepConfigHandle {
                        config: config.sanitize(),
                        source: Some(source),
                        warnings,
                    };
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config file found; using built-in defaults.".to_string());
    PrepConfigHandle {
        config: PrepConfig::default(),
        source: None,
        warnings,
    }
}

/// Config file candidates in priority order.
fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join(".engrave-prep").join(name));
        }
    }

    candidates
}

static CONFIG_HANDLE: OnceLock<PrepConfigHandle> = OnceLock::new();

/// Process-wide configuration, loaded once on first access.
pub fn prep_config() -> &'static PrepConfigHandle {
    CONFIG_HANDLE.get_or_init(|| {
        let handle = load_prep_config(None);
        for warning in &handle.warnings {
            log::debug!("config: {}", warning);
        }
        handle
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_policies() {
        let config = PrepConfig::default();
        assert_eq!(config.commit_debounce(), Duration::from_millis(100));
        assert_eq!(config.loading_delay(), Duration::from_millis(500));
        assert_eq!(config.history_capacity, 10);
    }

    #[test]
    fn test_partial_yaml_fills_remaining_defaults() {
        let config: PrepConfig =
            serde_yaml::from_str("commit_debounce_ms: 250").expect("partial config parses");
        assert_eq!(config.commit_debounce_ms, 250);
        assert_eq!(config.loading_delay_ms, 500, "unset fields keep defaults");
    }

    #[test]
    fn test_sanitize_rejects_zero_history() {
        let config = PrepConfig {
            history_capacity: 0,
            ..PrepConfig::default()
        }
        .sanitize();
        assert_eq!(config.history_capacity, 1);
    }

    #[test]
    fn test_missing_file_falls_back_with_warning() {
        let handle = load_prep_config(Some(Path::new("/nonexistent/engrave.yml")));
        assert!(handle.source.is_none());
        assert!(
            handle.warnings.iter().any(|w| w.contains("defaults")),
            "fallback must be reported as a warning"
        );
    }
}
