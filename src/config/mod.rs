//! Configuration management for `ticketdesk`.
//!
//! Layers, lowest precedence first:
//! - Built-in defaults
//! - Workspace config (.tickets/config.yaml)
//! - Environment variables (`TD_DATA_FILE`, `TD_DEFAULT_TYPE`, `TD_JSON`)
//!
//! CLI flags are applied on top by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use ticket_lib::TicketType;

/// Workspace directory holding the data and config files.
pub const WORKSPACE_DIR: &str = ".tickets";
/// Config file name inside [`WORKSPACE_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";
/// Data file name inside [`WORKSPACE_DIR`].
pub const DATA_FILE: &str = "tickets.jsonl";

pub const ENV_DATA_FILE: &str = "TD_DATA_FILE";
pub const ENV_DEFAULT_TYPE: &str = "TD_DEFAULT_TYPE";
pub const ENV_JSON: &str = "TD_JSON";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// On-disk config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub data_file: Option<PathBuf>,
    pub default_type: Option<String>,
    pub json: Option<bool>,
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSONL file backing the ticket store.
    pub data_file: PathBuf,
    /// Type used by `td create` when `--type` is omitted.
    pub default_type: TicketType,
    /// Emit JSON instead of text.
    pub json: bool,
}

impl Config {
    /// Defaults rooted at `root`.
    #[must_use]
    pub fn defaults(root: &Path) -> Self {
        Self {
            data_file: root.join(WORKSPACE_DIR).join(DATA_FILE),
            default_type: TicketType::Task,
            json: false,
        }
    }

    /// Load the effective configuration for the workspace at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if any value is invalid.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let file = read_file_config(&root.join(WORKSPACE_DIR).join(CONFIG_FILE))?;
        Self::resolve(root, file, |key| std::env::var(key).ok())
    }

    /// Merge defaults, an optional file config, and environment lookups.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` if a type is blank or a boolean cannot be parsed.
    pub fn resolve<F>(root: &Path, file: Option<FileConfig>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::defaults(root);

        if let Some(file) = file {
            if let Some(path) = file.data_file {
                config.data_file = resolve_path(root, path);
            }
            if let Some(ty) = file.default_type {
                config.default_type = parse_type("default_type", &ty)?;
            }
            if let Some(json) = file.json {
                config.json = json;
            }
        }

        if let Some(path) = env(ENV_DATA_FILE).filter(|v| !v.trim().is_empty()) {
            config.data_file = resolve_path(root, PathBuf::from(path));
        }
        if let Some(ty) = env(ENV_DEFAULT_TYPE) {
            config.default_type = parse_type(ENV_DEFAULT_TYPE, &ty)?;
        }
        if let Some(json) = env(ENV_JSON) {
            config.json = parse_bool(ENV_JSON, &json)?;
        }

        Ok(config)
    }
}

/// Read the config file, if present.
///
/// # Errors
///
/// Returns `Read` or `Parse` if the file exists but is unusable.
pub fn read_file_config(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // An all-comment file (as written by `td init`) is an empty document.
    let has_content = content.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Ok(Some(FileConfig::default()));
    }
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Anchor a relative `path` at `root` and simplify it.
pub(crate) fn resolve_path(root: &Path, path: PathBuf) -> PathBuf {
    let path = if path.is_absolute() {
        path
    } else {
        root.join(path)
    };
    dunce::simplified(&path).to_path_buf()
}

fn parse_type(key: &str, value: &str) -> Result<TicketType, ConfigError> {
    value.parse().map_err(|e: ticket_lib::TicketError| ConfigError::Invalid {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            key: key.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let root = Path::new("/work");
        let config = Config::resolve(root, None, env_from(&[])).unwrap();
        assert_eq!(config.data_file, root.join(".tickets").join("tickets.jsonl"));
        assert_eq!(config.default_type, TicketType::Task);
        assert!(!config.json);
    }

    #[test]
    fn test_file_layer() {
        let root = Path::new("/work");
        let file = FileConfig {
            data_file: Some(PathBuf::from("data/t.jsonl")),
            default_type: Some("bug".to_string()),
            json: Some(true),
        };
        let config = Config::resolve(root, Some(file), env_from(&[])).unwrap();
        assert_eq!(config.data_file, root.join("data/t.jsonl"));
        assert_eq!(config.default_type, TicketType::Bug);
        assert!(config.json);
    }

    #[test]
    fn test_env_overrides_file() {
        let root = Path::new("/work");
        let file = FileConfig {
            default_type: Some("bug".to_string()),
            json: Some(true),
            ..Default::default()
        };
        let env = env_from(&[
            (ENV_DEFAULT_TYPE, "feature"),
            (ENV_JSON, "0"),
            (ENV_DATA_FILE, "/abs/tickets.jsonl"),
        ]);
        let config = Config::resolve(root, Some(file), env).unwrap();
        assert_eq!(config.default_type, TicketType::Feature);
        assert!(!config.json);
        assert_eq!(config.data_file, PathBuf::from("/abs/tickets.jsonl"));
    }

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/work");
        assert_eq!(
            resolve_path(root, PathBuf::from("custom/t.jsonl")),
            PathBuf::from("/work/custom/t.jsonl")
        );
        assert_eq!(
            resolve_path(root, PathBuf::from("/abs/t.jsonl")),
            PathBuf::from("/abs/t.jsonl")
        );
    }

    #[test]
    fn test_invalid_env_values() {
        let root = Path::new("/work");
        let err = Config::resolve(root, None, env_from(&[(ENV_JSON, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let err = Config::resolve(root, None, env_from(&[(ENV_DEFAULT_TYPE, " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_read_file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        assert!(read_file_config(&path).unwrap().is_none());

        fs::write(&path, "default_type: improvement\njson: true\n").unwrap();
        let file = read_file_config(&path).unwrap().unwrap();
        assert_eq!(file.default_type.as_deref(), Some("improvement"));
        assert_eq!(file.json, Some(true));

        fs::write(&path, "").unwrap();
        assert!(read_file_config(&path).unwrap().unwrap().json.is_none());

        fs::write(&path, "# data_file: x.jsonl\n# json: false\n").unwrap();
        assert!(read_file_config(&path).unwrap().unwrap().data_file.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "colour: blue\n").unwrap();
        assert!(matches!(
            read_file_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
