mod schema;

pub use schema::{Config, DEFAULT_PORT, DEFAULT_REPOSITORIES};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::github::RepoId;

/// Get the config directory path (~/.config/pr-report/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("pr-report"))
}

/// Get the default config file path (~/.config/pr-report/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/pr-report/config.yaml) and falls back to built-in defaults
///   when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

/// Validated settings the report is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub repositories: Vec<RepoId>,
    pub window_days: u32,
    pub port: u16,
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<ReportSettings, Vec<String>> {
    let mut errors = Vec::new();

    if config.repositories.is_empty() {
        errors.push("repositories: at least one repository is required".to_string());
    }

    let mut repositories = Vec::with_capacity(config.repositories.len());
    for (i, entry) in config.repositories.iter().enumerate() {
        match entry.parse::<RepoId>() {
            Ok(repo) => repositories.push(repo),
            Err(e) => errors.push(format!("repositories[{}]: {}", i, e)),
        }
    }

    if config.window_days == 0 {
        errors.push("window_days: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(ReportSettings {
            repositories,
            window_days: config.window_days,
            port: config.port,
        })
    } else {
        Err(errors)
    }
}
