use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use liftlog_core::storage::DEFAULT_NAMESPACE;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LiftlogConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory of the JSON store; the XDG data dir when unset
    pub path: Option<String>,
    pub namespace: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl LiftlogConfig {
    pub fn namespace(&self) -> &str {
        self.storage
            .namespace
            .as_deref()
            .map(str::trim)
            .filter(|namespace| !namespace.is_empty())
            .unwrap_or(DEFAULT_NAMESPACE)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

/// Config from `LIFTLOG_CONFIG` or the XDG path. A missing file yields the defaults.
pub fn load_config() -> anyhow::Result<LiftlogConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        return Ok(LiftlogConfig::default());
    }
    read_config(&path)
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("LIFTLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn read_config(path: &Path) -> anyhow::Result<LiftlogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("liftlog"));
        }
    }
    Ok(home_dir()?.join(".config").join("liftlog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("liftlog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("liftlog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LiftlogConfig = toml::from_str("").unwrap();
        assert!(config.storage.path.is_none());
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_full_config() {
        let config: LiftlogConfig = toml::from_str(
            r#"
            [storage]
            path = "/tmp/lifts"
            namespace = "gym"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/lifts"));
        assert_eq!(config.namespace(), "gym");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_blank_namespace_falls_back() {
        let config: LiftlogConfig = toml::from_str("[storage]\nnamespace = \" \"\n").unwrap();
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);
    }
}
