use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "cpb-logbook";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogbookConfig {
    /// Interface the server binds to
    pub host: String,
    pub port: u16,
    /// Directory the scripts and `assets/CPB.png` are read from
    pub asset_root: PathBuf,
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            asset_root: PathBuf::from("logbook"),
        }
    }
}

impl LogbookConfig {
    /// Load configuration from the user's config directory, then apply
    /// `LOGBOOK_HOST`, `LOGBOOK_PORT` and `LOGBOOK_ASSET_DIR`.
    pub fn load() -> Self {
        Self::load_file().with_env()
    }

    /// Load only what is stored in the config file, without environment
    /// overrides. Falls back to defaults if the file doesn't exist or fails
    /// to parse.
    pub fn load_file() -> Self {
        match get_config_path().and_then(|p| Self::try_load(&p)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save the current configuration to the user's config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = var("LOGBOOK_HOST") {
            self.host = host;
        }
        if let Some(port) = var("LOGBOOK_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid LOGBOOK_PORT: {}", port),
            }
        }
        if let Some(dir) = var("LOGBOOK_ASSET_DIR") {
            self.asset_root = PathBuf::from(dir);
        }
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogbookConfig::try_load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, LogbookConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "port": 9000 }"#).unwrap();

        let config = LogbookConfig::try_load(&path).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.asset_root, PathBuf::from("logbook"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "port = 9000").unwrap();

        assert!(LogbookConfig::try_load(&path).is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let config = LogbookConfig::default().with_overrides(|key| match key {
            "LOGBOOK_PORT" => Some("8600".to_string()),
            "LOGBOOK_ASSET_DIR" => Some("/srv/logbook".to_string()),
            _ => None,
        });

        assert_eq!(config.port, 8600);
        assert_eq!(config.asset_root, PathBuf::from("/srv/logbook"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8600");
    }

    #[test]
    fn saving_stored_config_leaves_env_overrides_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cpb-logbook").join("config.json");
        LogbookConfig {
            port: 9000,
            ..LogbookConfig::default()
        }
        .save_to(&path)
        .unwrap();

        let stored = LogbookConfig::try_load(&path).unwrap();
        let effective = stored
            .clone()
            .with_overrides(|key| (key == "LOGBOOK_PORT").then(|| "8600".to_string()));
        stored.save_to(&path).unwrap();

        assert_eq!(effective.port, 8600);
        assert_eq!(LogbookConfig::try_load(&path).unwrap().port, 9000);
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let config = LogbookConfig::default()
            .with_overrides(|key| (key == "LOGBOOK_PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 8501);
    }
}
