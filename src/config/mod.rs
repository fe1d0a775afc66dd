use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_lunch_window")]
    pub lunch_window: String,
    #[serde(default = "default_dinner_window")]
    pub dinner_window: String,
    #[serde(default = "default_true")]
    pub lunch_enabled: bool,
    #[serde(default = "default_true")]
    pub dinner_enabled: bool,
    #[serde(default = "default_studio")]
    pub default_studio: String,
    #[serde(default = "default_role")]
    pub default_role: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

/// Keys a complete configuration file is expected to contain.
pub const CONFIG_KEYS: &[&str] = &[
    "database",
    "lunch_window",
    "dinner_window",
    "lunch_enabled",
    "dinner_enabled",
    "default_studio",
    "default_role",
    "separator_char",
];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_lunch_window() -> String {
    "12:00-13:00".to_string()
}
fn default_dinner_window() -> String {
    "18:00-19:00".to_string()
}
fn default_true() -> bool {
    true
}
fn default_studio() -> String {
    "A".to_string()
}
fn default_role() -> String {
    "staff".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            lunch_window: default_lunch_window(),
            dinner_window: default_dinner_window(),
            lunch_enabled: true,
            dinner_enabled: true,
            default_studio: default_studio(),
            default_role: default_role(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("studiosched")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".studiosched")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studiosched.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("studiosched.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    /// Keys from [`CONFIG_KEYS`] that are absent from the YAML text.
    pub fn missing_keys(yaml: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_gets_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.lunch_window, "12:00-13:00");
        assert_eq!(cfg.dinner_window, "18:00-19:00");
        assert!(cfg.lunch_enabled && cfg.dinner_enabled);
        assert_eq!(cfg.default_role, "staff");
    }

    #[test]
    fn reports_missing_keys() {
        let missing = Config::missing_keys("database: x\nlunch_window: 12:00-13:00\n").unwrap();
        assert!(missing.contains(&"dinner_window"));
        assert!(!missing.contains(&"database"));
        assert!(!missing.contains(&"lunch_window"));
    }

    #[test]
    fn full_default_has_no_missing_keys() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(Config::missing_keys(&yaml).unwrap().is_empty());
    }

    #[test]
    fn file_without_database_uses_default_path() {
        let p = std::env::temp_dir().join("studiosched_no_database.conf");
        std::fs::write(&p, "lunch_window: 12:30-13:30\n").unwrap();

        let cfg = Config::load_from(&p).unwrap();
        assert_eq!(cfg.database, Config::database_file().to_string_lossy());
        assert_eq!(cfg.lunch_window, "12:30-13:30");

        let content = std::fs::read_to_string(&p).unwrap();
        assert!(Config::missing_keys(&content).unwrap().contains(&"database"));
        std::fs::remove_file(&p).ok();
    }

    #[test]
    fn missing_file_loads_defaults() {
        let p = std::env::temp_dir().join("studiosched_no_such_config.conf");
        std::fs::remove_file(&p).ok();
        let cfg = Config::load_from(&p).unwrap();
        assert_eq!(cfg.default_studio, "A");
    }
}
