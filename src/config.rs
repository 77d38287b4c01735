//! Host configuration.
//!
//! Read from `$XDG_CONFIG_HOME/numpad/config.toml` (or the platform
//! equivalent) unless a path is given explicitly. Every field is optional.

use crate::error::ConfigError;
use crate::keypad::KeypadOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number the keypad starts with.
    pub initial_value: Option<f64>,
    /// Decoration shown next to the display.
    pub icon: Option<String>,
    /// Group the display with thousand separators.
    pub digit_grouping: bool,
    /// Copy each committed value to the clipboard.
    pub copy_on_commit: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: None,
            icon: None,
            digit_grouping: true,
            copy_on_commit: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("numpad").join("config.toml"))
    }

    /// Load the config.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present, otherwise defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Keypad options described by this config.
    pub fn keypad_options(&self) -> KeypadOptions {
        KeypadOptions {
            initial_value: self.initial_value,
            icon: self.icon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("numpad_config_test_{name}_{suffix}"));
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("config.toml");
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.digit_grouping);
        assert!(!config.copy_on_commit);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.keypad_options(), KeypadOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial", "initial_value = 12.5\nicon = \"coins\"\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.initial_value, Some(12.5));
        assert_eq!(config.icon.as_deref(), Some("coins"));
        assert!(config.digit_grouping);
        assert_eq!(
            config.keypad_options(),
            KeypadOptions::default()
                .with_initial_value(12.5)
                .with_icon("coins")
        );
        fs::remove_dir_all(path.parent().unwrap()).expect("cleanup");
    }

    #[test]
    fn test_full_file() {
        let path = temp_file(
            "full",
            "digit_grouping = false\ncopy_on_commit = true\nlog_level = \"debug\"\n",
        );
        let config = Config::from_file(&path).unwrap();
        assert!(!config.digit_grouping);
        assert!(config.copy_on_commit);
        assert_eq!(config.log_level, "debug");
        fs::remove_dir_all(path.parent().unwrap()).expect("cleanup");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join("numpad_config_test_missing/none.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let path = temp_file("invalid", "digit_grouping = \"yes\"\n");
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
        fs::remove_dir_all(path.parent().unwrap()).expect("cleanup");
    }
}
