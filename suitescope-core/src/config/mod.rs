//! Application settings and persistence
//!
//! Settings live in a TOML file under the user config directory. Loading
//! falls back to defaults when the file is absent or unreadable; saving
//! creates the directory on demand.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory name under the user config/data directories
pub const APP_DIR_NAME: &str = "suitescope";

/// Settings file name inside the config directory
const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Errors from loading or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the settings file failed
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML
    #[error("settings file is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be serialized
    #[error("settings could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Persisted application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// TCP port of the suite API endpoint
    pub api_port: u16,
    /// Whether to verify the server TLS certificate
    pub verify_tls: bool,
    /// Override for the completion-list path; `None` uses the default
    /// location in the user data directory
    pub completion_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_port: 443,
            verify_tls: true,
            completion_file: None,
        }
    }
}

impl Settings {
    /// The default settings directory under the user config dir.
    ///
    /// Falls back to the current directory when no config directory can
    /// be resolved.
    #[must_use]
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir().map_or_else(|| PathBuf::from("."), |d| d.join(APP_DIR_NAME))
    }

    /// Loads settings from `dir`, falling back to defaults when the file
    /// is absent. A malformed file is reported rather than silently
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or
    /// [`ConfigError::Io`] for read failures other than a missing file.
    pub fn load(dir: &Path) -> ConfigResult<Self> {
        let path = dir.join(SETTINGS_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Loads settings from `dir`, writing a default settings file when
    /// none exists yet so users have one to edit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, or
    /// [`ConfigError::Io`] when the file can be neither read nor created.
    pub fn load_or_create(dir: &Path) -> ConfigResult<Self> {
        match std::fs::read_to_string(dir.join(SETTINGS_FILE_NAME)) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                settings.save(dir)?;
                tracing::info!(dir = %dir.display(), "wrote default settings file");
                Ok(settings)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Saves settings to `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for write failures.
    pub fn save(&self, dir: &Path) -> ConfigResult<()> {
        std::fs::create_dir_all(dir)?;
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(dir.join(SETTINGS_FILE_NAME), contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_port, 443);
        assert!(settings.verify_tls);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            api_port: 8443,
            verify_tls: false,
            completion_file: Some(PathBuf::from("/tmp/hosts")),
        };
        settings.save(dir.path()).unwrap();
        assert_eq!(Settings::load(dir.path()).unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.toml"), "api_port = \"not a port\"").unwrap();
        assert!(matches!(
            Settings::load(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_or_create_writes_a_default_file_once() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_or_create(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(dir.path().join("settings.toml").exists());

        // Edits survive the next load_or_create
        let edited = Settings {
            api_port: 8443,
            ..Settings::default()
        };
        edited.save(dir.path()).unwrap();
        assert_eq!(Settings::load_or_create(dir.path()).unwrap(), edited);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.toml"), "api_port = 9443\n").unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.api_port, 9443);
        assert!(settings.verify_tls);
        assert!(settings.completion_file.is_none());
    }
}
