use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// How preview image URLs appear in article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    /// Print preview URLs.
    Show,
    /// Mask the URLs but keep the count visible.
    Blur,
    /// Drop the column entirely.
    Hide,
}

impl ImageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMode::Show => "show",
            ImageMode::Blur => "blur",
            ImageMode::Hide => "hide",
        }
    }
}

/// Persisted console settings. Unset fields fall back to defaults so old
/// files keep loading as new fields appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the aggregation server.
    pub server_url: String,
    /// Key sent as `X-API-Key`; filled in by `login` or by hand.
    pub api_key: String,
    pub theme: String,
    pub image_mode: ImageMode,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER.to_string(),
            api_key: String::new(),
            theme: "dark".to_string(),
            image_mode: ImageMode::Show,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no platform config directory available")]
    NoConfigDir,
    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("settings file {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("cannot encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("cannot write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-user settings location, e.g. `~/.config/magpie/console.toml` on Linux.
pub fn default_path() -> Result<PathBuf, SettingsError> {
    ProjectDirs::from("", "", "magpie")
        .map(|dirs| dirs.config_dir().join("console.toml"))
        .ok_or(SettingsError::NoConfigDir)
}

/// Load settings from `path`, treating a missing file as defaults.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(err) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };
    toml::from_str(&raw).map_err(|err| SettingsError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let encoded = toml::to_string_pretty(settings)?;
    let write_err = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, encoded).map_err(write_err)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = std::env::temp_dir().join("magpie-settings-missing");
        let loaded = load(&dir.join("nope.toml")).unwrap();
        assert_eq!(loaded, Settings::default());
        assert_eq!(loaded.server_url, DEFAULT_SERVER);
        assert_eq!(loaded.theme, "dark");
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let settings: Settings = toml::from_str(r#"server_url = "http://magpie.lan:9000""#).unwrap();
        assert_eq!(settings.server_url, "http://magpie.lan:9000");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.image_mode, ImageMode::Show);
    }

    #[test]
    fn image_mode_uses_lowercase_names() {
        let settings: Settings = toml::from_str(r#"image_mode = "blur""#).unwrap();
        assert_eq!(settings.image_mode, ImageMode::Blur);
        assert!(toml::from_str::<Settings>(r#"image_mode = "Blur""#).is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = std::env::temp_dir()
            .join("magpie-settings-test")
            .join("console.toml");
        let settings = Settings {
            api_key: "k-123".into(),
            theme: "light".into(),
            ..Settings::default()
        };
        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
        let _ = std::fs::remove_file(&path);
    }
}
