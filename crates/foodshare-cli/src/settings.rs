//! User settings, read from a TOML file.
//!
//! Looked up at `--config` when given, otherwise in the platform config
//! folder:
//! - Linux: ~/.config/foodshare/settings.toml
//! - macOS: ~/Library/Application Support/cl.foodshare.Foodshare/settings.toml
//! - Windows: %APPDATA%/foodshare/Foodshare/config/settings.toml

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use foodshare_client::DEFAULT_TIMEOUT;
use foodshare_display::{DEFAULT_LATEST_COUNT, DEFAULT_PER_PAGE, MapConfig, Paginator};
use foodshare_form::FormConfig;
use foodshare_match::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "cl";
const APP_ORG: &str = "foodshare";
const APP_NAME: &str = "Foodshare";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub form: FormSettings,
    pub display: DisplaySettings,
}

/// Backend location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    pub debounce_ms: u64,
    pub default_duration_hours: i64,
    /// Score above which two comuna names are taken as the same.
    pub similarity_threshold: f64,
}

impl Default for FormSettings {
    fn default() -> Self {
        let form = FormConfig::default();
        Self {
            debounce_ms: form.debounce_ms,
            default_duration_hours: form.default_duration_hours,
            similarity_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FormSettings {
    pub fn form_config(&self) -> FormConfig {
        FormConfig {
            debounce_ms: self.debounce_ms,
            default_duration_hours: self.default_duration_hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub per_page: u64,
    pub latest_count: u64,
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let map = MapConfig::default();
        Self {
            per_page: DEFAULT_PER_PAGE,
            latest_count: DEFAULT_LATEST_COUNT,
            center_lat: map.center_lat,
            center_lng: map.center_lng,
            zoom: map.zoom,
        }
    }
}

impl Settings {
    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.display.per_page)
    }

    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            center_lat: self.display.center_lat,
            center_lng: self.display.center_lng,
            zoom: self.display.zoom,
            threshold: self.form.similarity_threshold,
        }
    }
}

/// Default location of the settings file.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`settings_path`] when `None`.
///
/// Falls back to defaults when the file is missing or cannot be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                tracing::warn!("could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let settings = Settings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[api]\nbase_url = \"https://comida.example.cl\"\n\n[display]\nper_page = 10\n").unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.api.base_url, "https://comida.example.cl");
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.paginator().per_page(), 10);
        assert_eq!(settings.form.form_config(), FormConfig::default());
    }

    #[test]
    fn unparsable_or_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "api = [").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
        assert_eq!(
            load_settings(Some(&dir.path().join("absent.toml"))),
            Settings::default()
        );
    }
}
