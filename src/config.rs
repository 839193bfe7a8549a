use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `api.api_key`
pub const API_KEY_ENV: &str = "OMDB_API_KEY";
/// Environment variable pointing at an alternate config file
pub const CONFIG_PATH_ENV: &str = "MOVIE_EXPLORER_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub window: WindowConfig,
}

/// Movie metadata endpoint settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint queried with `?apikey=...&t=...`
    pub base_url: String,
    /// Access credential. Empty means "not configured".
    pub api_key: String,
    /// Request timeout in seconds. None = HTTP client default.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 760.0,
        }
    }
}

impl Config {
    /// Apply environment overrides on top of the file values.
    fn apply_env(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            tracing::info!("Using API key from ${}", API_KEY_ENV);
            self.api.api_key = key.trim().to_string();
        }
        self
    }
}

pub fn load_from(path: &Path) -> Config {
    load_path(path).apply_env(std::env::var(API_KEY_ENV).ok())
}

pub fn load() -> Config {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => load_from(Path::new(&path)),
        None => match config_path() {
            Some(path) => load_from(&path),
            None => {
                tracing::warn!("Could not determine home directory, using defaults");
                Config::default().apply_env(std::env::var(API_KEY_ENV).ok())
            }
        },
    }
}

fn load_path(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ (XDG convention) on every platform
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("movie-explorer")
            .join("config.toml")
    })
}
