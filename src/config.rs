// User configuration loaded from ~/.config/marquee/config.toml.
// Falls back to sensible defaults when the file is missing.

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration, deserialized from `~/.config/marquee/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Target TUI refresh rate in frames per second (default: 30).
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// TMDB API key. When unset, the `TMDB_API_KEY` environment variable is
    /// consulted instead; the key is never baked into the binary.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Seconds between automatic hero slide rotations (default: 6).
    #[serde(default = "default_hero_interval")]
    pub hero_interval_secs: u64,
}

fn default_frame_rate() -> f64 {
    30.0
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_hero_interval() -> u64 {
    6
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            hero_interval_secs: default_hero_interval(),
        }
    }
}

impl Config {
    /// Read config from disk, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marquee")
            .join("config.toml")
    }

    /// The API credential, from config or the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api
            .api_key
            .clone()
            .or_else(|| std::env::var("TMDB_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }
}
