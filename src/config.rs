//! Configuration file handling
//!
//! Settings live in `<config_dir>/config.toml`. A missing file means
//! defaults; a missing section or key falls back to its default too.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::browse::{DEFAULT_OVERLAY_OFFSET, DEFAULT_PAGE_SIZE};

/// Environment variable that overrides `api.api_key`
pub const API_KEY_ENV: &str = "MARQUEE_API_KEY";

/// Listing API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: None,
            language: "en-US".to_string(),
            region: None,
        }
    }
}

impl ApiConfig {
    /// API key from the environment, falling back to the file
    pub fn resolved_api_key(&self) -> Option<String> {
        pick_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }
}

/// A blank value counts as unset, so an empty variable never hides the file key
fn pick_api_key(env: Option<String>, file: Option<&str>) -> Option<String> {
    env.filter(|k| !k.trim().is_empty())
        .or_else(|| file.map(str::to_string))
        .filter(|k| !k.trim().is_empty())
}

/// Row paging and overlay settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    pub page_size: usize,
    /// Rows between the scroll position and the overlay top
    pub overlay_offset: u16,
    pub transition_ms: u64,
    /// Force-reopen a stuck transition gate after this long (0 disables)
    pub gate_timeout_ms: u64,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            overlay_offset: DEFAULT_OVERLAY_OFFSET,
            transition_ms: 1000,
            gate_timeout_ms: 3000,
        }
    }
}

impl BrowseConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn gate_timeout(&self) -> Option<Duration> {
        (self.gate_timeout_ms > 0).then(|| Duration::from_millis(self.gate_timeout_ms))
    }
}

/// Listing cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_minutes: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_minutes: 60 }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.ttl_minutes.max(0))
    }
}

/// Built-in color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TuiTheme {
    #[default]
    Cinema,
    Noir,
    Matinee,
}

impl std::fmt::Display for TuiTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TuiTheme::Cinema => "cinema",
            TuiTheme::Noir => "noir",
            TuiTheme::Matinee => "matinee",
        };
        f.write_str(name)
    }
}

/// TUI settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub theme: TuiTheme,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub api: ApiConfig,
    pub browse: BrowseConfig,
    pub cache: CacheConfig,
    pub tui: TuiConfig,
}

impl MarqueeConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "marquee").context("Could not determine home directory")
    }

    /// Configuration directory
    pub fn config_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().to_path_buf())
    }

    /// Data directory (database, log file)
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    /// Path of the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Check if a configuration file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load from the default location, defaults when the file is missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Failed to encode config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Reject values the browser cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.browse.page_size == 0 {
            bail!("browse.page_size must be at least 1");
        }
        if self.browse.gate_timeout_ms > 0 && self.browse.gate_timeout_ms <= self.browse.transition_ms {
            bail!(
                "browse.gate_timeout_ms ({}) must exceed browse.transition_ms ({}) or be 0",
                self.browse.gate_timeout_ms,
                self.browse.transition_ms
            );
        }
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MarqueeConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, MarqueeConfig::default());
        assert_eq!(config.browse.page_size, 6);
        assert_eq!(config.tui.theme, TuiTheme::Cinema);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browse]\npage_size = 4\n\n[tui]\ntheme = \"noir\"\n").unwrap();

        let config = MarqueeConfig::load_from(&path).unwrap();
        assert_eq!(config.browse.page_size, 4);
        assert_eq!(config.browse.transition_ms, 1000);
        assert_eq!(config.tui.theme, TuiTheme::Noir);
        assert_eq!(config.api.language, "en-US");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = MarqueeConfig::default();
        config.api.region = Some("KR".to_string());
        config.cache.ttl_minutes = 5;
        config.save_to(&path).unwrap();

        assert_eq!(MarqueeConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browse]\npage_size = 0\n").unwrap();
        assert!(MarqueeConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_gate_timeout_zero_disables() {
        let browse = BrowseConfig {
            gate_timeout_ms: 0,
            ..BrowseConfig::default()
        };
        assert!(browse.gate_timeout().is_none());
        assert_eq!(
            BrowseConfig::default().gate_timeout(),
            Some(Duration::from_millis(3000))
        );
    }

    #[test]
    fn test_gate_timeout_must_outlast_slide() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[browse]\ntransition_ms = 5000\n").unwrap();
        assert!(MarqueeConfig::load_from(&path).is_err());

        std::fs::write(&path, "[browse]\ntransition_ms = 3000\ngate_timeout_ms = 3000\n").unwrap();
        assert!(MarqueeConfig::load_from(&path).is_err());

        std::fs::write(&path, "[browse]\ntransition_ms = 5000\ngate_timeout_ms = 0\n").unwrap();
        assert!(MarqueeConfig::load_from(&path).is_ok());

        std::fs::write(&path, "[browse]\ntransition_ms = 5000\ngate_timeout_ms = 8000\n").unwrap();
        assert!(MarqueeConfig::load_from(&path).is_ok());
    }

    #[test]
    fn test_blank_env_key_falls_back_to_file() {
        assert_eq!(pick_api_key(Some(String::new()), Some("abc")), Some("abc".to_string()));
        assert_eq!(pick_api_key(Some("  ".to_string()), Some("abc")), Some("abc".to_string()));
        assert_eq!(pick_api_key(Some("env".to_string()), Some("abc")), Some("env".to_string()));
        assert_eq!(pick_api_key(None, Some("")), None);
        assert_eq!(pick_api_key(None, None), None);
    }
}
