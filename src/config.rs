//! Configuration loader/writer plus strongly typed settings structures.
//!
//! Deserializes config.toml, exposes the `~/.bababoi-home` directory
//! helpers, and writes the embedded defaults out on first run so users
//! have a commented file to edit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// Embed the default configuration file at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object for the whole application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub fade: FadeConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub music: MusicConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Starting theme name ("dark" or "light")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingConfig {
    /// Milliseconds per typed character; 0 shows the tagline immediately
    #[serde(default = "default_typing_interval")]
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FadeConfig {
    /// Rows between the viewport bottom and the reveal boundary
    #[serde(default = "default_fade_margin")]
    pub margin_rows: u16,
    /// Duration of the fade-in brightness ramp
    #[serde(default = "default_fade_ramp")]
    pub ramp_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Rough duration of the smooth-scroll animation
    #[serde(default = "default_scroll_animation")]
    pub animation_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicConfig {
    /// Disables audio entirely when false (also set by --no-music)
    #[serde(default = "default_music_enabled")]
    pub enabled: bool,
    #[serde(default = "default_music_start")]
    pub start_playing: bool,
    #[serde(default = "default_music_volume")]
    pub volume: f32,
    /// Track name resolved inside the music directory
    #[serde(default = "default_music_track")]
    pub track: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    /// Optional page content file replacing the embedded default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_typing_interval() -> u64 {
    50
}

fn default_fade_margin() -> u16 {
    2
}

fn default_fade_ramp() -> u64 {
    300
}

fn default_scroll_animation() -> u64 {
    400
}

fn default_music_enabled() -> bool {
    true
}

fn default_music_start() -> bool {
    true
}

fn default_music_volume() -> f32 {
    0.4
}

fn default_music_track() -> String {
    "background".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_typing_interval(),
        }
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            margin_rows: default_fade_margin(),
            ramp_ms: default_fade_ramp(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            animation_ms: default_scroll_animation(),
        }
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            enabled: default_music_enabled(),
            start_playing: default_music_start(),
            volume: default_music_volume(),
            track: default_music_track(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// On first run the embedded default file is written out so the user
    /// has a commented config.toml to edit. A failure to write is only a
    /// warning; the defaults still apply for this session.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {:?}", config_path))?;
            toml::from_str(&contents).with_context(|| format!("Failed to parse {:?}", config_path))
        } else {
            if let Err(e) = Self::write_default(&config_path) {
                tracing::warn!("Could not write default config to {:?}: {}", config_path, e);
            }
            toml::from_str(DEFAULT_CONFIG).context("Failed to parse embedded default config")
        }
    }

    /// Load configuration from an explicit path (must exist)
    pub fn load_from_path(path: &std::path::Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {:?}", path))
    }

    fn write_default(config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, DEFAULT_CONFIG)?;
        tracing::debug!("Wrote default config to {:?}", config_path);
        Ok(())
    }

    /// Get the base data directory (~/.bababoi-home)
    /// Can be overridden with the BABABOI_HOME_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("BABABOI_HOME_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".bababoi-home"))
    }

    /// Path to config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// The shared music directory (~/.bababoi-home/music)
    pub fn music_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("music"))
    }

    /// Page content path: CLI override first, then config, then the
    /// embedded default (None)
    pub fn page_path(&self, cli_override: Option<&std::path::Path>) -> Option<PathBuf> {
        cli_override
            .map(PathBuf::from)
            .or_else(|| self.page.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.general.theme, "dark");
        assert_eq!(config.typing.interval_ms, 50);
        assert_eq!(config.fade.margin_rows, 2);
        assert_eq!(config.scroll.animation_ms, 400);
        assert!(config.music.enabled);
        assert!(config.music.start_playing);
        assert_eq!(config.music.track, "background");
        assert!(config.page.path.is_none());
    }

    #[test]
    fn test_embedded_default_matches_struct_defaults() {
        let from_file: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let from_code = Config::default();
        assert_eq!(from_file.general.theme, from_code.general.theme);
        assert_eq!(from_file.typing.interval_ms, from_code.typing.interval_ms);
        assert_eq!(from_file.fade.margin_rows, from_code.fade.margin_rows);
        assert_eq!(from_file.fade.ramp_ms, from_code.fade.ramp_ms);
        assert_eq!(
            from_file.scroll.animation_ms,
            from_code.scroll.animation_ms
        );
        assert_eq!(from_file.music.volume, from_code.music.volume);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.general.theme, "dark");
        assert_eq!(config.typing.interval_ms, 50);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [general]
            theme = "light"

            [music]
            start_playing = false
            "#,
        )
        .unwrap();
        assert_eq!(config.general.theme, "light");
        assert!(!config.music.start_playing);
        assert_eq!(config.typing.interval_ms, 50);
        assert_eq!(config.music.track, "background");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.general.theme = "light".to_string();
        config.page.path = Some(PathBuf::from("/tmp/page.toml"));

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.general.theme, "light");
        assert_eq!(parsed.page.path, Some(PathBuf::from("/tmp/page.toml")));
    }

    #[test]
    fn test_page_path_precedence() {
        let mut config = Config::default();
        config.page.path = Some(PathBuf::from("/from/config.toml"));

        let cli = PathBuf::from("/from/cli.toml");
        assert_eq!(config.page_path(Some(&cli)), Some(cli.clone()));
        assert_eq!(
            config.page_path(None),
            Some(PathBuf::from("/from/config.toml"))
        );

        config.page.path = None;
        assert_eq!(config.page_path(None), None);
    }
}
