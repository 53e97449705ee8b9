//! Application configuration
//!
//! Configuration loaded from `.relai-deck.toml`. Every key is optional.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .relai-deck.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Event poll interval in milliseconds, also the length of one transition frame
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Number of frames the slide-in transition lasts (0 disables it)
    #[serde(default = "default_transition_frames")]
    pub transition_frames: u8,

    /// Slide shown at startup (0-based)
    #[serde(default)]
    pub start_slide: usize,

    /// Show the "Use arrow keys or click to navigate" pill above the controls
    #[serde(default = "default_true")]
    pub show_navigation_hint: bool,

    /// Capture the mouse so the on-screen controls are clickable
    #[serde(default = "default_true")]
    pub mouse: bool,
}

fn default_tick_rate_ms() -> u64 {
    40
}

fn default_transition_frames() -> u8 {
    6
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            transition_frames: default_transition_frames(),
            start_slide: 0,
            show_navigation_hint: true,
            mouse: true,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        if config.tick_rate_ms == 0 {
            log::warn!("tick_rate_ms must be positive, using {}", default_tick_rate_ms());
            config.tick_rate_ms = default_tick_rate_ms();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tick_rate_ms, 40);
        assert_eq!(config.transition_frames, 6);
        assert_eq!(config.start_slide, 0);
        assert!(config.show_navigation_hint);
        assert!(config.mouse);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            tick_rate_ms = 16
            transition_frames = 0
            start_slide = 5
            show_navigation_hint = false
            mouse = false
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(
            config,
            AppConfig {
                tick_rate_ms: 16,
                transition_frames: 0,
                start_slide: 5,
                show_navigation_hint: false,
                mouse: false,
            }
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            start_slide = 2
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.start_slide, 2);
        // Other fields should use defaults
        assert_eq!(config.tick_rate_ms, 40);
        assert!(config.mouse);
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_zero_tick_rate_falls_back() {
        let config = AppConfig::from_toml("tick_rate_ms = 0").unwrap();
        assert_eq!(config.tick_rate_ms, 40);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(AppConfig::from_toml("mouse = \"yes\"").is_err());
    }
}
