use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::content::SiteContent;
use crate::overlay::OverlayTimings;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vim_mode: bool,
    /// Show the loading splash at start
    pub splash: bool,
    pub overlay: OverlayTimings,
    pub site: SiteContent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            splash: true,
            overlay: OverlayTimings::default(),
            site: SiteContent::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.splash);
        assert_eq!(config.site.name, "ITSA SJCEM");
    }

    #[test]
    fn test_partial_overlay_timings() {
        let config =
            Config::from_yaml("vim_mode: true\noverlay:\n  toast_display_ms: 1500\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.overlay.toast_display_ms, 1500);
        assert_eq!(config.overlay.toast_settle_ms, OverlayTimings::default().toast_settle_ms);
    }

    #[test]
    fn test_site_override() {
        let yaml = "splash: false\nsite:\n  name: Robotics Club\n  stats: []\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert!(!config.splash);
        assert_eq!(config.site.name, "Robotics Club");
        assert!(config.site.stats.is_empty());
        assert!(!config.site.domains.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Config::from_yaml("vim_mode: [not, a, bool]").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/itsatui/config.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
