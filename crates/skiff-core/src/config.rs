//! Window settings
//!
//! Only presentation is configurable. The start page and the scheme assumed
//! for address bar input are fixed by the shell.

use crate::error::{SkiffError, SkiffResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Main window title
    pub window_title: String,

    /// Initial window width in logical pixels
    pub window_width: f64,

    /// Initial window height in logical pixels
    pub window_height: f64,

    /// Zoom level increment per zoom in/out, must be positive
    pub zoom_step: f64,

    /// Enable the web inspector
    pub devtools: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_title: "Web browser".to_string(),
            window_width: 900.0,
            window_height: 600.0,
            zoom_step: 0.1,
            devtools: cfg!(debug_assertions),
        }
    }
}

impl ShellConfig {
    /// Default location: `<config dir>/skiff/config.json`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skiff")
            .join("config.json")
    }

    /// Load from a JSON file. A missing file gives the defaults.
    pub fn load(path: &Path) -> SkiffResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> SkiffResult<()> {
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            return Err(SkiffError::config(format!(
                "zoom_step must be a positive number, got {}",
                self.zoom_step
            )));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SkiffError::config("window size must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_json(json: &str) -> SkiffResult<ShellConfig> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, json).unwrap();
        ShellConfig::load(&path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.window_title, "Web browser");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = load_json(r#"{ "window_width": 1280 }"#).unwrap();
        assert_eq!(config.window_width, 1280.0);
        assert_eq!(config.window_height, 600.0);
        assert_eq!(config.zoom_step, 0.1);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let err = load_json("{ not json").unwrap_err();
        assert!(matches!(err, SkiffError::Json(_)));
    }

    #[test]
    fn test_scheme_and_home_are_not_settings() {
        let err = load_json(r#"{ "default_scheme": "https://" }"#).unwrap_err();
        assert!(matches!(err, SkiffError::Json(_)));

        let err = load_json(r#"{ "home_uri": "https://example.org/" }"#).unwrap_err();
        assert!(matches!(err, SkiffError::Json(_)));
    }

    #[test]
    fn test_non_positive_zoom_step_rejected() {
        for step in ["0", "-0.1"] {
            let err = load_json(&format!(r#"{{ "zoom_step": {} }}"#, step)).unwrap_err();
            assert!(matches!(err, SkiffError::Config(_)), "step {}", step);
        }
        assert!(load_json(r#"{ "zoom_step": 0.25 }"#).is_ok());
    }

    #[test]
    fn test_zero_window_size_rejected() {
        let err = load_json(r#"{ "window_height": 0 }"#).unwrap_err();
        assert!(matches!(err, SkiffError::Config(_)));
    }
}
