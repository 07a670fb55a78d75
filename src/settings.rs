//! User settings stored as settings.json in the app data directory
//!
//! The theme selection is session state and deliberately absent here.

use crate::constants::{DEFAULT_TREND_DAYS, TREND_DAYS_RANGE};
use crate::types::Page;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Navigation
    pub start_page: Page,

    // Placeholder data
    pub data_seed: Option<u64>,
    pub trend_days: usize,

    // View
    pub show_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            start_page: Page::Overview,
            data_seed: None,
            trend_days: DEFAULT_TREND_DAYS,
            show_footer: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Settings>(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings.sanitized()
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Clamp values a hand-edited file may have pushed out of range.
    fn sanitized(mut self) -> Self {
        let (min, max) = TREND_DAYS_RANGE;
        if !(min..=max).contains(&self.trend_days) {
            warn!(trend_days = self.trend_days, "trend_days out of range, clamping");
            self.trend_days = self.trend_days.clamp(min, max);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Fresh data directory, removed when the returned guard drops.
    fn temp_dir() -> TempDir {
        tempfile::Builder::new().prefix("analytics-pro-").tempdir().unwrap()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = temp_dir();
        let dir = tmp.path();
        assert_eq!(Settings::load(dir), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = temp_dir();
        let dir = tmp.path();
        std::fs::write(dir.join("settings.json"), r#"{ "data_seed": 11, "start_page": "Records" }"#).unwrap();
        let settings = Settings::load(dir);
        assert_eq!(settings.data_seed, Some(11));
        assert_eq!(settings.start_page, Page::Records);
        assert_eq!(settings.trend_days, DEFAULT_TREND_DAYS);
        assert!(settings.show_footer);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let tmp = temp_dir();
        let dir = tmp.path();
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir), Settings::default());
    }

    #[test]
    fn out_of_range_trend_days_is_clamped() {
        let tmp = temp_dir();
        let dir = tmp.path();
        std::fs::write(dir.join("settings.json"), r#"{ "trend_days": 2 }"#).unwrap();
        assert_eq!(Settings::load(dir).trend_days, TREND_DAYS_RANGE.0);
    }

    #[test]
    fn save_then_load_keeps_values_and_no_theme() {
        let tmp = temp_dir();
        let dir = tmp.path();
        let settings = Settings {
            window_w: Some(1280.0),
            trend_days: 60,
            show_footer: false,
            ..Settings::default()
        };
        settings.save(dir);
        let raw = std::fs::read_to_string(dir.join("settings.json")).unwrap();
        assert!(!raw.to_lowercase().contains("theme"));
        assert_eq!(Settings::load(dir), settings);
    }

    #[test]
    fn temp_data_dir_is_removed_on_drop() {
        let tmp = temp_dir();
        let path = tmp.path().to_path_buf();
        Settings::default().save(&path);
        assert!(path.join("settings.json").exists());
        drop(tmp);
        assert!(!path.exists());
    }
}
