//! Configuration for the canvas engine
//!
//! Holds the page the host lays out on, the grid snap settings and the two
//! proximity thresholds. Loadable from TOML; every field is optional and
//! falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::{Page, SnapSettings};
use crate::error::ConfigError;

/// Default distance, in page units, at which guides appear
pub const DEFAULT_GUIDE_THRESHOLD: f64 = 5.0;

/// Default distance at which magnetic snapping pulls edges together
pub const DEFAULT_MAGNETIC_THRESHOLD: f64 = 8.0;

/// Configuration options for the canvas host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Page dimensions
    pub page: Page,

    /// Grid snapping
    pub snap: SnapSettings,

    /// Proximity at which alignment guides are shown
    pub guide_threshold: f64,

    /// Proximity at which magnetic snapping applies
    pub magnetic_threshold: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            page: Page::A4,
            snap: SnapSettings::default(),
            guide_threshold: DEFAULT_GUIDE_THRESHOLD,
            magnetic_threshold: DEFAULT_MAGNETIC_THRESHOLD,
        }
    }
}

impl CanvasConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: CanvasConfig = toml::from_str(content)?;
        config.snap = config.snap.normalized();
        config.validate()?;
        debug!(?config, "loaded canvas config");
        Ok(config)
    }

    /// Check that page dimensions are positive and thresholds non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.page.width > 0.0) {
            return Err(ConfigError::invalid("page.width", "must be positive"));
        }
        if !(self.page.height > 0.0) {
            return Err(ConfigError::invalid("page.height", "must be positive"));
        }
        if !(self.guide_threshold >= 0.0) {
            return Err(ConfigError::invalid("guide_threshold", "must not be negative"));
        }
        if !(self.magnetic_threshold >= 0.0) {
            return Err(ConfigError::invalid(
                "magnetic_threshold",
                "must not be negative",
            ));
        }
        Ok(())
    }

    /// Set the page size
    pub fn with_page(mut self, width: f64, height: f64) -> Self {
        self.page = Page::new(width, height);
        self
    }

    /// Set the grid snap settings
    pub fn with_snap(mut self, snap: SnapSettings) -> Self {
        self.snap = snap;
        self
    }

    /// Set the guide threshold
    pub fn with_guide_threshold(mut self, threshold: f64) -> Self {
        self.guide_threshold = threshold;
        self
    }

    /// Set the magnetic snap threshold
    pub fn with_magnetic_threshold(mut self, threshold: f64) -> Self {
        self.magnetic_threshold = threshold;
        self
    }
}
