//! Tab bar configuration
//!
//! Geometry, gesture thresholds and spring parameters of the floating tab
//! bar. Every field defaults to its design token, so a configuration file
//! only needs to name the values it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::animation::SpringConfig;
use crate::tokens::{gesture, icon, selector, tab_bar};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid config value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_height() -> f32 {
    tab_bar::HEIGHT
}

fn default_radius() -> f32 {
    tab_bar::RADIUS
}

fn default_border_width() -> f32 {
    tab_bar::BORDER_WIDTH
}

fn default_side_inset() -> f32 {
    tab_bar::SIDE_INSET
}

fn default_bottom_offset() -> f32 {
    tab_bar::BOTTOM_OFFSET
}

fn default_blur_intensity() -> f32 {
    tab_bar::BLUR_INTENSITY
}

fn default_selector_size() -> f32 {
    selector::SIZE
}

fn default_selector_radius() -> f32 {
    selector::RADIUS
}

fn default_selector_border_width() -> f32 {
    selector::BORDER_WIDTH
}

fn default_icon_size() -> f32 {
    icon::TAB_BAR
}

fn default_swipe_activation_dx() -> f32 {
    gesture::SWIPE_ACTIVATION_DX
}

fn default_swipe_max_dy() -> f32 {
    gesture::SWIPE_MAX_DY
}

/// Floating tab bar configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarConfig {
    /// Bar height
    #[serde(default = "default_height")]
    pub height: f32,
    /// Bar corner radius
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Bar border width
    #[serde(default = "default_border_width")]
    pub border_width: f32,
    /// Distance from the left and right screen edges
    #[serde(default = "default_side_inset")]
    pub side_inset: f32,
    /// Distance above the bottom safe-area inset
    #[serde(default = "default_bottom_offset")]
    pub bottom_offset: f32,
    /// Background blur intensity
    #[serde(default = "default_blur_intensity")]
    pub blur_intensity: f32,
    /// Selector box size
    #[serde(default = "default_selector_size")]
    pub selector_size: f32,
    /// Selector corner radius
    #[serde(default = "default_selector_radius")]
    pub selector_radius: f32,
    /// Selector outline width
    #[serde(default = "default_selector_border_width")]
    pub selector_border_width: f32,
    /// Size passed to icon renderers
    #[serde(default = "default_icon_size")]
    pub icon_size: f32,
    /// Horizontal travel a drag must exceed to become a swipe
    #[serde(default = "default_swipe_activation_dx")]
    pub swipe_activation_dx: f32,
    /// Vertical travel a drag must stay under to become a swipe
    #[serde(default = "default_swipe_max_dy")]
    pub swipe_max_dy: f32,
    /// Selector spring
    #[serde(default)]
    pub spring: SpringConfig,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            radius: default_radius(),
            border_width: default_border_width(),
            side_inset: default_side_inset(),
            bottom_offset: default_bottom_offset(),
            blur_intensity: default_blur_intensity(),
            selector_size: default_selector_size(),
            selector_radius: default_selector_radius(),
            selector_border_width: default_selector_border_width(),
            icon_size: default_icon_size(),
            swipe_activation_dx: default_swipe_activation_dx(),
            swipe_max_dy: default_swipe_max_dy(),
            spring: SpringConfig::default(),
        }
    }
}

impl TabBarConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TabBarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Vertical position that centers the selector in the bar
    pub fn selector_top(&self) -> f32 {
        (self.height - self.selector_size) / 2.0
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("height", self.height),
            ("selectorSize", self.selector_size),
            ("iconSize", self.icon_size),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }

        let non_negative = [
            ("radius", self.radius),
            ("borderWidth", self.border_width),
            ("sideInset", self.side_inset),
            ("bottomOffset", self.bottom_offset),
            ("selectorRadius", self.selector_radius),
            ("selectorBorderWidth", self.selector_border_width),
            ("swipeActivationDx", self.swipe_activation_dx),
            ("swipeMaxDy", self.swipe_max_dy),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.selector_size > self.height {
            return Err(ConfigError::Invalid {
                field: "selectorSize",
                reason: format!(
                    "selector ({}) is taller than the bar ({})",
                    self.selector_size, self.height
                ),
            });
        }

        if self.spring.stiffness < 0.0 || self.spring.damping_ratio < 0.0 {
            return Err(ConfigError::Invalid {
                field: "spring",
                reason: "stiffness and damping ratio must not be negative".to_string(),
            });
        }

        Ok(())
    }
}
