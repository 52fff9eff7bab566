//! Typography for themed text
//!
//! Three variants are used across the shell's screens: body text, titles
//! and subtitles. All of them use the platform's sans-serif family.

use app_platform::Platform;
use serde::{Deserialize, Serialize};

use crate::theme::Fonts;
use crate::tokens::{font_size, font_weight};

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,
    /// Font weight (400, 700)
    pub font_weight: u16,
    /// Absolute line height in points, when fixed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// Font family
    pub font_family: String,
}

/// Text style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    /// Body text
    #[default]
    Default,
    /// Screen title
    Title,
    /// Section subtitle
    Subtitle,
}

impl TextVariant {
    /// Build the style for this variant on a platform
    pub fn style(&self, platform: Platform) -> TextStyle {
        let font_family = Fonts::for_platform(platform).sans.to_string();
        match self {
            TextVariant::Default => TextStyle {
                font_size: font_size::BODY,
                font_weight: font_weight::NORMAL,
                line_height: Some(24.0),
                font_family,
            },
            TextVariant::Title => TextStyle {
                font_size: font_size::TITLE,
                font_weight: font_weight::BOLD,
                line_height: Some(32.0),
                font_family,
            },
            TextVariant::Subtitle => TextStyle {
                font_size: font_size::SUBTITLE,
                font_weight: font_weight::BOLD,
                line_height: None,
                font_family,
            },
        }
    }
}
