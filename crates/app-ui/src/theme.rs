//! Color schemes and theme tokens for Hearth
//!
//! The shell ships two schemes, light and dark, each defining three
//! semantic colors (`text`, `background`, `tint`). Components resolve a
//! token against the active scheme, optionally overridden per call site.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{theme_color, ColorScheme, ThemeColorOverrides, ThemeColorToken};
//!
//! let text = theme_color(&ThemeColorOverrides::default(), ThemeColorToken::Text, ColorScheme::Dark);
//! assert_eq!(text, "#ffffff");
//! ```

use app_platform::Platform;
use serde::{Deserialize, Serialize};

use crate::tokens::safe_area;

// =============================================================================
// Color Types
// =============================================================================

/// A color as a CSS-style string (`#rrggbb` or `rgba(...)`)
pub type Color = String;

/// Format an `rgba()` color string
pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

// =============================================================================
// Color Scheme
// =============================================================================

/// Active appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ColorScheme {
    /// Resolve an optional system value, falling back to light
    pub fn or_default(scheme: Option<ColorScheme>) -> Self {
        scheme.unwrap_or_default()
    }

    /// Check if this is the dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Get the scheme name
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic colors of one scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemeColors {
    /// Primary text color
    pub text: &'static str,
    /// Screen background
    pub background: &'static str,
    /// Accent for active controls
    pub tint: &'static str,
}

/// Colors of the light scheme
pub const LIGHT_COLORS: SchemeColors = SchemeColors {
    text: "#000000",
    background: "#ffffff",
    tint: "#000000",
};

/// Colors of the dark scheme
pub const DARK_COLORS: SchemeColors = SchemeColors {
    text: "#ffffff",
    background: "#000000",
    tint: "#ffffff",
};

impl SchemeColors {
    /// Get the colors for a scheme
    pub fn for_scheme(scheme: ColorScheme) -> &'static SchemeColors {
        match scheme {
            ColorScheme::Light => &LIGHT_COLORS,
            ColorScheme::Dark => &DARK_COLORS,
        }
    }

    /// Look up a token
    pub fn get(&self, token: ThemeColorToken) -> &'static str {
        match token {
            ThemeColorToken::Text => self.text,
            ThemeColorToken::Background => self.background,
            ThemeColorToken::Tint => self.tint,
        }
    }
}

/// Name of a semantic color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColorToken {
    /// Text color
    Text,
    /// Background color
    Background,
    /// Tint color
    Tint,
}

/// Per-call-site color overrides for each scheme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColorOverrides {
    /// Color to use in the light scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<Color>,
    /// Color to use in the dark scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<Color>,
}

impl ThemeColorOverrides {
    /// Override both schemes
    pub fn new(light: impl Into<Color>, dark: impl Into<Color>) -> Self {
        Self {
            light: Some(light.into()),
            dark: Some(dark.into()),
        }
    }

    fn for_scheme(&self, scheme: ColorScheme) -> Option<&Color> {
        match scheme {
            ColorScheme::Light => self.light.as_ref(),
            ColorScheme::Dark => self.dark.as_ref(),
        }
    }
}

/// Resolve a color token, preferring an explicit override for the scheme
pub fn theme_color(
    overrides: &ThemeColorOverrides,
    token: ThemeColorToken,
    scheme: ColorScheme,
) -> Color {
    overrides
        .for_scheme(scheme)
        .cloned()
        .unwrap_or_else(|| SchemeColors::for_scheme(scheme).get(token).to_string())
}

// =============================================================================
// Tab Bar Palette
// =============================================================================

/// Colors of the floating tab bar for one scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarPalette {
    /// Scheme the palette was built for
    pub scheme: ColorScheme,
    /// Tint of the focused tab and the selector outline
    pub active_tint: Color,
    /// Tint of unfocused tabs
    pub inactive_tint: Color,
    /// Hairline border around the bar
    pub border: Color,
    /// Wash drawn over the blurred background
    pub overlay: Color,
}

impl TabBarPalette {
    /// Build the palette for a scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let active_tint = SchemeColors::for_scheme(scheme).tint.to_string();
        if scheme.is_dark() {
            Self {
                scheme,
                active_tint,
                inactive_tint: rgba(255, 255, 255, 0.55),
                border: rgba(255, 255, 255, 0.14),
                overlay: rgba(0, 0, 0, 0.20),
            }
        } else {
            Self {
                scheme,
                active_tint,
                inactive_tint: rgba(0, 0, 0, 0.55),
                border: rgba(0, 0, 0, 0.10),
                overlay: rgba(255, 255, 255, 0.18),
            }
        }
    }

    /// Tint for a tab given its focus state
    pub fn tint(&self, focused: bool) -> &Color {
        if focused {
            &self.active_tint
        } else {
            &self.inactive_tint
        }
    }
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A vertical linear gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops, top to bottom
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a gradient from `(position, color)` pairs
    pub fn new(stops: Vec<(f32, Color)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(position, color)| GradientStop { position, color })
                .collect(),
        }
    }

    /// Fade drawn under the status bar
    ///
    /// Dark schemes fade from translucent white, light schemes from
    /// translucent black, both to fully transparent.
    pub fn safe_area_fade(scheme: ColorScheme) -> Self {
        let channel = if scheme.is_dark() { 255 } else { 0 };
        Self::new(
            safe_area::GRADIENT_LOCATIONS
                .iter()
                .zip(safe_area::GRADIENT_ALPHAS.iter())
                .map(|(&position, &alpha)| (position, rgba(channel, channel, channel, alpha)))
                .collect(),
        )
    }
}

// =============================================================================
// Fonts
// =============================================================================

/// Font families available on a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fonts {
    /// Sans-serif family
    pub sans: &'static str,
}

impl Fonts {
    /// Get the font families for a platform
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Fonts { sans: "System" },
            Platform::Android => Fonts { sans: "Roboto" },
            Platform::Web => Fonts {
                sans: "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif",
            },
        }
    }
}
