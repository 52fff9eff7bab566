//! Design tokens for Hearth
//!
//! This module provides the named constants the shell is laid out with:
//! tab bar and selector geometry, gesture thresholds, blur and gradient
//! parameters, and the small typography scale used by themed text.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in points
pub mod spacing {
    /// Extra small (4pt)
    pub const SPACE_XS: f32 = 4.0;
    /// Small (8pt)
    pub const SPACE_SM: f32 = 8.0;
    /// Large (16pt)
    pub const SPACE_LG: f32 = 16.0;
    /// Extra large (24pt)
    pub const SPACE_XL: f32 = 24.0;

    /// Padding a themed container adds on top of the safe-area insets
    pub const CONTENT_PADDING: f32 = SPACE_LG;
}

// =============================================================================
// Tab Bar Geometry
// =============================================================================

/// Floating tab bar dimensions
pub mod tab_bar {
    /// Bar height (60pt)
    pub const HEIGHT: f32 = 60.0;
    /// Corner radius of the floating bar (24pt)
    pub const RADIUS: f32 = 24.0;
    /// Hairline border around the bar (1pt)
    pub const BORDER_WIDTH: f32 = 1.0;
    /// Horizontal distance from the screen edges (24pt)
    pub const SIDE_INSET: f32 = 24.0;
    /// Distance above the bottom safe-area inset (16pt)
    pub const BOTTOM_OFFSET: f32 = 16.0;
    /// Background blur intensity
    pub const BLUR_INTENSITY: f32 = 60.0;
}

/// Selector glyph dimensions
pub mod selector {
    use super::tab_bar;

    /// Selector box size (44pt square)
    pub const SIZE: f32 = 44.0;
    /// Selector corner radius (14pt)
    pub const RADIUS: f32 = 14.0;
    /// Selector outline width
    pub const BORDER_WIDTH: f32 = 1.5;
    /// Distance from the top of the bar that vertically centers the selector
    pub const TOP: f32 = (tab_bar::HEIGHT - SIZE) / 2.0;
}

/// Icon sizes
pub mod icon {
    /// Size requested from tab bar icon renderers (24pt)
    pub const TAB_BAR: f32 = 24.0;
}

// =============================================================================
// Gesture Tokens
// =============================================================================

/// Thresholds separating a horizontal swipe from scrolls and taps
pub mod gesture {
    /// Horizontal travel that must be exceeded to claim the gesture (6pt)
    pub const SWIPE_ACTIVATION_DX: f32 = 6.0;
    /// Vertical travel that must not be reached (20pt)
    pub const SWIPE_MAX_DY: f32 = 20.0;
}

// =============================================================================
// Motion Tokens
// =============================================================================

/// Spring parameters for the selector glyph
pub mod spring {
    /// Stiffness matching a fast (speed 22) spring
    pub const STIFFNESS: f32 = 555.0;
    /// Critically damped: no bounce
    pub const DAMPING_RATIO: f32 = 1.0;
    /// Distance and speed below which the spring is considered at rest
    pub const REST_THRESHOLD: f32 = 0.5;
    /// Longest step a single tick may integrate, in seconds
    pub const MAX_STEP: f32 = 0.05;
}

// =============================================================================
// Safe-Area Overlay Tokens
// =============================================================================

/// Top safe-area fade and blur
pub mod safe_area {
    /// Gradient stop positions, top to bottom
    pub const GRADIENT_LOCATIONS: [f32; 6] = [0.0, 0.12, 0.28, 0.48, 0.72, 1.0];
    /// Gradient stop alphas, top to bottom
    pub const GRADIENT_ALPHAS: [f32; 6] = [0.5, 0.4, 0.3, 0.2, 0.1, 0.0];
    /// Number of stacked blur slices in a themed container's overlay
    pub const BLUR_SLICES: usize = 50;
    /// Blur intensity of the topmost slice
    pub const BLUR_MAX_INTENSITY: f32 = 25.0;
    /// Exponent of the slice intensity falloff
    pub const BLUR_EASING_POWER: f32 = 1.5;
    /// Scroll distance over which the gradient's blur fades in
    pub const BLUR_DISTANCE: f32 = 300.0;
    /// Blur intensity of the scroll-driven gradient overlay
    pub const BLUR_INTENSITY: f32 = 30.0;
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Default layer
    pub const DEFAULT: i32 = 0;
    /// Overlays drawn over scrolling content
    pub const OVERLAY: i32 = 10;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font sizes
pub mod font_size {
    /// Body text (16pt)
    pub const BODY: f32 = 16.0;
    /// Subtitle (20pt)
    pub const SUBTITLE: f32 = 20.0;
    /// Title (32pt)
    pub const TITLE: f32 = 32.0;
}

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}
