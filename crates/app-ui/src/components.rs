//! Presentational components for Hearth
//!
//! Components are plain serializable structs describing what the host
//! renderer should draw. Building one resolves every theme token, inset and
//! derived value, so the renderer never needs to consult the theme itself.
//!
//! # Available Components
//!
//! - [`Icon`] and [`TabIcon`] - icon glyphs and their fixed-size tab wrapper
//! - [`ThemedText`] - text colored from the active scheme
//! - [`ThemedView`] - safe-area aware scroll container with a top overlay
//! - [`TopSafeAreaGradient`] - fade under the status bar whose blur follows scrolling

use app_platform::{Platform, SafeAreaInsets};
use app_state::ScrollOffset;
use serde::{Deserialize, Serialize};

use crate::theme::{
    theme_color, Color, ColorScheme, Gradient, ThemeColorOverrides, ThemeColorToken,
};
use crate::tokens::{safe_area, selector, spacing, z_index};
use crate::typography::{TextStyle, TextVariant};

// =============================================================================
// Common Types
// =============================================================================

/// Accessibility role of an interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessibilityRole {
    /// No role
    #[default]
    None,
    /// Pressable button
    Button,
    /// Static text
    Text,
    /// Navigation link
    Link,
}

/// Accessibility attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityProps {
    /// Element role
    pub role: AccessibilityRole,
    /// Label read by screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the element is the selected member of a group
    #[serde(default)]
    pub selected: bool,
}

// =============================================================================
// Icons
// =============================================================================

/// A vector glyph tinted with one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Glyph name in the icon set
    pub name: String,
    /// Tint color
    pub color: Color,
    /// Size in points, when the glyph is not intrinsically sized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
}

impl Icon {
    /// Create an intrinsically sized icon
    pub fn new(name: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            size: None,
        }
    }

    /// Set an explicit size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

/// An icon centered in a box the size of the tab selector
///
/// Tab glyphs are wrapped so every tab's hit area and alignment match the
/// selector drawn around the focused one, regardless of the glyph's own size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabIcon {
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
    /// The wrapped glyph, centered on both axes
    pub icon: Icon,
}

impl TabIcon {
    /// Wrap a glyph in the default selector-sized box
    pub fn new(name: impl Into<String>, color: impl Into<Color>) -> Self {
        Self::with_bounds(Icon::new(name, color), selector::SIZE)
    }

    /// Wrap an icon in a square box of the given size
    pub fn with_bounds(icon: Icon, size: f32) -> Self {
        Self {
            width: size,
            height: size,
            icon,
        }
    }
}

// =============================================================================
// Themed Text
// =============================================================================

/// Text colored from the active scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemedText {
    /// Text content
    pub text: String,
    /// Style variant
    pub variant: TextVariant,
    /// Resolved text color
    pub color: Color,
    /// Resolved text style
    pub style: TextStyle,
}

impl ThemedText {
    /// Build body text
    pub fn new(text: impl Into<String>, scheme: ColorScheme, platform: Platform) -> Self {
        Self::build(
            text,
            TextVariant::Default,
            &ThemeColorOverrides::default(),
            scheme,
            platform,
        )
    }

    /// Build text with a variant and color overrides
    pub fn build(
        text: impl Into<String>,
        variant: TextVariant,
        overrides: &ThemeColorOverrides,
        scheme: ColorScheme,
        platform: Platform,
    ) -> Self {
        Self {
            text: text.into(),
            variant,
            color: theme_color(overrides, ThemeColorToken::Text, scheme),
            style: variant.style(platform),
        }
    }
}

// =============================================================================
// Top Safe-Area Gradient
// =============================================================================

/// Options of a [`TopSafeAreaGradient`]
#[derive(Debug, Clone)]
pub struct TopSafeAreaGradientProps {
    /// Overlay height (usually the top inset)
    pub height: f32,
    /// Active scheme
    pub scheme: ColorScheme,
    /// Scroll offset of the content underneath
    pub scroll_y: Option<ScrollOffset>,
    /// Scroll distance over which the blur fades in
    pub blur_distance: f32,
    /// Blur intensity when fully faded in
    pub blur_intensity: f32,
    /// Whether to draw the blur layer at all
    pub enable_blur: bool,
}

impl TopSafeAreaGradientProps {
    /// Default options for a given height and scheme
    pub fn new(height: f32, scheme: ColorScheme) -> Self {
        Self {
            height,
            scheme,
            scroll_y: None,
            blur_distance: safe_area::BLUR_DISTANCE,
            blur_intensity: safe_area::BLUR_INTENSITY,
            enable_blur: true,
        }
    }

    /// Drive the blur from a scroll offset
    pub fn with_scroll(mut self, scroll_y: ScrollOffset) -> Self {
        self.scroll_y = Some(scroll_y);
        self
    }

    /// Enable or disable the blur layer
    pub fn with_blur(mut self, enable: bool) -> Self {
        self.enable_blur = enable;
        self
    }
}

/// Blur layer of a [`TopSafeAreaGradient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientBlurLayer {
    /// Blur tint
    pub tint: ColorScheme,
    /// Blur intensity
    pub intensity: f32,
    /// Layer opacity, driven by scrolling
    pub opacity: f32,
    /// Wash over the blur
    pub wash: Color,
    /// Native blur implementation, where the platform needs one named
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_method: Option<String>,
}

/// Fade drawn under the status bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSafeAreaGradient {
    /// Overlay height
    pub height: f32,
    /// Stacking order
    pub z_index: i32,
    /// Fade gradient
    pub gradient: Gradient,
    /// Scroll-driven blur, when enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<GradientBlurLayer>,
}

/// Opacity of the gradient's blur for a scroll offset
///
/// Zero at the top of the content, reaching one after `blur_distance`.
/// Overscroll (negative offsets) counts as the top.
pub fn blur_opacity(scroll_y: f32, blur_distance: f32) -> f32 {
    if blur_distance <= 0.0 {
        return if scroll_y > 0.0 { 1.0 } else { 0.0 };
    }
    (scroll_y.max(0.0) / blur_distance).clamp(0.0, 1.0)
}

impl TopSafeAreaGradient {
    /// Build the overlay; `None` when there is no height to cover
    pub fn build(props: &TopSafeAreaGradientProps, platform: Platform) -> Option<Self> {
        if props.height <= 0.0 {
            return None;
        }

        let blur = props.enable_blur.then(|| {
            let opacity = props
                .scroll_y
                .as_ref()
                .map(|scroll_y| blur_opacity(scroll_y.get(), props.blur_distance))
                .unwrap_or(0.0);
            GradientBlurLayer {
                tint: props.scheme,
                intensity: props.blur_intensity,
                opacity,
                wash: if props.scheme.is_dark() {
                    "rgba(0,0,0,0.15)".to_string()
                } else {
                    "rgba(255,255,255,0.15)".to_string()
                },
                blur_method: platform.blur_method().map(str::to_string),
            }
        });

        Some(Self {
            height: props.height,
            z_index: z_index::OVERLAY,
            gradient: Gradient::safe_area_fade(props.scheme),
            blur,
        })
    }
}

// =============================================================================
// Themed View
// =============================================================================

/// One horizontal band of the stacked status-bar blur
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlurSlice {
    /// Offset from the top of the overlay
    pub top: f32,
    /// Band height (slightly overlapping the next band)
    pub height: f32,
    /// Blur intensity of this band
    pub intensity: u32,
}

/// Progressive blur bands covering the top inset, strongest at the top
///
/// Bands whose intensity rounds to zero are omitted.
pub fn blur_slices(height: f32) -> Vec<BlurSlice> {
    let count = safe_area::BLUR_SLICES;
    let slice_height = height / count as f32;
    if slice_height <= 0.0 {
        return Vec::new();
    }

    (0..count)
        .filter_map(|idx| {
            let t = (idx as f32 + 0.5) / count as f32;
            let eased = (1.0 - t).powf(safe_area::BLUR_EASING_POWER);
            let intensity = (safe_area::BLUR_MAX_INTENSITY * eased).round() as u32;
            (intensity > 0).then(|| BlurSlice {
                top: idx as f32 * slice_height,
                height: slice_height + 0.5,
                intensity,
            })
        })
        .collect()
}

/// Padding on each side of a themed view's content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentPadding {
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
    /// Left padding
    pub left: f32,
}

/// Status-bar overlay of a themed view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopOverlay {
    /// Stacked blur bands
    pub slices: Vec<BlurSlice>,
    /// Fade and scroll-driven blur
    pub gradient: TopSafeAreaGradient,
}

/// Options of a [`ThemedView`]
#[derive(Debug, Clone)]
pub struct ThemedViewProps {
    /// Background overrides
    pub background: ThemeColorOverrides,
    /// Presented as a modal (no safe-area handling)
    pub is_modal: bool,
    /// Padding added on top of the insets
    pub add_padding: f32,
}

impl Default for ThemedViewProps {
    fn default() -> Self {
        Self {
            background: ThemeColorOverrides::default(),
            is_modal: false,
            add_padding: spacing::CONTENT_PADDING,
        }
    }
}

impl ThemedViewProps {
    /// Options for a modal sheet
    pub fn modal() -> Self {
        Self {
            is_modal: true,
            ..Self::default()
        }
    }
}

/// Scroll container themed from the active scheme
///
/// Scroll offsets reported by the host are published through
/// [`ThemedView::on_scroll`] into the shared offset the overlay reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemedView {
    /// Resolved background color
    pub background_color: Color,
    /// Content padding
    pub padding: ContentPadding,
    /// Overlay under the status bar, for non-modal views with a top inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_overlay: Option<TopOverlay>,
    /// Children
    pub children: Vec<ThemedText>,
    /// Published scroll offset
    pub scroll_y: ScrollOffset,
}

impl ThemedView {
    /// Build a themed view
    pub fn build(
        props: &ThemedViewProps,
        children: Vec<ThemedText>,
        insets: &SafeAreaInsets,
        scheme: ColorScheme,
        platform: Platform,
        scroll_y: ScrollOffset,
    ) -> Self {
        let background_color = theme_color(&props.background, ThemeColorToken::Background, scheme);

        let padding = if props.is_modal {
            ContentPadding {
                top: props.add_padding,
                right: props.add_padding,
                bottom: props.add_padding,
                left: props.add_padding,
            }
        } else {
            let padded = insets.expanded(props.add_padding);
            ContentPadding {
                top: padded.top,
                right: padded.right,
                bottom: padded.bottom,
                left: padded.left,
            }
        };

        let top_overlay = if !props.is_modal && insets.top > 0.0 {
            let gradient_props =
                TopSafeAreaGradientProps::new(insets.top, scheme).with_scroll(scroll_y.clone());
            TopSafeAreaGradient::build(&gradient_props, platform).map(|gradient| TopOverlay {
                slices: blur_slices(insets.top),
                gradient,
            })
        } else {
            None
        };

        Self {
            background_color,
            padding,
            top_overlay,
            children,
            scroll_y,
        }
    }

    /// Publish a scroll offset reported by the host scroll view
    pub fn on_scroll(&self, offset_y: f32) {
        self.scroll_y.set(offset_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_icon_bounds() {
        let icon = TabIcon::new("hearth", "#000000");
        assert_eq!(icon.width, 44.0);
        assert_eq!(icon.height, 44.0);
        assert_eq!(icon.icon.name, "hearth");
        assert_eq!(icon.icon.size, None);
    }

    #[test]
    fn test_themed_text_colors() {
        let text = ThemedText::new("Home", ColorScheme::Dark, Platform::Ios);
        assert_eq!(text.color, "#ffffff");
        assert_eq!(text.style.font_size, 16.0);

        let custom = ThemedText::build(
            "Title",
            TextVariant::Title,
            &ThemeColorOverrides::new("#112233", "#ddeeff"),
            ColorScheme::Light,
            Platform::Ios,
        );
        assert_eq!(custom.color, "#112233");
        assert_eq!(custom.style.font_weight, 700);
    }

    #[test]
    fn test_blur_opacity() {
        assert_eq!(blur_opacity(-40.0, 300.0), 0.0);
        assert_eq!(blur_opacity(0.0, 300.0), 0.0);
        assert_eq!(blur_opacity(150.0, 300.0), 0.5);
        assert_eq!(blur_opacity(900.0, 300.0), 1.0);
    }

    #[test]
    fn test_gradient_hidden_without_height() {
        let props = TopSafeAreaGradientProps::new(0.0, ColorScheme::Light);
        assert!(TopSafeAreaGradient::build(&props, Platform::Ios).is_none());
    }

    #[test]
    fn test_gradient_blur_follows_scroll() {
        let scroll_y = ScrollOffset::default();
        let props = TopSafeAreaGradientProps::new(47.0, ColorScheme::Dark).with_scroll(scroll_y.clone());

        let at_top = TopSafeAreaGradient::build(&props, Platform::Android).unwrap();
        let blur = at_top.blur.unwrap();
        assert_eq!(blur.opacity, 0.0);
        assert_eq!(blur.blur_method.as_deref(), Some("dimezisBlurView"));
        assert_eq!(at_top.z_index, 10);

        scroll_y.set(75.0);
        let scrolled = TopSafeAreaGradient::build(&props, Platform::Android).unwrap();
        assert_eq!(scrolled.blur.unwrap().opacity, 0.25);
    }

    #[test]
    fn test_gradient_without_scroll_or_blur() {
        let props = TopSafeAreaGradientProps::new(47.0, ColorScheme::Light);
        let no_scroll = TopSafeAreaGradient::build(&props, Platform::Ios).unwrap();
        assert_eq!(no_scroll.blur.unwrap().opacity, 0.0);

        let disabled = TopSafeAreaGradient::build(&props.with_blur(false), Platform::Ios).unwrap();
        assert!(disabled.blur.is_none());
        assert_eq!(disabled.gradient.stops.len(), 6);
    }

    #[test]
    fn test_blur_slices() {
        let slices = blur_slices(50.0);
        assert!(!slices.is_empty());
        assert!(slices.len() <= 50);
        assert_eq!(slices[0].top, 0.0);
        assert_eq!(slices[0].height, 1.5);
        assert_eq!(slices[0].intensity, 25);
        assert!(slices.windows(2).all(|pair| pair[0].intensity >= pair[1].intensity));
        assert!(slices.iter().all(|slice| slice.intensity > 0));

        assert!(blur_slices(0.0).is_empty());
    }

    #[test]
    fn test_themed_view_padding() {
        let insets = SafeAreaInsets::new(47.0, 0.0, 34.0, 0.0);
        let view = ThemedView::build(
            &ThemedViewProps::default(),
            vec![],
            &insets,
            ColorScheme::Light,
            Platform::Ios,
            ScrollOffset::default(),
        );
        assert_eq!(view.background_color, "#ffffff");
        assert_eq!(view.padding.top, 63.0);
        assert_eq!(view.padding.bottom, 50.0);
        assert_eq!(view.padding.left, 16.0);
        assert!(view.top_overlay.is_some());
    }

    #[test]
    fn test_modal_view_ignores_insets() {
        let insets = SafeAreaInsets::new(47.0, 0.0, 34.0, 0.0);
        let view = ThemedView::build(
            &ThemedViewProps::modal(),
            vec![],
            &insets,
            ColorScheme::Dark,
            Platform::Ios,
            ScrollOffset::default(),
        );
        assert_eq!(view.background_color, "#000000");
        assert_eq!(view.padding.top, 16.0);
        assert_eq!(view.padding.bottom, 16.0);
        assert!(view.top_overlay.is_none());
    }

    #[test]
    fn test_on_scroll_reaches_overlay_source() {
        let scroll_y = ScrollOffset::default();
        let view = ThemedView::build(
            &ThemedViewProps::default(),
            vec![],
            &SafeAreaInsets::new(47.0, 0.0, 0.0, 0.0),
            ColorScheme::Light,
            Platform::Ios,
            scroll_y.clone(),
        );
        view.on_scroll(120.0);
        assert_eq!(scroll_y.get(), 120.0);
    }
}
