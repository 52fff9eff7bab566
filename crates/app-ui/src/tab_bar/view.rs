//! Render output of the tab bar

use app_platform::{Platform, SafeAreaInsets};
use serde::{Deserialize, Serialize};

use crate::components::{AccessibilityProps, AccessibilityRole, TabIcon};
use crate::config::TabBarConfig;
use crate::navigation::{IconRenderProps, RouteKey, TabState};
use crate::theme::{Color, ColorScheme, TabBarPalette};

/// Per-render inputs owned by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarEnvironment {
    /// Active appearance
    pub color_scheme: ColorScheme,
    /// Safe-area insets of the window
    pub insets: SafeAreaInsets,
    /// Host platform
    pub platform: Platform,
}

impl TabBarEnvironment {
    /// Create an environment
    pub fn new(color_scheme: ColorScheme, insets: SafeAreaInsets, platform: Platform) -> Self {
        Self {
            color_scheme,
            insets,
            platform,
        }
    }
}

/// Absolute placement of the floating bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPlacement {
    /// Distance from the left edge
    pub left: f32,
    /// Distance from the right edge
    pub right: f32,
    /// Distance from the bottom edge
    pub bottom: f32,
    /// Bar height
    pub height: f32,
    /// Corner radius; content is clipped to it
    pub border_radius: f32,
}

/// Background layers drawn behind the items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChrome {
    /// Blur tint
    pub blur_tint: ColorScheme,
    /// Blur intensity
    pub blur_intensity: f32,
    /// Platform blur implementation, when one must be requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_method: Option<String>,
    /// Wash over the blur
    pub overlay_color: Color,
    /// Hairline border color
    pub border_color: Color,
    /// Hairline border width
    pub border_width: f32,
}

/// One pressable tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarItemView {
    /// Route key
    pub key: RouteKey,
    /// Route name
    pub route_name: String,
    /// Whether this is the visually selected tab
    pub focused: bool,
    /// Tint passed to the icon renderer
    pub color: Color,
    /// Rendered icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<TabIcon>,
    /// Accessibility attributes
    pub accessibility: AccessibilityProps,
}

/// The animated outline around the selected tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorView {
    /// Horizontal translation inside the item row
    pub translate_x: f32,
    /// Distance from the top of the bar
    pub top: f32,
    /// Width and height
    pub size: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Outline width
    pub border_width: f32,
    /// Outline color
    pub border_color: Color,
}

/// Complete tab bar render output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarView {
    /// Placement of the bar
    pub placement: BarPlacement,
    /// Background layers
    pub chrome: BarChrome,
    /// Tabs in route order
    pub items: Vec<TabBarItemView>,
    /// Selector, absent until the row has been measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<SelectorView>,
}

impl TabBarView {
    /// Compose the bar for a visual index and selector position
    pub fn compose(
        config: &TabBarConfig,
        state: &TabState,
        visual_index: usize,
        selector_x: Option<f32>,
        env: &TabBarEnvironment,
    ) -> Self {
        let palette = TabBarPalette::for_scheme(env.color_scheme);

        let placement = BarPlacement {
            left: config.side_inset,
            right: config.side_inset,
            bottom: env.insets.bottom + config.bottom_offset,
            height: config.height,
            border_radius: config.radius,
        };

        let chrome = BarChrome {
            blur_tint: palette.scheme,
            blur_intensity: config.blur_intensity,
            blur_method: env.platform.blur_method().map(str::to_string),
            overlay_color: palette.overlay.clone(),
            border_color: palette.border.clone(),
            border_width: config.border_width,
        };

        let items = state
            .routes()
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let focused = index == visual_index;
                let color = palette.tint(focused).clone();
                let icon = route.options.icon.as_ref().map(|renderer| {
                    renderer.render(&IconRenderProps {
                        focused,
                        color: color.clone(),
                        size: config.icon_size,
                    })
                });

                TabBarItemView {
                    key: route.key.clone(),
                    route_name: route.name.clone(),
                    focused,
                    color,
                    icon,
                    accessibility: AccessibilityProps {
                        role: AccessibilityRole::Button,
                        label: Some(route.options.title.clone()),
                        selected: focused,
                    },
                }
            })
            .collect();

        let selector = selector_x.map(|translate_x| SelectorView {
            translate_x,
            top: config.selector_top(),
            size: config.selector_size,
            border_radius: config.selector_radius,
            border_width: config.selector_border_width,
            border_color: palette.active_tint.clone(),
        });

        Self {
            placement,
            chrome,
            items,
            selector,
        }
    }

    /// Index of the item drawn as focused
    pub fn focused_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(scheme: ColorScheme, platform: Platform) -> TabBarEnvironment {
        TabBarEnvironment::new(scheme, SafeAreaInsets::new(47.0, 0.0, 34.0, 0.0), platform)
    }

    #[test]
    fn test_compose_placement_and_chrome() {
        let state = TabState::from_registry();
        let view = TabBarView::compose(
            &TabBarConfig::default(),
            &state,
            0,
            None,
            &env(ColorScheme::Dark, Platform::Android),
        );

        assert_eq!(view.placement.bottom, 50.0);
        assert_eq!(view.placement.left, 24.0);
        assert_eq!(view.placement.height, 60.0);
        assert_eq!(view.chrome.blur_tint, ColorScheme::Dark);
        assert_eq!(view.chrome.blur_method.as_deref(), Some("dimezisBlurView"));
        assert!(view.selector.is_none());
    }

    #[test]
    fn test_compose_tints_visual_index() {
        let state = TabState::from_registry();
        let view = TabBarView::compose(
            &TabBarConfig::default(),
            &state,
            2,
            Some(228.0),
            &env(ColorScheme::Light, Platform::Ios),
        );
        let palette = TabBarPalette::for_scheme(ColorScheme::Light);

        assert_eq!(view.focused_index(), Some(2));
        assert_eq!(view.items[2].color, palette.active_tint);
        assert_eq!(view.items[0].color, palette.inactive_tint);
        assert!(view.items[2].accessibility.selected);
        assert_eq!(view.items[1].accessibility.label.as_deref(), Some("Hearth"));

        let icon = view.items[2].icon.as_ref().unwrap();
        assert_eq!(icon.icon.name, "settings");
        assert_eq!(icon.icon.color, palette.active_tint);

        let selector = view.selector.unwrap();
        assert_eq!(selector.translate_x, 228.0);
        assert_eq!(selector.top, 8.0);
        assert_eq!(selector.border_color, palette.active_tint);
        assert!(view.chrome.blur_method.is_none());
    }
}
