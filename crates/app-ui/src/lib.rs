//! User interface for Hearth
//!
//! This crate provides the UI layer: the swipeable floating tab bar, tab
//! navigation, themed components, screens and design tokens.
//!
//! # Design System
//!
//! Two schemes are supported, each with `text`, `background` and `tint`
//! colors:
//! - [`theme::ColorScheme::Light`] - black on white
//! - [`theme::ColorScheme::Dark`] - white on black
//!
//! # Modules
//!
//! - [`tab_bar`] - Swipeable tab bar controller and its render output
//! - [`navigation`] - Tab registry, route state and the navigator contract
//! - [`animation`] - Spring-driven animated values
//! - [`config`] - Tab bar configuration
//! - [`theme`] - Color schemes, palettes, gradients and fonts
//! - [`tokens`] - Design tokens (sizes, thresholds, spring constants)
//! - [`typography`] - Text styles
//! - [`components`] - Themed text and views, icons, safe-area gradient
//! - [`screens`] - Application screens
//!
//! # Example
//!
//! ```rust
//! use app_platform::{FrameQueue, KeyboardMonitor, Platform, SafeAreaInsets};
//! use app_ui::navigation::TabState;
//! use app_ui::tab_bar::{SwipeableTabBar, TabBarEnvironment};
//! use app_ui::theme::ColorScheme;
//! use app_ui::TabBarConfig;
//!
//! let state = TabState::from_registry();
//! let mut frames = FrameQueue::new();
//! let keyboard = KeyboardMonitor::new(Platform::Ios);
//!
//! let mut bar = SwipeableTabBar::new(TabBarConfig::default());
//! bar.mount(&state, &mut frames, &keyboard);
//! bar.on_layout(300.0, &mut frames);
//!
//! let env = TabBarEnvironment::new(ColorScheme::Dark, SafeAreaInsets::default(), Platform::Ios);
//! let view = bar.render(&state, &mut frames, &env).unwrap();
//! assert_eq!(view.items.len(), 3);
//! assert_eq!(view.focused_index(), Some(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod config;
pub mod navigation;
pub mod screens;
pub mod tab_bar;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use animation::{AnimatedValue, SpringConfig};

pub use config::{ConfigError, TabBarConfig};

pub use theme::{
    rgba, theme_color, Color, ColorScheme, Fonts, Gradient, SchemeColors, TabBarPalette,
    ThemeColorOverrides, ThemeColorToken,
};

pub use typography::{TextStyle, TextVariant};

pub use components::{
    AccessibilityProps, AccessibilityRole, Icon, TabIcon, ThemedText, ThemedView,
    ThemedViewProps, TopSafeAreaGradient, TopSafeAreaGradientProps,
};

pub use navigation::{
    EmitOutcome, GlyphIcon, IconRenderProps, NavigationState, RouteKey, TabBarIconRenderer,
    TabEvent, TabEventKind, TabNavigator, TabRoute, TabScreenName, TabState, TabStateError,
    TAB_SCREENS,
};

pub use screens::{Screen, ScreenView};

pub use tab_bar::{DragPhase, PanGesture, SwipeableTabBar, TabBarEnvironment, TabBarView};
