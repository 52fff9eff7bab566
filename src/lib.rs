//! Hearth app shell
//!
//! Wires the tab registry, navigation state, swipeable tab bar, keyboard
//! monitor and frame queue into one [`AppShell`] that a host drives with
//! [`ShellEvent`]s and renders with [`AppShell::render`].

#![warn(missing_docs)]
#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use app_platform::{FrameQueue, KeyboardMonitor, Platform, SafeAreaInsets, WindowRect};
use app_state::ScrollOffset;
use app_ui::navigation::{NavigationState, TabState};
use app_ui::screens::{Screen, ScreenView};
use app_ui::tab_bar::{PanGesture, SwipeableTabBar, TabBarEnvironment, TabBarView};
use app_ui::{ColorScheme, TabBarConfig};

// =============================================================================
// Configuration
// =============================================================================

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Tab bar geometry, thresholds and spring
    pub tab_bar: TabBarConfig,
    /// Active appearance
    pub color_scheme: ColorScheme,
    /// Host platform
    pub platform: Platform,
    /// Safe-area insets of the window
    pub insets: SafeAreaInsets,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tab_bar: TabBarConfig::default(),
            color_scheme: ColorScheme::default(),
            platform: Platform::current(),
            insets: SafeAreaInsets::default(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ShellConfig =
            serde_json::from_str(json).context("Failed to parse shell config")?;
        config.tab_bar.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&contents)
    }

    fn environment(&self) -> TabBarEnvironment {
        TabBarEnvironment::new(self.color_scheme, self.insets, self.platform)
    }
}

// =============================================================================
// Events
// =============================================================================

fn default_frame_ms() -> u64 {
    16
}

/// Input delivered by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShellEvent {
    /// The tab bar row was laid out at window x with a width
    Layout {
        /// Left edge in window coordinates
        x: f32,
        /// Row width
        width: f32,
    },
    /// An animation frame elapsed
    Frame {
        /// Frame duration in milliseconds
        #[serde(default = "default_frame_ms")]
        ms: u64,
    },
    /// Pointer moved over the bar
    PanMove(PanGesture),
    /// Pointer lifted
    PanRelease(PanGesture),
    /// The system took the gesture away
    PanTerminate,
    /// A tab was tapped
    Press {
        /// Tab index
        index: usize,
    },
    /// A tab was long-pressed
    LongPress {
        /// Tab index
        index: usize,
    },
    /// Native keyboard event by name
    Keyboard {
        /// Event name, e.g. `keyboardWillShow`
        event: String,
    },
    /// The navigator finished its pending transition
    NavigationSettled,
    /// The visible screen scrolled
    Scroll {
        /// Vertical content offset
        offset: f32,
    },
    /// The system appearance changed
    Appearance {
        /// New scheme
        scheme: ColorScheme,
    },
    /// Follow the visible screen's link
    OpenLink,
    /// Close the top modal
    DismissModal,
}

impl ShellEvent {
    /// Parse a JSON array of events
    pub fn parse_script(json: &str) -> Result<Vec<ShellEvent>> {
        serde_json::from_str(json).context("Failed to parse event script")
    }

    /// Read a JSON array of events from a file
    pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ShellEvent>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse_script(&contents)
    }
}

// =============================================================================
// Shell
// =============================================================================

/// Everything the host draws
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    /// Focused tab screen
    pub screen: ScreenView,
    /// Modal over the tabs, if one is presented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ScreenView>,
    /// Tab bar; absent while the keyboard is visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_bar: Option<TabBarView>,
}

/// The running app
#[derive(Debug)]
pub struct AppShell {
    config: ShellConfig,
    navigation: NavigationState,
    tab_bar: SwipeableTabBar,
    keyboard: KeyboardMonitor,
    frames: FrameQueue,
    bar_window: WindowRect,
    scroll: HashMap<Screen, ScrollOffset>,
}

impl AppShell {
    /// Build the shell and mount the tab bar
    pub fn new(config: ShellConfig) -> Self {
        let navigation = NavigationState::new(TabState::from_registry());
        let keyboard = KeyboardMonitor::new(config.platform);
        let mut frames = FrameQueue::new();

        let mut tab_bar = SwipeableTabBar::new(config.tab_bar);
        tab_bar.mount(navigation.tabs(), &mut frames, &keyboard);

        tracing::info!(
            platform = %config.platform,
            scheme = %config.color_scheme,
            "shell started"
        );

        Self {
            config,
            navigation,
            tab_bar,
            keyboard,
            frames,
            bar_window: WindowRect::default(),
            scroll: HashMap::new(),
        }
    }

    /// Apply one host event
    ///
    /// Gesture and tap events never fail. Unknown keyboard event names,
    /// links from screens without one and dismissing with no modal are
    /// reported as errors and leave the shell unchanged.
    pub fn dispatch(&mut self, event: ShellEvent) -> Result<()> {
        tracing::trace!(?event, "dispatch");
        match event {
            ShellEvent::Layout { x, width } => {
                self.bar_window = WindowRect::new(x, 0.0, width, self.config.tab_bar.height);
                self.tab_bar.on_layout(width, &mut self.frames);
            }
            ShellEvent::Frame { ms } => self.run_frame(Duration::from_millis(ms)),
            ShellEvent::PanMove(_)
            | ShellEvent::PanRelease(_)
            | ShellEvent::Press { .. }
            | ShellEvent::LongPress { .. }
                if self.tab_bar.keyboard_visible() =>
            {
                // The bar is not mounted in the tree while the keyboard is up
                tracing::debug!("tab bar hidden, dropping input");
            }
            ShellEvent::PanMove(gesture) => {
                if !self.tab_bar.phase().is_dragging() {
                    if !self.tab_bar.should_capture(&gesture) {
                        return Ok(());
                    }
                    self.tab_bar.on_grant(self.navigation.tabs());
                }
                self.tab_bar.on_move(self.navigation.tabs(), &gesture);
            }
            ShellEvent::PanRelease(gesture) => {
                // Touches that never became a swipe end without a session
                if self.tab_bar.phase().is_dragging() {
                    self.tab_bar.on_release(&gesture, &mut self.navigation);
                }
            }
            ShellEvent::PanTerminate => {
                if self.tab_bar.phase().is_dragging() {
                    self.tab_bar.on_terminate(self.navigation.tabs());
                }
            }
            ShellEvent::Press { index } => {
                self.tab_bar.on_press(index, &mut self.navigation);
            }
            ShellEvent::LongPress { index } => self.tab_bar.on_long_press(index, &mut self.navigation),
            ShellEvent::Keyboard { event } => {
                self.keyboard
                    .handle_native_event(&event)
                    .context("Keyboard event rejected")?;
            }
            ShellEvent::NavigationSettled => {
                self.navigation.complete_navigation();
            }
            ShellEvent::Scroll { offset } => {
                let screen = self.visible_screen();
                self.scroll.entry(screen).or_default().set(offset);
            }
            ShellEvent::Appearance { scheme } => self.config.color_scheme = scheme,
            ShellEvent::OpenLink => {
                let screen = self.visible_screen();
                let Some(target) = screen.link_target() else {
                    bail!("{} has no link", screen.route_name());
                };
                self.navigation.present_modal(target.route_name());
            }
            ShellEvent::DismissModal => {
                if !self.navigation.dismiss_modal() {
                    bail!("No modal to dismiss");
                }
            }
        }
        Ok(())
    }

    fn run_frame(&mut self, dt: Duration) {
        for handle in self.frames.advance() {
            self.tab_bar.on_frame(handle, self.bar_window);
        }
        self.tab_bar.tick(dt);
    }

    /// Reconcile with the navigator and build the view
    pub fn render(&mut self) -> ShellView {
        let env = self.config.environment();
        let tab_bar = self
            .tab_bar
            .render(self.navigation.tabs(), &mut self.frames, &env);

        let screen = self.build_screen(self.focused_tab_screen());
        let modal = self.modal_screen().map(|modal| self.build_screen(modal));

        ShellView {
            screen,
            modal,
            tab_bar,
        }
    }

    fn build_screen(&mut self, screen: Screen) -> ScreenView {
        let scroll = self.scroll.entry(screen).or_default().clone();
        screen.build(
            &self.config.insets,
            self.config.color_scheme,
            self.config.platform,
            scroll,
        )
    }

    fn focused_tab_screen(&self) -> Screen {
        Screen::from_route_name(&self.navigation.tabs().focused_route().name)
            .unwrap_or(Screen::Home)
    }

    fn modal_screen(&self) -> Option<Screen> {
        self.navigation
            .current_modal()
            .and_then(|entry| Screen::from_route_name(&entry.name))
    }

    /// Screen on top: the modal if one is presented, else the focused tab
    pub fn visible_screen(&self) -> Screen {
        self.modal_screen()
            .unwrap_or_else(|| self.focused_tab_screen())
    }

    /// Unmount the tab bar
    pub fn shutdown(&mut self) {
        if self.tab_bar.is_mounted() {
            self.tab_bar.unmount(&mut self.frames);
            tracing::info!("shell stopped");
        }
    }

    /// Navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Navigation state, for hosts that register listeners
    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    /// Tab bar controller
    pub fn tab_bar(&self) -> &SwipeableTabBar {
        &self.tab_bar
    }

    /// Keyboard monitor
    pub fn keyboard(&self) -> &KeyboardMonitor {
        &self.keyboard
    }

    /// Frame queue
    pub fn frames(&self) -> &FrameQueue {
        &self.frames
    }

    /// Active configuration
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

impl Drop for AppShell {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ShellConfig::from_json_str("{}").unwrap();
        assert_eq!(config.tab_bar, TabBarConfig::default());
        assert_eq!(config.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_config_rejects_invalid_tab_bar() {
        let err = ShellConfig::from_json_str(r#"{"tabBar": {"selectorSize": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("selectorSize"));
    }

    #[test]
    fn test_event_script_parsing() {
        let events = ShellEvent::parse_script(
            r#"[
                {"type": "layout", "x": 24, "width": 300},
                {"type": "frame"},
                {"type": "panMove", "moveX": 80, "dx": 10, "dy": 1},
                {"type": "press", "index": 2},
                {"type": "keyboard", "event": "keyboardWillShow"},
                {"type": "appearance", "scheme": "dark"},
                {"type": "navigationSettled"}
            ]"#,
        )
        .unwrap();

        assert_eq!(events[0], ShellEvent::Layout { x: 24.0, width: 300.0 });
        assert_eq!(events[1], ShellEvent::Frame { ms: 16 });
        assert_eq!(events[2], ShellEvent::PanMove(PanGesture::new(80.0, 10.0, 1.0)));
        assert_eq!(
            events[5],
            ShellEvent::Appearance {
                scheme: ColorScheme::Dark
            }
        );
        assert_eq!(events.len(), 7);
    }

    #[test]
    fn test_small_pan_is_not_captured() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell
            .dispatch(ShellEvent::PanMove(PanGesture::new(80.0, 3.0, 0.0)))
            .unwrap();
        assert!(!shell.tab_bar().phase().is_dragging());
    }

    #[test]
    fn test_shutdown_releases_keyboard_listener() {
        let mut shell = AppShell::new(ShellConfig::default());
        assert_eq!(shell.keyboard().listener_count(), 1);
        shell.shutdown();
        assert_eq!(shell.keyboard().listener_count(), 0);
        assert_eq!(shell.frames().pending_count(), 0);
    }
}
