//! Swipeable floating tab bar
//!
//! [`SwipeableTabBar`] turns taps and horizontal swipes over the bar into
//! navigation requests and keeps an animated selector over the active tab.
//!
//! # Two indices
//!
//! The navigator owns the *committed* index. During a swipe the bar shows a
//! *preview* index that changes only when the finger crosses a tab boundary,
//! while the selector's pixel position follows the finger continuously.
//! After a release the preview stays the visual truth until the navigator's
//! committed index catches up, so an asynchronous commit never makes the
//! selector snap back and forth.
//!
//! # Host callbacks
//!
//! The host forwards events from one UI thread:
//!
//! - [`mount`](SwipeableTabBar::mount) / [`unmount`](SwipeableTabBar::unmount)
//! - [`on_layout`](SwipeableTabBar::on_layout) and
//!   [`on_frame`](SwipeableTabBar::on_frame) for measurement
//! - [`should_capture`](SwipeableTabBar::should_capture),
//!   [`on_grant`](SwipeableTabBar::on_grant), [`on_move`](SwipeableTabBar::on_move),
//!   [`on_release`](SwipeableTabBar::on_release) and
//!   [`on_terminate`](SwipeableTabBar::on_terminate) for swipes
//! - [`on_press`](SwipeableTabBar::on_press) and
//!   [`on_long_press`](SwipeableTabBar::on_long_press) for taps
//! - [`tick`](SwipeableTabBar::tick) every animation frame
//! - [`render`](SwipeableTabBar::render) whenever the navigator state or the
//!   environment changes

pub mod gesture;
pub mod layout;
pub mod view;

pub use gesture::{DragPhase, PanGesture};
pub use layout::{
    clamp_number, drag_offset, index_from_position, selector_offset, ContainerMetrics,
};
pub use view::{
    BarChrome, BarPlacement, SelectorView, TabBarEnvironment, TabBarItemView, TabBarView,
};

use app_platform::{FrameHandle, FrameScheduler, KeyboardMonitor, KeyboardSubscription, WindowRect};
use std::time::Duration;

use crate::animation::AnimatedValue;
use crate::config::TabBarConfig;
use crate::navigation::{TabEvent, TabNavigator, TabState};

/// Inputs the selector's rest position was last computed from
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlacementKey {
    index: usize,
    width: f32,
    route_count: usize,
}

/// Tab bar controller
///
/// Owns all gesture, measurement and animation state of one mounted bar.
/// Navigation requests and the `tabPress` / `tabLongPress` notifications are
/// its only outward effects.
#[derive(Debug)]
pub struct SwipeableTabBar {
    config: TabBarConfig,
    /// Width from the last layout pass
    layout_width: f32,
    /// Window position from the last deferred measurement
    metrics: ContainerMetrics,
    phase: DragPhase,
    preview: Option<usize>,
    selector: AnimatedValue,
    selector_ready: bool,
    placed_for: Option<PlacementKey>,
    measured_route_count: Option<usize>,
    pending_frame: Option<FrameHandle>,
    keyboard: Option<KeyboardSubscription>,
}

impl SwipeableTabBar {
    /// Create an unmounted bar
    pub fn new(config: TabBarConfig) -> Self {
        Self {
            selector: AnimatedValue::new(0.0, config.spring),
            config,
            layout_width: 0.0,
            metrics: ContainerMetrics::default(),
            phase: DragPhase::Idle,
            preview: None,
            selector_ready: false,
            placed_for: None,
            measured_route_count: None,
            pending_frame: None,
            keyboard: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Subscribe to keyboard visibility and schedule the first measurement
    pub fn mount(
        &mut self,
        state: &TabState,
        frames: &mut dyn FrameScheduler,
        keyboard: &KeyboardMonitor,
    ) {
        self.keyboard = Some(keyboard.subscribe());
        self.measured_route_count = Some(state.len());
        self.schedule_measure(frames);
        tracing::debug!(routes = state.len(), "tab bar mounted");
    }

    /// Release the keyboard subscription and cancel pending frame work
    pub fn unmount(&mut self, frames: &mut dyn FrameScheduler) {
        if let Some(handle) = self.pending_frame.take() {
            frames.cancel_frame(handle);
        }
        self.keyboard = None;
        self.phase = DragPhase::Idle;
        self.selector.stop();
        tracing::debug!("tab bar unmounted");
    }

    /// Whether the bar is mounted
    pub fn is_mounted(&self) -> bool {
        self.keyboard.is_some()
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Layout pass reported a width for the item row
    ///
    /// A changed width hides the selector until it has been placed again.
    pub fn on_layout(&mut self, width: f32, frames: &mut dyn FrameScheduler) {
        if width != self.layout_width {
            tracing::debug!(from = self.layout_width, to = width, "tab bar resized");
            self.layout_width = width;
            self.selector_ready = false;
            self.placed_for = None;
        }
        self.metrics.width = width;
        self.schedule_measure(frames);
    }

    /// A requested frame fired; `window` is the row's box in the window
    ///
    /// Returns false for frames this bar no longer waits for.
    pub fn on_frame(&mut self, handle: FrameHandle, window: WindowRect) -> bool {
        if self.pending_frame != Some(handle) {
            tracing::trace!(frame = handle.id(), "ignoring stale frame");
            return false;
        }
        self.pending_frame = None;
        self.metrics = ContainerMetrics::new(window.x, window.width);
        tracing::trace!(x = window.x, width = window.width, "tab bar measured");
        true
    }

    fn schedule_measure(&mut self, frames: &mut dyn FrameScheduler) {
        if let Some(handle) = self.pending_frame.take() {
            frames.cancel_frame(handle);
        }
        self.pending_frame = Some(frames.request_frame());
    }

    // =========================================================================
    // Swipe Gesture
    // =========================================================================

    /// Whether a move should start a swipe session
    ///
    /// A bar hidden by the keyboard captures nothing.
    pub fn should_capture(&self, gesture: &PanGesture) -> bool {
        !self.keyboard_visible()
            && gesture.is_horizontal_swipe(self.config.swipe_activation_dx, self.config.swipe_max_dy)
    }

    /// Start a swipe session at the committed index
    pub fn on_grant(&mut self, state: &TabState) {
        self.phase = DragPhase::Dragging;
        self.preview = Some(state.index());
        self.selector.stop();
        tracing::trace!(index = state.index(), "swipe granted");
    }

    /// Follow the finger; returns true when the preview index changed
    pub fn on_move(&mut self, state: &TabState, gesture: &PanGesture) -> bool {
        if !self.phase.is_dragging() || !self.metrics.is_measured() {
            return false;
        }

        let relative_x = self.metrics.relative_x(gesture.move_x);
        self.selector.set_value(drag_offset(
            relative_x,
            self.metrics.width,
            self.config.selector_size,
        ));

        let index = self.index_at(state, gesture.move_x);
        if self.preview == Some(index) {
            return false;
        }
        tracing::trace!(index, "swipe preview changed");
        self.preview = Some(index);
        true
    }

    /// End a swipe session at the release point
    ///
    /// Requests navigation when the resolved tab differs from the committed
    /// one and returns its index.
    pub fn on_release(
        &mut self,
        gesture: &PanGesture,
        navigator: &mut dyn TabNavigator,
    ) -> Option<usize> {
        if !self.phase.is_dragging() {
            tracing::warn!("Ignoring release without an active swipe");
            return None;
        }
        self.phase = DragPhase::Idle;

        let state = navigator.state();
        let committed = state.index();
        let route_count = state.len();

        if !self.metrics.is_measured() {
            self.animate_to(committed, route_count);
            self.preview = None;
            return None;
        }

        let index = self.index_at(state, gesture.move_x);
        self.animate_to(index, route_count);

        if index == committed {
            self.preview = None;
            return None;
        }

        let Some(route_name) = state.route(index).map(|route| route.name.clone()) else {
            self.preview = None;
            return None;
        };
        self.preview = Some(index);
        tracing::debug!(from = committed, to = index, route = %route_name, "swipe navigation");
        navigator.navigate(&route_name);
        Some(index)
    }

    /// The system cancelled the swipe; return to the committed tab
    pub fn on_terminate(&mut self, state: &TabState) {
        self.phase = DragPhase::Idle;
        self.animate_to(state.index(), state.len());
        self.preview = None;
        tracing::debug!(index = state.index(), "swipe terminated");
    }

    fn index_at(&self, state: &TabState, window_x: f32) -> usize {
        index_from_position(
            self.metrics.relative_x(window_x),
            self.metrics.width,
            state.len(),
            state.index(),
        )
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// A tab was tapped; returns true if navigation was requested
    pub fn on_press(&mut self, index: usize, navigator: &mut dyn TabNavigator) -> bool {
        let Some(route) = navigator.state().route(index) else {
            tracing::warn!("Press on missing tab {}", index);
            return false;
        };
        let key = route.key.clone();
        let route_name = route.name.clone();

        self.preview = None;
        let outcome = navigator.emit(TabEvent::press(key));
        if outcome.default_prevented {
            tracing::debug!(route = %route_name, "tab press prevented");
            return false;
        }
        navigator.navigate(&route_name);
        true
    }

    /// A tab was long-pressed
    pub fn on_long_press(&mut self, index: usize, navigator: &mut dyn TabNavigator) {
        let Some(key) = navigator.state().route(index).map(|route| route.key.clone()) else {
            tracing::warn!("Long press on missing tab {}", index);
            return;
        };
        navigator.emit(TabEvent::long_press(key));
    }

    // =========================================================================
    // Reconciliation and Rendering
    // =========================================================================

    /// Bring local state in line with the navigator
    ///
    /// Safe to call any number of times with the same state.
    pub fn sync(&mut self, state: &TabState, frames: &mut dyn FrameScheduler) {
        if self.measured_route_count != Some(state.len()) {
            self.measured_route_count = Some(state.len());
            self.schedule_measure(frames);
        }

        if let Some(preview) = self.preview {
            if preview >= state.len() {
                self.preview = None;
            } else if !self.phase.is_dragging() && preview == state.index() {
                tracing::trace!(index = preview, "navigation caught up with preview");
                self.preview = None;
            }
        }

        if self.phase.is_dragging() || !(self.layout_width > 0.0) {
            return;
        }

        let key = PlacementKey {
            index: state.index(),
            width: self.layout_width,
            route_count: state.len(),
        };
        if self.placed_for == Some(key) {
            return;
        }
        self.placed_for = Some(key);

        if self.selector_ready {
            self.animate_to(key.index, key.route_count);
        } else {
            self.selector.set_value(self.offset_for(key.index, key.route_count));
            self.selector_ready = true;
        }
    }

    /// Advance the selector spring; returns true while it is moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.selector.tick(dt)
    }

    /// Sync with the navigator, then build the render output
    pub fn render(
        &mut self,
        state: &TabState,
        frames: &mut dyn FrameScheduler,
        env: &TabBarEnvironment,
    ) -> Option<TabBarView> {
        self.sync(state, frames);
        self.view(state, env)
    }

    /// Render output for the current local state
    ///
    /// `None` while the keyboard is visible.
    pub fn view(&self, state: &TabState, env: &TabBarEnvironment) -> Option<TabBarView> {
        if self.keyboard_visible() {
            return None;
        }

        let selector_x = self.selector_ready.then(|| self.selector.value());
        Some(TabBarView::compose(
            &self.config,
            state,
            self.visual_index(state),
            selector_x,
            env,
        ))
    }

    fn animate_to(&mut self, index: usize, route_count: usize) {
        let target = self.offset_for(index, route_count);
        self.selector.spring_to(target);
    }

    fn offset_for(&self, index: usize, route_count: usize) -> f32 {
        let width = if self.layout_width > 0.0 {
            self.layout_width
        } else {
            self.metrics.width
        };
        selector_offset(index, width, route_count, self.config.selector_size)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Preview index if one is set, else the committed index
    pub fn visual_index(&self, state: &TabState) -> usize {
        self.preview.unwrap_or(state.index())
    }

    /// Gesture-driven candidate index
    pub fn preview_index(&self) -> Option<usize> {
        self.preview
    }

    /// Drag state
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current selector translation
    pub fn selector_x(&self) -> f32 {
        self.selector.value()
    }

    /// Target of the selector spring in flight
    pub fn selector_target(&self) -> Option<f32> {
        self.selector.target()
    }

    /// Whether the selector is drawn
    pub fn is_selector_ready(&self) -> bool {
        self.selector_ready
    }

    /// Latest row metrics
    pub fn metrics(&self) -> ContainerMetrics {
        self.metrics
    }

    /// Frame request waiting to remeasure the row
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Whether the keyboard currently hides the bar
    pub fn keyboard_visible(&self) -> bool {
        self.keyboard
            .as_ref()
            .is_some_and(KeyboardSubscription::is_visible)
    }

    /// Configuration in use
    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }
}

// =============================================================================
// Tests
// =============================================================================
