//! Tab navigation for Hearth
//!
//! This module provides:
//! - The tab screen registry (route name, title, icon) shared by the
//!   navigator and the tab bar
//! - The tab route set and committed focus index ([`TabState`])
//! - The contract the tab bar uses to talk to the navigator ([`TabNavigator`])
//! - A reference navigator with asynchronous commits and a modal stack
//!   ([`NavigationState`])

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::components::TabIcon;
use crate::theme::Color;

/// Errors that can occur when building or updating tab state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabStateError {
    /// A tab navigator needs at least one route
    #[error("Tab route set is empty")]
    EmptyRoutes,

    /// Focus index outside the route set
    #[error("Tab index {index} out of range for {len} routes")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of routes
        len: usize,
    },

    /// Two routes share a key
    #[error("Duplicate route key: {0}")]
    DuplicateKey(RouteKey),

    /// No route with this name
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Result type for tab state operations
pub type Result<T> = std::result::Result<T, TabStateError>;

// =============================================================================
// Route Keys
// =============================================================================

/// Unique, opaque identifier of a route instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteKey(String);

impl RouteKey {
    /// Wrap an existing key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generate a fresh key for a route name
    pub fn generate(name: &str) -> Self {
        Self(format!("{}-{}", name, uuid::Uuid::new_v4()))
    }

    /// Borrow the key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Icon Rendering
// =============================================================================

/// Arguments handed to a tab icon renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRenderProps {
    /// Whether the tab is the visually selected one
    pub focused: bool,
    /// Tint to draw with
    pub color: Color,
    /// Requested size
    pub size: f32,
}

/// Renders the icon of one tab
pub trait TabBarIconRenderer: fmt::Debug + Send + Sync {
    /// Produce the icon node for the given state
    fn render(&self, props: &IconRenderProps) -> TabIcon;
}

/// Renderer for a named glyph in the app's icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphIcon(pub &'static str);

impl TabBarIconRenderer for GlyphIcon {
    fn render(&self, props: &IconRenderProps) -> TabIcon {
        TabIcon::new(self.0, props.color.clone())
    }
}

// =============================================================================
// Tab Screen Registry
// =============================================================================

/// Names of the tab routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabScreenName {
    /// Home tab (route name `index`)
    Index,
    /// Hearth tab
    Hearth,
    /// Settings tab
    Settings,
}

impl TabScreenName {
    /// Route name used by the navigator
    pub fn as_str(&self) -> &'static str {
        match self {
            TabScreenName::Index => "index",
            TabScreenName::Hearth => "hearth",
            TabScreenName::Settings => "settings",
        }
    }

    /// Look up a tab by route name
    pub fn from_route_name(name: &str) -> Option<Self> {
        TAB_SCREENS
            .iter()
            .map(|screen| screen.name)
            .find(|screen| screen.as_str() == name)
    }
}

/// One entry of the tab registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabScreenConfig {
    /// Route name
    pub name: TabScreenName,
    /// Title (also the accessibility label)
    pub title: &'static str,
    /// Icon glyph
    pub icon: GlyphIcon,
}

/// The tabs, in display order
pub const TAB_SCREENS: [TabScreenConfig; 3] = [
    TabScreenConfig {
        name: TabScreenName::Index,
        title: "Home",
        icon: GlyphIcon("home"),
    },
    TabScreenConfig {
        name: TabScreenName::Hearth,
        title: "Hearth",
        icon: GlyphIcon("hearth"),
    },
    TabScreenConfig {
        name: TabScreenName::Settings,
        title: "Settings",
        icon: GlyphIcon("settings"),
    },
];

// =============================================================================
// Tab Routes
// =============================================================================

/// Per-route render options
#[derive(Debug, Clone)]
pub struct TabOptions {
    /// Route title
    pub title: String,
    /// Icon renderer, if the tab shows one
    pub icon: Option<Arc<dyn TabBarIconRenderer>>,
}

/// One route of the tab navigator
#[derive(Debug, Clone)]
pub struct TabRoute {
    /// Unique key
    pub key: RouteKey,
    /// Route name
    pub name: String,
    /// Render options
    pub options: TabOptions,
}

impl TabRoute {
    /// Create a route with a freshly generated key
    pub fn new(name: impl Into<String>, options: TabOptions) -> Self {
        let name = name.into();
        Self {
            key: RouteKey::generate(&name),
            name,
            options,
        }
    }

    /// Create the route for a registry entry
    pub fn from_screen(screen: &TabScreenConfig) -> Self {
        Self::new(
            screen.name.as_str(),
            TabOptions {
                title: screen.title.to_string(),
                icon: Some(Arc::new(screen.icon)),
            },
        )
    }
}

/// Ordered route set and committed focus index
///
/// Invariants: at least one route, unique keys, `index < routes.len()`.
#[derive(Debug, Clone)]
pub struct TabState {
    routes: Vec<TabRoute>,
    index: usize,
}

impl TabState {
    /// Create tab state, checking the invariants
    pub fn new(routes: Vec<TabRoute>, index: usize) -> Result<Self> {
        if routes.is_empty() {
            return Err(TabStateError::EmptyRoutes);
        }
        if index >= routes.len() {
            return Err(TabStateError::IndexOutOfRange {
                index,
                len: routes.len(),
            });
        }

        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !seen.insert(&route.key) {
                return Err(TabStateError::DuplicateKey(route.key.clone()));
            }
        }

        Ok(Self { routes, index })
    }

    /// Build tab state from the registry, focused on the first tab
    pub fn from_registry() -> Self {
        Self {
            routes: TAB_SCREENS.iter().map(TabRoute::from_screen).collect(),
            index: 0,
        }
    }

    /// Routes in display order
    pub fn routes(&self) -> &[TabRoute] {
        &self.routes
    }

    /// Committed focus index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of routes (always at least one)
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether there are no routes; never true for a constructed state
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route at an index
    pub fn route(&self, index: usize) -> Option<&TabRoute> {
        self.routes.get(index)
    }

    /// The committed route
    pub fn focused_route(&self) -> &TabRoute {
        &self.routes[self.index]
    }

    /// Index of the route with a given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.name == name)
    }

    /// Index of the route with a given name, or an error naming it
    pub fn require_index(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| TabStateError::UnknownRoute(name.to_string()))
    }

    /// Change the committed index
    pub fn set_index(&mut self, index: usize) -> Result<()> {
        if index >= self.routes.len() {
            return Err(TabStateError::IndexOutOfRange {
                index,
                len: self.routes.len(),
            });
        }
        self.index = index;
        Ok(())
    }
}

// =============================================================================
// Navigator Contract
// =============================================================================

/// Notification kinds the tab bar emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabEventKind {
    /// A tab was pressed
    TabPress,
    /// A tab was long-pressed
    TabLongPress,
}

/// Notification sent to the navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEvent {
    /// Event kind
    #[serde(rename = "type")]
    pub kind: TabEventKind,
    /// Key of the route the event targets
    pub target: RouteKey,
    /// Whether listeners may cancel the default action
    pub can_prevent_default: bool,
}

impl TabEvent {
    /// A cancelable press on a tab
    pub fn press(target: RouteKey) -> Self {
        Self {
            kind: TabEventKind::TabPress,
            target,
            can_prevent_default: true,
        }
    }

    /// A long press on a tab
    pub fn long_press(target: RouteKey) -> Self {
        Self {
            kind: TabEventKind::TabLongPress,
            target,
            can_prevent_default: false,
        }
    }
}

/// What listeners did with an emitted event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitOutcome {
    /// A listener cancelled the default action
    pub default_prevented: bool,
}

/// The navigator as seen from the tab bar
///
/// `navigate` is a request: the navigator commits it on its own schedule and
/// the new index shows up in `state()` afterwards.
#[cfg_attr(test, mockall::automock)]
pub trait TabNavigator {
    /// Current routes and committed index
    fn state(&self) -> &TabState;

    /// Deliver a notification to listeners
    fn emit(&mut self, event: TabEvent) -> EmitOutcome;

    /// Request navigation to a route by name
    fn navigate(&mut self, route_name: &str);
}

// =============================================================================
// Reference Navigator
// =============================================================================

/// A navigation request waiting to be committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingNavigation {
    /// Target route name
    pub route_name: String,
    /// Target index
    pub index: usize,
}

/// A modal presented over the tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalEntry {
    /// Route name
    pub name: String,
    /// Unique key
    pub key: RouteKey,
}

impl ModalEntry {
    /// Create a modal entry
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: RouteKey::generate(&name),
            name,
        }
    }
}

/// Tab navigator with a modal stack
///
/// Navigation requests are queued and committed by
/// [`complete_navigation`](NavigationState::complete_navigation), mirroring a
/// navigator whose screen transitions finish asynchronously. With auto-commit
/// enabled requests apply immediately.
#[derive(Debug, Clone)]
pub struct NavigationState {
    tabs: TabState,
    modal_stack: Vec<ModalEntry>,
    pending: Option<PendingNavigation>,
    auto_commit: bool,
    prevented: HashSet<RouteKey>,
    emitted: Vec<TabEvent>,
    navigate_requests: Vec<String>,
}

impl NavigationState {
    /// Create a navigator over a tab state
    pub fn new(tabs: TabState) -> Self {
        Self {
            tabs,
            modal_stack: Vec::new(),
            pending: None,
            auto_commit: false,
            prevented: HashSet::new(),
            emitted: Vec::new(),
            navigate_requests: Vec::new(),
        }
    }

    /// Commit navigation requests as soon as they arrive
    pub fn with_auto_commit(mut self, auto_commit: bool) -> Self {
        self.auto_commit = auto_commit;
        self
    }

    /// Tab state
    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    /// Navigation waiting to be committed
    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    /// Commit the pending navigation; returns the new index
    pub fn complete_navigation(&mut self) -> Option<usize> {
        let pending = self.pending.take()?;
        match self.tabs.set_index(pending.index) {
            Ok(()) => {
                tracing::debug!(route = %pending.route_name, index = pending.index, "navigation committed");
                Some(pending.index)
            }
            Err(err) => {
                tracing::warn!("Dropping pending navigation: {}", err);
                None
            }
        }
    }

    /// Make tab presses on a route cancel the default navigation
    pub fn prevent_tab_press(&mut self, key: RouteKey) {
        self.prevented.insert(key);
    }

    /// Stop cancelling tab presses on a route
    pub fn allow_tab_press(&mut self, key: &RouteKey) {
        self.prevented.remove(key);
    }

    /// Events emitted so far
    pub fn emitted(&self) -> &[TabEvent] {
        &self.emitted
    }

    /// Route names passed to `navigate` so far
    pub fn navigate_requests(&self) -> &[String] {
        &self.navigate_requests
    }

    /// Present a modal route
    pub fn present_modal(&mut self, name: impl Into<String>) {
        self.modal_stack.push(ModalEntry::new(name));
    }

    /// Dismiss the top modal
    pub fn dismiss_modal(&mut self) -> bool {
        self.modal_stack.pop().is_some()
    }

    /// Top modal, if any
    pub fn current_modal(&self) -> Option<&ModalEntry> {
        self.modal_stack.last()
    }

    /// Check if any modals are presented
    pub fn has_modals(&self) -> bool {
        !self.modal_stack.is_empty()
    }
}

impl TabNavigator for NavigationState {
    fn state(&self) -> &TabState {
        &self.tabs
    }

    fn emit(&mut self, event: TabEvent) -> EmitOutcome {
        let default_prevented = event.can_prevent_default && self.prevented.contains(&event.target);
        self.emitted.push(event);
        EmitOutcome { default_prevented }
    }

    fn navigate(&mut self, route_name: &str) {
        self.navigate_requests.push(route_name.to_string());

        let index = match self.tabs.require_index(route_name) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!("Ignoring navigation: {}", err);
                return;
            }
        };

        self.pending = Some(PendingNavigation {
            route_name: route_name.to_string(),
            index,
        });
        if self.auto_commit {
            self.complete_navigation();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_route(name: &str) -> TabRoute {
        TabRoute::new(
            name,
            TabOptions {
                title: name.to_string(),
                icon: None,
            },
        )
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = TAB_SCREENS.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["index", "hearth", "settings"]);
        assert_eq!(TAB_SCREENS[0].title, "Home");
        assert_eq!(
            TabScreenName::from_route_name("hearth"),
            Some(TabScreenName::Hearth)
        );
        assert_eq!(TabScreenName::from_route_name("modal"), None);
    }

    #[test]
    fn test_from_registry() {
        let state = TabState::from_registry();
        assert_eq!(state.len(), 3);
        assert_eq!(state.index(), 0);
        assert_eq!(state.focused_route().name, "index");
        assert!(state.routes()[1].key.as_str().starts_with("hearth-"));
        assert_eq!(state.index_of("settings"), Some(2));
        assert_eq!(
            state.require_index("explore"),
            Err(TabStateError::UnknownRoute("explore".to_string()))
        );
    }

    #[test]
    fn test_tab_state_invariants() {
        assert_eq!(
            TabState::new(vec![], 0).unwrap_err(),
            TabStateError::EmptyRoutes
        );
        assert_eq!(
            TabState::new(vec![plain_route("a")], 1).unwrap_err(),
            TabStateError::IndexOutOfRange { index: 1, len: 1 }
        );

        let a = plain_route("a");
        let duplicate = a.clone();
        assert!(matches!(
            TabState::new(vec![a, duplicate], 0),
            Err(TabStateError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_set_index_bounds() {
        let mut state = TabState::from_registry();
        assert!(state.set_index(2).is_ok());
        assert_eq!(state.index(), 2);
        assert!(state.set_index(3).is_err());
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_glyph_icon_renders_tinted_tab_icon() {
        let icon = GlyphIcon("home").render(&IconRenderProps {
            focused: true,
            color: "#ffffff".to_string(),
            size: 24.0,
        });
        assert_eq!(icon.icon.name, "home");
        assert_eq!(icon.icon.color, "#ffffff");
        assert_eq!(icon.width, 44.0);
    }

    #[test]
    fn test_navigate_is_committed_later() {
        let mut nav = NavigationState::new(TabState::from_registry());
        nav.navigate("settings");
        assert_eq!(nav.state().index(), 0);
        assert_eq!(nav.pending().unwrap().index, 2);

        assert_eq!(nav.complete_navigation(), Some(2));
        assert_eq!(nav.state().index(), 2);
        assert!(nav.pending().is_none());
        assert_eq!(nav.complete_navigation(), None);
    }

    #[test]
    fn test_auto_commit() {
        let mut nav = NavigationState::new(TabState::from_registry()).with_auto_commit(true);
        nav.navigate("hearth");
        assert_eq!(nav.state().index(), 1);
        assert!(nav.pending().is_none());
    }

    #[test]
    fn test_unknown_route_is_ignored() {
        let mut nav = NavigationState::new(TabState::from_registry());
        nav.navigate("explore");
        assert!(nav.pending().is_none());
        assert_eq!(nav.navigate_requests(), ["explore"]);
    }

    #[test]
    fn test_emit_prevent_default() {
        let mut nav = NavigationState::new(TabState::from_registry());
        let key = nav.state().routes()[1].key.clone();

        assert!(!nav.emit(TabEvent::press(key.clone())).default_prevented);

        nav.prevent_tab_press(key.clone());
        assert!(nav.emit(TabEvent::press(key.clone())).default_prevented);
        // Long presses cannot be cancelled
        assert!(!nav.emit(TabEvent::long_press(key.clone())).default_prevented);

        nav.allow_tab_press(&key);
        assert!(!nav.emit(TabEvent::press(key)).default_prevented);
        assert_eq!(nav.emitted().len(), 4);
    }

    #[test]
    fn test_modal_stack() {
        let mut nav = NavigationState::new(TabState::from_registry());
        assert!(!nav.has_modals());
        nav.present_modal("modal");
        assert_eq!(nav.current_modal().unwrap().name, "modal");
        assert!(nav.dismiss_modal());
        assert!(!nav.dismiss_modal());
    }

    #[test]
    fn test_tab_event_serialization() {
        let event = TabEvent::press(RouteKey::new("index-1"));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "tabPress");
        assert_eq!(json["target"], "index-1");
        assert_eq!(json["canPreventDefault"], true);
    }
}
