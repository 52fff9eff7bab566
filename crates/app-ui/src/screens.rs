//! Application screens
//!
//! Each screen is a [`ThemedView`] with a single line of text. The home
//! screen's text links to the modal.

use app_platform::{Platform, SafeAreaInsets};
use app_state::ScrollOffset;
use serde::{Deserialize, Serialize};

use crate::components::{
    AccessibilityProps, AccessibilityRole, ThemedText, ThemedView, ThemedViewProps,
};
use crate::navigation::TabScreenName;
use crate::theme::ColorScheme;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Home tab
    Home,
    /// Hearth tab
    Hearth,
    /// Settings tab
    Settings,
    /// Modal sheet presented over the tabs
    Modal,
}

impl Screen {
    /// Screen shown by a tab
    pub fn for_tab(tab: TabScreenName) -> Self {
        match tab {
            TabScreenName::Index => Screen::Home,
            TabScreenName::Hearth => Screen::Hearth,
            TabScreenName::Settings => Screen::Settings,
        }
    }

    /// Route name of the screen
    pub fn route_name(&self) -> &'static str {
        match self {
            Screen::Home => "index",
            Screen::Hearth => "hearth",
            Screen::Settings => "settings",
            Screen::Modal => "modal",
        }
    }

    /// Look up a screen by route name
    pub fn from_route_name(name: &str) -> Option<Self> {
        match name {
            "modal" => Some(Screen::Modal),
            _ => TabScreenName::from_route_name(name).map(Self::for_tab),
        }
    }

    /// Text shown on the screen
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Hearth => "Hearth",
            Screen::Settings => "Settings",
            Screen::Modal => "This is a modal",
        }
    }

    /// Whether the screen is presented modally
    pub fn is_modal(&self) -> bool {
        matches!(self, Screen::Modal)
    }

    /// Screen the label links to, if any
    pub fn link_target(&self) -> Option<Screen> {
        match self {
            Screen::Home => Some(Screen::Modal),
            _ => None,
        }
    }

    /// Build the screen
    pub fn build(
        &self,
        insets: &SafeAreaInsets,
        scheme: ColorScheme,
        platform: Platform,
        scroll_y: ScrollOffset,
    ) -> ScreenView {
        let props = if self.is_modal() {
            ThemedViewProps::modal()
        } else {
            ThemedViewProps::default()
        };
        let text = ThemedText::new(self.label(), scheme, platform);
        let link = self.link_target().map(|target| ScreenLink {
            href: format!("/{}", target.route_name()),
            target,
            accessibility: AccessibilityProps {
                role: AccessibilityRole::Link,
                label: Some(self.label().to_string()),
                selected: false,
            },
        });

        ScreenView {
            screen: *self,
            link,
            view: ThemedView::build(&props, vec![text], insets, scheme, platform, scroll_y),
        }
    }
}

/// A link wrapping a screen's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenLink {
    /// Router path
    pub href: String,
    /// Screen opened by the link
    pub target: Screen,
    /// Accessibility attributes
    pub accessibility: AccessibilityProps,
}

/// A built screen
#[derive(Debug, Clone, Serialize)]
pub struct ScreenView {
    /// Which screen this is
    pub screen: Screen,
    /// Link around the text, if the screen has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<ScreenLink>,
    /// Themed content
    pub view: ThemedView,
}
