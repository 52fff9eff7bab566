//! Platform services for Hearth
//!
//! This crate wraps the pieces of the host platform the UI layer consumes:
//! keyboard visibility, animation frames and safe-area geometry.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod frame;
pub mod geometry;
pub mod keyboard;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use frame::{FrameHandle, FrameQueue, FrameScheduler};
pub use geometry::{SafeAreaInsets, WindowRect};
pub use keyboard::{KeyboardMonitor, KeyboardSubscription};

/// Errors raised by platform services
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The platform never emits this keyboard event
    #[error("Unsupported keyboard event on {platform}: {event}")]
    UnsupportedKeyboardEvent {
        /// Platform that received the event
        platform: Platform,
        /// Raw event name
        event: String,
    },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Host platform the shell runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS
    #[default]
    Ios,
    /// Android
    Android,
    /// Browser build
    Web,
}

impl Platform {
    /// Detect the platform from the compilation target
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_family = "wasm") {
            Platform::Web
        } else {
            Platform::Ios
        }
    }

    /// Get the platform identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }

    /// Blur implementation to request from the native blur view, if any
    pub fn blur_method(&self) -> Option<&'static str> {
        match self {
            Platform::Android => Some("dimezisBlurView"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}
