//! Window geometry supplied by the host

use serde::{Deserialize, Serialize};

/// Safe-area insets in points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaInsets {
    /// Top inset (status bar, notch)
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset (home indicator)
    pub bottom: f32,
    /// Left inset
    pub left: f32,
}

impl SafeAreaInsets {
    /// Create insets
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Grow every side by the same amount
    pub fn expanded(&self, amount: f32) -> Self {
        Self {
            top: self.top + amount,
            right: self.right + amount,
            bottom: self.bottom + amount,
            left: self.left + amount,
        }
    }
}

/// A view's box in window coordinates, as reported by `measureInWindow`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl WindowRect {
    /// Create a rect
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
