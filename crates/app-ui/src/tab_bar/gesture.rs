//! Pan gesture input and the drag state machine

use serde::{Deserialize, Serialize};

/// Drag state of the tab bar
///
/// `Idle -> Dragging` on grant, `Dragging -> Idle` on release or terminate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    /// No gesture session
    #[default]
    Idle,
    /// A horizontal swipe owns the bar
    Dragging,
}

impl DragPhase {
    /// Check if a gesture session is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging)
    }
}

/// One step of a pan gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanGesture {
    /// Latest pointer x in window coordinates
    pub move_x: f32,
    /// Horizontal travel since the touch began
    #[serde(default)]
    pub dx: f32,
    /// Vertical travel since the touch began
    #[serde(default)]
    pub dy: f32,
}

impl PanGesture {
    /// Create a gesture step
    pub fn new(move_x: f32, dx: f32, dy: f32) -> Self {
        Self { move_x, dx, dy }
    }

    /// A step that only carries a pointer position
    pub fn at(move_x: f32) -> Self {
        Self::new(move_x, 0.0, 0.0)
    }

    /// Whether the travel so far reads as a horizontal swipe
    pub fn is_horizontal_swipe(&self, activation_dx: f32, max_dy: f32) -> bool {
        self.dx.abs() > activation_dx && self.dy.abs() < max_dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_swipe_thresholds() {
        assert!(PanGesture::new(0.0, 7.0, 0.0).is_horizontal_swipe(6.0, 20.0));
        assert!(PanGesture::new(0.0, -7.0, 19.0).is_horizontal_swipe(6.0, 20.0));
        // Both thresholds are strict
        assert!(!PanGesture::new(0.0, 6.0, 0.0).is_horizontal_swipe(6.0, 20.0));
        assert!(!PanGesture::new(0.0, 30.0, 20.0).is_horizontal_swipe(6.0, 20.0));
        assert!(!PanGesture::new(0.0, 2.0, -40.0).is_horizontal_swipe(6.0, 20.0));
    }

    #[test]
    fn test_gesture_from_json() {
        let gesture: PanGesture = serde_json::from_str(r#"{"moveX": 120.5}"#).unwrap();
        assert_eq!(gesture, PanGesture::at(120.5));
        assert!(!DragPhase::default().is_dragging());
    }
}
