//! Tab bar geometry
//!
//! Pure functions mapping pointer positions to tab indices and tab indices
//! to selector offsets. Both clamp instead of failing.

use serde::{Deserialize, Serialize};

/// Window position and width of the bar's item row
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerMetrics {
    /// Left edge in window coordinates
    pub origin_x: f32,
    /// Row width; zero until laid out
    pub width: f32,
}

impl ContainerMetrics {
    /// Create metrics
    pub fn new(origin_x: f32, width: f32) -> Self {
        Self { origin_x, width }
    }

    /// Whether a usable width is known
    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }

    /// Convert a window x coordinate into row coordinates
    pub fn relative_x(&self, window_x: f32) -> f32 {
        window_x - self.origin_x
    }
}

/// `max(min, min(max, value))`
///
/// When `max < min` the result is `min`.
pub fn clamp_number(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Index of the tab under `relative_x`, using floor semantics
///
/// Positions left of the row resolve to the first tab and positions right
/// of it to the last. Without a width (or routes) the `fallback` index is
/// returned unchanged.
pub fn index_from_position(
    relative_x: f32,
    width: f32,
    route_count: usize,
    fallback: usize,
) -> usize {
    if !(width > 0.0) || route_count == 0 {
        return fallback;
    }

    let item_width = width / route_count as f32;
    let raw = (relative_x / item_width).floor();
    if raw.is_nan() {
        return fallback;
    }

    let last = route_count - 1;
    if raw <= 0.0 {
        0
    } else if raw >= last as f32 {
        last
    } else {
        raw as usize
    }
}

/// Rest position of the selector centered on tab `index`
///
/// Clamped to `[0, width - selector_size]` so the selector never leaves the
/// row. This differs from the plain centered position only when a tab is
/// narrower than the selector. Returns 0 without a width.
pub fn selector_offset(index: usize, width: f32, route_count: usize, selector_size: f32) -> f32 {
    if !(width > 0.0) || route_count == 0 {
        return 0.0;
    }

    let item_width = width / route_count as f32;
    let centered = index as f32 * item_width + (item_width - selector_size) / 2.0;
    clamp_number(centered, 0.0, width - selector_size)
}

/// Selector position that follows a finger at `relative_x`
pub fn drag_offset(relative_x: f32, width: f32, selector_size: f32) -> f32 {
    clamp_number(relative_x - selector_size / 2.0, 0.0, width - selector_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_number() {
        assert_eq!(clamp_number(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_number(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_number(11.0, 0.0, 10.0), 10.0);
        // Inverted range resolves to the lower bound
        assert_eq!(clamp_number(3.0, 0.0, -4.0), 0.0);
    }

    #[test]
    fn test_index_tab_ranges() {
        // Three tabs over 300 px: [0,100) [100,200) [200,300)
        assert_eq!(index_from_position(0.0, 300.0, 3, 0), 0);
        assert_eq!(index_from_position(99.9, 300.0, 3, 0), 0);
        assert_eq!(index_from_position(100.0, 300.0, 3, 0), 1);
        assert_eq!(index_from_position(199.0, 300.0, 3, 0), 1);
        assert_eq!(index_from_position(250.0, 300.0, 3, 0), 2);
    }

    #[test]
    fn test_index_clamps_outside_row() {
        assert_eq!(index_from_position(-40.0, 300.0, 3, 1), 0);
        assert_eq!(index_from_position(300.0, 300.0, 3, 1), 2);
        assert_eq!(index_from_position(5000.0, 300.0, 3, 1), 2);
    }

    #[test]
    fn test_index_without_width_returns_fallback() {
        assert_eq!(index_from_position(250.0, 0.0, 3, 1), 1);
        assert_eq!(index_from_position(f32::NAN, 300.0, 3, 2), 2);
    }

    #[test]
    fn test_index_always_in_range() {
        for route_count in 1..6 {
            let mut x = -100.0;
            while x < 500.0 {
                let index = index_from_position(x, 320.0, route_count, 0);
                assert!(index < route_count);
                x += 7.5;
            }
        }
    }

    #[test]
    fn test_selector_offset_centered() {
        assert_eq!(selector_offset(0, 300.0, 3, 44.0), 28.0);
        assert_eq!(selector_offset(1, 300.0, 3, 44.0), 128.0);
        assert_eq!(selector_offset(2, 300.0, 3, 44.0), 228.0);
        assert_eq!(selector_offset(1, 0.0, 3, 44.0), 0.0);
    }

    #[test]
    fn test_selector_offset_stays_inside_row() {
        for route_count in 1..8 {
            for width in [44.0, 60.0, 120.0, 300.0, 411.0] {
                let mut previous = 0.0;
                for index in 0..route_count {
                    let offset = selector_offset(index, width, route_count, 44.0);
                    assert!(offset >= 0.0);
                    assert!(offset >= previous);
                    assert!(offset + 44.0 <= width + 1e-3);
                    previous = offset;
                }
            }
        }
    }

    #[test]
    fn test_drag_offset_follows_finger() {
        assert_eq!(drag_offset(150.0, 300.0, 44.0), 128.0);
        assert_eq!(drag_offset(5.0, 300.0, 44.0), 0.0);
        assert_eq!(drag_offset(299.0, 300.0, 44.0), 256.0);
    }

    #[test]
    fn test_metrics() {
        let metrics = ContainerMetrics::new(24.0, 300.0);
        assert!(metrics.is_measured());
        assert_eq!(metrics.relative_x(74.0), 50.0);
        assert!(!ContainerMetrics::default().is_measured());
    }
}
