//! Spring-driven animated values
//!
//! An [`AnimatedValue`] holds one scalar that either sits still or springs
//! towards a target. Only one target is active at a time: starting a new
//! spring supersedes the previous one, and writing a value directly stops
//! any spring in flight.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::tokens::spring;

/// Spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpringConfig {
    /// Spring stiffness
    pub stiffness: f32,
    /// Damping ratio (1.0 = critically damped)
    pub damping_ratio: f32,
    /// Snap to the target instead of overshooting it
    pub overshoot_clamping: bool,
    /// Distance and speed under which the spring settles
    pub rest_threshold: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: spring::STIFFNESS,
            damping_ratio: spring::DAMPING_RATIO,
            overshoot_clamping: true,
            rest_threshold: spring::REST_THRESHOLD,
        }
    }
}

/// A scalar animated by a spring
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    velocity: f32,
    target: Option<f32>,
    config: SpringConfig,
}

impl AnimatedValue {
    /// Create a value at rest
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: None,
            config,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Target of the spring in flight, if any
    pub fn target(&self) -> Option<f32> {
        self.target
    }

    /// Whether a spring is in flight
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Jump to a value, cancelling any spring
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.target = None;
    }

    /// Freeze where the value is now; returns that value
    pub fn stop(&mut self) -> f32 {
        self.velocity = 0.0;
        self.target = None;
        self.value
    }

    /// Start springing towards a target, superseding any previous spring
    pub fn spring_to(&mut self, target: f32) {
        self.target = Some(target);
    }

    /// Advance the spring by `dt`; returns true while still moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let dt = dt.as_secs_f32().clamp(0.0, spring::MAX_STEP);
        let stiffness = self.config.stiffness.max(0.0);
        if stiffness == 0.0 {
            self.set_value(target);
            return false;
        }

        let damping = 2.0 * self.config.damping_ratio.max(0.0) * stiffness.sqrt();
        let displacement = self.value - target;
        let acceleration = -stiffness * displacement - damping * self.velocity;

        self.velocity += acceleration * dt;
        let next = self.value + self.velocity * dt;

        let crossed = (self.value - target) * (next - target) < 0.0;
        if self.config.overshoot_clamping && crossed {
            self.set_value(target);
            return false;
        }
        self.value = next;

        let threshold = self.config.rest_threshold;
        if (self.value - target).abs() < threshold && self.velocity.abs() < threshold {
            self.set_value(target);
            return false;
        }
        true
    }

    /// Tick until the spring settles or `max_steps` is reached
    pub fn settle(&mut self, step: Duration, max_steps: usize) -> f32 {
        for _ in 0..max_steps {
            if !self.tick(step) {
                break;
            }
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_set_value_cancels_spring() {
        let mut value = AnimatedValue::new(0.0, SpringConfig::default());
        value.spring_to(100.0);
        assert!(value.is_animating());

        value.set_value(40.0);
        assert!(!value.is_animating());
        assert!(!value.tick(FRAME));
        assert_eq!(value.value(), 40.0);
    }

    #[test]
    fn test_spring_reaches_target_without_overshoot() {
        let mut value = AnimatedValue::new(0.0, SpringConfig::default());
        value.spring_to(128.0);

        let mut max_seen = 0.0_f32;
        for _ in 0..500 {
            let moving = value.tick(FRAME);
            max_seen = max_seen.max(value.value());
            if !moving {
                break;
            }
        }
        assert_eq!(value.value(), 128.0);
        assert!(max_seen <= 128.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_new_target_supersedes_old() {
        let mut value = AnimatedValue::new(0.0, SpringConfig::default());
        value.spring_to(200.0);
        value.tick(FRAME);
        value.spring_to(50.0);
        assert_eq!(value.target(), Some(50.0));
        assert_eq!(value.settle(FRAME, 1000), 50.0);
    }

    #[test]
    fn test_stop_freezes_in_place() {
        let mut value = AnimatedValue::new(0.0, SpringConfig::default());
        value.spring_to(300.0);
        value.tick(FRAME);
        value.tick(FRAME);
        let frozen = value.stop();
        assert!(frozen > 0.0 && frozen < 300.0);
        assert!(!value.tick(FRAME));
        assert_eq!(value.value(), frozen);
    }

    #[test]
    fn test_zero_stiffness_snaps() {
        let config = SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::default()
        };
        let mut value = AnimatedValue::new(0.0, config);
        value.spring_to(10.0);
        assert!(!value.tick(FRAME));
        assert_eq!(value.value(), 10.0);
    }
}
