//! Shared values written by one component and read by another
//!
//! A [`SharedValue`] is a cheap, clonable handle to a single cell. Every clone
//! observes the same value; a version counter lets readers skip work when
//! nothing changed since they last looked.

use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use std::sync::Arc;

#[derive(Debug)]
struct Cell<T> {
    value: T,
    version: u64,
}

/// Handle to a value shared between UI components
///
/// # Example
///
/// ```
/// use app_state::SharedValue;
///
/// let scroll_y = SharedValue::new(0.0_f32);
/// let reader = scroll_y.clone();
///
/// scroll_y.set(120.0);
/// assert_eq!(reader.get(), 120.0);
/// ```
#[derive(Debug)]
pub struct SharedValue<T> {
    cell: Arc<RwLock<Cell<T>>>,
}

/// Vertical scroll position published by a scroll container
pub type ScrollOffset = SharedValue<f32>;

impl<T> Clone for SharedValue<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Copy + PartialEq> SharedValue<T> {
    /// Create a new shared value
    pub fn new(value: T) -> Self {
        Self {
            cell: Arc::new(RwLock::new(Cell { value, version: 0 })),
        }
    }

    /// Read the current value
    pub fn get(&self) -> T {
        self.cell.read().value
    }

    /// Replace the value; returns true if it changed
    pub fn set(&self, value: T) -> bool {
        self.update(|_| value)
    }

    /// Apply a function to the current value
    pub fn update(&self, f: impl FnOnce(T) -> T) -> bool {
        let mut cell = self.cell.write();
        let next = f(cell.value);
        if cell.value == next {
            return false;
        }
        cell.value = next;
        cell.version += 1;
        tracing::trace!(version = cell.version, "shared value changed");
        true
    }

    /// Number of changes applied so far
    pub fn version(&self) -> u64 {
        self.cell.read().version
    }

    /// Whether two handles point at the same cell
    pub fn same_cell(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Copy + PartialEq + Default> Default for SharedValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + PartialEq + Serialize> Serialize for SharedValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_cell() {
        let a = SharedValue::new(1.0_f32);
        let b = a.clone();
        assert!(a.same_cell(&b));

        b.set(4.5);
        assert_eq!(a.get(), 4.5);
        assert!(!a.same_cell(&SharedValue::new(4.5)));
    }

    #[test]
    fn test_version_only_moves_on_change() {
        let value = ScrollOffset::default();
        assert_eq!(value.version(), 0);

        assert!(!value.set(0.0));
        assert_eq!(value.version(), 0);

        assert!(value.set(10.0));
        assert!(value.update(|y| y + 5.0));
        assert_eq!(value.get(), 15.0);
        assert_eq!(value.version(), 2);
    }

    #[test]
    fn test_serializes_as_inner_value() {
        let value = SharedValue::new(42.0_f32);
        assert_eq!(serde_json::to_string(&value).unwrap(), "42.0");
    }
}
