//! Application state shared across Hearth UI components
//!
//! Values in this crate are written by one component and read by others
//! during the same UI pass, such as the scroll offset a themed container
//! publishes for the safe-area overlay.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod shared_value;

pub use shared_value::{ScrollOffset, SharedValue};
