//! Keyboard visibility tracking
//!
//! Native keyboard events arrive under platform-specific names: iOS announces
//! the keyboard before it animates (`keyboardWillShow`), Android only after
//! (`keyboardDidShow`). The monitor folds them into one boolean stream that
//! UI components subscribe to while mounted.

use tokio::sync::watch;

use crate::{Platform, PlatformError, Result};

/// Event name pair announcing keyboard show/hide on a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEventNames {
    /// Event fired when the keyboard appears
    pub show: &'static str,
    /// Event fired when the keyboard goes away
    pub hide: &'static str,
}

impl KeyboardEventNames {
    /// Get the event names the given platform emits reliably
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => KeyboardEventNames {
                show: "keyboardWillShow",
                hide: "keyboardWillHide",
            },
            Platform::Android | Platform::Web => KeyboardEventNames {
                show: "keyboardDidShow",
                hide: "keyboardDidHide",
            },
        }
    }
}

/// Source of keyboard visibility for one window
///
/// # Example
///
/// ```
/// use app_platform::{KeyboardMonitor, Platform};
///
/// let monitor = KeyboardMonitor::new(Platform::Ios);
/// let subscription = monitor.subscribe();
///
/// monitor.handle_native_event("keyboardWillShow").unwrap();
/// assert!(subscription.is_visible());
/// ```
#[derive(Debug)]
pub struct KeyboardMonitor {
    platform: Platform,
    names: KeyboardEventNames,
    visible_tx: watch::Sender<bool>,
}

impl KeyboardMonitor {
    /// Create a monitor for a platform, starting with the keyboard hidden
    pub fn new(platform: Platform) -> Self {
        let (visible_tx, _) = watch::channel(false);
        Self {
            platform,
            names: KeyboardEventNames::for_platform(platform),
            visible_tx,
        }
    }

    /// Get the event names this monitor listens for
    pub fn event_names(&self) -> KeyboardEventNames {
        self.names
    }

    /// Feed a raw native keyboard event
    ///
    /// Returns the resulting visibility. Names the platform does not emit are
    /// rejected without touching the current state.
    pub fn handle_native_event(&self, event: &str) -> Result<bool> {
        let visible = if event == self.names.show {
            true
        } else if event == self.names.hide {
            false
        } else {
            tracing::warn!(platform = %self.platform, event, "ignoring keyboard event");
            return Err(PlatformError::UnsupportedKeyboardEvent {
                platform: self.platform,
                event: event.to_string(),
            });
        };

        self.set_visible(visible);
        Ok(visible)
    }

    /// Set visibility directly
    pub fn set_visible(&self, visible: bool) {
        self.visible_tx.send_if_modified(|current| {
            if *current == visible {
                false
            } else {
                *current = visible;
                true
            }
        });
    }

    /// Current visibility
    pub fn is_visible(&self) -> bool {
        *self.visible_tx.borrow()
    }

    /// Register a listener; dropping the subscription removes it
    pub fn subscribe(&self) -> KeyboardSubscription {
        KeyboardSubscription {
            rx: self.visible_tx.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.visible_tx.receiver_count()
    }
}

/// Scoped registration on a [`KeyboardMonitor`]
#[derive(Debug, Clone)]
pub struct KeyboardSubscription {
    rx: watch::Receiver<bool>,
}

impl KeyboardSubscription {
    /// Latest visibility seen by this listener
    pub fn is_visible(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the next visibility change
    ///
    /// Returns `None` once the monitor has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_per_platform() {
        let ios = KeyboardEventNames::for_platform(Platform::Ios);
        assert_eq!(ios.show, "keyboardWillShow");
        assert_eq!(ios.hide, "keyboardWillHide");

        let android = KeyboardEventNames::for_platform(Platform::Android);
        assert_eq!(android.show, "keyboardDidShow");
        assert_eq!(android.hide, "keyboardDidHide");
    }

    #[test]
    fn test_show_and_hide() {
        let monitor = KeyboardMonitor::new(Platform::Android);
        let sub = monitor.subscribe();
        assert!(!sub.is_visible());

        assert!(monitor.handle_native_event("keyboardDidShow").unwrap());
        assert!(sub.is_visible());

        assert!(!monitor.handle_native_event("keyboardDidHide").unwrap());
        assert!(!sub.is_visible());
    }

    #[test]
    fn test_foreign_event_rejected() {
        let monitor = KeyboardMonitor::new(Platform::Android);
        let result = monitor.handle_native_event("keyboardWillShow");
        assert!(matches!(
            result,
            Err(PlatformError::UnsupportedKeyboardEvent { .. })
        ));
        assert!(!monitor.is_visible());
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let monitor = KeyboardMonitor::new(Platform::Ios);
        let first = monitor.subscribe();
        let second = monitor.subscribe();
        assert_eq!(monitor.listener_count(), 2);

        drop(first);
        assert_eq!(monitor.listener_count(), 1);
        drop(second);
        assert_eq!(monitor.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_subscription_changed() {
        let monitor = KeyboardMonitor::new(Platform::Ios);
        let mut sub = monitor.subscribe();

        monitor.handle_native_event("keyboardWillShow").unwrap();
        assert_eq!(sub.changed().await, Some(true));

        // Repeating the same state does not wake listeners
        monitor.set_visible(true);
        monitor.set_visible(false);
        assert_eq!(sub.changed().await, Some(false));
    }

    #[tokio::test]
    async fn test_changed_after_monitor_dropped() {
        let monitor = KeyboardMonitor::new(Platform::Ios);
        let mut sub = monitor.subscribe();
        drop(monitor);
        assert_eq!(sub.changed().await, None);
    }
}
