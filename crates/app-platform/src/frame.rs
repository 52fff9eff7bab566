//! Animation frame scheduling
//!
//! Work that has to wait for the next paint (remeasuring a view after layout,
//! for instance) is requested as a frame callback. Requests are identified by
//! a [`FrameHandle`]; the owner keeps the handle, cancels it on teardown and
//! ignores deliveries for handles it no longer holds.

use std::collections::BTreeSet;

/// Identifier of a requested animation frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Raw numeric id
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Something that can schedule work for the next frame
pub trait FrameScheduler {
    /// Request a callback on the next frame
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending request; unknown or fired handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Single-threaded frame request queue driven by the host's paint loop
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
}

impl FrameQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the frame: drain every pending request in request order
    pub fn advance(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    /// Whether a handle is still waiting for a frame
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Number of requests waiting for the next frame
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.insert(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle);
    }
}
