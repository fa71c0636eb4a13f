//! Frame scheduling abstraction.
//!
//! The host owns the display-refresh loop (requestAnimationFrame in the
//! browser). The field requests one frame at a time and keeps the returned
//! handle so teardown can cancel a frame that has not fired yet.

/// Opaque handle for a single scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// Host-provided frame scheduler.
///
/// `request` arms exactly one future invocation of the field's frame step;
/// `cancel` revokes a handle whose callback has not fired. Cancelling an
/// already-fired handle must be a no-op.
pub trait FrameScheduler {
    fn request(&mut self) -> FrameHandle;
    fn cancel(&mut self, handle: FrameHandle);
}
