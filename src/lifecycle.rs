//! Run/pause state machine around the animation frame loop.

use log::debug;

/// Handle returned by the host for a pending animation frame.
pub type FrameHandle = i32;

/// Host service behind `requestAnimationFrame`.
pub trait FrameScheduler {
    /// Requests one frame callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Elapsed-time baseline between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Milliseconds since the previous tick; 0 on the first tick after a reset.
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        let delta = match self.last {
            Some(prev) => (timestamp - prev).max(0.0),
            None => 0.0,
        };
        self.last = Some(timestamp);
        delta
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Tracks the pending frame request and the frame clock.
///
/// Running means exactly one frame request is pending with the host.
#[derive(Debug, Default)]
pub struct Animator {
    pending: Option<FrameHandle>,
    clock: FrameClock,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        if self.pending.is_some() {
            RunState::Running
        } else {
            RunState::Paused
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Schedules a frame unless one is already pending. Returns whether a new
    /// request was made.
    pub fn resume<S: FrameScheduler + ?Sized>(&mut self, frames: &mut S) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.clock.reset();
        self.pending = frames.request_frame();
        debug!("animation resumed (handle {:?})", self.pending);
        self.pending.is_some()
    }

    /// Cancels the pending frame, if any. Returns whether one was cancelled.
    pub fn pause<S: FrameScheduler + ?Sized>(&mut self, frames: &mut S) -> bool {
        match self.pending.take() {
            Some(handle) => {
                frames.cancel_frame(handle);
                debug!("animation paused (cancelled handle {handle})");
                true
            }
            None => false,
        }
    }

    pub fn visibility_changed<S: FrameScheduler + ?Sized>(&mut self, frames: &mut S, hidden: bool) {
        if hidden {
            self.pause(frames);
        } else {
            self.resume(frames);
        }
    }

    /// Marks the pending request as consumed and returns the frame delta.
    pub fn begin_frame(&mut self, timestamp: f64) -> f64 {
        self.pending = None;
        self.clock.tick(timestamp)
    }

    /// Requests the next frame of the loop.
    pub fn end_frame<S: FrameScheduler + ?Sized>(&mut self, frames: &mut S) {
        if self.pending.is_none() {
            self.pending = frames.request_frame();
        }
    }
}
