//! Coalescing of bursty events behind a single timer.

/// Handle returned by the host for a pending timeout.
pub type TimerHandle = i32;

/// Host service behind `setTimeout`/`clearTimeout`.
pub trait Timer {
    fn set_timer(&mut self, delay_ms: i32) -> Option<TimerHandle>;
    fn clear_timer(&mut self, handle: TimerHandle);
}

/// Runs work once the trigger has been quiet for `delay_ms`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: i32,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> i32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Restarts the quiet period.
    pub fn trigger<T: Timer + ?Sized>(&mut self, timer: &mut T) {
        self.cancel(timer);
        self.pending = timer.set_timer(self.delay_ms);
    }

    /// Called when the timer elapses. Returns whether the debounced work
    /// should run now.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn cancel<T: Timer + ?Sized>(&mut self, timer: &mut T) {
        if let Some(handle) = self.pending.take() {
            timer.clear_timer(handle);
        }
    }
}
