//! Tick scheduling seam between the countdown and the host's clock.
//!
//! The session arms the scheduler whenever the countdown starts and
//! disarms it whenever it stops. A host implementation owns the real
//! one-second interval (an event loop timer, a UI frame callback) and
//! feeds each tick back through `Session::tick` with the armed token.
//! Ticks carrying a retired token are no-ops, so disarming late is safe.

use std::cell::RefCell;
use std::rc::Rc;

use super::countdown::TickToken;

/// Host clock driving the countdown.
pub trait TickScheduler {
    /// Start delivering one tick per second carrying `token`.
    ///
    /// Replaces any previously armed token.
    fn arm(&mut self, token: TickToken);

    /// Stop delivering ticks. Safe to call when nothing is armed.
    fn disarm(&mut self);
}

/// Scheduler that never ticks. For headless hosts that drive ticks
/// directly from `Session::timer().token()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScheduler;

impl TickScheduler for NullScheduler {
    fn arm(&mut self, _token: TickToken) {}

    fn disarm(&mut self) {}
}

/// Scheduler whose clock is advanced by hand.
///
/// Clones share state, so a test can keep one handle while the session
/// owns another.
///
/// ```
/// use astro_pictionary::timer::{Countdown, ManualScheduler, TickScheduler};
///
/// let scheduler = ManualScheduler::new();
/// let mut handle = scheduler.clone();
///
/// let mut timer = Countdown::new(60);
/// handle.arm(timer.start());
///
/// assert_eq!(scheduler.armed(), timer.token());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualState>>,
}

#[derive(Debug, Default)]
struct ManualState {
    armed: Option<TickToken>,
    arms: usize,
    disarms: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token ticks would currently be delivered with.
    #[must_use]
    pub fn armed(&self) -> Option<TickToken> {
        self.inner.borrow().armed
    }

    /// Times `arm` was called.
    #[must_use]
    pub fn arm_count(&self) -> usize {
        self.inner.borrow().arms
    }

    /// Times `disarm` was called.
    #[must_use]
    pub fn disarm_count(&self) -> usize {
        self.inner.borrow().disarms
    }
}

impl TickScheduler for ManualScheduler {
    fn arm(&mut self, token: TickToken) {
        let mut state = self.inner.borrow_mut();
        state.armed = Some(token);
        state.arms += 1;
    }

    fn disarm(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.armed = None;
        state.disarms += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Countdown;

    #[test]
    fn test_manual_scheduler_shares_state() {
        let scheduler = ManualScheduler::new();
        let mut handle = scheduler.clone();
        let mut timer = Countdown::new(10);

        handle.arm(timer.start());
        assert!(scheduler.armed().is_some());
        assert_eq!(scheduler.arm_count(), 1);

        handle.disarm();
        assert!(scheduler.armed().is_none());
        assert_eq!(scheduler.disarm_count(), 1);
    }

    #[test]
    fn test_rearm_replaces_token() {
        let mut scheduler = ManualScheduler::new();
        let mut timer = Countdown::new(10);

        let first = timer.start();
        scheduler.arm(first);
        let second = timer.start();
        scheduler.arm(second);

        assert_eq!(scheduler.armed(), Some(second));
    }
}
