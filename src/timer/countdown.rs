//! Per-card countdown.
//!
//! The countdown never schedules anything itself. Starting it hands out a
//! [`TickToken`]; whoever drives the clock delivers one tick per second
//! with that token. Every stop, reset or restart retires the token, so a
//! tick that was already in flight when the countdown was cancelled is
//! ignored instead of corrupting `remaining`.

/// Proof that a tick belongs to the current run of the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickToken {
    epoch: u64,
}

/// Observable countdown state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Full duration, not running.
    Idle,
    /// Counting down.
    Running,
    /// Stopped part way through.
    Paused,
    /// Reached zero; stays here until reset or restarted.
    Expired,
}

/// Outcome of delivering a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Token was retired or the countdown is not running. Nothing changed.
    Stale,
    /// One second elapsed; seconds left.
    Remaining(u32),
    /// Reached zero. Reported once per run.
    Expired,
}

/// Countdown with cancellable ticks.
///
/// ## Example
///
/// ```
/// use astro_pictionary::timer::{Countdown, Tick, TimerState};
///
/// let mut timer = Countdown::new(2);
/// let token = timer.start();
///
/// assert_eq!(timer.tick(token), Tick::Remaining(1));
/// assert_eq!(timer.tick(token), Tick::Expired);
/// assert_eq!(timer.tick(token), Tick::Stale);
/// assert_eq!(timer.state(), TimerState::Expired);
/// ```
#[derive(Clone, Debug)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    running: bool,
    epoch: u64,
}

impl Countdown {
    /// Create an idle countdown of `duration` seconds.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
            epoch: 0,
        }
    }

    /// Full duration in seconds.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Token for the current run, if running.
    #[must_use]
    pub fn token(&self) -> Option<TickToken> {
        self.running.then_some(TickToken { epoch: self.epoch })
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else if self.remaining == 0 {
            TimerState::Expired
        } else if self.remaining == self.duration {
            TimerState::Idle
        } else {
            TimerState::Paused
        }
    }

    /// Begin counting down from the current value.
    ///
    /// A running countdown is stopped first so there is never more than
    /// one live token. Starting an expired countdown rewinds it to the full
    /// duration.
    pub fn start(&mut self) -> TickToken {
        self.stop();
        if self.remaining == 0 {
            self.remaining = self.duration;
        }
        self.running = true;
        self.epoch += 1;
        TickToken { epoch: self.epoch }
    }

    /// Stop counting. Returns whether the countdown was running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.epoch += 1;
        true
    }

    /// Stop and rewind to the full duration.
    pub fn reset(&mut self) {
        self.stop();
        self.remaining = self.duration;
    }

    /// Stop if running, otherwise start. Returns the new token when started.
    pub fn toggle(&mut self) -> Option<TickToken> {
        if self.stop() {
            None
        } else {
            Some(self.start())
        }
    }

    /// Deliver one elapsed second.
    pub fn tick(&mut self, token: TickToken) -> Tick {
        if !self.running || token.epoch != self.epoch {
            return Tick::Stale;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.epoch += 1;
            Tick::Expired
        } else {
            Tick::Remaining(self.remaining)
        }
    }

    /// Set the value shown without running, e.g. after loading a snapshot.
    ///
    /// Clamped to the duration.
    pub fn restore(&mut self, remaining: u32) {
        self.stop();
        self.remaining = remaining.min(self.duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle() {
        let timer = Countdown::new(60);
        assert_eq!(timer.remaining(), 60);
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.token().is_none());
    }

    #[test]
    fn test_ticks_count_down() {
        let mut timer = Countdown::new(60);
        let token = timer.start();
        assert_eq!(timer.tick(token), Tick::Remaining(59));
        assert_eq!(timer.tick(token), Tick::Remaining(58));
        assert_eq!(timer.remaining(), 58);
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn test_stop_retires_token() {
        let mut timer = Countdown::new(60);
        let token = timer.start();
        timer.tick(token);

        assert!(timer.stop());
        assert_eq!(timer.tick(token), Tick::Stale);
        assert_eq!(timer.remaining(), 59);
        assert_eq!(timer.state(), TimerState::Paused);

        assert!(!timer.stop());
    }

    #[test]
    fn test_restart_retires_old_token() {
        let mut timer = Countdown::new(60);
        let first = timer.start();
        let second = timer.start();

        assert_ne!(first, second);
        assert_eq!(timer.tick(first), Tick::Stale);
        assert_eq!(timer.tick(second), Tick::Remaining(59));
    }

    #[test]
    fn test_late_tick_after_reset_is_ignored() {
        let mut timer = Countdown::new(60);
        let token = timer.start();
        timer.tick(token);
        timer.reset();

        assert_eq!(timer.tick(token), Tick::Stale);
        assert_eq!(timer.remaining(), 60);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut timer = Countdown::new(3);
        let token = timer.start();
        let ticks: Vec<_> = (0..5).map(|_| timer.tick(token)).collect();

        assert_eq!(
            ticks,
            vec![
                Tick::Remaining(2),
                Tick::Remaining(1),
                Tick::Expired,
                Tick::Stale,
                Tick::Stale
            ]
        );
        assert!(!timer.is_running());
        assert_eq!(timer.state(), TimerState::Expired);
    }

    #[test]
    fn test_start_after_expiry_rewinds() {
        let mut timer = Countdown::new(1);
        let token = timer.start();
        assert_eq!(timer.tick(token), Tick::Expired);

        let token = timer.start();
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.tick(token), Tick::Expired);
    }

    #[test]
    fn test_toggle() {
        let mut timer = Countdown::new(60);
        let token = timer.toggle();
        assert!(token.is_some());
        assert!(timer.is_running());

        assert!(timer.toggle().is_none());
        assert!(!timer.is_running());
        assert_eq!(timer.tick(token.unwrap()), Tick::Stale);
    }

    #[test]
    fn test_restore_clamps_and_idles() {
        let mut timer = Countdown::new(60);
        timer.start();
        timer.restore(90);
        assert_eq!(timer.remaining(), 60);
        assert!(!timer.is_running());

        timer.restore(12);
        assert_eq!(timer.state(), TimerState::Paused);
    }
}
