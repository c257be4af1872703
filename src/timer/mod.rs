//! Turn timer: the countdown state machine and the scheduling seam the
//! host clock plugs into.

pub mod countdown;
pub mod scheduler;

pub use countdown::{Countdown, Tick, TickToken, TimerState};
pub use scheduler::{ManualScheduler, NullScheduler, TickScheduler};
