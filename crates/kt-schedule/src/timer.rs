//! Timer vocabulary shared by every timer host.

use std::fmt;

use kt_core::{EventId, Tick};

/// What a timer does when it fires.
///
/// Timers carry data instead of closures so the plugin can dispatch them
/// with `&mut self` access to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// Periodic raid trigger.
    StartEvent,
    /// End of the raid `event`.  Ignored if that raid is no longer active.
    EndEvent { event: EventId },
}

/// Cancellation handle for an armed timer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TimerToken(pub u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub at:     Tick,
    pub token:  TimerToken,
    pub action: TimerAction,
}

/// Host scheduling primitives.
///
/// Delays are in seconds, as configured; the host decides the resolution
/// but must round up, never down.
pub trait TimerHost {
    /// The current tick.
    fn now(&self) -> Tick;

    /// Fire `action` once, `delay_secs` from now.
    fn run_after(&mut self, delay_secs: f64, action: TimerAction) -> TimerToken;

    /// Fire `action` `first_secs` from now and then every `every_secs`.
    fn run_repeating(&mut self, first_secs: f64, every_secs: f64, action: TimerAction) -> TimerToken;

    /// Disarm a timer.  Returns `false` if it already fired (one-shot) or
    /// was already cancelled.
    fn cancel(&mut self, token: TimerToken) -> bool;
}
