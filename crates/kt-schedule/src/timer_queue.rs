//! `TimerQueue` — deterministic tick-indexed timer queue.
//!
//! Same shape as a sparse wake queue: a `BTreeMap` from due tick to the
//! tokens due then, plus a side table of live timers.  Cancelling removes the
//! side-table entry only; the stale token is skipped when its tick is popped.

use std::collections::{BTreeMap, HashMap};

use kt_core::{SimClock, Tick};

use crate::{Fired, TimerAction, TimerHost, TimerToken};

struct Timer {
    action: TimerAction,
    /// Re-arm period in ticks, `None` for one-shot timers.
    every:  Option<u64>,
}

/// A [`TimerHost`] driven by explicit clock advancement.
pub struct TimerQueue {
    clock:      SimClock,
    due:        BTreeMap<Tick, Vec<TimerToken>>,
    timers:     HashMap<TimerToken, Timer>,
    next_token: u64,
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new(SimClock::default())
    }
}

impl TimerQueue {
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            due:        BTreeMap::new(),
            timers:     HashMap::new(),
            next_token: 0,
        }
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Number of armed (not yet fired, not cancelled) timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn is_armed(&self, token: TimerToken) -> bool {
        self.timers.contains_key(&token)
    }

    /// Earliest tick at which a live timer is due.
    pub fn next_due(&self) -> Option<Tick> {
        self.due
            .iter()
            .find(|(_, tokens)| tokens.iter().any(|t| self.timers.contains_key(t)))
            .map(|(&tick, _)| tick)
    }

    /// Pop the earliest live timer due at or before `until`.
    ///
    /// Moves the clock to the timer's due tick and re-arms repeating timers
    /// before returning, so whatever the caller arms while handling the
    /// timer is ordered after it.  Deadlines saturate at `u64::MAX`; a
    /// repeating timer that fires there is retired.
    pub fn pop_due(&mut self, until: Tick) -> Option<Fired> {
        loop {
            let mut entry = self.due.first_entry()?;
            let at = *entry.key();
            if at > until {
                return None;
            }

            let tokens = entry.get_mut();
            let token = tokens.remove(0);
            if tokens.is_empty() {
                entry.remove();
            }

            let Some(timer) = self.timers.get(&token) else {
                continue; // cancelled
            };
            let (action, every) = (timer.action, timer.every);
            match every.map(|every| at + every) {
                Some(next) if next > at => self.push(next, token),
                _ => {
                    self.timers.remove(&token);
                }
            }

            self.clock.advance_to(at);
            return Some(Fired { at, token, action });
        }
    }

    /// Move the clock forward to `tick` without firing anything.
    ///
    /// Call after draining [`pop_due`][Self::pop_due] up to the same tick.
    pub fn advance_to(&mut self, tick: Tick) {
        self.clock.advance_to(tick);
    }

    fn push(&mut self, at: Tick, token: TimerToken) {
        self.due.entry(at).or_default().push(token);
    }

    fn arm(&mut self, first: u64, every: Option<u64>, action: TimerAction) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.timers.insert(token, Timer { action, every });
        self.push(self.clock.current_tick + first, token);
        token
    }
}

impl TimerHost for TimerQueue {
    fn now(&self) -> Tick {
        self.clock.current_tick
    }

    fn run_after(&mut self, delay_secs: f64, action: TimerAction) -> TimerToken {
        let delay = self.clock.ticks_for_secs_f64(delay_secs);
        self.arm(delay, None, action)
    }

    fn run_repeating(&mut self, first_secs: f64, every_secs: f64, action: TimerAction) -> TimerToken {
        let first = self.clock.ticks_for_secs_f64(first_secs);
        let every = self.clock.ticks_for_secs_f64(every_secs);
        self.arm(first, Some(every), action)
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        self.timers.remove(&token).is_some()
    }
}
