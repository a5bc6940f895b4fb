//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  `SimClock` maps ticks
//! to seconds:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Configuration speaks in seconds (`EventInterval = 3600`); timers speak in
//! ticks.  Conversion always rounds up so a timer never fires early.  The
//! default resolution is one second per tick.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Saturates at `u64::MAX`: a timer armed that far out simply never fires.
impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts between ticks and seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many seconds one tick represents.  Default: 1.
    pub tick_duration_secs: u32,
    /// The current tick.
    pub current_tick: Tick,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    ///
    /// A resolution of 0 is treated as 1 second per tick.
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs: tick_duration_secs.max(1),
            current_tick: Tick::ZERO,
        }
    }

    /// Jump forward to `tick`.  Never moves backwards.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        self.current_tick = self.current_tick.max(tick);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0.saturating_mul(self.tick_duration_secs as u64)
    }

    /// Break elapsed time into (day, hour, minute) components.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs();
        let days = total_secs / 86_400;
        let hours = ((total_secs % 86_400) / 3_600) as u32;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        (days, hours, minutes)
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// How many ticks span `secs` seconds.
    ///
    /// Rounds up and never returns less than one tick, so a timer armed
    /// "after 0.2 s" still fires strictly after the current tick.  Spans
    /// beyond `u64::MAX` ticks saturate.
    pub fn ticks_for_secs_f64(&self, secs: f64) -> u64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 1;
        }
        let ticks = (secs / self.tick_duration_secs as f64).ceil();
        (ticks as u64).max(1)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, d, h, m)
    }
}
