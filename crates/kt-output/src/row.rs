//! Plain data rows written by output backends.

use std::fmt;

/// Which lifecycle point an [`EventRow`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Started,
    Ended,
    /// End reached through plugin unload rather than the duration timer.
    Shutdown,
    /// Periodic trigger ignored because the raid was still active.
    Skipped,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Started  => "started",
            Phase::Ended    => "ended",
            Phase::Shutdown => "shutdown",
            Phase::Skipped  => "skipped",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of `events.csv`.  Counters that don't apply to `phase` are 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub event_id:  u32,
    pub phase:     Phase,
    pub tick:      u64,
    pub requested: u32,
    pub spawned:   u32,
    pub engaged:   u32,
    pub failed:    u32,
    pub destroyed: u32,
    pub skipped:   u32,
}

impl EventRow {
    pub fn new(event_id: u32, phase: Phase, tick: u64) -> Self {
        Self {
            event_id,
            phase,
            tick,
            requested: 0,
            spawned:   0,
            engaged:   0,
            failed:    0,
            destroyed: 0,
            skipped:   0,
        }
    }
}

/// One line of `spawns.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRow {
    pub event_id: u32,
    pub slot:     u32,
    pub agent:    u64,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    /// Empty when the weapon pool was empty.
    pub weapon:   String,
    /// `None` when nobody was in range.
    pub target:   Option<u64>,
}
