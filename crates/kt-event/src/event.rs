//! The in-flight raid and the reports emitted around it.

use kt_core::{AgentHandle, EventId, ParticipantId, Position, Tick};

/// Handles the scheduler must destroy when the raid ends.
#[cfg(not(feature = "fx-hash"))]
pub type TrackedSet = std::collections::HashSet<AgentHandle>;

/// Handles the scheduler must destroy when the raid ends.
#[cfg(feature = "fx-hash")]
pub type TrackedSet = rustc_hash::FxHashSet<AgentHandle>;

/// The single active raid.
///
/// Exists only while the scheduler is `Active`; ending the raid consumes it.
#[derive(Debug, Clone)]
pub struct Event {
    pub id:         EventId,
    pub started_at: Tick,
    pub tracked:    TrackedSet,
}

impl Event {
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_tracking(&self, agent: AgentHandle) -> bool {
        self.tracked.contains(&agent)
    }
}

/// Summary of a raid that just started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartReport {
    pub event:     EventId,
    pub at:        Tick,
    /// Batch size drawn from `[min_agents, max_agents]`.
    pub requested: u32,
    pub spawned:   u32,
    /// Spawned templars that were given a target.
    pub engaged:   u32,
    pub failed:    u32,
}

/// One templar that made it into the world.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnReport {
    pub event:    EventId,
    pub slot:     u32,
    pub handle:   AgentHandle,
    pub position: Position,
    pub weapon:   Option<String>,
    pub target:   Option<ParticipantId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The configured duration ran out.
    Elapsed,
    /// The plugin is unloading.
    Shutdown,
}

/// Summary of a raid that just ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndReport {
    pub event:     EventId,
    pub at:        Tick,
    pub reason:    EndReason,
    pub destroyed: u32,
    /// Handles that were already gone (killed, despawned by the host).
    pub skipped:   u32,
}

/// Result of a periodic trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Started(StartReport),
    /// A raid is still running; the trigger was ignored.
    AlreadyActive(EventId),
}
