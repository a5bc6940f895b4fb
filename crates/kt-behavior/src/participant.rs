//! Read-only participant view.

use kt_core::{ParticipantId, Position};

/// A live, controllable entity as the host reports it.
///
/// The core never mutates participants; it reads these fields once per raid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant {
    pub id:               ParticipantId,
    pub position:         Position,
    pub alive:            bool,
    pub sleeping:         bool,
    /// Standing where building is blocked (inside someone else's base).
    pub building_blocked: bool,
}

impl Participant {
    /// An awake, living participant outside any blocked zone.
    pub fn awake(id: ParticipantId, position: Position) -> Self {
        Self { id, position, alive: true, sleeping: false, building_blocked: false }
    }

    /// Alive, awake, and not building-blocked.  Range is checked separately.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.alive && !self.sleeping && !self.building_blocked
    }
}

/// Host query for the current participant list.
pub trait ParticipantSource {
    fn list_active_participants(&self) -> Vec<Participant>;
}

impl ParticipantSource for Vec<Participant> {
    fn list_active_participants(&self) -> Vec<Participant> {
        self.clone()
    }
}
