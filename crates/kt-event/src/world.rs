//! The host as the scheduler sees it.

use kt_agent::{AgentControl, AgentFactory, AgentResult};
use kt_behavior::{Participant, ParticipantSource};
use kt_core::{AgentHandle, ParticipantId, Position};
use kt_spatial::PositionProvider;

/// Every host contract the scheduler consumes, as one bound.
///
/// Implemented automatically for any type that implements the four parts.
pub trait World: PositionProvider + AgentFactory + AgentControl + ParticipantSource {}

impl<X> World for X where X: PositionProvider + AgentFactory + AgentControl + ParticipantSource {}

/// Glue for hosts whose collaborators are separate objects.
///
/// Delegates each contract to the matching field.
#[derive(Debug, Default)]
pub struct HostWorld<P, A, S> {
    pub spawns:       P,
    pub agents:       A,
    pub participants: S,
}

impl<P, A, S> HostWorld<P, A, S> {
    pub fn new(spawns: P, agents: A, participants: S) -> Self {
        Self { spawns, agents, participants }
    }
}

impl<P: PositionProvider, A, S> PositionProvider for HostWorld<P, A, S> {
    fn spawn_position(&mut self) -> Option<Position> {
        self.spawns.spawn_position()
    }
}

impl<P, A: AgentFactory, S> AgentFactory for HostWorld<P, A, S> {
    fn create(&mut self, prefab: &str, position: Position) -> AgentResult<AgentHandle> {
        self.agents.create(prefab, position)
    }

    fn clear_inventory(&mut self, agent: AgentHandle) -> AgentResult<()> {
        self.agents.clear_inventory(agent)
    }

    fn grant_item(&mut self, agent: AgentHandle, item: &str) -> AgentResult<()> {
        self.agents.grant_item(agent, item)
    }

    fn is_valid(&self, agent: AgentHandle) -> bool {
        self.agents.is_valid(agent)
    }

    fn destroy(&mut self, agent: AgentHandle) -> AgentResult<()> {
        self.agents.destroy(agent)
    }
}

impl<P, A: AgentControl, S> AgentControl for HostWorld<P, A, S> {
    fn engage(&mut self, agent: AgentHandle, target: ParticipantId) {
        self.agents.engage(agent, target)
    }
}

impl<P, A, S: ParticipantSource> ParticipantSource for HostWorld<P, A, S> {
    fn list_active_participants(&self) -> Vec<Participant> {
        self.participants.list_active_participants()
    }
}
