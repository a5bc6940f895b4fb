//! `AgentStore` — an in-memory host for templar entities.
//!
//! Implements [`AgentFactory`] and [`AgentControl`] against plain maps so the
//! scheduler can run without a game server: unit tests, the sandbox demo,
//! and replaying a raid offline all use it.
//!
//! Handles are never reused.  Destroyed records are kept (with `alive =
//! false`) so callers can audit what happened after the fact.

use std::collections::BTreeMap;

use kt_core::{AgentHandle, ParticipantId, Position};

use crate::{AgentControl, AgentError, AgentFactory, AgentResult};

/// Everything the store knows about one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRecord {
    pub prefab:   String,
    pub position: Position,
    /// Items currently held or worn, in grant order.
    pub inventory: Vec<String>,
    /// Last target passed to `engage`.
    pub target:   Option<ParticipantId>,
    pub alive:    bool,
    /// Times `destroy` succeeded for this handle (0 or 1).
    pub destroyed: u32,
}

/// In-memory [`AgentFactory`] + [`AgentControl`].
#[derive(Debug, Default)]
pub struct AgentStore {
    records:       BTreeMap<AgentHandle, AgentRecord>,
    next_handle:   u64,
    starting_kit:  Vec<String>,
    reject_next:   u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items every new entity spawns with, mimicking prefab default gear.
    pub fn with_starting_kit(mut self, items: Vec<String>) -> Self {
        self.starting_kit = items;
        self
    }

    /// Make the next `n` calls to `create` fail.
    pub fn reject_next(&mut self, n: u32) {
        self.reject_next = n;
    }

    /// Simulate the host removing an entity on its own (killed by a player,
    /// server cleanup, …).  Returns `false` if it was already gone.
    pub fn despawn(&mut self, agent: AgentHandle) -> bool {
        match self.records.get_mut(&agent) {
            Some(rec) if rec.alive => {
                rec.alive = false;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, agent: AgentHandle) -> Option<&AgentRecord> {
        self.records.get(&agent)
    }

    /// Handles of entities still alive.
    pub fn live(&self) -> impl Iterator<Item = AgentHandle> + '_ {
        self.records
            .iter()
            .filter(|(_, rec)| rec.alive)
            .map(|(&h, _)| h)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Entities ever created, dead or alive.
    pub fn created_count(&self) -> usize {
        self.records.len()
    }

    /// Sum of successful `destroy` calls across all handles.
    pub fn destroy_calls(&self) -> u32 {
        self.records.values().map(|r| r.destroyed).sum()
    }

    fn live_mut(&mut self, agent: AgentHandle) -> AgentResult<&mut AgentRecord> {
        match self.records.get_mut(&agent) {
            Some(rec) if rec.alive => Ok(rec),
            _ => Err(AgentError::InvalidHandle(agent)),
        }
    }
}

impl AgentFactory for AgentStore {
    fn create(&mut self, prefab: &str, position: Position) -> AgentResult<AgentHandle> {
        if self.reject_next > 0 {
            self.reject_next -= 1;
            return Err(AgentError::CreationRejected { prefab: prefab.to_owned(), position });
        }

        let handle = AgentHandle(self.next_handle);
        self.next_handle += 1;
        self.records.insert(
            handle,
            AgentRecord {
                prefab:    prefab.to_owned(),
                position,
                inventory: self.starting_kit.clone(),
                target:    None,
                alive:     true,
                destroyed: 0,
            },
        );
        Ok(handle)
    }

    fn clear_inventory(&mut self, agent: AgentHandle) -> AgentResult<()> {
        self.live_mut(agent)?.inventory.clear();
        Ok(())
    }

    fn grant_item(&mut self, agent: AgentHandle, item: &str) -> AgentResult<()> {
        self.live_mut(agent)?.inventory.push(item.to_owned());
        Ok(())
    }

    fn is_valid(&self, agent: AgentHandle) -> bool {
        self.records.get(&agent).is_some_and(|r| r.alive)
    }

    fn destroy(&mut self, agent: AgentHandle) -> AgentResult<()> {
        let rec = self.live_mut(agent)?;
        rec.alive = false;
        rec.destroyed += 1;
        Ok(())
    }
}

impl AgentControl for AgentStore {
    fn engage(&mut self, agent: AgentHandle, target: ParticipantId) {
        if let Ok(rec) = self.live_mut(agent) {
            rec.target = Some(target);
        }
    }
}
