//! Host contract for templar entities.

use kt_core::{AgentHandle, ParticipantId, Position};

use crate::AgentResult;

/// Creates, equips, and destroys agent entities in the host simulation.
///
/// # Failure model
///
/// `create` may fail for any host reason (bad position, prefab missing,
/// entity limit).  The scheduler logs the failure and leaves that slot
/// empty; it never retries within the same raid.
///
/// Every other method receives a handle that may have gone stale since it
/// was created: the host is free to despawn agents on its own.  Such calls
/// must return [`AgentError::InvalidHandle`][crate::AgentError::InvalidHandle]
/// rather than panic.
pub trait AgentFactory {
    /// Create and spawn an entity from `prefab` at `position`.
    fn create(&mut self, prefab: &str, position: Position) -> AgentResult<AgentHandle>;

    /// Remove everything the entity is wearing or carrying.
    fn clear_inventory(&mut self, agent: AgentHandle) -> AgentResult<()>;

    /// Give the entity one item by id.
    fn grant_item(&mut self, agent: AgentHandle, item: &str) -> AgentResult<()>;

    /// `true` while `agent` refers to a live, undestroyed entity.
    fn is_valid(&self, agent: AgentHandle) -> bool;

    /// Kill and remove the entity.
    fn destroy(&mut self, agent: AgentHandle) -> AgentResult<()>;
}

/// Direct activation of a templar's hostile behavior.
pub trait AgentControl {
    /// Order `agent` to attack `target`.
    ///
    /// Fire-and-forget: how (and whether) the attack plays out is the host's
    /// business.
    fn engage(&mut self, agent: AgentHandle, target: ParticipantId);
}
