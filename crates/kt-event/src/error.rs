use kt_agent::AgentError;
use kt_config::ConfigError;
use kt_core::{EventId, KtError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("raid {0} is already active")]
    AlreadyActive(EventId),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] KtError),
}

pub type EventResult<T> = Result<T, EventError>;

/// Why one spawn slot of a raid stayed empty.  Never fatal to the raid.
#[derive(Debug, Error)]
pub enum SlotFailure {
    #[error("no spawn position available")]
    NoSpawnPosition,

    #[error("agent creation failed: {0}")]
    CreationFailed(AgentError),

    /// Created, but the handle went stale while equipping.
    #[error("equipping failed: {0}")]
    EquipFailed(AgentError),
}
