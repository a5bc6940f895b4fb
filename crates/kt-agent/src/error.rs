use kt_core::{AgentHandle, Position};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("host rejected creation of {prefab:?} at {position}")]
    CreationRejected { prefab: String, position: Position },

    /// The handle no longer refers to a live agent (killed, despawned, or
    /// already destroyed).
    #[error("invalid agent handle {0}")]
    InvalidHandle(AgentHandle),
}

pub type AgentResult<T> = Result<T, AgentError>;
