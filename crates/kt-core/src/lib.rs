//! `kt-core` — foundational types for the templar raid event engine.
//!
//! This crate is a dependency of every other `kt-*` crate.  It has no `kt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `AgentHandle`, `ParticipantId`, `EventId`         |
//! | [`geo`]   | `Position`, Euclidean distance                    |
//! | [`time`]  | `Tick`, `SimClock`                                |
//! | [`rng`]   | `SimRng`                                          |
//! | [`error`] | `KtError`, `KtResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{KtError, KtResult};
pub use geo::Position;
pub use ids::{AgentHandle, EventId, ParticipantId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
