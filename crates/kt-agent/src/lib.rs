//! `kt-agent` — creating, equipping, activating, and destroying templars.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`factory`] | `AgentFactory`, `AgentControl` traits (host contract)         |
//! | [`loadout`] | `Loadout` — armor + weapon policy, `equip`                     |
//! | [`store`]   | `AgentStore` — in-memory host implementing both traits        |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                |
//!
//! # Who owns what
//!
//! The host owns the entity and everything it does in combat.  The core owns
//! only the decision of *what* a templar carries (its [`Loadout`]) and the
//! handle it must destroy when the raid ends.

pub mod error;
pub mod factory;
pub mod loadout;
pub mod store;


pub use error::{AgentError, AgentResult};
pub use factory::{AgentControl, AgentFactory};
pub use loadout::{Equipped, Loadout};
pub use store::{AgentRecord, AgentStore};
