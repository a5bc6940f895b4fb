//! `kt-config` — the raid configuration record and its JSON store.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`config`] | `TemplarConfig`, `LootTable`, defaults, `validate`         |
//! | [`loader`] | `load`, `load_reader`, `load_or_init`, `save`              |
//! | [`error`]  | `ConfigError`, `ConfigResult<T>`                           |
//!
//! # File format
//!
//! A single flat JSON object.  Key names follow the `KnightsTemplar.json`
//! layout servers already ship, so existing files load unchanged:
//!
//! ```json
//! {
//!   "MinNPCs": 4,
//!   "MaxNPCs": 10,
//!   "EventInterval": 3600.0,
//!   "EventDuration": 1800.0,
//!   "AggroRange": 20.0,
//!   "Accuracy": 0.7,
//!   "NPCPrefab": "assets/prefabs/npc/murderer/murderer.prefab",
//!   "AllowedWeapons": ["minicrossbow", "bow.compound", "crossbow", "mace"],
//!   "LootTable": { "metal.fragments": 100, "scrap": 50, "rifle.body": 1 },
//!   "Armor": { "head": "metal.facemask", "chest": "metal.plate.torso" }
//! }
//! ```
//!
//! Missing keys take their default value; snake_case field names are
//! accepted as aliases.

pub mod config;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use config::{LootTable, TemplarConfig};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load, load_or_init, load_reader, save};
