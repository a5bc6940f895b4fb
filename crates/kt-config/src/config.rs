//! The raid configuration record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ConfigError, ConfigResult};

// ── LootTable ─────────────────────────────────────────────────────────────────

/// Item id → drop weight.
///
/// Parsed and validated but not consumed by anything yet: it is reserved for
/// dropping loot when a templar dies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LootTable(pub BTreeMap<String, u32>);

impl LootTable {
    pub fn get(&self, item: &str) -> Option<u32> {
        self.0.get(item).copied()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.0.values().map(|&w| w as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<const N: usize> From<[(&str, u32); N]> for LootTable {
    fn from(entries: [(&str, u32); N]) -> Self {
        LootTable(entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
    }
}

// ── TemplarConfig ─────────────────────────────────────────────────────────────

/// Tunable parameters of the raid event.
///
/// Loaded once at startup and treated as immutable while an event is in
/// flight; the only way to change it is an explicit reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplarConfig {
    /// Fewest templars a raid will try to spawn.
    #[serde(rename = "MinNPCs", alias = "min_agents")]
    pub min_agents: u32,

    /// Most templars a raid will try to spawn (inclusive).
    #[serde(rename = "MaxNPCs", alias = "max_agents")]
    pub max_agents: u32,

    /// Seconds between raid triggers.
    #[serde(rename = "EventInterval", alias = "event_interval_secs")]
    pub event_interval_secs: f64,

    /// Seconds a raid lasts before its templars are despawned.  Should be
    /// shorter than the interval; if it isn't, triggers that land during a
    /// raid are simply ignored.
    #[serde(rename = "EventDuration", alias = "event_duration_secs")]
    pub event_duration_secs: f64,

    /// Radius within which a freshly spawned templar picks a target.
    #[serde(rename = "AggroRange", alias = "aggro_range")]
    pub aggro_range: f32,

    /// Hit accuracy in `[0, 1]`.  Carried for the host's combat layer.
    #[serde(rename = "Accuracy", alias = "accuracy")]
    pub accuracy: f32,

    /// Prefab path handed to the host when creating a templar.
    #[serde(rename = "NPCPrefab", alias = "agent_prefab")]
    pub agent_prefab: String,

    /// Weapon item ids; each templar gets exactly one, chosen uniformly.
    #[serde(rename = "AllowedWeapons", alias = "allowed_weapons")]
    pub allowed_weapons: Vec<String>,

    #[serde(rename = "LootTable", alias = "loot_table")]
    pub loot_table: LootTable,

    /// Armor slot → item id.  Only the item ids are granted.
    #[serde(rename = "Armor", alias = "armor")]
    pub armor: BTreeMap<String, String>,
}

impl Default for TemplarConfig {
    fn default() -> Self {
        Self {
            min_agents:          4,
            max_agents:          10,
            event_interval_secs: 3600.0,
            event_duration_secs: 1800.0,
            aggro_range:         20.0,
            accuracy:            0.7,
            agent_prefab:        "assets/prefabs/npc/murderer/murderer.prefab".to_owned(),
            allowed_weapons:     ["minicrossbow", "bow.compound", "crossbow", "mace"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            loot_table:          LootTable::from([
                ("metal.fragments", 100),
                ("scrap", 50),
                ("rifle.body", 1),
            ]),
            armor:               [
                ("head", "metal.facemask"),
                ("chest", "metal.plate.torso"),
                ("legs", "roadsign.kilt"),
                ("feet", "boots.frog"),
            ]
            .into_iter()
            .map(|(slot, item)| (slot.to_owned(), item.to_owned()))
            .collect(),
        }
    }
}

impl TemplarConfig {
    /// Reject records the scheduler cannot run with.
    ///
    /// A duration at or above the interval is allowed (the scheduler ignores
    /// triggers while a raid is active) but logged.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_agents == 0 {
            return Err(invalid("MinNPCs must be at least 1"));
        }
        if self.min_agents > self.max_agents {
            return Err(invalid(format!(
                "MinNPCs ({}) exceeds MaxNPCs ({})",
                self.min_agents, self.max_agents
            )));
        }
        if !(self.event_interval_secs.is_finite() && self.event_interval_secs > 0.0) {
            return Err(invalid(format!(
                "EventInterval must be positive, got {}",
                self.event_interval_secs
            )));
        }
        if !(self.event_duration_secs.is_finite() && self.event_duration_secs > 0.0) {
            return Err(invalid(format!(
                "EventDuration must be positive, got {}",
                self.event_duration_secs
            )));
        }
        if !(self.aggro_range >= 0.0 && self.aggro_range.is_finite()) {
            return Err(invalid(format!(
                "AggroRange must be a non-negative number, got {}",
                self.aggro_range
            )));
        }
        if !(0.0..=1.0).contains(&self.accuracy) {
            return Err(invalid(format!(
                "Accuracy must lie in [0, 1], got {}",
                self.accuracy
            )));
        }
        if self.allowed_weapons.is_empty() {
            return Err(invalid("AllowedWeapons must not be empty"));
        }
        if let Some((item, _)) = self.loot_table.iter().find(|&(_, w)| w == 0) {
            return Err(invalid(format!("LootTable weight for {item:?} must be positive")));
        }

        if self.event_duration_secs >= self.event_interval_secs {
            warn!(
                duration = self.event_duration_secs,
                interval = self.event_interval_secs,
                "EventDuration is not shorter than EventInterval; overlapping triggers will be skipped"
            );
        }
        Ok(())
    }

    /// Armor item ids in slot order.
    pub fn armor_items(&self) -> impl Iterator<Item = &str> {
        self.armor.values().map(String::as_str)
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
