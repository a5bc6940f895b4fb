//! What a templar wears and wields.

use kt_config::TemplarConfig;
use kt_core::{AgentHandle, SimRng};
use tracing::debug;

use crate::{AgentFactory, AgentResult};

/// Armor items granted to every templar plus the weapon pool one weapon is
/// drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Loadout {
    armor:   Vec<String>,
    weapons: Vec<String>,
}

/// What `equip` actually handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipped {
    pub armor:  usize,
    pub weapon: Option<String>,
}

impl Loadout {
    pub fn new(armor: Vec<String>, weapons: Vec<String>) -> Self {
        Self { armor, weapons }
    }

    /// Armor values (slot names are dropped) and the weapon list from `config`.
    pub fn from_config(config: &TemplarConfig) -> Self {
        Self::new(
            config.armor_items().map(str::to_owned).collect(),
            config.allowed_weapons.clone(),
        )
    }

    pub fn armor(&self) -> &[String] {
        &self.armor
    }

    pub fn weapons(&self) -> &[String] {
        &self.weapons
    }

    /// Uniform draw from the weapon pool.
    pub fn pick_weapon(&self, rng: &mut SimRng) -> Option<&str> {
        rng.choose(&self.weapons).map(String::as_str)
    }

    /// Strip `agent` of its default kit, then grant every armor item and one
    /// random weapon.
    ///
    /// Stops at the first host error; by then the handle is almost certainly
    /// stale and the caller should drop the slot.
    pub fn equip<F>(&self, factory: &mut F, agent: AgentHandle, rng: &mut SimRng) -> AgentResult<Equipped>
    where
        F: AgentFactory + ?Sized,
    {
        factory.clear_inventory(agent)?;
        for item in &self.armor {
            factory.grant_item(agent, item)?;
        }

        let weapon = self.pick_weapon(rng).map(str::to_owned);
        if let Some(w) = &weapon {
            factory.grant_item(agent, w)?;
        }
        debug!(%agent, armor = self.armor.len(), weapon = ?weapon, "templar equipped");

        Ok(Equipped { armor: self.armor.len(), weapon })
    }
}
