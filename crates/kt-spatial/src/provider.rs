//! Spawn position contract and the default road-point provider.
//!
//! # Pluggability
//!
//! The scheduler asks for positions through [`PositionProvider`], so hosts
//! can plug in terrain path queries, monument exclusion zones or fixed
//! arenas without touching the core.  Returning `None` is not an error: the
//! slot is skipped and the raid continues with fewer templars.

use kt_core::{Position, SimRng};
use tracing::warn;

/// Source of spawn positions.
pub trait PositionProvider {
    /// One valid spawn position, or `None` if none is available right now.
    fn spawn_position(&mut self) -> Option<Position>;
}

/// Closures work as providers, which keeps tests and small hosts terse.
impl<F> PositionProvider for F
where
    F: FnMut() -> Option<Position>,
{
    fn spawn_position(&mut self) -> Option<Position> {
        self()
    }
}

// ── RoadSpawnPoints ───────────────────────────────────────────────────────────

/// Picks uniformly among a fixed set of road positions.
///
/// Positions may repeat across calls; templars spawning on the same road
/// point is acceptable.
pub struct RoadSpawnPoints {
    points: Vec<Position>,
    rng:    SimRng,
}

impl RoadSpawnPoints {
    pub fn new(points: Vec<Position>, rng: SimRng) -> Self {
        Self { points, rng }
    }

    /// A provider with no road data at all.  Every request yields `None`.
    pub fn empty(rng: SimRng) -> Self {
        Self::new(Vec::new(), rng)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replace the known road points, e.g. after the host regenerates terrain.
    pub fn set_points(&mut self, points: Vec<Position>) {
        self.points = points;
    }
}

impl PositionProvider for RoadSpawnPoints {
    fn spawn_position(&mut self) -> Option<Position> {
        let picked = self.rng.choose(&self.points).copied();
        if picked.is_none() {
            warn!("no valid road positions found");
        }
        picked
    }
}
