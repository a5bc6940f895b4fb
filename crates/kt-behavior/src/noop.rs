//! A policy that never targets anyone.

use kt_core::{ParticipantId, Position};

use crate::{Candidates, TargetingPolicy};

/// A [`TargetingPolicy`] that always returns `None`.
///
/// Templars still spawn and despawn on schedule but stand idle.  Useful for
/// dry runs on a live server and for tests that only care about lifecycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveTargeting;

impl TargetingPolicy for PassiveTargeting {
    fn select(&self, _origin: Position, _candidates: &Candidates, _range: f32) -> Option<ParticipantId> {
        None
    }
}
