//! Target selection.

use kt_core::{ParticipantId, Position};
use kt_spatial::PointIndex;

use crate::Participant;

/// Nearest eligible participant within `range` of `origin`.
///
/// Reference form of the targeting rule: a linear scan, ties going to
/// whichever participant comes first in `participants`.  The scheduler
/// queries [`Candidates`] instead, which must pick the same participant.
pub fn select_target(
    origin:       Position,
    participants: &[Participant],
    range:        f32,
) -> Option<&Participant> {
    participants
        .iter()
        .filter(|p| p.is_eligible() && origin.within(p.position, range))
        .min_by(|a, b| {
            origin
                .distance_squared(a.position)
                .total_cmp(&origin.distance_squared(b.position))
        })
}

// ── Candidates ────────────────────────────────────────────────────────────────

/// Eligible participants of one snapshot, indexed for nearest queries.
///
/// Built once per raid so each templar of the batch costs O(log n) instead
/// of a scan.  Ineligible participants are dropped up front.
pub struct Candidates {
    index: PointIndex<ParticipantId>,
    total: usize,
}

impl Candidates {
    pub fn new(participants: &[Participant]) -> Self {
        let index = PointIndex::bulk_load(
            participants
                .iter()
                .filter(|p| p.is_eligible())
                .map(|p| (p.position, p.id)),
        );
        Self { index, total: participants.len() }
    }

    /// Nearest candidate within `range`, with its distance.
    pub fn nearest(&self, origin: Position, range: f32) -> Option<(ParticipantId, f32)> {
        self.index.nearest_within(origin, range).map(|(&id, d)| (id, d))
    }

    /// Number of eligible participants.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Participants in the snapshot, eligible or not.
    pub fn total(&self) -> usize {
        self.total
    }
}

// ── TargetingPolicy ───────────────────────────────────────────────────────────

/// Pluggable spawn-time targeting.
///
/// # Example
///
/// ```rust,ignore
/// struct FirstInRange;
///
/// impl TargetingPolicy for FirstInRange {
///     fn select(&self, origin: Position, candidates: &Candidates, range: f32) -> Option<ParticipantId> {
///         candidates.nearest(origin, range * 2.0).map(|(id, _)| id)
///     }
/// }
/// ```
pub trait TargetingPolicy {
    /// Pick a target for a templar spawned at `origin`, or `None` to leave it
    /// idle.
    fn select(&self, origin: Position, candidates: &Candidates, range: f32) -> Option<ParticipantId>;
}

/// Closest eligible participant within range.  The default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestParticipant;

impl TargetingPolicy for NearestParticipant {
    fn select(&self, origin: Position, candidates: &Candidates, range: f32) -> Option<ParticipantId> {
        candidates.nearest(origin, range).map(|(id, _)| id)
    }
}
