//! Unit tests for kt-spatial.

use kt_core::{Position, SimRng};

use crate::{PointIndex, PositionProvider, RoadSpawnPoints};

fn p(x: f32, y: f32) -> Position {
    Position::new(x, y, 0.0)
}

// ── RoadSpawnPoints ───────────────────────────────────────────────────────────

#[cfg(test)]
mod provider_tests {
    use super::*;

    #[test]
    fn empty_provider_yields_none() {
        let mut provider = RoadSpawnPoints::empty(SimRng::new(1));
        assert!(provider.is_empty());
        assert_eq!(provider.spawn_position(), None);
        assert_eq!(provider.spawn_position(), None);
    }

    #[test]
    fn picks_only_known_points() {
        let points = vec![p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)];
        let mut provider = RoadSpawnPoints::new(points.clone(), SimRng::new(7));
        for _ in 0..100 {
            let pos = provider.spawn_position().unwrap();
            assert!(points.contains(&pos));
        }
    }

    #[test]
    fn eventually_uses_every_point() {
        let points = vec![p(1.0, 1.0), p(2.0, 2.0)];
        let mut provider = RoadSpawnPoints::new(points.clone(), SimRng::new(7));
        let seen: Vec<Position> = (0..200).filter_map(|_| provider.spawn_position()).collect();
        assert!(points.iter().all(|pt| seen.contains(pt)));
    }

    #[test]
    fn set_points_replaces_data() {
        let mut provider = RoadSpawnPoints::empty(SimRng::new(1));
        provider.set_points(vec![p(5.0, 5.0)]);
        assert_eq!(provider.len(), 1);
        assert_eq!(provider.spawn_position(), Some(p(5.0, 5.0)));
    }

    #[test]
    fn closures_are_providers() {
        let mut queue = vec![p(3.0, 0.0), p(4.0, 0.0)];
        let mut provider = move || queue.pop();
        assert_eq!(provider.spawn_position(), Some(p(4.0, 0.0)));
        assert_eq!(provider.spawn_position(), Some(p(3.0, 0.0)));
        assert_eq!(provider.spawn_position(), None);
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod index_tests {
    use super::*;

    fn sample() -> PointIndex<u32> {
        PointIndex::bulk_load([(p(15.0, 0.0), 1), (p(0.0, 5.0), 2), (p(30.0, 30.0), 3)])
    }

    #[test]
    fn nearest_within_range() {
        let idx = sample();
        let (id, d) = idx.nearest_within(Position::ORIGIN, 20.0).unwrap();
        assert_eq!(*id, 2);
        assert_eq!(d, 5.0);
    }

    #[test]
    fn nearest_out_of_range_is_none() {
        let idx = sample();
        assert!(idx.nearest_within(Position::ORIGIN, 4.0).is_none());
    }

    #[test]
    fn boundary_is_inclusive() {
        let idx = PointIndex::bulk_load([(p(20.0, 0.0), 'a')]);
        assert!(idx.nearest_within(Position::ORIGIN, 20.0).is_some());
        let idx = PointIndex::bulk_load([(p(21.0, 0.0), 'a')]);
        assert!(idx.nearest_within(Position::ORIGIN, 20.0).is_none());
    }

    #[test]
    fn within_sorted_nearest_first() {
        let idx = sample();
        let hits: Vec<u32> = idx.within(Position::ORIGIN, 20.0).into_iter().map(|(id, _)| *id).collect();
        assert_eq!(hits, vec![2, 1]);
    }

    #[test]
    fn empty_index() {
        let idx: PointIndex<u32> = PointIndex::bulk_load(Vec::new());
        assert!(idx.is_empty());
        assert!(idx.nearest_within(Position::ORIGIN, 1_000.0).is_none());
        assert!(idx.within(Position::ORIGIN, 1_000.0).is_empty());
    }
}
