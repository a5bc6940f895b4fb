//! `PointIndex<T>` — R-tree over world positions with an attached payload.
//!
//! Built once from a snapshot (`bulk_load`) and queried many times.  Used to
//! answer "nearest eligible participant within range" for every templar of
//! a batch without a linear scan per templar.

use kt_core::Position;
use rstar::RTree;
use rstar::primitives::GeomWithData;

type Entry<T> = GeomWithData<[f32; 3], T>;

/// Immutable spatial index of `(Position, T)` pairs.
pub struct PointIndex<T> {
    tree: RTree<Entry<T>>,
}

impl<T> PointIndex<T> {
    /// Bulk-load an index.  O(n log n); far faster than repeated inserts.
    pub fn bulk_load<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Position, T)>,
    {
        let entries: Vec<Entry<T>> = entries
            .into_iter()
            .map(|(pos, data)| GeomWithData::new(pos.to_array(), data))
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The entry closest to `origin`, if it lies within `range` (inclusive).
    ///
    /// Returns the payload and the Euclidean distance.
    pub fn nearest_within(&self, origin: Position, range: f32) -> Option<(&T, f32)> {
        let entry = self.tree.nearest_neighbor(&origin.to_array())?;
        let pos = Position::from(*entry.geom());
        origin.within(pos, range).then(|| (&entry.data, origin.distance(pos)))
    }

    /// All entries within `range` of `origin`, nearest first.
    pub fn within(&self, origin: Position, range: f32) -> Vec<(&T, f32)> {
        self.tree
            .nearest_neighbor_iter(&origin.to_array())
            .map(|entry| (&entry.data, Position::from(*entry.geom())))
            .take_while(|&(_, pos)| origin.within(pos, range))
            .map(|(data, pos)| (data, origin.distance(pos)))
            .collect()
    }
}
