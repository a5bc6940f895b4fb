//! `kt-spatial` — where templars may spawn, and fast nearest-point queries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`provider`] | `PositionProvider` trait, `RoadSpawnPoints`               |
//! | [`index`]    | `PointIndex<T>` (R-tree over `Position`s)                 |
//!
//! Terrain and road data belong to the host.  This crate only defines the
//! contract the scheduler consumes ("give me one spawn position, or none")
//! and a default provider built from a list of known road points.

pub mod index;
pub mod provider;

#[cfg(test)]
mod tests;

pub use index::PointIndex;
pub use provider::{PositionProvider, RoadSpawnPoints};
