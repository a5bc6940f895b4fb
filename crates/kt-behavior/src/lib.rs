//! `kt-behavior` — who a freshly spawned templar goes after.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`participant`] | `Participant` view, `ParticipantSource` trait            |
//! | [`policy`]      | `select_target`, `Candidates`, `TargetingPolicy`, `NearestParticipant` |
//! | [`noop`]        | `PassiveTargeting` — never picks a target                |
//!
//! # Rules
//!
//! A participant is a valid target when it is alive, awake, not standing in
//! a building-blocked zone, and within the aggro range of the templar
//! (Euclidean, boundary inclusive).  Among valid targets the closest wins.
//! Targeting runs once, at spawn; there is no re-targeting afterwards.

pub mod noop;
pub mod participant;
pub mod policy;


pub use noop::PassiveTargeting;
pub use participant::{Participant, ParticipantSource};
pub use policy::{Candidates, NearestParticipant, TargetingPolicy, select_target};
