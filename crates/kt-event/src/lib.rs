//! `kt-event` — the raid lifecycle: trigger, spawn, target, despawn.
//!
//! # State machine
//!
//! ```text
//!            tick (batch of 0..=max spawned)
//!   Idle ─────────────────────────────────────▶ Active
//!    ▲                                            │
//!    └──────── duration elapsed / shutdown ───────┘
//!
//!   tick while Active → ignored (no overlapping raids)
//! ```
//!
//! # One raid, step by step
//!
//! ```text
//! ① draw count uniformly from [min_agents, max_agents]
//! ② snapshot participants once; index the eligible ones
//! ③ per slot: spawn position → create → equip → target → track
//!              (any failure skips the slot, never the raid)
//! ④ mark active, arm EndEvent after event_duration_secs
//! ⑤ EndEvent: destroy every still-valid tracked handle, go idle
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`world`]     | `World` (all host contracts in one bound), `HostWorld`     |
//! | [`event`]     | `Event`, `TrackedSet`, reports, `TickOutcome`              |
//! | [`observer`]  | `EventObserver`, `NoopObserver`                            |
//! | [`scheduler`] | `EventScheduler` — the state machine                       |
//! | [`builder`]   | `EventSchedulerBuilder`                                    |
//! | [`plugin`]    | `TemplarPlugin` — load / timer dispatch / reload / unload  |
//! | [`error`]     | `EventError`, `SlotFailure`                                |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `fx-hash` | Tracked-agent set uses `FxHashSet`.                 |

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod plugin;
pub mod scheduler;
pub mod world;


pub use builder::EventSchedulerBuilder;
pub use error::{EventError, EventResult, SlotFailure};
pub use event::{EndReason, EndReport, Event, SpawnReport, StartReport, TickOutcome, TrackedSet};
pub use observer::{EventObserver, NoopObserver};
pub use plugin::{ConfigChange, TemplarPlugin};
pub use scheduler::EventScheduler;
pub use world::{HostWorld, World};
