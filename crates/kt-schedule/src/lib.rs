//! `kt-schedule` — "run after delay" and "run repeating", with cancellation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`timer`]       | `TimerAction`, `TimerToken`, `Fired`, `TimerHost` trait |
//! | [`timer_queue`] | `TimerQueue` (`BTreeMap<Tick, Vec<TimerToken>>`)        |
//!
//! # Timer model (summary)
//!
//! Hosts that have their own invoke/repeat primitives implement
//! [`TimerHost`] on top of them.  Everything else uses [`TimerQueue`], a
//! deterministic queue driven by a [`SimClock`][kt_core::SimClock]:
//!
//! ```text
//! while let Some(fired) = timers.pop_due(target) {
//!     plugin.on_timer(fired.action, &mut timers, &mut observer)?;   // may arm new timers
//! }
//! timers.advance_to(target);
//! ```
//!
//! Timers due on the same tick fire in the order they were armed.

pub mod timer;
pub mod timer_queue;

#[cfg(test)]
mod tests;

pub use timer::{Fired, TimerAction, TimerHost, TimerToken};
pub use timer_queue::TimerQueue;
