//! Observer hooks for raid lifecycle reporting.

use kt_core::{EventId, Tick};

use crate::{EndReport, SlotFailure, SpawnReport, StartReport};

/// Callbacks invoked by the scheduler at key points of a raid.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — raid counter
///
/// ```rust,ignore
/// struct RaidCounter { raids: u32 }
///
/// impl EventObserver for RaidCounter {
///     fn on_event_started(&mut self, _report: &StartReport) {
///         self.raids += 1;
///     }
/// }
/// ```
pub trait EventObserver {
    /// After a batch was spawned and the raid marked active.
    fn on_event_started(&mut self, _report: &StartReport) {}

    /// For every templar that was created and equipped.
    fn on_agent_spawned(&mut self, _spawn: &SpawnReport) {}

    /// For every slot that stayed empty.
    fn on_slot_failed(&mut self, _event: EventId, _slot: u32, _failure: &SlotFailure) {}

    /// A periodic trigger arrived while `active` was still running.
    fn on_trigger_skipped(&mut self, _active: EventId, _at: Tick) {}

    /// After every tracked templar was destroyed or skipped.
    fn on_event_ended(&mut self, _report: &EndReport) {}
}

/// An [`EventObserver`] that does nothing.
pub struct NoopObserver;

impl EventObserver for NoopObserver {}
