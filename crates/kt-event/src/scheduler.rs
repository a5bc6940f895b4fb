//! The `EventScheduler` state machine.

use kt_agent::Loadout;
use kt_behavior::{Candidates, TargetingPolicy};
use kt_config::TemplarConfig;
use kt_core::{EventId, SimRng, Tick};
use kt_schedule::{TimerAction, TimerHost, TimerToken};
use tracing::{debug, info, warn};

use crate::{
    EndReason, EndReport, Event, EventError, EventObserver, EventResult, SlotFailure,
    SpawnReport, StartReport, TickOutcome, TrackedSet, World,
};

/// Owns the raid state and drives it through `Idle` ⇄ `Active`.
///
/// All entry points take `&mut self`: timer callbacks are delivered on one
/// control thread and the borrow checker keeps start and end from
/// interleaving.
///
/// Create via [`EventSchedulerBuilder`][crate::EventSchedulerBuilder].
pub struct EventScheduler<W: World, T: TargetingPolicy> {
    /// Configuration in force.  Never swapped while a raid is active.
    pub(crate) config:  TemplarConfig,

    /// Armor + weapon pool derived from `config`.
    pub(crate) loadout: Loadout,

    /// The host.
    pub world: W,

    /// Spawn-time targeting.
    pub policy: T,

    pub(crate) rng: SimRng,

    /// `Some` while a raid is active.
    pub(crate) current: Option<Event>,

    /// One-shot timer that will end `current`.
    pub(crate) end_timer: Option<TimerToken>,

    /// Id of the most recently started raid (`EventId(0)` before the first).
    pub(crate) last_event: EventId,

    /// Reloaded configuration waiting for the active raid to end.
    pub(crate) pending_config: Option<TemplarConfig>,
}

impl<W: World, T: TargetingPolicy> EventScheduler<W, T> {
    // ── Queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &TemplarConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Event> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<EventId> {
        self.current.as_ref().map(|e| e.id)
    }

    /// Number of tracked handles (0 when idle).
    pub fn tracked_count(&self) -> usize {
        self.current.as_ref().map_or(0, Event::tracked_count)
    }

    pub fn has_pending_config(&self) -> bool {
        self.pending_config.is_some()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Periodic trigger.  Starts a raid unless one is already running.
    pub fn tick<H, O>(&mut self, timers: &mut H, observer: &mut O) -> EventResult<TickOutcome>
    where
        H: TimerHost,
        O: EventObserver,
    {
        if let Some(active) = self.current_id() {
            debug!(event = %active, "raid still active, trigger ignored");
            observer.on_trigger_skipped(active, timers.now());
            return Ok(TickOutcome::AlreadyActive(active));
        }
        self.start_event(timers, observer).map(TickOutcome::Started)
    }

    /// Spawn a batch, mark the raid active, and arm its end timer.
    ///
    /// Partial and empty batches still start a raid; the end timer cleans up
    /// whatever did spawn.
    pub fn start_event<H, O>(&mut self, timers: &mut H, observer: &mut O) -> EventResult<StartReport>
    where
        H: TimerHost,
        O: EventObserver,
    {
        if let Some(active) = self.current_id() {
            return Err(EventError::AlreadyActive(active));
        }

        let now = timers.now();
        let requested = self.rng.gen_count(self.config.min_agents, self.config.max_agents)?;
        let id = self.last_event.next();
        self.last_event = id;

        let participants = self.world.list_active_participants();
        let candidates = Candidates::new(&participants);
        debug!(
            event = %id,
            participants = candidates.total(),
            eligible = candidates.len(),
            "participant snapshot taken"
        );

        let mut tracked = TrackedSet::default();
        let (mut engaged, mut failed) = (0u32, 0u32);

        for slot in 0..requested {
            match self.spawn_slot(id, slot, &candidates) {
                Ok(spawn) => {
                    tracked.insert(spawn.handle);
                    if spawn.target.is_some() {
                        engaged += 1;
                    }
                    observer.on_agent_spawned(&spawn);
                }
                Err(failure) => {
                    warn!(event = %id, slot, %failure, "templar slot left empty");
                    failed += 1;
                    observer.on_slot_failed(id, slot, &failure);
                }
            }
        }

        let report = StartReport {
            event: id,
            at: now,
            requested,
            spawned: tracked.len() as u32,
            engaged,
            failed,
        };

        self.current = Some(Event { id, started_at: now, tracked });
        self.end_timer = Some(timers.run_after(
            self.config.event_duration_secs,
            TimerAction::EndEvent { event: id },
        ));

        info!(
            event = %id,
            requested,
            spawned = report.spawned,
            engaged,
            failed,
            duration_secs = self.config.event_duration_secs,
            "templar raid started"
        );
        observer.on_event_started(&report);
        Ok(report)
    }

    /// End the active raid: destroy every tracked templar still alive.
    ///
    /// Idempotent.  When idle, returns `None` and touches nothing.
    pub fn end_event<O: EventObserver>(&mut self, now: Tick, observer: &mut O) -> Option<EndReport> {
        self.finish(now, EndReason::Elapsed, observer)
    }

    /// Graceful unload: disarm the end timer and end the raid immediately.
    pub fn shutdown<H, O>(&mut self, timers: &mut H, observer: &mut O) -> Option<EndReport>
    where
        H: TimerHost,
        O: EventObserver,
    {
        if let Some(token) = self.end_timer.take() {
            timers.cancel(token);
        }
        self.finish(timers.now(), EndReason::Shutdown, observer)
    }

    /// Swap in a new configuration, or hold it until the active raid ends.
    ///
    /// Returns `true` if the configuration took effect immediately.
    pub fn apply_config(&mut self, config: TemplarConfig) -> EventResult<bool> {
        config.validate()?;
        if self.is_active() {
            info!("raid active, configuration change deferred until it ends");
            self.pending_config = Some(config);
            return Ok(false);
        }
        self.install_config(config);
        Ok(true)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn spawn_slot(
        &mut self,
        event:      EventId,
        slot:       u32,
        candidates: &Candidates,
    ) -> Result<SpawnReport, SlotFailure> {
        let position = self
            .world
            .spawn_position()
            .ok_or(SlotFailure::NoSpawnPosition)?;

        let handle = self
            .world
            .create(&self.config.agent_prefab, position)
            .map_err(SlotFailure::CreationFailed)?;

        let equipped = match self.loadout.equip(&mut self.world, handle, &mut self.rng) {
            Ok(equipped) => equipped,
            Err(e) => {
                // Don't leak a half-equipped templar nobody tracks.
                if self.world.is_valid(handle) {
                    if let Err(destroy_err) = self.world.destroy(handle) {
                        debug!(%event, slot, %handle, %destroy_err, "half-equipped templar not destroyed");
                    }
                }
                return Err(SlotFailure::EquipFailed(e));
            }
        };

        let target = self.policy.select(position, candidates, self.config.aggro_range);
        if let Some(t) = target {
            self.world.engage(handle, t);
        }
        debug!(%event, slot, %handle, %position, target = ?target, "templar spawned");

        Ok(SpawnReport {
            event,
            slot,
            handle,
            position,
            weapon: equipped.weapon,
            target,
        })
    }

    fn finish<O: EventObserver>(
        &mut self,
        now:      Tick,
        reason:   EndReason,
        observer: &mut O,
    ) -> Option<EndReport> {
        let event = self.current.take()?;
        self.end_timer = None;

        let (mut destroyed, mut skipped) = (0u32, 0u32);
        for handle in event.tracked {
            if !self.world.is_valid(handle) {
                debug!(event = %event.id, %handle, "templar already gone");
                skipped += 1;
                continue;
            }
            match self.world.destroy(handle) {
                Ok(()) => destroyed += 1,
                Err(e) => {
                    debug!(event = %event.id, %handle, %e, "destroy skipped");
                    skipped += 1;
                }
            }
        }

        let report = EndReport { event: event.id, at: now, reason, destroyed, skipped };
        info!(
            event = %event.id,
            ?reason,
            destroyed,
            skipped,
            lasted_ticks = now.since(event.started_at),
            "templar raid ended"
        );

        if let Some(config) = self.pending_config.take() {
            self.install_config(config);
        }

        observer.on_event_ended(&report);
        Some(report)
    }

    fn install_config(&mut self, config: TemplarConfig) {
        self.loadout = Loadout::from_config(&config);
        self.config = config;
        info!(
            min = self.config.min_agents,
            max = self.config.max_agents,
            interval_secs = self.config.event_interval_secs,
            duration_secs = self.config.event_duration_secs,
            "configuration applied"
        );
    }
}
