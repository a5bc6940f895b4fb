//! sandbox — runs the templar raid plugin against an in-memory world.
//!
//! A handful of participants wander a small map with a ring road.  The plugin
//! is loaded from `output/sandbox/KnightsTemplar.json` (written with defaults
//! on first run), driven through one simulated day, then unloaded.  Every
//! raid is logged to `output/sandbox/events.csv` and `spawns.csv`.
//!
//! Set `RUST_LOG=debug` to see every spawn and target decision.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kt_agent::AgentStore;
use kt_behavior::{NearestParticipant, Participant};
use kt_core::{ParticipantId, Position, SimClock, SimRng, Tick};
use kt_event::{EndReport, EventObserver, HostWorld, SpawnReport, StartReport, TemplarPlugin};
use kt_output::{CsvEventLog, OutputWriter};
use kt_schedule::TimerQueue;
use kt_spatial::RoadSpawnPoints;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const PARTICIPANTS:      u64 = 12;
const ROAD_POINTS:       usize = 32;
const ROAD_RADIUS:       f32 = 150.0;
const MAP_HALF_EXTENT:   f32 = 200.0;
const WANDER_PER_HOUR:   f32 = 40.0;
const SIM_HOURS:         u64 = 24;
const SECS_PER_HOUR:     u64 = 3_600;
const OUTPUT_DIR:        &str = "output/sandbox";

// ── World setup ───────────────────────────────────────────────────────────────

/// Evenly spaced points on a circular road around the map centre.
fn ring_road() -> Vec<Position> {
    (0..ROAD_POINTS)
        .map(|i| {
            let theta = i as f32 / ROAD_POINTS as f32 * std::f32::consts::TAU;
            Position::new(ROAD_RADIUS * theta.cos(), 0.0, ROAD_RADIUS * theta.sin())
        })
        .collect()
}

fn scatter_participants(rng: &mut SimRng) -> Vec<Participant> {
    (0..PARTICIPANTS)
        .map(|i| {
            let mut p = Participant::awake(ParticipantId(i), random_point(rng));
            // A few are asleep or hiding inside someone's base.
            p.sleeping = i % 5 == 4;
            p.building_blocked = i % 7 == 6;
            p
        })
        .collect()
}

fn random_point(rng: &mut SimRng) -> Position {
    Position::new(
        rng.gen_range(-MAP_HALF_EXTENT..MAP_HALF_EXTENT),
        0.0,
        rng.gen_range(-MAP_HALF_EXTENT..MAP_HALF_EXTENT),
    )
}

fn wander(participants: &mut [Participant], rng: &mut SimRng) {
    for p in participants {
        let dx = rng.gen_range(-WANDER_PER_HOUR..WANDER_PER_HOUR);
        let dz = rng.gen_range(-WANDER_PER_HOUR..WANDER_PER_HOUR);
        p.position.x = (p.position.x + dx).clamp(-MAP_HALF_EXTENT, MAP_HALF_EXTENT);
        p.position.z = (p.position.z + dz).clamp(-MAP_HALF_EXTENT, MAP_HALF_EXTENT);
    }
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:   kt_output::EventLogObserver<W>,
    raids:   usize,
    spawns:  usize,
    engaged: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: kt_output::EventLogObserver<W>) -> Self {
        Self { inner, raids: 0, spawns: 0, engaged: 0 }
    }
}

impl<W: OutputWriter> EventObserver for CountingObserver<W> {
    fn on_event_started(&mut self, report: &StartReport) {
        self.raids += 1;
        self.engaged += report.engaged as usize;
        self.inner.on_event_started(report);
    }

    fn on_agent_spawned(&mut self, spawn: &SpawnReport) {
        self.spawns += 1;
        self.inner.on_agent_spawned(spawn);
    }

    fn on_slot_failed(&mut self, event: kt_core::EventId, slot: u32, failure: &kt_event::SlotFailure) {
        self.inner.on_slot_failed(event, slot, failure);
    }

    fn on_trigger_skipped(&mut self, active: kt_core::EventId, at: Tick) {
        self.inner.on_trigger_skipped(active, at);
    }

    fn on_event_ended(&mut self, report: &EndReport) {
        self.inner.on_event_ended(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== sandbox — templar raids ===");
    println!("Participants: {PARTICIPANTS}  |  Hours: {SIM_HOURS}  |  Seed: {SEED}");
    println!();

    // 1. Host collaborators.
    let mut rng = SimRng::new(SEED);
    let spawns = RoadSpawnPoints::new(ring_road(), rng.child(1));
    let participants = scatter_participants(&mut rng);
    let world = HostWorld::new(spawns, AgentStore::new(), participants);

    // 2. Load the plugin; first run writes the default config.
    let out = Path::new(OUTPUT_DIR);
    let mut timers = TimerQueue::new(SimClock::new(1));
    let mut plugin = TemplarPlugin::on_load(
        out.join("KnightsTemplar.json"),
        world,
        NearestParticipant,
        Some(SEED),
        &mut timers,
    )?;
    println!("Config ({}):", plugin.config_path().display());
    println!("{}", serde_json::to_string_pretty(plugin.scheduler().config())?);
    println!();

    // 3. Output.
    let mut obs = CountingObserver::new(CsvEventLog::create(out)?);

    // 4. Run hour by hour, letting participants move in between.
    let t0 = Instant::now();
    for hour in 1..=SIM_HOURS {
        let until = Tick(hour * SECS_PER_HOUR);
        while let Some(fired) = timers.pop_due(until) {
            plugin.on_timer(fired.action, &mut timers, &mut obs)?;
        }
        timers.advance_to(until);
        wander(&mut plugin.scheduler_mut().world.participants, &mut rng);
        info!(clock = %timers.clock(), active = plugin.scheduler().is_active(), "hour done");
    }

    // 5. Unload; anything still spawned is cleaned up.
    if let Some(report) = plugin.on_unload(&mut timers, &mut obs) {
        println!("Unload ended raid {} ({} templars removed)", report.event, report.destroyed);
    }
    obs.inner.finish();
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let agents = &plugin.scheduler().world.agents;
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  raids           : {}", obs.raids);
    println!("  templars spawned: {}", obs.spawns);
    println!("  engaged on spawn: {}", obs.engaged);
    println!("  still alive     : {}", agents.live_count());
    println!("  destroy calls   : {}", agents.destroy_calls());

    Ok(())
}
