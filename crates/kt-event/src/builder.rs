//! Fluent builder for constructing an [`EventScheduler`].

use kt_agent::Loadout;
use kt_behavior::{NearestParticipant, TargetingPolicy};
use kt_config::TemplarConfig;
use kt_core::{EventId, SimRng};

use crate::{EventResult, EventScheduler, World};

/// Fluent builder for [`EventScheduler<W, T>`].
///
/// # Required inputs
///
/// - [`TemplarConfig`] — batch size, timings, loadout, …
/// - `W: World` — the host
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.policy(p)`    | [`NearestParticipant`]           |
/// | `.seed(s)`      | OS entropy                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = EventSchedulerBuilder::new(config, world)
///     .seed(42)
///     .build()?;
/// scheduler.tick(&mut timers, &mut NoopObserver)?;
/// ```
pub struct EventSchedulerBuilder<W: World, T: TargetingPolicy = NearestParticipant> {
    config: TemplarConfig,
    world:  W,
    policy: T,
    seed:   Option<u64>,
}

impl<W: World> EventSchedulerBuilder<W> {
    /// Create a builder with all required inputs.
    pub fn new(config: TemplarConfig, world: W) -> Self {
        Self { config, world, policy: NearestParticipant, seed: None }
    }
}

impl<W: World, T: TargetingPolicy> EventSchedulerBuilder<W, T> {
    /// Replace the targeting policy.
    pub fn policy<P: TargetingPolicy>(self, policy: P) -> EventSchedulerBuilder<W, P> {
        EventSchedulerBuilder {
            config: self.config,
            world:  self.world,
            policy,
            seed:   self.seed,
        }
    }

    /// Seed every random draw (batch size, weapons) for reproducible raids.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return an idle scheduler.
    pub fn build(self) -> EventResult<EventScheduler<W, T>> {
        self.config.validate()?;

        let rng = match self.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };

        Ok(EventScheduler {
            loadout:        Loadout::from_config(&self.config),
            config:         self.config,
            world:          self.world,
            policy:         self.policy,
            rng,
            current:        None,
            end_timer:      None,
            last_event:     EventId(0),
            pending_config: None,
        })
    }
}
