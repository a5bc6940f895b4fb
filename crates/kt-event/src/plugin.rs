//! `TemplarPlugin` — host lifecycle around the scheduler.
//!
//! The host calls four things, in this order:
//!
//! 1. [`on_load`][TemplarPlugin::on_load] once at startup.
//! 2. [`on_timer`][TemplarPlugin::on_timer] for every timer that fires.
//! 3. [`reload_config`][TemplarPlugin::reload_config] whenever an operator
//!    asks for it.
//! 4. [`on_unload`][TemplarPlugin::on_unload] once at shutdown.

use std::path::{Path, PathBuf};

use kt_behavior::TargetingPolicy;
use kt_config::TemplarConfig;
use kt_schedule::{TimerAction, TimerHost, TimerToken};
use tracing::{debug, info, warn};

use crate::{
    EndReport, EventResult, EventObserver, EventScheduler, EventSchedulerBuilder, TickOutcome,
    World,
};

/// What a reload did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    /// In force now.
    Applied,
    /// Waiting for the active raid to end.
    Deferred,
}

/// The raid plugin as a host sees it.
pub struct TemplarPlugin<W: World, T: TargetingPolicy> {
    config_path: PathBuf,
    scheduler:   EventScheduler<W, T>,
    /// The repeating `StartEvent` timer.
    trigger:     Option<TimerToken>,
    /// Interval the trigger was armed with.
    armed_every: f64,
}

impl<W: World, T: TargetingPolicy> TemplarPlugin<W, T> {
    /// Load configuration (writing defaults on first run) and arm the
    /// periodic trigger.
    ///
    /// A configuration that can't be read or doesn't validate is not fatal:
    /// the plugin logs it and runs with defaults, leaving the file alone.
    pub fn on_load<H: TimerHost>(
        config_path: impl Into<PathBuf>,
        world:       W,
        policy:      T,
        seed:        Option<u64>,
        timers:      &mut H,
    ) -> EventResult<Self> {
        let config_path = config_path.into();
        let config = match kt_config::load_or_init(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), %e, "falling back to default configuration");
                TemplarConfig::default()
            }
        };

        let builder = EventSchedulerBuilder::new(config, world).policy(policy);
        let builder = match seed {
            Some(s) => builder.seed(s),
            None => builder,
        };
        let scheduler = builder.build()?;

        let mut plugin = Self {
            config_path,
            scheduler,
            trigger: None,
            armed_every: 0.0,
        };
        plugin.arm_trigger(timers);
        info!(
            interval_secs = plugin.armed_every,
            duration_secs = plugin.scheduler.config().event_duration_secs,
            "templar raid plugin loaded"
        );
        Ok(plugin)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn scheduler(&self) -> &EventScheduler<W, T> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut EventScheduler<W, T> {
        &mut self.scheduler
    }

    pub fn is_armed(&self) -> bool {
        self.trigger.is_some()
    }

    /// Dispatch a fired timer.
    ///
    /// `EndEvent` for a raid that is no longer the active one is ignored.
    pub fn on_timer<H, O>(&mut self, action: TimerAction, timers: &mut H, observer: &mut O) -> EventResult<()>
    where
        H: TimerHost,
        O: EventObserver,
    {
        match action {
            TimerAction::StartEvent => {
                if let TickOutcome::Started(report) = self.scheduler.tick(timers, observer)? {
                    debug!(event = %report.event, "raid trigger handled");
                }
            }
            TimerAction::EndEvent { event } => {
                if self.scheduler.current_id() != Some(event) {
                    debug!(%event, "stale end timer ignored");
                    return Ok(());
                }
                self.scheduler.end_event(timers.now(), observer);
                self.rearm_if_interval_changed(timers);
            }
        }
        Ok(())
    }

    /// Re-read the configuration file.
    ///
    /// Applied at once when idle (re-arming the trigger if the interval
    /// changed), otherwise held until the active raid ends.
    pub fn reload_config<H: TimerHost>(&mut self, timers: &mut H) -> EventResult<ConfigChange> {
        let config = kt_config::load_or_init(&self.config_path)?;
        if self.scheduler.apply_config(config)? {
            self.rearm_if_interval_changed(timers);
            Ok(ConfigChange::Applied)
        } else {
            Ok(ConfigChange::Deferred)
        }
    }

    /// Disarm the trigger and end any active raid.
    pub fn on_unload<H, O>(&mut self, timers: &mut H, observer: &mut O) -> Option<EndReport>
    where
        H: TimerHost,
        O: EventObserver,
    {
        if let Some(token) = self.trigger.take() {
            timers.cancel(token);
        }
        let report = self.scheduler.shutdown(timers, observer);
        info!("templar raid plugin unloaded");
        report
    }

    fn arm_trigger<H: TimerHost>(&mut self, timers: &mut H) {
        if let Some(token) = self.trigger.take() {
            timers.cancel(token);
        }
        let every = self.scheduler.config().event_interval_secs;
        self.trigger = Some(timers.run_repeating(every, every, TimerAction::StartEvent));
        self.armed_every = every;
    }

    fn rearm_if_interval_changed<H: TimerHost>(&mut self, timers: &mut H) {
        if self.trigger.is_some() && self.scheduler.config().event_interval_secs != self.armed_every {
            self.arm_trigger(timers);
            info!(interval_secs = self.armed_every, "raid trigger re-armed");
        }
    }
}
