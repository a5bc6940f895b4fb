//! `EventLogObserver<W>` — bridges `EventObserver` to an `OutputWriter`.

use std::path::Path;

use kt_core::{EventId, Tick};
use kt_event::{EndReason, EndReport, EventObserver, SpawnReport, StartReport};

use crate::row::{EventRow, Phase, SpawnRow};
use crate::writer::OutputWriter;
use crate::{CsvWriter, OutputError, OutputResult};

/// The CSV-backed raid log.
pub type CsvEventLog = EventLogObserver<CsvWriter>;

impl CsvEventLog {
    /// Open `events.csv` and `spawns.csv` in `dir`.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        Ok(Self::new(CsvWriter::new(dir)?))
    }
}

/// An [`EventObserver`] that logs every raid to an [`OutputWriter`].
///
/// Errors from the writer are stored because observer methods have no
/// return value.  Check them with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.  Only the first one is kept.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and close the writer.  Call once the plugin has unloaded.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EventObserver for EventLogObserver<W> {
    fn on_event_started(&mut self, report: &StartReport) {
        let row = EventRow {
            requested: report.requested,
            spawned:   report.spawned,
            engaged:   report.engaged,
            failed:    report.failed,
            ..EventRow::new(report.event.0, Phase::Started, report.at.0)
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_agent_spawned(&mut self, spawn: &SpawnReport) {
        let row = SpawnRow {
            event_id: spawn.event.0,
            slot:     spawn.slot,
            agent:    spawn.handle.0,
            x:        spawn.position.x,
            y:        spawn.position.y,
            z:        spawn.position.z,
            weapon:   spawn.weapon.clone().unwrap_or_default(),
            target:   spawn.target.map(|t| t.0),
        };
        let result = self.writer.write_spawn(&row);
        self.store_err(result);
    }

    fn on_trigger_skipped(&mut self, active: EventId, at: Tick) {
        let result = self.writer.write_event(&EventRow::new(active.0, Phase::Skipped, at.0));
        self.store_err(result);
    }

    fn on_event_ended(&mut self, report: &EndReport) {
        let phase = match report.reason {
            EndReason::Elapsed => Phase::Ended,
            EndReason::Shutdown => Phase::Shutdown,
        };
        let row = EventRow {
            destroyed: report.destroyed,
            skipped:   report.skipped,
            ..EventRow::new(report.event.0, phase, report.at.0)
        };
        let result = self.writer.write_event(&row).and_then(|()| self.writer.flush());
        self.store_err(result);
    }
}
