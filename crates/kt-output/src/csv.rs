//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `events.csv`
//! - `spawns.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, SpawnRow};

pub const EVENT_HEADERS: [&str; 9] = [
    "event_id", "phase", "tick", "requested", "spawned", "engaged", "failed", "destroyed", "skipped",
];

pub const SPAWN_HEADERS: [&str; 8] = ["event_id", "slot", "agent", "x", "y", "z", "weapon", "target"];

/// Writes raid logs to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    spawns:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files there, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        let mut spawns = Writer::from_path(dir.join("spawns.csv"))?;
        spawns.write_record(SPAWN_HEADERS)?;

        Ok(Self { events, spawns, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.event_id.to_string(),
            row.phase.to_string(),
            row.tick.to_string(),
            row.requested.to_string(),
            row.spawned.to_string(),
            row.engaged.to_string(),
            row.failed.to_string(),
            row.destroyed.to_string(),
            row.skipped.to_string(),
        ])?;
        Ok(())
    }

    fn write_spawn(&mut self, row: &SpawnRow) -> OutputResult<()> {
        self.spawns.write_record(&[
            row.event_id.to_string(),
            row.slot.to_string(),
            row.agent.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.z.to_string(),
            row.weapon.clone(),
            row.target.map(|t| t.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.events.flush()?;
        self.spawns.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
