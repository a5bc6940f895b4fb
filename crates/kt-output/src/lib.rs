//! `kt-output` — raid log writers for the templar raid event engine.
//!
//! | File          | One row per                                                  |
//! |---------------|--------------------------------------------------------------|
//! | `events.csv`  | raid start, raid end, and ignored trigger                    |
//! | `spawns.csv`  | templar that made it into the world                          |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`EventLogObserver`], which implements `kt_event::EventObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kt_output::CsvEventLog;
//!
//! let mut log = CsvEventLog::create(Path::new("./output"))?;
//! plugin.on_timer(fired.action, &mut timers, &mut log)?;
//! // ...
//! log.finish();
//! log.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{CsvEventLog, EventLogObserver};
pub use row::{EventRow, Phase, SpawnRow};
pub use writer::OutputWriter;
