use crate::{EventRow, OutputResult, SpawnRow};

/// A sink for raid log rows.
pub trait OutputWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    fn write_spawn(&mut self, row: &SpawnRow) -> OutputResult<()>;

    /// Flush buffered rows without closing anything.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
