//! Integration tests for kt-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, EVENT_HEADERS, SPAWN_HEADERS};
    use crate::row::{EventRow, Phase, SpawnRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn spawn_row(slot: u32, target: Option<u64>) -> SpawnRow {
        SpawnRow {
            event_id: 1,
            slot,
            agent:    slot as u64 + 10,
            x:        1.5,
            y:        0.0,
            z:        -2.0,
            weapon:   "crossbow".into(),
            target,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("events.csv").exists());
        assert!(dir.path().join("spawns.csv").exists());
    }

    #[test]
    fn output_dir_created() {
        let dir = tmp();
        let nested = dir.path().join("logs").join("raids");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, EVENT_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("spawns.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SPAWN_HEADERS);
    }

    #[test]
    fn event_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = EventRow { requested: 6, spawned: 5, engaged: 2, failed: 1, ..EventRow::new(3, Phase::Started, 7200) };
        w.write_event(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "started", "7200", "6", "5", "2", "1", "0", "0"]);
    }

    #[test]
    fn untargeted_spawn_has_empty_target() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_spawn(&spawn_row(0, Some(42))).unwrap();
        w.write_spawn(&spawn_row(1, None)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("spawns.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][7], "42");
        assert_eq!(&rows[1][7], "");
        assert_eq!(&rows[1][2], "11"); // agent
        assert_eq!(&rows[1][6], "crossbow");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use kt_core::{AgentHandle, EventId, ParticipantId, Position, Tick};
    use kt_event::{EndReason, EndReport, EventObserver, SpawnReport};

    use crate::row::{EventRow, Phase, SpawnRow};
    use crate::writer::OutputWriter;
    use crate::{EventLogObserver, OutputError, OutputResult};

    /// Keeps rows in memory; optionally fails every write.
    #[derive(Default)]
    struct MemWriter {
        events:  Vec<EventRow>,
        spawns:  Vec<SpawnRow>,
        flushes: u32,
        broken:  bool,
    }

    impl MemWriter {
        fn check(&self) -> OutputResult<()> {
            if self.broken {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    impl OutputWriter for MemWriter {
        fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
            self.check()?;
            self.events.push(*row);
            Ok(())
        }
        fn write_spawn(&mut self, row: &SpawnRow) -> OutputResult<()> {
            self.check()?;
            self.spawns.push(row.clone());
            Ok(())
        }
        fn flush(&mut self) -> OutputResult<()> {
            self.flushes += 1;
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.flush()
        }
    }

    fn end(reason: EndReason) -> EndReport {
        EndReport { event: EventId(2), at: Tick(90), reason, destroyed: 3, skipped: 1 }
    }

    #[test]
    fn end_reason_maps_to_phase() {
        let mut obs = EventLogObserver::new(MemWriter::default());
        obs.on_event_ended(&end(EndReason::Elapsed));
        obs.on_event_ended(&end(EndReason::Shutdown));
        let w = obs.into_writer();
        assert_eq!(w.events[0].phase, Phase::Ended);
        assert_eq!(w.events[1].phase, Phase::Shutdown);
        assert_eq!((w.events[0].destroyed, w.events[0].skipped), (3, 1));
        assert_eq!(w.flushes, 2);
    }

    #[test]
    fn skipped_trigger_logged_against_active_raid() {
        let mut obs = EventLogObserver::new(MemWriter::default());
        obs.on_trigger_skipped(EventId(4), Tick(300));
        let w = obs.into_writer();
        assert_eq!(w.events, vec![EventRow::new(4, Phase::Skipped, 300)]);
    }

    #[test]
    fn spawn_report_flattened() {
        let mut obs = EventLogObserver::new(MemWriter::default());
        obs.on_agent_spawned(&SpawnReport {
            event:    EventId(1),
            slot:     2,
            handle:   AgentHandle(9),
            position: Position::new(1.0, 2.0, 3.0),
            weapon:   None,
            target:   Some(ParticipantId(77)),
        });
        let w = obs.into_writer();
        assert_eq!(w.spawns[0].agent, 9);
        assert_eq!(w.spawns[0].weapon, "");
        assert_eq!(w.spawns[0].target, Some(77));
        assert_eq!((w.spawns[0].x, w.spawns[0].y, w.spawns[0].z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn first_write_error_kept() {
        let mut obs = EventLogObserver::new(MemWriter { broken: true, ..Default::default() });
        obs.on_trigger_skipped(EventId(1), Tick(1));
        obs.on_event_ended(&end(EndReason::Elapsed));
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}

#[cfg(test)]
mod integration_tests {
    use kt_agent::AgentStore;
    use kt_behavior::{NearestParticipant, Participant};
    use kt_config::TemplarConfig;
    use kt_core::{Position, SimClock, Tick};
    use kt_event::{HostWorld, TemplarPlugin};
    use kt_schedule::TimerQueue;

    use crate::CsvEventLog;

    #[test]
    fn raids_logged_end_to_end() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("KnightsTemplar.json");
        let config = TemplarConfig {
            min_agents:          2,
            max_agents:          2,
            event_interval_secs: 100.0,
            event_duration_secs: 40.0,
            ..Default::default()
        };
        kt_config::save(&config_path, &config).unwrap();

        let world = HostWorld::new(
            || Some(Position::ORIGIN),
            AgentStore::new(),
            Vec::<Participant>::new(),
        );
        let mut timers = TimerQueue::new(SimClock::new(1));
        let mut log = CsvEventLog::create(&dir.path().join("out")).unwrap();
        let mut plugin = TemplarPlugin::on_load(&config_path, world, NearestParticipant, Some(3), &mut timers).unwrap();

        while let Some(fired) = timers.pop_due(Tick(220)) {
            plugin.on_timer(fired.action, &mut timers, &mut log).unwrap();
        }
        timers.advance_to(Tick(220));
        plugin.on_unload(&mut timers, &mut log);
        log.finish();
        assert!(log.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("out").join("events.csv")).unwrap();
        let phases: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(phases, ["started", "ended", "started", "shutdown"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("out").join("spawns.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
    }
}
