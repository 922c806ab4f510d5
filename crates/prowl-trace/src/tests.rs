//! Integration tests for prowl-trace.

#[cfg(test)]
mod row_tests {
    use prowl_brain::{AgentState, BrainEvent, BrainEventKind};
    use prowl_core::{AgentId, Vec3};

    use crate::row::TraceRow;

    #[test]
    fn transition_detail_names_both_states() {
        let event = BrainEvent {
            at_secs: 2.5,
            kind: BrainEventKind::Transition {
                from: AgentState::Idle,
                to:   AgentState::Moving,
            },
        };
        let row = TraceRow::from_event(AgentId(4), &event);
        assert_eq!(row.agent_id, 4);
        assert_eq!(row.at_secs, 2.5);
        assert_eq!(row.event, "transition");
        assert_eq!(row.detail, "Idle->Moving");
    }

    #[test]
    fn destination_detail_prints_the_point() {
        let event = BrainEvent {
            at_secs: 1.0,
            kind: BrainEventKind::DestinationChosen {
                destination: Vec3::new(1.0, 0.0, -2.0),
            },
        };
        let row = TraceRow::from_event(AgentId(0), &event);
        assert_eq!(row.event, "destination");
        assert_eq!(row.detail, "(1.00, 0.00, -2.00)");
    }

    #[test]
    fn attack_detail_is_empty() {
        let event = BrainEvent { at_secs: 0.5, kind: BrainEventKind::AttackStarted };
        let row = TraceRow::from_event(AgentId(1), &event);
        assert_eq!(row.event, "attack");
        assert!(row.detail.is_empty());
    }

    #[test]
    fn stall_detail_carries_the_elapsed_walk() {
        let event = BrainEvent {
            at_secs: 9.0,
            kind: BrainEventKind::Stalled { walked_secs: 6.0 },
        };
        let row = TraceRow::from_event(AgentId(2), &event);
        assert_eq!(row.detail, "walked_secs=6.00");
    }
}

// ── CSV sink ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use prowl_brain::{BehaviorConfig, BehaviorMachine};
    use prowl_core::{AgentId, AgentRng, TargetId, Vec3};
    use prowl_scene::{ClipCatalog, ClipPlayer, FieldNavigator, NavFieldBuilder, TargetBoard};

    use crate::csv::CsvTrace;
    use crate::row::TraceRow;
    use crate::sink::TraceSink;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn sample_row(agent_id: u32) -> TraceRow {
        TraceRow {
            agent_id,
            at_secs: 1.5,
            event:   "destination",
            detail:  "(3.00, 0.00, -4.00)".to_owned(),
        }
    }

    #[test]
    fn file_created_with_header() {
        let dir = tmp();
        let path = dir.path().join("behavior_trace.csv");
        let mut trace = CsvTrace::create(&path).unwrap();
        trace.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "at_secs", "event", "detail"]);
    }

    #[test]
    fn rows_round_trip() {
        let dir = tmp();
        let path = dir.path().join("behavior_trace.csv");
        let mut trace = CsvTrace::create(&path).unwrap();
        trace.record(&sample_row(0)).unwrap();
        trace.record(&sample_row(1)).unwrap();
        trace.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0"); // agent_id
        assert_eq!(&rows[0][1], "1.5"); // at_secs
        assert_eq!(&rows[0][2], "destination");
        // The comma-bearing detail survives CSV quoting.
        assert_eq!(&rows[0][3], "(3.00, 0.00, -4.00)");
        assert_eq!(&rows[1][0], "1");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut trace = CsvTrace::create(&dir.path().join("t.csv")).unwrap();
        trace.finish().unwrap();
        trace.finish().unwrap(); // second call should not fail
    }

    #[test]
    fn integration_machine_leaves_a_trace() {
        let field = NavFieldBuilder::new()
            .walkable(Vec3::new(-30.0, 0.0, -30.0), Vec3::new(30.0, 0.0, 30.0))
            .build()
            .unwrap();
        let mut nav = FieldNavigator::new(Arc::new(field), Vec3::ZERO);
        let board = TargetBoard::new();
        let mut anim = ClipPlayer::new(Arc::new(ClipCatalog::new(0.8)));

        let config = BehaviorConfig {
            idle_min_secs: 0.5,
            idle_max_secs: 1.0,
            ..BehaviorConfig::default()
        };
        let rng = AgentRng::new(3, AgentId(7));
        let mut machine = BehaviorMachine::new(AgentId(7), config, rng).unwrap();
        let agent = machine.agent();

        let dir = tmp();
        let path = dir.path().join("behavior_trace.csv");
        let mut trace = CsvTrace::create(&path).unwrap();

        // 10 s of wandering on an empty board.
        for _ in 0..100 {
            let locator = board.locator(TargetId(0));
            machine.tick(0.1, &mut nav, &locator, &mut anim);
            nav.advance(0.1);
            for event in machine.drain_events() {
                trace.record(&TraceRow::from_event(agent, &event)).unwrap();
            }
        }
        trace.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert!(!rows.is_empty(), "10 s of wandering should leave a trace");
        assert!(rows.iter().all(|r| &r[0] == "7"));
        assert!(rows.iter().any(|r| &r[2] == "transition"));
    }
}

// ── Memory sink ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use crate::memory::MemoryTrace;
    use crate::row::TraceRow;
    use crate::sink::TraceSink;

    #[test]
    fn records_in_order() {
        let mut trace = MemoryTrace::new();
        for agent_id in 0..3 {
            let row = TraceRow {
                agent_id,
                at_secs: agent_id as f32,
                event:   "attack",
                detail:  String::new(),
            };
            trace.record(&row).unwrap();
        }
        assert_eq!(trace.rows().len(), 3);
        assert_eq!(trace.rows()[2].agent_id, 2);
        assert!(!trace.is_finished());

        trace.finish().unwrap();
        assert!(trace.is_finished());
    }
}
