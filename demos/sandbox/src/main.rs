//! sandbox — smallest example for the prowl NPC behavior framework.
//!
//! Drops 8 agents into a three-room floor plan with a patrol target sweeping
//! between the rooms.  Agents wander, spot the patrol, chase it, and swing at
//! it while it lingers in reach; every behavior event lands in
//! `output/sandbox/behavior_trace.csv`.  Swap the agent count and the floor
//! plan for a real level to crowd-test at scale.
//!
//! Run with `RUST_LOG=prowl_brain=debug` to watch stall recoveries and
//! sampling retries live.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

use prowl_brain::{BehaviorConfig, BehaviorMachine, BrainEventKind};
use prowl_core::{AgentId, AgentRng, TargetId, Vec3, WorldRng};
use prowl_scene::{
    ClipCatalog, ClipPlayer, FieldNavigator, NavField, NavFieldBuilder, NavigationPort,
    TargetBoard,
};
use prowl_trace::{CsvTrace, TraceRow, TraceSink};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:      usize = 8;
const SEED:             u64   = 42;
const DT_SECS:          f32   = 0.1;   // 10 Hz decision rate
const SIM_SECS:         f32   = 120.0;
const IDLE_BASE_SECS:   f32   = 3.0;
const WANDER_RADIUS_M:  f32   = 18.0;

const PATROL_TARGET:    TargetId = TargetId(0);
const PATROL_SPEED_MPS: f32      = 3.0;
const PATROL_MIN_X:     f32      = -20.0;
const PATROL_MAX_X:     f32      = 20.0;

// ── Scene setup ───────────────────────────────────────────────────────────────

/// Two 20 m × 24 m rooms joined by a narrow corridor.
fn build_floor_plan() -> Result<NavField> {
    let field = NavFieldBuilder::new()
        .walkable(Vec3::new(-30.0, 0.0, -12.0), Vec3::new(-10.0, 0.0, 12.0))
        .walkable(Vec3::new(-10.0, 0.0, -3.0), Vec3::new(10.0, 0.0, 3.0))
        .walkable(Vec3::new(10.0, 0.0, -12.0), Vec3::new(30.0, 0.0, 12.0))
        .build()?;
    Ok(field)
}

/// The patrol ping-pongs along the x axis through both rooms.
fn patrol_position(elapsed_secs: f32) -> Vec3 {
    let span = PATROL_MAX_X - PATROL_MIN_X;
    let phase = (elapsed_secs * PATROL_SPEED_MPS) % (2.0 * span);
    let x = if phase < span { PATROL_MIN_X + phase } else { PATROL_MAX_X - (phase - span) };
    Vec3::new(x, 0.0, 0.0)
}

// ── Per-agent tallies ─────────────────────────────────────────────────────────

#[derive(Default)]
struct AgentTally {
    transitions: u32,
    attacks:     u32,
    stalls:      u32,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== sandbox — prowl NPC behavior framework ===");
    println!("Agents: {AGENT_COUNT}  |  Sim: {SIM_SECS} s @ {DT_SECS} s ticks  |  Seed: {SEED}");
    println!();

    // 1. Build the walkable floor plan.
    let field = Arc::new(build_floor_plan()?);
    println!("Floor plan: {} walkable boxes", field.boxes().len());

    // 2. Animation clips shared by every agent.
    let mut catalog = ClipCatalog::new(0.5);
    catalog.insert("Walk", 1.0);
    catalog.insert("Attack", 0.7);
    let catalog = Arc::new(catalog);

    // 3. Spawn agents scattered across the rooms, one machine + navigator +
    //    clip player each.  `WorldRng` jitters the spawns; each machine gets
    //    its own `AgentRng` stream off the shared seed.
    let mut world = WorldRng::new(SEED);
    let config = BehaviorConfig {
        wander_radius_m: WANDER_RADIUS_M,
        ..BehaviorConfig::with_idle_secs(IDLE_BASE_SECS)
    };

    let mut machines = Vec::with_capacity(AGENT_COUNT);
    let mut navigators = Vec::with_capacity(AGENT_COUNT);
    let mut players = Vec::with_capacity(AGENT_COUNT);
    for i in 0..AGENT_COUNT {
        let agent = AgentId(i as u32);
        let raw = Vec3::new(
            world.gen_range(-28.0f32..28.0),
            0.0,
            world.gen_range(-10.0f32..10.0),
        );
        let spawn = field.nearest_reachable(raw, 40.0).reachable().unwrap_or(Vec3::ZERO);

        machines.push(BehaviorMachine::new(agent, config, AgentRng::new(SEED, agent))?);
        navigators.push(FieldNavigator::new(Arc::clone(&field), spawn));
        players.push(ClipPlayer::new(Arc::clone(&catalog)));
    }
    println!("Spawned {AGENT_COUNT} agents");

    // 4. Target board carrying the scripted patrol.
    let mut board = TargetBoard::new();

    // 5. Trace output.
    std::fs::create_dir_all("output/sandbox")?;
    let trace_path = Path::new("output/sandbox/behavior_trace.csv");
    let mut trace = CsvTrace::create(trace_path)?;

    // 6. Run the fixed-step loop.
    let total_ticks = (SIM_SECS / DT_SECS) as u32;
    let mut tallies: Vec<AgentTally> = (0..AGENT_COUNT).map(|_| AgentTally::default()).collect();
    let t0 = Instant::now();

    for tick in 0..total_ticks {
        let elapsed = tick as f32 * DT_SECS;
        board.publish(PATROL_TARGET, patrol_position(elapsed));

        for (i, machine) in machines.iter_mut().enumerate() {
            let locator = board.locator(PATROL_TARGET);
            machine.tick(DT_SECS, &mut navigators[i], &locator, &mut players[i]);
            navigators[i].advance(DT_SECS);

            let agent = machine.agent();
            for event in machine.drain_events() {
                match event.kind {
                    BrainEventKind::Transition { .. } => tallies[i].transitions += 1,
                    BrainEventKind::AttackStarted => tallies[i].attacks += 1,
                    BrainEventKind::Stalled { .. } => tallies[i].stalls += 1,
                    _ => {}
                }
                trace.record(&TraceRow::from_event(agent, &event))?;
            }
        }
    }
    trace.finish()?;
    let elapsed = t0.elapsed();

    // 7. Summary.
    println!("Simulated {SIM_SECS} s in {:.3} s wall time", elapsed.as_secs_f64());
    println!("Trace written to {}", trace_path.display());
    println!();
    println!(
        "{:<8} {:<10} {:<12} {:<8} {:<8} {:<22}",
        "Agent", "State", "Transitions", "Attacks", "Stalls", "Position"
    );
    println!("{}", "-".repeat(70));
    for (i, machine) in machines.iter().enumerate() {
        println!(
            "{:<8} {:<10} {:<12} {:<8} {:<8} {:<22}",
            i,
            machine.current_state().as_str(),
            tallies[i].transitions,
            tallies[i].attacks,
            tallies[i].stalls,
            navigators[i].position().to_string(),
        );
    }

    Ok(())
}
