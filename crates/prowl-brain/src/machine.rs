//! The behavior state machine.
//!
//! One [`BehaviorMachine`] drives one agent. The host calls
//! [`tick`](BehaviorMachine::tick) once per frame with the elapsed time and
//! the agent's scene ports; the machine decides, the ports act. All movement,
//! reachability, and animation go through the port traits, so the machine
//! itself owns no scene state and a test can drive it with stubs.
//!
//! # States
//!
//! | State       | Entry action                          | Leaves when                       |
//! |-------------|---------------------------------------|-----------------------------------|
//! | `Idle`      | draw a wait from the idle band        | wait expires                      |
//! | `Moving`    | sample destination, walk, play `Walk` | arrival, or the stall guard fires |
//! | `Pursuing`  | run toward the target                 | arrival                           |
//! | `Attacking` | none (first swing starts next tick)   | target leaves melee range         |
//!
//! When an idle wait expires the machine pursues if the target is within
//! [`BehaviorConfig::pursue_radius_m`], otherwise it wanders. Every runtime
//! failure (unresolvable target, no reachable ground, stalled walk) collapses
//! back to `Idle`; `tick` itself never fails.

use prowl_core::{AgentId, AgentRng, Vec3};
use prowl_scene::{AnimationPort, NavigationPort, TargetLocator};

use crate::config::BehaviorConfig;
use crate::error::BrainResult;
use crate::events::{BrainEvent, BrainEventKind};
use crate::state::AgentState;

/// Clip started when a wander walk begins.
pub const CLIP_WALK: &str = "Walk";

/// Clip started for each attack swing.
pub const CLIP_ATTACK: &str = "Attack";

/// Fixed pause between the end of one swing and the next range check.
pub const ATTACK_PAUSE_SECS: f32 = 0.5;

/// Destination sampling gives up after this many rejected draws and the
/// agent rests in place instead.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 8;

// ── Phases ────────────────────────────────────────────────────────────────────

/// Internal per-state progress. The variant always corresponds to the public
/// [`AgentState`]; both change only through the `enter_*` transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Counting down the randomized idle wait.
    Idle { remaining_secs: f32 },
    /// Walking toward a wander destination, clocking the stall guard.
    Moving { walked_secs: f32 },
    /// Waiting to arrive at the last issued target position.
    Pursuing,
    /// Cycling melee swings.
    Attacking(AttackPhase),
}

/// Where within one attack cycle the machine is suspended.
#[derive(Debug, Clone, Copy, PartialEq)]
enum AttackPhase {
    /// At the range-check point, about to start a swing.
    Ready,
    /// Mid-swing; the attack latch is set until the clip runs out.
    Swing { remaining_secs: f32 },
    /// Post-swing pause before the next range check.
    Recover { remaining_secs: f32 },
}

// ── BehaviorMachine ───────────────────────────────────────────────────────────

/// Behavior controller for a single agent.
///
/// Holds the agent's identity, validated tuning, private RNG stream, and the
/// current phase. Events of interest (state changes, issued destinations,
/// swings, recoveries from failure) accumulate in an internal buffer until
/// the host drains them with [`drain_events`](Self::drain_events).
pub struct BehaviorMachine {
    agent:        AgentId,
    config:       BehaviorConfig,
    rng:          AgentRng,
    phase:        Phase,
    is_attacking: bool,
    destination:  Option<Vec3>,
    age_secs:     f32,
    events:       Vec<BrainEvent>,
}

impl BehaviorMachine {
    /// Validate `config` and start the machine idle, with its first wait
    /// already drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the first violated configuration constraint; no machine is
    /// created in that case.
    pub fn new(agent: AgentId, config: BehaviorConfig, mut rng: AgentRng) -> BrainResult<Self> {
        config.validate()?;
        let first_wait = draw_idle_wait(&config, &mut rng);
        Ok(Self {
            agent,
            config,
            rng,
            phase: Phase::Idle { remaining_secs: first_wait },
            is_attacking: false,
            destination: None,
            age_secs: 0.0,
            events: Vec::new(),
        })
    }

    // ── Observers ──

    /// Identity of the agent this machine drives.
    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// The tuning this machine was built with.
    #[inline]
    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// The current public state.
    pub fn current_state(&self) -> AgentState {
        match self.phase {
            Phase::Idle { .. } => AgentState::Idle,
            Phase::Moving { .. } => AgentState::Moving,
            Phase::Pursuing => AgentState::Pursuing,
            Phase::Attacking(_) => AgentState::Attacking,
        }
    }

    /// `true` while a swing clip is playing. Hosts use this as a re-trigger
    /// latch for hit effects.
    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    /// Destination of the in-flight move command, if any.
    #[inline]
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    /// Seconds of tick time this machine has consumed.
    #[inline]
    pub fn age_secs(&self) -> f32 {
        self.age_secs
    }

    /// Drain buffered events, oldest first. Events accumulate until drained,
    /// so hosts that record nothing should still call this each frame.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, BrainEvent> {
        self.events.drain(..)
    }

    // ── Tick ──────────────────────────────────────────────────────────────────

    /// Advance the machine by `dt` seconds against the agent's scene ports.
    ///
    /// Negative `dt` counts as zero, and a zero `dt` performs no timer
    /// progress: in an unchanged scene it leaves the machine exactly where
    /// it was. `tick` never fails; every runtime fault path ends in `Idle`.
    pub fn tick<N, T, A>(&mut self, dt: f32, nav: &mut N, target: &T, anim: &mut A)
    where
        N: NavigationPort + ?Sized,
        T: TargetLocator + ?Sized,
        A: AnimationPort + ?Sized,
    {
        let dt = dt.max(0.0);
        self.age_secs += dt;
        match self.phase {
            Phase::Idle { .. } => self.tick_idle(dt, nav, target, anim),
            Phase::Moving { .. } => self.tick_moving(dt, nav),
            Phase::Pursuing => self.tick_pursuing(nav, target),
            Phase::Attacking(_) => self.tick_attacking(dt, nav, target, anim),
        }
    }

    fn tick_idle<N, T, A>(&mut self, dt: f32, nav: &mut N, target: &T, anim: &mut A)
    where
        N: NavigationPort + ?Sized,
        T: TargetLocator + ?Sized,
        A: AnimationPort + ?Sized,
    {
        let Phase::Idle { remaining_secs } = &mut self.phase else {
            return;
        };
        *remaining_secs -= dt;
        if *remaining_secs > 0.0 {
            return;
        }
        if self.target_within(self.config.pursue_radius_m, nav, target) {
            self.enter_pursuing(nav, target);
        } else {
            self.enter_moving(nav, anim);
        }
    }

    fn tick_moving<N>(&mut self, dt: f32, nav: &mut N)
    where
        N: NavigationPort + ?Sized,
    {
        let Phase::Moving { walked_secs } = &mut self.phase else {
            return;
        };
        *walked_secs += dt;
        let walked = *walked_secs;

        // Arrival wins over the stall guard when both land in one tick.
        if arrived(nav) {
            self.enter_idle();
            return;
        }
        if walked >= self.config.max_walk_secs {
            nav.cancel_path();
            tracing::debug!(
                "agent {} stalled after {walked:.2} s of walking, path cancelled",
                self.agent.0
            );
            self.push_event(BrainEventKind::Stalled { walked_secs: walked });
            self.enter_idle();
        }
    }

    fn tick_pursuing<N, T>(&mut self, nav: &mut N, target: &T)
    where
        N: NavigationPort + ?Sized,
        T: TargetLocator + ?Sized,
    {
        if !arrived(nav) {
            return;
        }
        if self.target_within(self.config.attack_radius_m, nav, target) {
            self.enter_attacking();
        } else {
            // Target moved on while we were travelling: chase the fresh
            // position (or fall back to rest if it is gone or out of range).
            self.enter_pursuing(nav, target);
        }
    }

    /// Runs the swing/recover cycle, consuming `dt` as a budget so that a
    /// large step can cross several sub-phases in one call. Each full cycle
    /// costs at least [`ATTACK_PAUSE_SECS`], which bounds the loop.
    fn tick_attacking<N, T, A>(&mut self, dt: f32, nav: &mut N, target: &T, anim: &mut A)
    where
        N: NavigationPort + ?Sized,
        T: TargetLocator + ?Sized,
        A: AnimationPort + ?Sized,
    {
        let mut budget = dt;
        loop {
            let Phase::Attacking(sub) = self.phase else {
                return;
            };
            match sub {
                AttackPhase::Ready => {
                    if !self.target_within(self.config.attack_radius_m, nav, target) {
                        self.enter_pursuing(nav, target);
                        return;
                    }
                    self.is_attacking = true;
                    anim.play(CLIP_ATTACK);
                    let swing_secs = anim.current_clip_duration().max(0.0);
                    self.push_event(BrainEventKind::AttackStarted);
                    self.phase = Phase::Attacking(AttackPhase::Swing {
                        remaining_secs: swing_secs,
                    });
                }
                AttackPhase::Swing { remaining_secs } => {
                    if budget < remaining_secs {
                        self.phase = Phase::Attacking(AttackPhase::Swing {
                            remaining_secs: remaining_secs - budget,
                        });
                        return;
                    }
                    budget -= remaining_secs;
                    self.is_attacking = false;
                    self.phase = Phase::Attacking(AttackPhase::Recover {
                        remaining_secs: ATTACK_PAUSE_SECS,
                    });
                }
                AttackPhase::Recover { remaining_secs } => {
                    if budget < remaining_secs {
                        self.phase = Phase::Attacking(AttackPhase::Recover {
                            remaining_secs: remaining_secs - budget,
                        });
                        return;
                    }
                    budget -= remaining_secs;
                    self.phase = Phase::Attacking(AttackPhase::Ready);
                }
            }
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────────
    // The only paths that change `phase`. Each performs the new state's entry
    // actions; the previous state's progress is simply abandoned.

    /// Swap phases and record the public transition if the state changed.
    fn set_phase(&mut self, next: Phase) {
        let from = self.current_state();
        self.phase = next;
        let to = self.current_state();
        if from != to {
            tracing::trace!("agent {} {from} -> {to}", self.agent.0);
            self.push_event(BrainEventKind::Transition { from, to });
        }
    }

    /// Rest in place: clear the move intent and attack latch, draw a fresh
    /// wait. Does not touch the navigation port.
    fn enter_idle(&mut self) {
        self.destination = None;
        self.is_attacking = false;
        let wait = draw_idle_wait(&self.config, &mut self.rng);
        self.set_phase(Phase::Idle { remaining_secs: wait });
    }

    /// Pick a wander destination and walk there. If sampling exhausts its
    /// budget the agent stays put and idles again.
    fn enter_moving<N, A>(&mut self, nav: &mut N, anim: &mut A)
    where
        N: NavigationPort + ?Sized,
        A: AnimationPort + ?Sized,
    {
        match self.sample_destination(nav) {
            Some(dest) => {
                self.set_phase(Phase::Moving { walked_secs: 0.0 });
                nav.move_to(dest, self.config.walk_speed_mps);
                anim.play(CLIP_WALK);
                self.destination = Some(dest);
                self.push_event(BrainEventKind::DestinationChosen { destination: dest });
            }
            None => {
                tracing::debug!(
                    "agent {} found no reachable wander point, staying put",
                    self.agent.0
                );
                self.push_event(BrainEventKind::SampleExhausted {
                    attempts: MAX_SAMPLE_ATTEMPTS,
                });
                self.enter_idle();
            }
        }
    }

    /// Chase the target's current position. Entry guard: an unresolvable or
    /// out-of-range target sends the agent back to rest with no commands
    /// issued. Re-entering from `Pursuing` re-issues the move without a
    /// state change.
    fn enter_pursuing<N, T>(&mut self, nav: &mut N, target: &T)
    where
        N: NavigationPort + ?Sized,
        T: TargetLocator + ?Sized,
    {
        let reach_sq = self.config.pursue_radius_m * self.config.pursue_radius_m;
        match target.current_target_position() {
            Some(pos) if nav.position().distance_squared(pos) <= reach_sq => {
                self.set_phase(Phase::Pursuing);
                nav.move_to(pos, self.config.pursue_speed_mps);
                self.destination = Some(pos);
                self.push_event(BrainEventKind::DestinationChosen { destination: pos });
            }
            resolved => {
                if resolved.is_none() {
                    tracing::trace!("agent {} target unresolved, breaking pursuit", self.agent.0);
                }
                self.enter_idle();
            }
        }
    }

    /// Arrived in melee range. The first swing starts on the next tick's
    /// range check.
    fn enter_attacking(&mut self) {
        self.destination = None;
        self.set_phase(Phase::Attacking(AttackPhase::Ready));
    }

    // ── Recovery ──

    /// Hard reset to `Idle`: cancel any in-flight path, drop the attack
    /// latch, draw a fresh wait. For host-side interruptions such as
    /// teleports or scripted overrides.
    pub fn force_idle<N>(&mut self, nav: &mut N)
    where
        N: NavigationPort + ?Sized,
    {
        if nav.has_pending_path() {
            nav.cancel_path();
        }
        self.enter_idle();
    }

    // ── Helpers ──

    /// Uniform in-sphere draws filtered through the port's reachability
    /// query, capped at [`MAX_SAMPLE_ATTEMPTS`].
    fn sample_destination<N>(&mut self, nav: &N) -> Option<Vec3>
    where
        N: NavigationPort + ?Sized,
    {
        let origin = nav.position();
        let radius = self.config.wander_radius_m;
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = origin + self.rng.in_unit_sphere() * radius;
            if let Some(dest) = nav.sample_reachable(candidate, radius).reachable() {
                return Some(dest);
            }
        }
        None
    }

    /// Range check against the resolved target. An unresolvable target is
    /// out of range by definition.
    fn target_within<N, T>(&self, radius_m: f32, nav: &N, target: &T) -> bool
    where
        N: NavigationPort + ?Sized,
        T: TargetLocator + ?Sized,
    {
        match target.current_target_position() {
            Some(pos) => nav.position().distance_squared(pos) <= radius_m * radius_m,
            None => false,
        }
    }

    fn push_event(&mut self, kind: BrainEventKind) {
        self.events.push(BrainEvent { at_secs: self.age_secs, kind });
    }
}

/// Arrival test shared by the walking and pursuing states.
fn arrived<N>(nav: &N) -> bool
where
    N: NavigationPort + ?Sized,
{
    !nav.has_pending_path() || nav.remaining_distance() <= nav.stopping_threshold()
}

fn draw_idle_wait(config: &BehaviorConfig, rng: &mut AgentRng) -> f32 {
    rng.gen_range(config.idle_min_secs..=config.idle_max_secs)
}
