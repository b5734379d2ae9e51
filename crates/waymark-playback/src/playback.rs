//! The discrete time-step playback state machine.
//!
//! All agents advance in lock-step along one shared step axis: each
//! tick renders every agent at the same discrete step, then advances
//! the step by one waypoint (two coordinate scalars). Agents whose
//! paths are shorter than the longest one are clamped at their final
//! waypoint until the whole batch finishes.

use indexmap::IndexMap;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waymark_core::{AgentId, Color, RenderCommand, TraceSet};

/// Lifecycle of one playback run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No run in progress; `start()` arms one.
    #[default]
    Idle,
    /// Ticks are advancing the shared step.
    Running,
    /// Every agent has reached its final waypoint; ticks emit nothing
    /// until the state is reset by a reload.
    Finished,
}

/// Result of one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// The step the commands were rendered for.
    pub step: usize,
    /// Render commands for this step, in agent order.
    pub commands: Vec<RenderCommand>,
    /// Status after the tick.
    pub status: PlaybackStatus,
}

impl TickOutcome {
    fn empty(step: usize, status: PlaybackStatus) -> Self {
        Self {
            step,
            commands: Vec::new(),
            status,
        }
    }
}

/// Playback state: the shared step counter, run status, and per-run
/// agent colors.
///
/// Owned by the session; every mutation happens through [`start`],
/// [`tick`], or [`reset`], so a given state is only ever observed
/// between complete steps.
///
/// [`start`]: Playback::start
/// [`tick`]: Playback::tick
/// [`reset`]: Playback::reset
#[derive(Clone, Debug, Default)]
pub struct Playback {
    step: usize,
    status: PlaybackStatus,
    colors: IndexMap<AgentId, Color>,
    runs: u64,
}

impl Playback {
    /// Fresh playback state in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Current scalar step index (always even).
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// The color assigned to `agent` for the current run, if any.
    pub fn color_of(&self, agent: AgentId) -> Option<Color> {
        self.colors.get(&agent).copied()
    }

    /// Reset to `Idle`, discarding the step counter and colors.
    ///
    /// Invoked whenever a new grid or trace set is installed; the run
    /// counter survives so a later `start()` still draws a fresh
    /// palette.
    pub fn reset(&mut self) {
        self.step = 0;
        self.status = PlaybackStatus::Idle;
        self.colors.clear();
    }

    /// Arm a run: assign every agent a color and enter `Running`.
    ///
    /// Idempotent against repeated start requests: a no-op unless
    /// the state is `Idle`.
    pub fn start(&mut self, traces: &TraceSet, color_seed: u64) {
        if self.status != PlaybackStatus::Idle {
            return;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(color_seed.wrapping_add(self.runs));
        self.runs = self.runs.wrapping_add(1);
        self.colors.clear();
        for (agent, _) in traces.iter() {
            let bits = rng.next_u32();
            let color = Color::new((bits >> 16) as u8, (bits >> 8) as u8, bits as u8);
            self.colors.insert(agent, color);
        }
        self.step = 0;
        self.status = PlaybackStatus::Running;
    }

    /// Advance one step: render every agent at the current step, then
    /// move the shared counter forward one waypoint.
    ///
    /// Pure with respect to time: the wall-clock cadence lives in the
    /// driver, so this is directly testable. On `Idle` or `Finished`
    /// the tick emits nothing.
    ///
    /// Agents whose paths are exhausted at this step are drawn at
    /// their final waypoint with no route preview; everyone else gets
    /// a position plus a polyline of their remaining waypoints. The
    /// run finishes once the counter passes the longest path in the
    /// set, so no agent stops short of its goal.
    pub fn tick(&mut self, traces: &TraceSet) -> TickOutcome {
        if self.status != PlaybackStatus::Running {
            return TickOutcome::empty(self.step, self.status);
        }

        let step = self.step;
        let mut commands = Vec::with_capacity(traces.agent_count() * 2);
        for (agent, path) in traces.iter() {
            let color = self.colors.get(&agent).copied().unwrap_or_default();
            if path.is_exhausted(step) {
                let (row, col) = path.final_waypoint();
                commands.push(RenderCommand::DrawAgent {
                    row,
                    col,
                    agent,
                    color,
                    arrived: true,
                });
            } else {
                let (row, col) = path.position_at(step);
                commands.push(RenderCommand::DrawAgent {
                    row,
                    col,
                    agent,
                    color,
                    arrived: false,
                });
                commands.push(RenderCommand::DrawRoute {
                    row,
                    col,
                    waypoints: path.remaining_from(step + 2).collect(),
                    color,
                    agent,
                });
            }
        }

        self.step += 2;
        if self.step >= traces.max_path_len() {
            self.status = PlaybackStatus::Finished;
        }
        TickOutcome {
            step,
            commands,
            status: self.status,
        }
    }
}
