//! The session: one active grid, one active trace set, one playback.
//!
//! A [`Session`] holds all mutable playback state behind one explicit
//! object; there is no ambient module state. Loads are atomic: the
//! incoming file is parsed to completion first, and only a successful
//! parse replaces the installed model, so a failed load leaves
//! everything, including a run in progress, untouched. A successful load resets
//! playback to `Idle`, so no tick can ever observe a mismatched
//! grid/trace pairing.

use crate::config::PlaybackConfig;
use crate::playback::{Playback, PlaybackStatus, TickOutcome};
use waymark_core::{
    AgentId, AgentPath, CellStyle, CellSymbol, FormatError, Grid, RenderCommand, TraceSet,
};

/// The process-wide playback session.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    traces: TraceSet,
    playback: Playback,
    config: PlaybackConfig,
}

impl Session {
    /// A session with an empty grid, no agents, and idle playback.
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            grid: Grid::empty(),
            traces: TraceSet::new(),
            playback: Playback::new(),
            config,
        }
    }

    /// Parse and install a new grid, resetting playback.
    ///
    /// On error the previously loaded grid stays active.
    pub fn load_grid(&mut self, text: &str) -> Result<(), FormatError> {
        let grid = waymark_format::parse_grid(text)?;
        self.grid = grid;
        self.playback.reset();
        Ok(())
    }

    /// Parse and install a new trace set, resetting playback.
    ///
    /// On error the previously loaded traces stay active.
    pub fn load_traces(&mut self, text: &str) -> Result<(), FormatError> {
        let traces = waymark_format::parse_traces(text)?;
        self.traces = traces;
        self.playback.reset();
        Ok(())
    }

    /// The installed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The installed trace set.
    pub fn traces(&self) -> &TraceSet {
        &self.traces
    }

    /// Current playback state.
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Classification of the cell at `(row, col)`; Unknown out of
    /// bounds.
    pub fn cell_at(&self, row: i32, col: i32) -> CellSymbol {
        self.grid.cell_at(row, col)
    }

    /// Number of loaded agents.
    pub fn agent_count(&self) -> usize {
        self.traces.agent_count()
    }

    /// The path for `agent`, if loaded.
    pub fn path_of(&self, agent: AgentId) -> Option<&AgentPath> {
        self.traces.path_of(agent)
    }

    /// Scalar path length for `agent` (2 x waypoint count), 0 if
    /// unknown.
    pub fn path_len(&self, agent: AgentId) -> usize {
        self.traces.path_len(agent)
    }

    /// Render commands painting every classified cell of the grid.
    ///
    /// Unknown cells occupy their position but are skipped, matching
    /// the permissive classification rules.
    pub fn paint_grid(&self) -> Vec<RenderCommand> {
        self.grid
            .iter_cells()
            .filter_map(|(row, col, sym)| {
                let style = match sym {
                    CellSymbol::Open => CellStyle::Open,
                    CellSymbol::Obstacle => CellStyle::Obstacle,
                    CellSymbol::Target => CellStyle::Target,
                    CellSymbol::Unknown => return None,
                };
                Some(RenderCommand::PaintCell { row, col, style })
            })
            .collect()
    }

    /// Arm playback. No-op unless playback is idle.
    pub fn start(&mut self) {
        self.playback.start(&self.traces, self.config.color_seed);
    }

    /// Advance playback one step; see [`Playback::tick`].
    pub fn tick(&mut self) -> TickOutcome {
        self.playback.tick(&self.traces)
    }

    /// Whether a run is currently advancing.
    pub fn is_running(&self) -> bool {
        self.playback.status() == PlaybackStatus::Running
    }

    /// The configured tick cadence and color seed.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "type octile\nheight 2\nwidth 2\nmap\n.@\nT.";
    const TRACE: &str = "0: (0,0)->(0,1)->(1,1)";

    #[test]
    fn load_failure_keeps_previous_model() {
        let mut session = Session::default();
        session.load_grid(MAP).unwrap();
        session.load_traces(TRACE).unwrap();

        assert!(session.load_grid("nonsense with no dimensions").is_err());
        assert_eq!(session.grid().height(), 2);

        assert!(session.load_traces("0: (1,broken)->(2,2)").is_err());
        assert_eq!(session.agent_count(), 1);
        assert_eq!(session.path_len(AgentId(0)), 6);
    }

    #[test]
    fn successful_load_resets_a_running_playback() {
        let mut session = Session::default();
        session.load_grid(MAP).unwrap();
        session.load_traces(TRACE).unwrap();
        session.start();
        session.tick();
        assert!(session.is_running());

        session.load_traces("0: (9,9)->(9,8)").unwrap();
        assert_eq!(session.playback().status(), PlaybackStatus::Idle);
        assert_eq!(session.playback().current_step(), 0);
        // The old run's ticks are gone; a fresh start renders against
        // the new traces only.
        session.start();
        let outcome = session.tick();
        assert!(matches!(
            outcome.commands[0],
            RenderCommand::DrawAgent { row: 9, col: 9, .. }
        ));
    }

    #[test]
    fn paint_grid_skips_unknown_cells() {
        let mut session = Session::default();
        // 2x2 grid but only two decodable cells.
        session.load_grid("2,2\n.q@").unwrap();
        let commands = session.paint_grid();
        assert_eq!(
            commands,
            vec![
                RenderCommand::PaintCell {
                    row: 0,
                    col: 0,
                    style: CellStyle::Open
                },
                RenderCommand::PaintCell {
                    row: 1,
                    col: 0,
                    style: CellStyle::Obstacle
                },
            ]
        );
    }

    #[test]
    fn queries_degrade_rather_than_fail() {
        let session = Session::default();
        assert_eq!(session.cell_at(3, 3), CellSymbol::Unknown);
        assert_eq!(session.agent_count(), 0);
        assert!(session.path_of(AgentId(0)).is_none());
        assert_eq!(session.path_len(AgentId(0)), 0);
    }
}
