//! Per-agent path traces.
//!
//! An [`AgentPath`] stores one agent's position per discrete time step
//! as a flat buffer of alternating row/col scalars, matching the wire
//! layout of the trace format. A *step* indexes into this buffer and is
//! always even; each step covers one `(row, col)` waypoint, so the
//! playback axis advances two scalars per tick.

use crate::id::AgentId;
use smallvec::SmallVec;

/// Flat coordinate buffer: alternating row/col scalars.
///
/// Inlined up to 8 waypoints; longer traces spill to the heap.
type FlatCoords = SmallVec<[i32; 16]>;

/// One agent's path as successive `(row, col)` waypoints.
///
/// Invariants: the flat buffer has even length and holds at least one
/// waypoint (the start). Both are enforced at construction; the path
/// is immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentPath {
    coords: FlatCoords,
}

impl AgentPath {
    /// Build a path from waypoint pairs, in order.
    ///
    /// Returns `None` for an empty sequence: a path must hold at
    /// least its starting waypoint.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, i32)>) -> Option<Self> {
        let mut coords = FlatCoords::new();
        for (row, col) in pairs {
            coords.push(row);
            coords.push(col);
        }
        if coords.is_empty() {
            return None;
        }
        Some(Self { coords })
    }

    /// Number of coordinate scalars (2 × waypoint count).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Number of waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.coords.len() / 2
    }

    /// The waypoint starting at scalar index `step`, if in range.
    pub fn waypoint(&self, step: usize) -> Option<(i32, i32)> {
        let row = *self.coords.get(step)?;
        let col = *self.coords.get(step + 1)?;
        Some((row, col))
    }

    /// The last waypoint in the path.
    pub fn final_waypoint(&self) -> (i32, i32) {
        let last = self.coords.len() - 2;
        (self.coords[last], self.coords[last + 1])
    }

    /// Whether `step` reads at or past the final waypoint.
    pub fn is_exhausted(&self, step: usize) -> bool {
        step >= self.coords.len().saturating_sub(2)
    }

    /// The waypoint at `step`, clamped to the final waypoint once the
    /// path is exhausted. Total for any `step`, however far it overruns.
    pub fn position_at(&self, step: usize) -> (i32, i32) {
        if self.is_exhausted(step) {
            self.final_waypoint()
        } else {
            (self.coords[step], self.coords[step + 1])
        }
    }

    /// Waypoints from scalar index `step` to the end of the path.
    ///
    /// Used for route previews; empty when `step` is out of range.
    pub fn remaining_from(&self, step: usize) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.coords
            .get(step.min(self.coords.len())..)
            .unwrap_or(&[])
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
    }

    /// The raw flat scalar buffer.
    pub fn as_flat(&self) -> &[i32] {
        &self.coords
    }
}

/// An ordered collection of agent paths.
///
/// The index is the agent identifier: `AgentId(n)` names the path
/// parsed from the n-th successful trace line. All agents share one
/// global step axis; paths of different lengths are reconciled by the
/// playback engine's clamping policy, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceSet {
    paths: Vec<AgentPath>,
}

impl TraceSet {
    /// An empty trace set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trace set from paths in agent order.
    pub fn from_paths(paths: Vec<AgentPath>) -> Self {
        Self { paths }
    }

    /// Number of agents.
    pub fn agent_count(&self) -> usize {
        self.paths.len()
    }

    /// The path for `agent`, if it exists.
    pub fn path_of(&self, agent: AgentId) -> Option<&AgentPath> {
        self.paths.get(agent.0 as usize)
    }

    /// Scalar length of `agent`'s path, or 0 for an unknown agent.
    pub fn path_len(&self, agent: AgentId) -> usize {
        self.path_of(agent).map_or(0, AgentPath::len)
    }

    /// The longest scalar path length across all agents, or 0 when
    /// the set is empty.
    pub fn max_path_len(&self) -> usize {
        self.paths.iter().map(AgentPath::len).max().unwrap_or(0)
    }

    /// Iterate `(AgentId, &AgentPath)` in agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &AgentPath)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, path)| (AgentId(i as u32), path))
    }
}
