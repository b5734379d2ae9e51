//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an agent within a loaded trace set.
///
/// Agents are numbered by the order their trace lines parsed
/// successfully: `AgentId(n)` is the n-th path in the trace set.
/// Skipped lines do not consume an ID, so agent IDs are dense.
///
/// The ID doubles as the on-screen label and the key for per-run
/// color assignment, so it must stay stable for the lifetime of the
/// trace set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
