//! Error types for the Waymark parsing pipeline.
//!
//! All failures are scoped to a single load operation: a failed parse
//! aborts that load and leaves any previously loaded model untouched.
//! There are no retries and no process-fatal errors.

use std::error::Error;
use std::fmt;

/// Errors from decoding a grid or trace file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// Grid dimensions decoded to zero on at least one axis.
    ///
    /// Covers both an explicit `0` in the header and a header from
    /// which no digits could be recovered at all (an empty digit run
    /// accumulates to zero).
    NonPositiveDimensions {
        /// Decoded row count.
        height: u64,
        /// Decoded column count.
        width: u64,
    },
    /// Grid dimensions decoded to values too large to index.
    ///
    /// Guards the row-major cell allocation; see
    /// [`Grid::MAX_CELLS`](crate::Grid::MAX_CELLS).
    DimensionsTooLarge {
        /// Decoded row count.
        height: u64,
        /// Decoded column count.
        width: u64,
    },
    /// A trace line carries a trajectory marker but one of its
    /// waypoint segments could not be decoded.
    MalformedWaypoint {
        /// Zero-based line number of the offending trace line.
        line: usize,
        /// The segment text that failed to decode.
        segment: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimensions { height, width } => {
                write!(f, "grid dimensions must be positive, got {height}x{width}")
            }
            Self::DimensionsTooLarge { height, width } => {
                write!(f, "grid dimensions {height}x{width} exceed the cell limit")
            }
            Self::MalformedWaypoint { line, segment } => {
                write!(f, "malformed waypoint '{segment}' on trace line {line}")
            }
        }
    }
}

impl Error for FormatError {}
