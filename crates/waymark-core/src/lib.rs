//! Core types for the Waymark grid/trace playback engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Waymark workspace:
//! the occupancy grid model, per-agent path traces, render commands,
//! and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod path;
pub mod render;

pub use error::FormatError;
pub use grid::{CellSymbol, Grid};
pub use id::AgentId;
pub use path::{AgentPath, TraceSet};
pub use render::{CellStyle, Color, RenderCommand};
