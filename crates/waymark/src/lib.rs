//! Grid map and path-trace playback.
//!
//! Waymark ingests two ad-hoc text formats, a 2-D occupancy grid in
//! either of two dialects and line-oriented per-agent path traces, and
//! replays the traces as a synchronized, discrete-time animation,
//! emitting render commands for an external backend to draw.
//!
//! # Quickstart
//!
//! ```
//! use waymark::{PlaybackStatus, Session};
//!
//! let mut session = Session::default();
//! session.load_grid("type octile\nheight 2\nwidth 2\nmap\n.@\nT.")?;
//! session.load_traces("0: (0,0)->(0,1)->(1,1)")?;
//!
//! let background = session.paint_grid();
//! assert_eq!(background.len(), 4);
//!
//! session.start();
//! while session.is_running() {
//!     let outcome = session.tick();
//!     // hand outcome.commands to the rendering backend
//! }
//! assert_eq!(session.playback().status(), PlaybackStatus::Finished);
//! # Ok::<(), waymark::FormatError>(())
//! ```
//!
//! For wall-clock playback, [`Driver`] runs the same tick loop on a
//! background thread at a configurable cadence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use waymark_core::{
    AgentId, AgentPath, CellStyle, CellSymbol, Color, FormatError, Grid, RenderCommand, TraceSet,
};
pub use waymark_format::{parse_grid, parse_traces};
pub use waymark_playback::{
    Driver, DriverError, Playback, PlaybackConfig, PlaybackStatus, Session, TickOutcome,
};
