//! Session model and deterministic playback engine for Waymark.
//!
//! # Architecture
//!
//! - [`Session`] owns the loaded [`Grid`](waymark_core::Grid) and
//!   [`TraceSet`](waymark_core::TraceSet) plus the playback state, and
//!   replaces them atomically on reload. There is no ambient module
//!   state and no partially-loaded model.
//! - [`Playback`] is the discrete time-step state machine
//!   (`Idle → Running → Finished`). Its [`Playback::tick`] is a pure
//!   step function: state in, render commands out, no timers.
//! - [`Driver`] owns a `Session` on a background thread and invokes
//!   `tick()` on a wall-clock cadence, draining load/start requests
//!   between ticks so a reload can never race a tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod playback;
pub mod session;

pub use config::PlaybackConfig;
pub use driver::{Driver, DriverError};
pub use playback::{Playback, PlaybackStatus, TickOutcome};
pub use session::Session;
