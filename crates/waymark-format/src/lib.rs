//! Map and trace text-format decoding for the Waymark playback engine.
//!
//! Two loosely-structured input formats are supported:
//!
//! - **Map files** describe a 2-D occupancy grid in one of two
//!   dialects, auto-detected by the first character of the input
//!   (`t` selects the type-prefixed dialect). See [`parse_grid`].
//! - **Trace files** carry one line per agent in the form
//!   `<label>: (r,c)->(r,c)->...`. See [`parse_traces`].
//!
//! Both parsers are permissive where the formats are loose (stray
//! characters inside digit runs, lines without a trajectory, short
//! cell buffers) and fail only where the data is unrecoverable:
//! non-positive grid dimensions, or a trajectory segment whose
//! coordinates cannot be decoded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod scan;
pub mod trace;

pub use grid::parse_grid;
pub use trace::parse_traces;
