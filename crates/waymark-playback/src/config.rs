//! Playback configuration.

use std::time::Duration;

/// Configuration for a playback session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Wall-clock cadence of the driver's tick loop.
    pub tick_interval: Duration,
    /// Seed for per-run agent color assignment.
    ///
    /// Colors are drawn from a ChaCha8 generator seeded from this
    /// value mixed with a per-session run counter: the palette is
    /// deterministic for a given seed, yet each new `start()` draws a
    /// fresh one.
    pub color_seed: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            color_seed: 42,
        }
    }
}
