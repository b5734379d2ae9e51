//! Render commands emitted by the playback engine.
//!
//! The engine never paints anything itself: each tick produces a batch
//! of [`RenderCommand`] values describing what a backend should draw.
//! Backends consume the batch in order; the engine guarantees that one
//! batch always describes a single coherent time step.

use crate::id::AgentId;
use std::fmt;

/// An RGB color, displayed as `#RRGGBB`. Defaults to black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fill style for a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// Light grey for open space.
    Open,
    /// Black for obstacles.
    Obstacle,
    /// Dark grey for target cells.
    Target,
}

impl CellStyle {
    /// The fill color for this style.
    pub const fn color(self) -> Color {
        match self {
            Self::Open => Color::new(0xE0, 0xE0, 0xE0),
            Self::Obstacle => Color::new(0x00, 0x00, 0x00),
            Self::Target => Color::new(0x33, 0x33, 0x33),
        }
    }
}

/// One drawing instruction for the rendering backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCommand {
    /// Fill the cell at `(row, col)` with `style`.
    PaintCell {
        /// Cell row.
        row: u32,
        /// Cell column.
        col: u32,
        /// Fill style.
        style: CellStyle,
    },
    /// Draw agent `agent` at `(row, col)`, labelled with its ID.
    DrawAgent {
        /// Agent row at the current step.
        row: i32,
        /// Agent column at the current step.
        col: i32,
        /// The agent, used as the on-screen label.
        agent: AgentId,
        /// The agent's run color.
        color: Color,
        /// Whether the agent sits at its final waypoint.
        arrived: bool,
    },
    /// Draw a polyline previewing `agent`'s remaining route.
    ///
    /// The line starts at `(row, col)` (the agent's current position)
    /// and passes through `waypoints` in order.
    DrawRoute {
        /// Route start row.
        row: i32,
        /// Route start column.
        col: i32,
        /// Future waypoints, nearest first.
        waypoints: Vec<(i32, i32)>,
        /// The agent's run color.
        color: Color,
        /// The agent the route belongs to.
        agent: AgentId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_displays_as_hex() {
        assert_eq!(Color::new(0xAB, 0x00, 0x7F).to_string(), "#AB007F");
    }

    #[test]
    fn cell_styles_carry_fixed_palette() {
        assert_eq!(CellStyle::Open.color().to_string(), "#E0E0E0");
        assert_eq!(CellStyle::Obstacle.color().to_string(), "#000000");
        assert_eq!(CellStyle::Target.color().to_string(), "#333333");
    }
}
