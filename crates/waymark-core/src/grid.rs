//! The occupancy grid model.
//!
//! A [`Grid`] is built once per loaded map file, is immutable after
//! construction, and is replaced wholesale on the next load. Cell
//! queries never fail: anything outside the grid, or any position the
//! source file left undecodable, reads as [`CellSymbol::Unknown`].

use std::fmt;

/// Classification of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellSymbol {
    /// Traversable open space (`.` in map files).
    Open,
    /// Impassable obstacle (`@` in map files).
    Obstacle,
    /// A designated target cell (`T` in map files).
    Target,
    /// Any other character. Occupies a cell position but renders as
    /// nothing.
    Unknown,
}

impl CellSymbol {
    /// Classify a raw map-file character.
    pub fn classify(c: char) -> Self {
        match c {
            '.' => Self::Open,
            '@' => Self::Obstacle,
            'T' => Self::Target,
            _ => Self::Unknown,
        }
    }
}

/// A 2-D occupancy grid in row-major order.
///
/// `cells.len() == height * width` always holds: a source buffer that
/// decodes short is padded with [`CellSymbol::Unknown`], and anything
/// past `height * width` is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: u32,
    width: u32,
    cells: Vec<CellSymbol>,
}

impl Grid {
    /// Upper bound on `height * width`, guarding the row-major cell
    /// allocation against absurd decoded dimensions.
    pub const MAX_CELLS: u64 = 1 << 28;

    /// Build a grid from decoded dimensions and a raw row-major cell
    /// buffer.
    ///
    /// The buffer is truncated or Unknown-padded to exactly
    /// `height * width` entries. Callers are expected to have already
    /// validated the dimensions as positive.
    pub fn from_cells(height: u32, width: u32, mut cells: Vec<CellSymbol>) -> Self {
        let expected = (height as usize) * (width as usize);
        cells.resize(expected, CellSymbol::Unknown);
        Self {
            height,
            width,
            cells,
        }
    }

    /// An empty placeholder grid (0x0). Every query answers Unknown.
    pub fn empty() -> Self {
        Self {
            height: 0,
            width: 0,
            cells: Vec::new(),
        }
    }

    /// Row count.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Column count.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Classification of the cell at `(row, col)`.
    ///
    /// Out-of-bounds coordinates (including negative ones) degrade to
    /// [`CellSymbol::Unknown`] rather than failing.
    pub fn cell_at(&self, row: i32, col: i32) -> CellSymbol {
        if row < 0 || col < 0 {
            return CellSymbol::Unknown;
        }
        let (row, col) = (row as u32, col as u32);
        if row >= self.height || col >= self.width {
            return CellSymbol::Unknown;
        }
        self.cells[(row as usize) * (self.width as usize) + (col as usize)]
    }

    /// Iterate all cells as `(row, col, symbol)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, CellSymbol)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(i, &sym)| {
            let i = i as u32;
            (i / width, i % width, sym)
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} grid", self.height, self.width)
    }
}
