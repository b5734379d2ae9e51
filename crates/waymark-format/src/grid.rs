//! Grid decoding for both map-file dialects.
//!
//! Dialect detection inspects the first character of the input: `t`
//! (the start of a `type ...` header) selects the type-prefixed
//! dialect, anything else the comma-prefixed one.
//!
//! ```text
//! type octile          2,3
//! height 2             .@.
//! width 3              T..
//! map
//! .@.
//! T..
//! ```
//!
//! Both decode the same 2x3 grid. Dimension recovery is permissive
//! (digit runs may be interrupted by prose) but the decoded dimensions
//! themselves must be positive.

use crate::scan::{digits_in_line, digits_until};
use waymark_core::{CellSymbol, FormatError, Grid};

/// Decode a map file into a [`Grid`], auto-detecting the dialect.
///
/// A cell buffer shorter than `height * width` is padded with
/// [`CellSymbol::Unknown`]; a longer one is truncated. Fails only when
/// a decoded dimension is zero or too large to index.
pub fn parse_grid(text: &str) -> Result<Grid, FormatError> {
    let (height, width, cells) = if text.starts_with('t') {
        parse_type_prefixed(text)
    } else {
        parse_comma_prefixed(text)
    };

    if height == 0 || width == 0 {
        return Err(FormatError::NonPositiveDimensions { height, width });
    }
    let (Ok(h), Ok(w)) = (u32::try_from(height), u32::try_from(width)) else {
        return Err(FormatError::DimensionsTooLarge { height, width });
    };
    if (h as u64) * (w as u64) > Grid::MAX_CELLS {
        return Err(FormatError::DimensionsTooLarge { height, width });
    }
    Ok(Grid::from_cells(h, w, cells))
}

/// Type-prefixed dialect: line 0 is the `type` tag, line 1 carries the
/// height, line 2 the width, line 3 the `map` marker, and everything
/// from line 4 on is the cell buffer with newlines stripped.
fn parse_type_prefixed(text: &str) -> (u64, u64, Vec<CellSymbol>) {
    let mut lines = text.lines();
    let _tag = lines.next();
    let height = lines.next().map_or(0, digits_in_line);
    let width = lines.next().map_or(0, digits_in_line);
    let _map_marker = lines.next();

    let cells = lines
        .flat_map(|line| line.chars())
        .map(CellSymbol::classify)
        .collect();
    (height, width, cells)
}

/// Comma-prefixed dialect: the height is the digit run from the start
/// of the text up to the first `,`, the width the run from there up to
/// the first line terminator, and everything after that terminator is
/// the cell buffer with `\r`/`\n` stripped.
fn parse_comma_prefixed(text: &str) -> (u64, u64, Vec<CellSymbol>) {
    let mut chars = text.chars();

    let (height, found_comma) = digits_until(&mut chars, |c| c == ',');
    if !found_comma {
        // No width separator anywhere: the dimensions are
        // undeterminable and the caller rejects them.
        return (height, 0, Vec::new());
    }
    let (width, _) = digits_until(&mut chars, |c| c == '\r' || c == '\n');

    let cells = chars
        .filter(|&c| c != '\r' && c != '\n')
        .map(CellSymbol::classify)
        .collect();
    (height, width, cells)
}
