//! ASCII rendering of the folded paper.

use std::io::{self, Write};

use crate::geometry::{Point, PointSet};

/// Dotted cells render as `#`, empty cells as a single space.
const MARK: char = '#';
const BLANK: char = ' ';

/// Write the paper as a grid of rows, top to bottom.
///
/// The extent runs from the origin to the maximum x and y found in the set;
/// an empty set degenerates to a single one-character row. Every row is
/// newline-terminated. A fold can reflect points to negative coordinates;
/// the extent is clamped at the origin, so those points fall outside the
/// rendered area.
pub fn render<W: Write>(points: &PointSet, out: &mut W) -> io::Result<()> {
    let max_x = points.iter().map(|p| p.x).max().unwrap_or(0).max(0);
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(0).max(0);

    for y in 0..=max_y {
        let mut row = String::with_capacity(max_x as usize + 1);
        for x in 0..=max_x {
            row.push(if points.contains(&Point { x, y }) {
                MARK
            } else {
                BLANK
            });
        }
        writeln!(out, "{row}")?;
    }
    Ok(())
}
