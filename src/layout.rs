// Plain-text board layout: eight lines, row 8 first, one character per square.
//   `.`       empty square
//   `b` `B`   black man, black king
//   `w` `W`   white man, white king
// Whitespace around lines is ignored, as are blank lines.

use itertools::Itertools;

use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::grid::Grid;
use crate::piece::{piece_from_ascii, piece_to_ascii};


pub fn parse_grid(s: &str) -> Result<Grid, String> {
    let lines = s.lines().map(str::trim).filter(|line| !line.is_empty()).collect_vec();
    if lines.len() != NUM_ROWS as usize {
        return Err(format!("expected {} rows, got {}", NUM_ROWS, lines.len()));
    }
    let mut grid = Grid::new();
    for (row, line) in Row::all().rev().zip(lines) {
        let chars = line.chars().collect_vec();
        if chars.len() != NUM_COLS as usize {
            return Err(format!(
                "row {}: expected {} squares, got {}",
                row.to_one_based(),
                NUM_COLS,
                chars.len()
            ));
        }
        for (col, ch) in Col::all().zip(chars) {
            let coord = Coord::new(row, col);
            if ch == '.' {
                continue;
            }
            let piece = piece_from_ascii(ch)
                .ok_or_else(|| format!("{}: invalid piece {:?}", coord, ch))?;
            grid[coord] = Some(piece);
        }
    }
    grid.check_dark_squares()?;
    Ok(grid)
}

pub fn grid_to_string(grid: &Grid) -> String {
    Row::all()
        .rev()
        .map(|row| {
            Col::all()
                .map(|col| grid[Coord::new(row, col)].map_or('.', piece_to_ascii))
                .collect::<String>()
        })
        .join("\n")
        + "\n"
}
