use std::fmt;
use std::ops;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub const fn from_one_based(idx: u8) -> Self {
        assert!(idx >= 1);
        Self::from_zero_based(idx - 1)
    }
    pub fn try_from_one_based(idx: i32) -> Option<Self> {
        (1..=NUM_ROWS as i32)
            .contains(&idx)
            .then(|| Self::from_zero_based((idx - 1) as u8))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_one_based(self) -> u8 { self.idx + 1 }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub const fn from_one_based(idx: u8) -> Self {
        assert!(idx >= 1);
        Self::from_zero_based(idx - 1)
    }
    pub fn try_from_one_based(idx: i32) -> Option<Self> {
        (1..=NUM_COLS as i32)
            .contains(&idx)
            .then(|| Self::from_zero_based((idx - 1) as u8))
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_one_based(self) -> u8 { self.idx + 1 }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


/// A square of the 8x8 board. Rows and columns are numbered 1 to 8 at the API boundary;
/// row 1 is Black's back rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    // Panics on out-of-range input. Meant for constants and tests; use `try_from_one_based`
    // for anything that comes from the outside.
    pub const fn rc(row: u8, col: u8) -> Self {
        Self::new(Row::from_one_based(row), Col::from_one_based(col))
    }

    pub fn try_from_one_based(row: i32, col: i32) -> Option<Self> {
        Some(Self::new(Row::try_from_one_based(row)?, Col::try_from_one_based(col)?))
    }

    // Row-major, starting from r1c1.
    pub fn all() -> impl Iterator<Item = Coord> + Clone {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }

    pub fn dark_squares() -> impl Iterator<Item = Coord> + Clone {
        Self::all().filter(|coord| coord.is_dark())
    }

    // Only dark squares are playable.
    pub fn is_dark(self) -> bool { (self.row.to_one_based() + self.col.to_one_based()) % 2 == 1 }

    pub fn checked_add(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        Self::try_from_one_based(
            self.row.to_one_based() as i32 + d_row as i32,
            self.col.to_one_based() as i32 + d_col as i32,
        )
    }

    /// Parses square ids of the form `r{row}c{col}`, e.g. `r3c2`.
    pub fn from_id(s: &str) -> Result<Self, String> {
        let invalid = || format!("invalid square id: {s:?}");
        let (row, col) = s
            .strip_prefix('r')
            .and_then(|rest| rest.split_once('c'))
            .ok_or_else(invalid)?;
        let row: i32 = row.parse().map_err(|_| invalid())?;
        let col: i32 = col.parse().map_err(|_| invalid())?;
        Self::try_from_one_based(row, col).ok_or_else(invalid)
    }

    pub fn to_id(self) -> String {
        format!("r{}c{}", self.row.to_one_based(), self.col.to_one_based())
    }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl FromStr for Coord {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_id(s) }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_id()) }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Coord({})", self.to_id()) }
}


impl Row {
    #![allow(dead_code)]
    pub const _1: Row = Row::from_one_based(1);
    pub const _2: Row = Row::from_one_based(2);
    pub const _3: Row = Row::from_one_based(3);
    pub const _4: Row = Row::from_one_based(4);
    pub const _5: Row = Row::from_one_based(5);
    pub const _6: Row = Row::from_one_based(6);
    pub const _7: Row = Row::from_one_based(7);
    pub const _8: Row = Row::from_one_based(8);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_id_roundtrip() {
        assert_eq!(Coord::from_id("r3c2"), Ok(Coord::rc(3, 2)));
        assert_eq!(Coord::rc(8, 7).to_id(), "r8c7");
        assert_eq!("r1c8".parse::<Coord>(), Ok(Coord::rc(1, 8)));
    }

    #[test]
    fn square_id_rejects_garbage() {
        assert!(Coord::from_id("").is_err());
        assert!(Coord::from_id("r0c1").is_err());
        assert!(Coord::from_id("r9c1").is_err());
        assert!(Coord::from_id("r1c9").is_err());
        assert!(Coord::from_id("c1r1").is_err());
        assert!(Coord::from_id("r1c").is_err());
        assert!(Coord::from_id("r-1c2").is_err());
        assert!(Coord::from_id("r3c2x").is_err());
    }

    #[test]
    fn dark_squares() {
        assert!(Coord::rc(1, 2).is_dark());
        assert!(Coord::rc(3, 2).is_dark());
        assert!(!Coord::rc(1, 1).is_dark());
        assert!(!Coord::rc(8, 8).is_dark());
        assert_eq!(Coord::dark_squares().count(), 32);
    }

    #[test]
    fn checked_add_clips_to_board() {
        assert_eq!(Coord::rc(3, 2).checked_add((1, -1)), Some(Coord::rc(4, 1)));
        assert_eq!(Coord::rc(4, 1).checked_add((1, -1)), None);
        assert_eq!(Coord::rc(8, 3).checked_add((1, 1)), None);
        assert_eq!(Coord::rc(3, 2) - Coord::rc(5, 4), (-2, -2));
    }

    #[test]
    fn row_major_order() {
        let first = Coord::all().take(3).collect_vec();
        assert_eq!(first, vec![Coord::rc(1, 1), Coord::rc(1, 2), Coord::rc(1, 3)]);
    }
}
