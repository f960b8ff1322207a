use std::{fmt, ops};

use ndarray::{Array, Array2};
use serde::{Deserialize, Serialize};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::force::Force;
use crate::layout::grid_to_string;
use crate::piece::Piece;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GridItem<T> {
    Piece(T),
    Empty,
    OutOfBounds,
}

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    // Like indexing, but tolerates coordinates that fall off the board. Offsets are given
    // as (row, col) deltas from `pos`.
    pub fn get_offset(&self, pos: Coord, offset: (i8, i8)) -> GridItem<Piece> {
        match pos.checked_add(offset) {
            None => GridItem::OutOfBounds,
            Some(coord) => match self[coord] {
                None => GridItem::Empty,
                Some(piece) => GridItem::Piece(piece),
            },
        }
    }

    // Pieces may only stand on dark squares. Reports the first offender in row-major order.
    pub fn check_dark_squares(&self) -> Result<(), String> {
        match self.pieces().find(|(coord, _)| !coord.is_dark()) {
            None => Ok(()),
            Some((coord, _)) => Err(format!("{}: pieces can only stand on dark squares", coord)),
        }
    }

    // Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| self[coord].map(|piece| (coord, piece)))
    }

    pub fn pieces_of(&self, force: Force) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.force == force)
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[coord_to_index(pos)]
    }
}

// `Coord` is always in bounds, so indexing cannot fail.
fn coord_to_index(pos: Coord) -> [usize; 2] {
    [pos.row.to_zero_based() as usize, pos.col.to_zero_based() as usize]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid")?;
        f.write_str(&grid_to_string(self))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    #[test]
    fn get_offset() {
        let mut g = Grid::new();
        g[Coord::rc(4, 3)] = Some(Piece::man(Force::White));
        assert_eq!(g.get_offset(Coord::rc(3, 2), (1, 1)), GridItem::Piece(Piece::man(Force::White)));
        assert_eq!(g.get_offset(Coord::rc(3, 2), (1, -1)), GridItem::Empty);
        assert_eq!(g.get_offset(Coord::rc(3, 1), (1, -1)), GridItem::OutOfBounds);
        assert_eq!(g.get_offset(Coord::rc(8, 7), (1, 1)), GridItem::OutOfBounds);
    }

    #[test]
    fn light_squares_must_stay_empty() {
        let mut g = Grid::new();
        g[Coord::rc(1, 2)] = Some(Piece::man(Force::Black));
        assert_eq!(g.check_dark_squares(), Ok(()));
        g[Coord::rc(7, 8)] = Some(Piece::man(Force::White));
        g[Coord::rc(1, 1)] = Some(Piece::man(Force::Black));
        let err = g.check_dark_squares().unwrap_err();
        assert!(err.starts_with("r1c1:"), "{err}");
    }

    #[test]
    fn pieces_are_row_major() {
        let mut g = Grid::new();
        g[Coord::rc(5, 2)] = Some(Piece::king(Force::Black));
        g[Coord::rc(2, 7)] = Some(Piece::man(Force::White));
        g[Coord::rc(2, 3)] = Some(Piece::man(Force::Black));
        let coords: Vec<_> = g.pieces().map(|(coord, _)| coord).collect();
        assert_eq!(coords, vec![Coord::rc(2, 3), Coord::rc(2, 7), Coord::rc(5, 2)]);
        let black: Vec<_> = g.pieces_of(Force::Black).map(|(_, piece)| piece.kind).collect();
        assert_eq!(black, vec![PieceKind::Man, PieceKind::King]);
    }
}
