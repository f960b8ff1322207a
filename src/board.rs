// Board state and move rules.
//
// Each turn is exactly one simple step or one single jump. There is no mandatory capture
// and no multi-jump chaining.

use std::fmt;
use std::str::FromStr;

use enum_map::{EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::coord::{Col, Coord, Row};
use crate::force::Force;
use crate::grid::{Grid, GridItem};
use crate::internal_error_message;
use crate::piece::Piece;


pub const PIECES_PER_FORCE: usize = 12;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MoveKind {
    Simple,
    Capture,
}

// Why a move was rejected. Callers that only care about acceptance can use `is_ok()`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnError {
    InvalidCoord,
    SameSquare,
    PieceMissing,
    NotYourPiece,
    WrongTurnOrder,
    DestinationOccupied,
    ImpossibleTrajectory,
    WrongDirection,
    NothingToCapture,
    GameOver,
}

// Side effects of an applied move, for the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub kind: MoveKind,
    pub captured: Option<(Coord, Piece)>,
    pub promoted: bool,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self { Self { from, to } }

    // Only meaningful for moves that passed the legality check.
    pub fn kind(self) -> MoveKind {
        let (d_row, _) = self.to - self.from;
        if d_row.abs() == 2 { MoveKind::Capture } else { MoveKind::Simple }
    }

    pub fn is_capture(self) -> bool { self.kind() == MoveKind::Capture }

    // The square a capture jumps over. The midpoint is integral because capture deltas are even.
    pub fn jumped_square(self) -> Option<Coord> {
        let (d_row, d_col) = self.to - self.from;
        if d_row.abs() == 2 && d_col.abs() == 2 {
            self.from.checked_add((d_row / 2, d_col / 2))
        } else {
            None
        }
    }
}

pub fn starting_rows(force: Force) -> impl Iterator<Item = Row> {
    let rows: [u8; 3] = match force {
        Force::Black => [1, 2, 3],
        Force::White => [6, 7, 8],
    };
    rows.into_iter().map(Row::from_one_based)
}

pub fn dark_cols_in_row(row: Row) -> impl Iterator<Item = Col> {
    Col::all().filter(move |&col| Coord::new(row, col).is_dark())
}

// Accepts `r3c2-r4c1` as well as `r3c2 r4c1`.
impl FromStr for Move {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .trim()
            .split_once(|ch: char| ch == '-' || ch.is_whitespace())
            .ok_or_else(|| format!("invalid move: {s:?}"))?;
        Ok(Move::new(from.trim().parse()?, to.trim().parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}-{}", self.from, self.to) }
}

fn generate_starting_grid() -> Grid {
    let mut grid = Grid::new();
    for force in [Force::Black, Force::White] {
        for row in starting_rows(force) {
            for col in dark_cols_in_row(row) {
                grid[Coord::new(row, col)] = Some(Piece::man(force));
            }
        }
    }
    grid
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Grid,
    // Number of enemy pieces each force has taken.
    captures: EnumMap<Force, u8>,
}

impl Board {
    pub fn new() -> Self { Self::from_valid_grid(generate_starting_grid()) }

    // Starts from an arbitrary position. Rejects grids with pieces on light squares.
    pub fn new_with_grid(grid: Grid) -> Result<Self, String> {
        grid.check_dark_squares()?;
        Ok(Self::from_valid_grid(grid))
    }

    fn from_valid_grid(grid: Grid) -> Self { Board { grid, captures: enum_map! { _ => 0 } } }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> { self.grid[coord] }
    pub fn captures(&self, force: Force) -> u8 { self.captures[force] }
    pub fn piece_count(&self, force: Force) -> usize { self.grid.pieces_of(force).count() }

    pub fn is_legal(&self, mv: Move, force: Force) -> bool { self.check_move(mv, force).is_ok() }

    // Looks only at `from`, `to` and, for a capture, the jumped square. Whose turn it is
    // is the caller's business: `force` is simply the side claiming the piece.
    pub fn check_move(&self, mv: Move, force: Force) -> Result<MoveKind, TurnError> {
        let Move { from, to } = mv;
        if from == to {
            return Err(TurnError::SameSquare);
        }
        let piece = self.grid[from].ok_or(TurnError::PieceMissing)?;
        if piece.force != force {
            return Err(TurnError::NotYourPiece);
        }
        if self.grid[to].is_some() {
            return Err(TurnError::DestinationOccupied);
        }
        let (d_row, d_col) = to - from;
        let kind = match (d_row.abs(), d_col.abs()) {
            (1, 1) => MoveKind::Simple,
            (2, 2) => MoveKind::Capture,
            _ => return Err(TurnError::ImpossibleTrajectory),
        };
        if !piece.row_directions().contains(&d_row.signum()) {
            return Err(TurnError::WrongDirection);
        }
        if kind == MoveKind::Capture {
            match self.grid.get_offset(from, (d_row.signum(), d_col.signum())) {
                GridItem::Piece(victim) if victim.force != force => {}
                _ => return Err(TurnError::NothingToCapture),
            }
        }
        Ok(kind)
    }

    // All legal moves for `force`, pieces in row-major order. For each piece: forward
    // direction before backward (kings only), simple steps before jumps.
    pub fn legal_moves(&self, force: Force) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, piece) in self.grid.pieces_of(force) {
            for &d_row in piece.row_directions() {
                for distance in [1, 2] {
                    for d_col in [-1, 1] {
                        let Some(to) = from.checked_add((d_row * distance, d_col * distance))
                        else {
                            continue;
                        };
                        let mv = Move::new(from, to);
                        if self.is_legal(mv, force) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }
        moves
    }

    pub fn has_legal_moves(&self, force: Force) -> bool { !self.legal_moves(force).is_empty() }

    // Applies a move that the caller has already validated with `check_move`. Does not
    // re-validate.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let piece = self.grid[mv.from]
            .take()
            .unwrap_or_else(|| panic!("{}", internal_error_message!("no piece at {}", mv.from)));
        let kind = mv.kind();
        let mut captured = None;
        if let Some(jumped) = mv.jumped_square() {
            if let Some(victim) = self.grid[jumped].take() {
                self.captures[piece.force] += 1;
                captured = Some((jumped, victim));
            }
        }
        let promotes = mv.to.row == piece.force.promotion_row();
        let promoted = promotes && !piece.is_king();
        let piece = if promotes { piece.crowned() } else { piece };
        self.grid[mv.to] = Some(piece);
        MoveOutcome { piece, kind, captured, promoted }
    }
}
