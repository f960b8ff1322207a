use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub force: Force,
}

impl Piece {
    pub fn man(force: Force) -> Self { Self::new(PieceKind::Man, force) }
    pub fn king(force: Force) -> Self { Self::new(PieceKind::King, force) }

    pub fn is_king(self) -> bool { self.kind == PieceKind::King }

    // Row deltas this piece may step in. Men go forward only.
    pub fn row_directions(self) -> &'static [i8] {
        match (self.kind, self.force) {
            (PieceKind::Man, Force::Black) => &[1],
            (PieceKind::Man, Force::White) => &[-1],
            (PieceKind::King, Force::Black) => &[1, -1],
            (PieceKind::King, Force::White) => &[-1, 1],
        }
    }

    // Promotion is one-way, so crowning a king is a no-op.
    pub fn crowned(self) -> Self { Self { kind: PieceKind::King, ..self } }
}

pub fn piece_to_ascii(piece: Piece) -> char {
    match (piece.force, piece.kind) {
        (Force::Black, PieceKind::Man) => 'b',
        (Force::Black, PieceKind::King) => 'B',
        (Force::White, PieceKind::Man) => 'w',
        (Force::White, PieceKind::King) => 'W',
    }
}

pub fn piece_from_ascii(ch: char) -> Option<Piece> {
    match ch {
        'b' => Some(Piece::man(Force::Black)),
        'B' => Some(Piece::king(Force::Black)),
        'w' => Some(Piece::man(Force::White)),
        'W' => Some(Piece::king(Force::White)),
        _ => None,
    }
}

pub fn piece_to_pictogram(piece: Piece) -> char {
    match (piece.force, piece.kind) {
        (Force::White, PieceKind::Man) => '⛀',
        (Force::White, PieceKind::King) => '⛁',
        (Force::Black, PieceKind::Man) => '⛂',
        (Force::Black, PieceKind::King) => '⛃',
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crowning_is_idempotent() {
        let king = Piece::man(Force::White).crowned();
        assert_eq!(king, Piece::king(Force::White));
        assert_eq!(king.crowned(), king);
    }

    #[test]
    fn ascii_roundtrip() {
        for ch in ['b', 'B', 'w', 'W'] {
            assert_eq!(piece_from_ascii(ch).map(piece_to_ascii), Some(ch));
        }
        assert_eq!(piece_from_ascii('x'), None);
    }
}
