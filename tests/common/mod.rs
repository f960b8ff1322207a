use checkers::force::Force;
use checkers::piece::{Piece, PieceKind};


#[derive(Clone, Copy, Debug)]
pub struct PieceMatcher {
    pub kind: PieceKind,
    pub force: Force,
}

pub trait PieceIs {
    fn is(self, matcher: PieceMatcher) -> bool;
}

impl PieceIs for Option<Piece> {
    fn is(self, matcher: PieceMatcher) -> bool {
        if let Some(piece) = self {
            piece.kind == matcher.kind && piece.force == matcher.force
        } else {
            false
        }
    }
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        common::PieceMatcher {
            force: checkers::force::Force::$force,
            kind: checkers::piece::PieceKind::$kind,
        }
    };
}

// Square on row `row`, column `col`, both 1-based.
#[macro_export]
macro_rules! sq {
    ($row:literal $col:literal) => {
        checkers::coord::Coord::rc($row, $col)
    };
}
