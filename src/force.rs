use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::coord::Row;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Force {
    Black,
    White,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::Black => Force::White,
            Force::White => Force::Black,
        }
    }

    // Row delta of a forward step. Black starts at the bottom (rows 1-3) and moves up.
    pub fn direction_forward(self) -> i8 {
        match self {
            Force::Black => 1,
            Force::White => -1,
        }
    }

    // The opposing back rank: a man of this force is crowned when it gets there.
    pub fn promotion_row(self) -> Row {
        match self {
            Force::Black => Row::_8,
            Force::White => Row::_1,
        }
    }
}
