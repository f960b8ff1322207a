#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod clock;
pub mod coord;
pub mod error;
pub mod force;
pub mod game;
pub mod grid;
pub mod layout;
pub mod opponent;
pub mod piece;
pub mod rules;
pub mod test_util;
