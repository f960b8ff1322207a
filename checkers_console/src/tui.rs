use console::Style;
use itertools::Itertools;

use checkers::coord::{Col, Coord, NUM_COLS, Row};
use checkers::force::Force;
use checkers::game::{CheckersGame, GameStatus, TurnState, VictoryReason};
use checkers::grid::Grid;
use checkers::piece::{piece_to_ascii, piece_to_pictogram};


const BOARD_WIDTH: usize = (NUM_COLS as usize + 2) * 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Charset {
    Unicode,
    Ascii,
}

pub fn render_game(game: &CheckersGame, charset: Charset) -> String {
    let board = game.board();
    format!(
        "{}\n{}{}\n{}\n",
        render_tally(Force::White, board.captures(Force::White)),
        render_grid(board.grid(), charset),
        render_tally(Force::Black, board.captures(Force::Black)),
        render_status(game),
    )
}

fn render_tally(force: Force, captured: u8) -> String {
    format!("{:>1$}", format!("{:?} captured: {}", force, captured), BOARD_WIDTH)
}

fn render_status(game: &CheckersGame) -> String {
    match game.status() {
        GameStatus::Active => match game.turn_state() {
            TurnState::HumanToMove => format!("{:?} to move", game.current_turn()),
            TurnState::OpponentToMove => format!("{:?} is thinking...", game.current_turn()),
            TurnState::GameOver => String::new(),
        },
        GameStatus::Victory(force, reason) => {
            let reason = match reason {
                VictoryReason::NoPiecesLeft => "no pieces left",
                VictoryReason::NoLegalMoves => "no legal moves",
            };
            Style::new()
                .magenta()
                .apply_to(format!("Game over: {:?} wins ({})", force, reason))
                .to_string()
        }
    }
}

// Row 8 on top, so that the human (Black) plays upwards from the bottom.
fn render_grid(grid: &Grid, charset: Charset) -> String {
    let light = Style::new().color256(233).on_color256(230);
    let dark = Style::new().color256(233).on_color256(137);

    let col_names = std::iter::once(format_square(' '))
        .chain(Col::all().map(|col| format!(" c{}", col.to_one_based())))
        .join("")
        + "\n";

    let mut ret = col_names.clone();
    for row in Row::all().rev() {
        ret.push_str(&format!("r{} ", row.to_one_based()));
        for col in Col::all() {
            let coord = Coord::new(row, col);
            let ch = match (grid[coord], charset) {
                (Some(piece), Charset::Unicode) => piece_to_pictogram(piece),
                (Some(piece), Charset::Ascii) => piece_to_ascii(piece),
                (None, Charset::Ascii) if coord.is_dark() => '.',
                (None, _) => ' ',
            };
            let square = format_square(ch);
            match charset {
                Charset::Unicode => {
                    let style = if coord.is_dark() { &dark } else { &light };
                    ret.push_str(&style.apply_to(square).to_string());
                }
                Charset::Ascii => ret.push_str(&square),
            }
        }
        ret.push('\n');
    }
    ret.push_str(&col_names);
    ret
}

fn format_square(ch: char) -> String { format!(" {} ", ch) }
