// Test utilities that cannot be moved to the "tests" folder, because unit tests use them too.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Move;
use crate::clock::GameInstant;
use crate::game::{CheckersGame, TurnRecord};
use crate::layout::parse_grid;
use crate::rules::Rules;


// In theory random tests verify statistical properties that should always hold, but let's fix
// the seed to avoid sporadic failures.
pub fn deterministic_rng() -> StdRng { StdRng::from_seed([0; 32]) }

pub fn game_from_layout(layout: &str) -> CheckersGame {
    parse_grid(layout)
        .and_then(|grid| CheckersGame::new_with_grid(Rules::classic(), grid, deterministic_rng()))
        .unwrap_or_else(|err| panic!("bad layout: {err}"))
}

// Plays human moves given as `r3c2-r4c1 r4c1-r5c2 ...`, letting the engine answer after each
// one. Returns the first rejection, together with the move that caused it.
pub fn replay_human_moves(
    game: &mut CheckersGame, log: &str, start: GameInstant,
) -> Result<Vec<TurnRecord>, String> {
    let mut now = start;
    let mut records = Vec::new();
    let human = game.rules().human_force;
    for notation in log.split_whitespace() {
        let mv: Move = notation.parse()?;
        let record = game
            .propose_move(mv.from, mv.to, human, now)
            .map_err(|err| format!("{notation}: {err:?}"))?;
        records.push(record);
        now = now + game.rules().opponent_reply_delay;
        records.extend(game.tick(now));
    }
    Ok(records)
}
