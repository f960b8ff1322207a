// One-ply greedy opponent: any capture beats any simple move, ties are broken at random.
// No lookahead.

use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::board::Move;


// Returns `None` only if `moves` is empty, which the caller must treat as "no legal moves".
pub fn select_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    let captures = moves.iter().copied().filter(|mv| mv.is_capture()).collect_vec();
    let candidates = if captures.is_empty() { moves } else { &captures[..] };
    candidates.choose(rng).copied()
}
