// Turn control for a human-vs-engine game.
//
// The human side moves through `propose_move`. An accepted move hands the turn to the
// engine, whose reply is scheduled `Rules::opponent_reply_delay` later. The presentation
// layer owns the timer: when it fires it calls `run_opponent_reply` (or just `tick`).
// A reply that fires early, more than once, or after the game is over changes nothing.

use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, MoveOutcome, TurnError};
use crate::clock::GameInstant;
use crate::coord::Coord;
use crate::force::Force;
use crate::grid::Grid;
use crate::opponent::select_move;
use crate::piece::Piece;
use crate::rules::Rules;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum VictoryReason {
    NoPiecesLeft,
    NoLegalMoves,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Victory(Force, VictoryReason),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TurnState {
    HumanToMove,
    OpponentToMove,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReplyError {
    NotScheduled,
    Stale,
    NotDue,
    GameOver,
}

// Handle for the engine's deferred reply. Only the most recently scheduled one is live.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScheduledReply {
    id: u64,
    pub due: GameInstant,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TurnRecord {
    pub force: Force,
    pub mv: Move,
    pub outcome: MoveOutcome,
    pub time: GameInstant,
}

impl GameStatus {
    pub fn is_active(self) -> bool { self == GameStatus::Active }
    pub fn winner(self) -> Option<Force> {
        match self {
            GameStatus::Active => None,
            GameStatus::Victory(force, _) => Some(force),
        }
    }
}

// A side loses when it has no pieces or cannot move. Black is checked first; the order only
// matters if both sides are stuck at once, which a single move cannot cause.
pub fn check_game_over(board: &Board) -> GameStatus {
    for force in [Force::Black, Force::White] {
        if board.piece_count(force) == 0 {
            return GameStatus::Victory(force.opponent(), VictoryReason::NoPiecesLeft);
        }
        if !board.has_legal_moves(force) {
            return GameStatus::Victory(force.opponent(), VictoryReason::NoLegalMoves);
        }
    }
    GameStatus::Active
}


#[derive(Clone, Debug)]
pub struct CheckersGame<R: Rng = StdRng> {
    rules: Rules,
    board: Board,
    status: GameStatus,
    turn_state: TurnState,
    pending_reply: Option<ScheduledReply>,
    next_reply_id: u64,
    turn_log: Vec<TurnRecord>,
    rng: R,
}

impl<R: Rng> CheckersGame<R> {
    pub fn new(rules: Rules, rng: R) -> Self { Self::new_with_board(rules, Board::new(), rng) }

    // A custom position may already be decided, in which case the game starts over.
    pub fn new_with_grid(rules: Rules, grid: Grid, rng: R) -> Result<Self, String> {
        Ok(Self::new_with_board(rules, Board::new_with_grid(grid)?, rng))
    }

    fn new_with_board(rules: Rules, board: Board, rng: R) -> Self {
        let mut game = CheckersGame {
            rules,
            board,
            status: GameStatus::Active,
            turn_state: TurnState::HumanToMove,
            pending_reply: None,
            next_reply_id: 0,
            turn_log: Vec::new(),
            rng,
        };
        game.update_status();
        game
    }

    pub fn rules(&self) -> &Rules { &self.rules }
    pub fn board(&self) -> &Board { &self.board }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn turn_state(&self) -> TurnState { self.turn_state }
    pub fn pending_reply(&self) -> Option<ScheduledReply> { self.pending_reply }
    pub fn turn_log(&self) -> &[TurnRecord] { &self.turn_log }
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> { self.board.piece_at(coord) }
    pub fn captures(&self, force: Force) -> u8 { self.board.captures(force) }

    // The side to move. After game over this is the side that would have moved next.
    pub fn current_turn(&self) -> Force {
        match self.turn_state {
            TurnState::HumanToMove => self.rules.human_force,
            TurnState::OpponentToMove => self.rules.opponent_force(),
            TurnState::GameOver => match self.turn_log.last() {
                Some(record) => record.force.opponent(),
                None => self.rules.human_force,
            },
        }
    }

    pub fn propose_move(
        &mut self, from: Coord, to: Coord, force: Force, now: GameInstant,
    ) -> Result<TurnRecord, TurnError> {
        if !self.status.is_active() {
            return Err(TurnError::GameOver);
        }
        if self.turn_state != TurnState::HumanToMove || force != self.rules.human_force {
            return Err(TurnError::WrongTurnOrder);
        }
        let mv = Move::new(from, to);
        self.board.check_move(mv, force)?;
        let record = self.apply_move(mv, force, now);
        if self.status.is_active() {
            self.turn_state = TurnState::OpponentToMove;
            self.next_reply_id += 1;
            let reply = ScheduledReply {
                id: self.next_reply_id,
                due: now + self.rules.opponent_reply_delay,
            };
            debug!("Opponent reply scheduled for {:?}", reply.due);
            self.pending_reply = Some(reply);
        }
        Ok(record)
    }

    // Same as `propose_move`, for square ids like `r3c2` coming from the presentation layer.
    pub fn propose_move_by_id(
        &mut self, from: &str, to: &str, force: Force, now: GameInstant,
    ) -> Result<TurnRecord, TurnError> {
        let from = Coord::from_id(from).map_err(|_| TurnError::InvalidCoord)?;
        let to = Coord::from_id(to).map_err(|_| TurnError::InvalidCoord)?;
        self.propose_move(from, to, force, now)
    }

    pub fn run_opponent_reply(
        &mut self, reply: ScheduledReply, now: GameInstant,
    ) -> Result<TurnRecord, ReplyError> {
        if !self.status.is_active() {
            warn!("Opponent reply fired after game over");
            return Err(ReplyError::GameOver);
        }
        let pending = self.pending_reply.ok_or(ReplyError::NotScheduled)?;
        if pending.id != reply.id {
            warn!("Ignoring stale opponent reply");
            return Err(ReplyError::Stale);
        }
        if now < pending.due {
            warn!("Opponent reply fired early: {:?} < {:?}", now, pending.due);
            return Err(ReplyError::NotDue);
        }
        self.pending_reply = None;
        let force = self.rules.opponent_force();
        let moves = self.board.legal_moves(force);
        let Some(mv) = select_move(&moves, &mut self.rng) else {
            self.set_status(GameStatus::Victory(force.opponent(), VictoryReason::NoLegalMoves));
            return Err(ReplyError::GameOver);
        };
        let record = self.apply_move(mv, force, now);
        if self.status.is_active() {
            self.turn_state = TurnState::HumanToMove;
        }
        Ok(record)
    }

    // Runs the pending reply if it is due. Convenient for callers that poll.
    pub fn tick(&mut self, now: GameInstant) -> Option<TurnRecord> {
        let reply = self.pending_reply?;
        if now < reply.due {
            return None;
        }
        self.run_opponent_reply(reply, now).ok()
    }

    fn apply_move(&mut self, mv: Move, force: Force, now: GameInstant) -> TurnRecord {
        let outcome = self.board.apply_move(mv);
        debug!(
            "{:?} played {}{}{}",
            force,
            mv,
            if outcome.captured.is_some() { ", capture" } else { "" },
            if outcome.promoted { ", crowned" } else { "" },
        );
        let record = TurnRecord { force, mv, outcome, time: now };
        self.turn_log.push(record);
        self.update_status();
        record
    }

    fn update_status(&mut self) {
        let status = check_game_over(&self.board);
        if !status.is_active() {
            self.set_status(status);
        }
    }

    fn set_status(&mut self, status: GameStatus) {
        info!("Game over: {:?}", status);
        self.status = status;
        self.turn_state = TurnState::GameOver;
        self.pending_reply = None;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::parse_grid;
    use crate::test_util::deterministic_rng;

    fn board(layout: &str) -> Board { Board::new_with_grid(parse_grid(layout).unwrap()).unwrap() }

    fn game(layout: &str) -> CheckersGame {
        CheckersGame::new_with_grid(Rules::classic(), parse_grid(layout).unwrap(), deterministic_rng())
            .unwrap()
    }

    #[test]
    fn no_pieces_left() {
        let board = board("
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            .w......
        ");
        assert_eq!(
            check_game_over(&board),
            GameStatus::Victory(Force::White, VictoryReason::NoPiecesLeft)
        );
    }

    #[test]
    fn blocked_side_loses() {
        // The white man on r8c1 can neither step to r7c2 nor jump to r6c3.
        let board = board("
            w.......
            .b......
            ..b.....
            ........
            ........
            ........
            ........
            ........
        ");
        assert_eq!(
            check_game_over(&board),
            GameStatus::Victory(Force::Black, VictoryReason::NoLegalMoves)
        );
    }

    #[test]
    fn starting_position_is_active() {
        assert_eq!(check_game_over(&Board::new()), GameStatus::Active);
    }

    #[test]
    fn stale_reply_is_ignored() {
        let mut g = game("
            ......w.
            ........
            ........
            ........
            ........
            ........
            ..b.....
            ........
        ");
        let now = GameInstant::game_start();
        g.propose_move(Coord::rc(2, 3), Coord::rc(3, 4), Force::Black, now).unwrap();
        let reply = g.pending_reply().unwrap();
        assert_eq!(g.run_opponent_reply(reply, now), Err(ReplyError::NotDue));
        let later = reply.due;
        g.run_opponent_reply(reply, later).unwrap();
        assert_eq!(g.run_opponent_reply(reply, later), Err(ReplyError::NotScheduled));

        g.propose_move(Coord::rc(3, 4), Coord::rc(4, 5), Force::Black, later).unwrap();
        let much_later = later + g.rules().opponent_reply_delay;
        assert_eq!(g.run_opponent_reply(reply, much_later), Err(ReplyError::Stale));
        assert_eq!(g.turn_state(), TurnState::OpponentToMove);
    }

    #[test]
    fn decided_position_starts_over() {
        let mut g = game("
            w.......
            .b......
            ..b.....
            ........
            ........
            ........
            ........
            ........
        ");
        assert_eq!(g.status(), GameStatus::Victory(Force::Black, VictoryReason::NoLegalMoves));
        assert_eq!(g.turn_state(), TurnState::GameOver);
        assert_eq!(
            g.propose_move(Coord::rc(6, 3), Coord::rc(7, 4), Force::Black, GameInstant::game_start()),
            Err(TurnError::GameOver)
        );
        assert!(g.turn_log().is_empty());
    }
}
