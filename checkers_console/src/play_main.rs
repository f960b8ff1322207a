use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use instant::Instant;
use itertools::Itertools;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use checkers::board::{Move, TurnError};
use checkers::clock::GameInstant;
use checkers::game::CheckersGame;
use checkers::rules::Rules;

use crate::tui::{self, Charset};


pub struct PlayConfig {
    pub seed: Option<u64>,
    pub charset: Charset,
}

const HELP: &str = "\
Commands:
  r3c2 r4c1   move the piece on row 3, column 2 to row 4, column 1 (also r3c2-r4c1)
  moves       list your legal moves
  help        show this message
  quit        leave the game";

enum Command {
    Move(Move),
    ListMoves,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Result<Command, String> {
    match input.trim() {
        "moves" => Ok(Command::ListMoves),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        s => s.parse().map(Command::Move),
    }
}

fn render(stdout: &mut io::Stdout, game: &CheckersGame, charset: Charset) -> io::Result<()> {
    writeln!(stdout, "\n{}", tui::render_game(game, charset))?;
    stdout.flush()
}

enum IncomingEvent {
    Terminal(String),
    // The engine's reply is due.
    Tick,
}

pub fn run(config: PlayConfig) -> io::Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = CheckersGame::new(Rules::classic(), rng);
    let human = game.rules().human_force;
    let game_start = Instant::now();
    let game_now = || GameInstant::from_instant(game_start, Instant::now());

    let mut stdout = io::stdout();
    writeln!(stdout, "You play {:?}. Type \"help\" for the list of commands.", human)?;
    render(&mut stdout, &game, config.charset)?;

    // Stdin is read on its own thread so that the engine can reply while the human types.
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        let event = match game.pending_reply() {
            Some(reply) => match rx.recv_timeout(game_now().duration_until(reply.due)) {
                Ok(line) => IncomingEvent::Terminal(line),
                Err(RecvTimeoutError::Timeout) => IncomingEvent::Tick,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            },
            None => match rx.recv() {
                Ok(line) => IncomingEvent::Terminal(line),
                Err(_) => return Ok(()),
            },
        };
        match event {
            IncomingEvent::Tick => {
                if let Some(record) = game.tick(game_now()) {
                    writeln!(
                        stdout,
                        "{:?} plays {} at {:.1}s",
                        record.force,
                        record.mv,
                        record.time.elapsed_since_start().as_secs_f64()
                    )?;
                    render(&mut stdout, &game, config.charset)?;
                }
            }
            IncomingEvent::Terminal(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Err(err) => writeln!(stdout, "{}", err)?,
                    Ok(Command::Help) => writeln!(stdout, "{}", HELP)?,
                    Ok(Command::Quit) => return Ok(()),
                    Ok(Command::ListMoves) => {
                        let moves = game.board().legal_moves(human);
                        writeln!(stdout, "{}", moves.iter().join("  "))?;
                    }
                    Ok(Command::Move(mv)) => {
                        match game.propose_move(mv.from, mv.to, human, game_now()) {
                            Err(TurnError::WrongTurnOrder) => {
                                writeln!(stdout, "Wait for {:?} to move", human.opponent())?
                            }
                            Err(err) => writeln!(stdout, "Impossible move: {:?}", err)?,
                            Ok(_) => render(&mut stdout, &game, config.charset)?,
                        }
                    }
                }
            }
        }
        if let Some(winner) = game.status().winner() {
            info!("{:?} won after {} turns ({:?})", winner, game.turn_log().len(), game.status());
            return Ok(());
        }
    }
}
