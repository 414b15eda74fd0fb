//! Terminal front end: prints the board each turn and reads human moves
//! from a prompt.
//!
//! Generic over the reader and writer so whole games can be scripted.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{info, warn};

use crate::board::{Move, Piece};
use crate::config::Strategy;
use crate::engine::AIEngine;
use crate::error::PentagoError;
use crate::game::{Game, GameStatus};

/// Strategy for each color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    pub white: Strategy,
    pub black: Strategy,
}

impl Players {
    pub fn new(white: Strategy, black: Strategy) -> Self {
        Self { white, black }
    }

    #[inline]
    pub fn strategy_for(&self, color: Piece) -> Strategy {
        match color {
            Piece::Black => self.black,
            _ => self.white,
        }
    }
}

/// Line printed at the prompt for a rejected move
fn prompt_message(err: &PentagoError) -> &'static str {
    match err {
        PentagoError::InvalidFormat(_) => "Invalid format",
        PentagoError::CellOutOfRange { .. } => "Row and columns are 0-5",
        PentagoError::QuadrantOutOfRange(_) => "Subboard is 0-3",
        PentagoError::InvalidDirection(_) => "Direction is 0 for clockwise, 1 for counterclockwise",
        PentagoError::Occupied(_) | PentagoError::NoMovesAvailable => "Invalid move",
    }
}

/// Ask until a legal move is entered. End of input is an error.
pub fn prompt_for_move<R: BufRead, W: Write>(
    game: &Game,
    input: &mut R,
    out: &mut W,
) -> io::Result<Move> {
    let mut line = String::new();
    loop {
        write!(out, "{}> ", game.turn)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a move was entered",
            ));
        }

        let parsed = line.parse::<Move>().and_then(|mv| {
            if mv.is_valid(&game.board) {
                Ok(mv)
            } else {
                Err(PentagoError::Occupied(mv.pos))
            }
        });
        match parsed {
            Ok(mv) => return Ok(mv),
            Err(err) => {
                warn!(%err, "rejected input");
                writeln!(out, "{}", prompt_message(&err))?;
            }
        }
    }
}

/// Play until the game is decided, writing the transcript to `out`.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    players: Players,
    engine: &AIEngine,
    input: &mut R,
    out: &mut W,
) -> io::Result<GameStatus> {
    loop {
        write!(out, "{}", game)?;
        match game.status() {
            GameStatus::Won(winner) => {
                writeln!(out, "{} won!", winner)?;
                info!(%winner, "game over");
                return Ok(GameStatus::Won(winner));
            }
            GameStatus::Draw => {
                writeln!(out, "Draw!")?;
                info!("game drawn");
                return Ok(GameStatus::Draw);
            }
            GameStatus::InProgress => {}
        }
        write!(out, "\n{}'s move\n", game.turn)?;

        let start = Instant::now();
        let strategy = players.strategy_for(game.turn);
        let mv = match strategy {
            Strategy::Human => prompt_for_move(game, input, out)?,
            automated => match engine.choose(automated, &game.board, game.turn) {
                Some(result) => result.best_move.ok_or_else(no_moves)?,
                None => return Err(no_moves()),
            },
        };
        writeln!(out, "finished in {:?}", start.elapsed())?;

        let color = game.turn;
        if !game.make_move(mv) {
            warn!(%mv, %color, "move rejected");
            writeln!(out, "Error")?;
        }
        info!(%color, strategy = strategy.label(), %mv, "move played");
        writeln!(out, "{}", mv)?;
    }
}

fn no_moves() -> io::Error {
    io::Error::other(PentagoError::NoMovesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::config::EngineConfig;

    fn run(game: &mut Game, players: Players, script: &str) -> (io::Result<GameStatus>, String) {
        let engine = AIEngine::with_config(EngineConfig {
            max_depth: 1,
            ..EngineConfig::default()
        });
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let status = play(game, players, &engine, &mut input, &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompt_messages_then_win() {
        let board = Board::from_rows(&[
            "W W W W . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . . B B .",
        ])
        .unwrap();
        let mut game = Game::with_board(board, Piece::White);
        let script = "bad\n9 0 0 0\n0 0 5 0\n0 0 0 3\n0 0 0 0\n0 4 2 0\n";

        let (status, out) = run(&mut game, Players::new(Strategy::Human, Strategy::Human), script);
        assert_eq!(status.unwrap(), GameStatus::Won(Piece::White));

        assert!(out.starts_with(" W W W W . .\n"));
        assert!(out.contains("\nWhite's move\nWhite> "));
        let messages = [
            "Invalid format",
            "Row and columns are 0-5",
            "Subboard is 0-3",
            "Direction is 0 for clockwise, 1 for counterclockwise",
            "Invalid move",
        ];
        let mut rest = out.as_str();
        for message in messages {
            let at = rest.find(message).unwrap_or_else(|| panic!("missing {:?}", message));
            rest = &rest[at + message.len()..];
        }
        assert!(out.contains("finished in "));
        assert!(out.contains("Put piece (0, 4), rotate quadrant 2 CW\n"));
        assert!(out.ends_with(" W W W W W .\n . . . . . .\n . . . . . .\n . . . . . .\n . . . . . .\n . . . B B .\nWhite won!\n"));
    }

    #[test]
    fn test_automated_game_finishes() {
        let board = Board::from_rows(&[
            "B B W W B B",
            "W W B B W W",
            "B B . W B B",
            "W W B B W W",
            "B B W W . B",
            "W W B B W W",
        ])
        .unwrap();
        let mut game = Game::with_board(board, Piece::White);

        let (status, out) = run(&mut game, Players::new(Strategy::Ai, Strategy::Random), "");
        let status = status.unwrap();
        assert_ne!(status, GameStatus::InProgress);
        assert!(out.contains("\nWhite's move\n"));
        match status {
            GameStatus::Draw => assert!(out.ends_with("Draw!\n")),
            GameStatus::Won(winner) => assert!(out.ends_with(&format!("{} won!\n", winner))),
            GameStatus::InProgress => unreachable!(),
        }
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut game = Game::new();
        let (status, out) = run(&mut game, Players::new(Strategy::Human, Strategy::Ai), "1 1\n");
        assert_eq!(status.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
        assert!(out.contains("Invalid format"));
    }

    #[test]
    fn test_players_strategy_for() {
        let players = Players::new(Strategy::Random, Strategy::Ai);
        assert_eq!(players.strategy_for(Piece::White), Strategy::Random);
        assert_eq!(players.strategy_for(Piece::Black), Strategy::Ai);
    }
}
