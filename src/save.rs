//! Move log persistence
//!
//! One line per ply: `row col seconds`, whitespace separated, seconds with
//! four decimals. Loading replays every line through the normal move path,
//! so a saved game reloads to an identical board.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::board::Pos;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Replay {
        line: usize,
        #[source]
        source: GameError,
    },

    #[error("{moves} moves played but {durations} durations logged")]
    Unlogged { moves: usize, durations: usize },
}

/// Write the move log of `game`.
///
/// Nothing is written unless every move has a logged duration.
pub fn save_game<W: Write>(game: &Game, mut writer: W) -> Result<(), SaveError> {
    let moves = game.board().history().len();
    let durations = game.durations().len();
    if moves != durations {
        return Err(SaveError::Unlogged { moves, durations });
    }

    for (pos, duration) in game.board().history().iter().zip(game.durations()) {
        writeln!(writer, "{} {} {:.4}", pos.row, pos.col, duration.as_secs_f64())?;
    }
    writer.flush()?;
    Ok(())
}

/// Rebuild a game by replaying a move log onto a fresh board
pub fn load_game<R: Read>(reader: R, config: &GameConfig) -> Result<Game, SaveError> {
    let mut game = Game::new(config);
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let (pos, duration) = parse_record(&line, number)?;
        game.apply_move_timed(pos, duration)
            .map_err(|source| SaveError::Replay { line: number, source })?;
    }
    game.resume_clock();
    Ok(game)
}

fn parse_record(line: &str, number: usize) -> Result<(Pos, Duration), SaveError> {
    let parse_err = |message: String| SaveError::Parse {
        line: number,
        message,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[row, col, secs] = fields.as_slice() else {
        return Err(parse_err(format!("expected 3 fields, found {}", fields.len())));
    };

    let row: u8 = row
        .parse()
        .map_err(|e| parse_err(format!("bad row {row:?}: {e}")))?;
    let col: u8 = col
        .parse()
        .map_err(|e| parse_err(format!("bad column {col:?}: {e}")))?;
    let secs: f64 = secs
        .parse()
        .map_err(|e| parse_err(format!("bad duration {secs:?}: {e}")))?;
    let duration = Duration::try_from_secs_f64(secs)
        .map_err(|e| parse_err(format!("bad duration {secs}: {e}")))?;

    Ok((Pos::new(row, col), duration))
}

pub fn save_to_path(game: &Game, path: &Path) -> Result<(), SaveError> {
    let file = File::create(path)?;
    save_game(game, BufWriter::new(file))?;
    info!(path = %path.display(), moves = game.board().move_count(), "game saved");
    Ok(())
}

pub fn load_from_path(path: &Path, config: &GameConfig) -> Result<Game, SaveError> {
    let file = File::open(path)?;
    let game = load_game(file, config)?;
    info!(path = %path.display(), moves = game.board().move_count(), "game loaded");
    Ok(game)
}
