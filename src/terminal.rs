//! Line-oriented front end
//!
//! Reads commands from any `BufRead` and writes the board to any `Write`,
//! so the same loop serves stdin/stdout and tests.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::config::GameConfig;
use crate::save::{load_from_path, save_to_path};
use crate::{column_label, AIEngine, Board, Game, Outcome, Pos, Stone};

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Pos),
    Undo,
    Save,
    Load,
    New,
    Help,
    Quit,
}

const HELP: &str = "commands: <row> <col> | undo | save | load | new | help | quit
  row is a number, col a number or letter (\"7 8\" and \"7 H\" are the same cell)";

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or_else(|| "empty command".to_string())?;
        let command = match first.to_ascii_lowercase().as_str() {
            "undo" | "u" => Command::Undo,
            "save" | "s" => Command::Save,
            "load" | "l" => Command::Load,
            "new" | "n" => Command::New,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => {
                let row = first
                    .parse::<u8>()
                    .map_err(|_| format!("unknown command {first:?}"))?;
                let col = words.next().ok_or_else(|| "missing column".to_string())?;
                return match words.next() {
                    Some(extra) => Err(format!("unexpected {extra:?}")),
                    None => Ok(Command::Play(Pos::new(row, parse_column(col)?))),
                };
            }
        };
        match words.next() {
            Some(extra) => Err(format!("unexpected {extra:?}")),
            None => Ok(command),
        }
    }
}

fn parse_column(word: &str) -> Result<u8, String> {
    if let Ok(col) = word.parse::<u8>() {
        return Ok(col);
    }
    match word.as_bytes() {
        [c] if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase() - b'A'),
        _ => Err(format!("bad column {word:?}")),
    }
}

/// Board as text: `X` black, `O` white, `.` empty, last move in brackets
pub fn render(board: &Board) -> String {
    let size = board.size();
    // Row labels go up to `size - 1`; three-digit column labels fill their cell
    let margin = size.saturating_sub(1).to_string().len().max(2);
    let mut out = " ".repeat(margin + 1);
    for col in 0..size {
        let _ = write!(out, "{:^3}", column_label(col, size));
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{row:>margin$} ");
        for col in 0..size {
            let pos = Pos::new(row as u8, col as u8);
            let ch = match board.get(pos) {
                Stone::Black => 'X',
                Stone::White => 'O',
                Stone::Empty => '.',
            };
            if board.last_move() == Some(pos) {
                let _ = write!(out, "[{ch}]");
            } else {
                let _ = write!(out, " {ch} ");
            }
        }
        out.push('\n');
    }
    out
}

fn describe(game: &Game) -> String {
    match (game.outcome(), game.flagged()) {
        (Outcome::Draw, _) => "Draw: the board is full".to_string(),
        (outcome, Some(player)) => {
            let winner = outcome.winner().map_or_else(String::new, |w| w.to_string());
            format!("{player} ran out of time, {winner} wins")
        }
        (outcome, None) => match (outcome.winner(), game.board().winning_line()) {
            (Some(winner), Some((a, b))) => format!("{winner} wins with five from {a} to {b}"),
            (Some(winner), None) => format!("{winner} wins"),
            (None, _) => String::new(),
        },
    }
}

/// Human against the computer until `quit` or end of input
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &GameConfig) -> io::Result<()> {
    let mut game = Game::new(config);
    let mut engine = AIEngine::with_config(config.engine);
    let mut lines = input.lines();
    let mut announced = false;

    writeln!(output, "You play {}. {HELP}", config.human)?;
    write!(output, "{}", render(game.board()))?;

    loop {
        game.check_time();
        let outcome = game.outcome();

        if outcome.is_over() && !announced {
            writeln!(output, "{}", describe(&game))?;
            writeln!(output, "type new, undo, load or quit")?;
            announced = true;
        }

        if !outcome.is_over() && game.board().whose_move() != config.human {
            let result = match game.computer_move(&mut engine) {
                Ok(result) => result,
                Err(e) => {
                    writeln!(output, "computer cannot move: {e}")?;
                    break;
                }
            };
            writeln!(
                output,
                "computer plays {} (score {}, {} nodes, {}ms)",
                result.best_move, result.score, result.nodes, result.time_ms
            )?;
            write!(output, "{}", render(game.board()))?;
            continue;
        }

        if !outcome.is_over() {
            let (black, white) = game.remaining_times();
            write!(output, "[{black:.1}s | {white:.1}s] {} > ", game.board().whose_move())?;
        } else {
            write!(output, "> ")?;
        }
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(input = %line.trim(), "rejected input");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Play(_) if outcome.is_over() => {
                writeln!(output, "the game is over; type new to play again")?;
                continue;
            }
            Command::Play(pos) => {
                if let Err(e) = game.apply_move(pos) {
                    warn!(%pos, error = %e, "rejected move");
                    writeln!(output, "{e}")?;
                    continue;
                }
            }
            Command::Undo => {
                if game.undo_turn(config.human) == 0 {
                    writeln!(output, "nothing to undo")?;
                }
            }
            Command::Save => match save_to_path(&game, &config.save_path) {
                Ok(()) => writeln!(output, "saved to {}", config.save_path.display())?,
                Err(e) => writeln!(output, "save failed: {e}")?,
            },
            Command::Load => match load_from_path(&config.save_path, config) {
                Ok(loaded) => game = loaded,
                Err(e) => writeln!(output, "load failed: {e}")?,
            },
            Command::New => game.restart(),
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        announced = false;
        write!(output, "{}", render(game.board()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use std::io::Cursor;

    fn config() -> GameConfig {
        GameConfig {
            board_size: 9,
            save_path: std::env::temp_dir().join(format!("renju-term-{}.txt", std::process::id())),
            ..GameConfig::default()
        }
    }

    fn play(script: &str, config: &GameConfig) -> String {
        let mut out = Vec::new();
        run(Cursor::new(script), &mut out, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("7 8"), Ok(Command::Play(Pos::new(7, 8))));
        assert_eq!(Command::parse(" 7 h "), Ok(Command::Play(Pos::new(7, 7))));
        assert_eq!(Command::parse("UNDO"), Ok(Command::Undo));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert!(Command::parse("7").is_err());
        assert!(Command::parse("7 8 9").is_err());
        assert!(Command::parse("undo now").is_err());
        assert!(Command::parse("jump").is_err());
        assert!(Command::parse("7 ab").is_err());
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(5);
        board.apply(Pos::new(0, 0)).unwrap();
        board.apply(Pos::new(1, 2)).unwrap();
        let text = render(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    A  B  C  D  E ");
        assert_eq!(lines[1], " 0  X  .  .  .  . ");
        assert_eq!(lines[2], " 1  .  . [O] .  . ");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_render_large_board_numbers_columns() {
        let mut board = Board::new(200);
        board.apply(Pos::new(199, 199)).unwrap();
        let text = render(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 201);
        assert!(lines[0].starts_with("     0  1  2 "), "{}", lines[0]);
        assert!(lines[0].trim_end().ends_with("198199"), "{}", lines[0]);
        assert!(lines[1].starts_with("  0  . "));
        assert!(lines[200].starts_with("199 "));
        assert!(lines[200].ends_with("[X]"));
    }

    #[test]
    fn test_human_move_gets_answer() {
        let out = play("4 4\nquit\n", &config());
        assert!(out.contains("computer plays"), "{out}");
    }

    #[test]
    fn test_rejected_input_is_reported() {
        let out = play("4 4\n4 4\n20 0\nfoo\n", &config());
        assert!(out.contains("occupied"), "{out}");
        assert!(out.contains("outside the board"), "{out}");
        assert!(out.contains("unknown command"), "{out}");
    }

    #[test]
    fn test_computer_opens_for_white() {
        let config = GameConfig {
            human: Player::White,
            ..config()
        };
        let out = play("", &config);
        assert!(out.starts_with("You play White"));
        assert!(out.contains("computer plays"));
    }

    #[test]
    fn test_undo_with_nothing_played() {
        let out = play("undo\n", &config());
        assert!(out.contains("nothing to undo"));
    }
}
