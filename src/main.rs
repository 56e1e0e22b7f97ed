//! Gomoku against the computer
//!
//! ## Usage
//!
//! - `renju` - Open the desktop GUI
//! - `renju play` - Play in the terminal
//!
//! Logging follows `RUST_LOG` (default `info`).

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use renju::config::{DEFAULT_MAX_DEPTH, DEFAULT_SAVE_PATH};
use renju::ui::RenjuApp;
use renju::{EngineConfig, GameConfig, Player, BOARD_SIZE};

/// Gomoku (five in a row) against a negamax engine
#[derive(Parser)]
#[command(name = "renju")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lines per side of the board
    #[arg(long, global = true, default_value_t = BOARD_SIZE)]
    size: usize,

    /// Plies searched before the position is evaluated
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,

    /// Clock per player, in seconds
    #[arg(long, global = true, default_value_t = 60.0)]
    time_limit: f64,

    /// Move log used by save and load
    #[arg(long, global = true, default_value = DEFAULT_SAVE_PATH)]
    save_path: PathBuf,

    /// Color you play; the computer takes the other
    #[arg(long, global = true, value_enum, default_value_t = Side::Black)]
    human: Side,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the desktop GUI
    Gui,
    /// Play in the terminal
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

impl Cli {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let time_limit = Duration::try_from_secs_f64(self.time_limit)
            .with_context(|| format!("invalid time limit {}", self.time_limit))?;
        let config = GameConfig {
            board_size: self.size,
            time_limit,
            save_path: self.save_path.clone(),
            human: self.human.into(),
            engine: EngineConfig {
                max_depth: self.depth,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!(
        size = config.board_size,
        depth = config.engine.max_depth,
        human = %config.human,
        "starting"
    );

    match cli.command {
        Some(Commands::Play) => {
            let stdin = io::stdin();
            renju::terminal::run(stdin.lock(), io::stdout(), &config).context("terminal session failed")
        }
        Some(Commands::Gui) | None => run_gui(config),
    }
}

fn run_gui(config: GameConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(RenjuApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
