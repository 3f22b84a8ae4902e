//! Chess CLI - replays moves through the rules and prints the result.
//!
//! The driver owns everything the rules leave to their caller: parsing
//! coordinate moves, keeping the game session, and printing the board,
//! the move list and move hints.

mod config;
mod json_output;

use anyhow::{bail, Context};
use chess_core::{Color, Move, Square};
use chess_rules::{moves_from, Game, MoveOutcome};
use clap::{Parser, Subcommand};
use config::CliConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Replays chess moves and shows legal destinations")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from this piece placement instead of the initial position
    #[arg(long, global = true)]
    start: Option<String>,

    /// Black moves first from the start position
    #[arg(long, global = true)]
    black_first: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play moves in coordinate form (e2e4, e7e8q) and print the position
    Play {
        /// Moves to play in order
        moves: Vec<String>,
    },
    /// List the legal destinations of the piece on a square
    Hints {
        /// Square to move from (e.g. g1)
        square: String,
        /// Moves to play first
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut game = new_game(cli.start.as_deref(), cli.black_first)?;

    match cli.command {
        Commands::Play { moves } => {
            replay(&mut game, &moves)?;
            if cli.json {
                println!("{}", json_output::game_json(&game)?);
            } else {
                print_game(&game, &config);
            }
        }
        Commands::Hints { square, moves } => {
            replay(&mut game, &moves)?;
            let from: Square = square.parse()?;
            let destinations = if config.hints_use_history {
                game.legal_destinations(from)
            } else {
                moves_from(game.board(), from)
            };
            if cli.json {
                println!("{}", json_output::hints_json(from, &destinations)?);
            } else if destinations.is_empty() {
                println!("{}: no legal moves", from);
            } else {
                let names: Vec<String> = destinations.iter().map(|s| s.to_algebraic()).collect();
                println!("{}: {}", from, names.join(" "));
            }
        }
    }

    Ok(())
}

fn new_game(start: Option<&str>, black_first: bool) -> anyhow::Result<Game> {
    let side = if black_first { Color::Black } else { Color::White };
    match start {
        Some(placement) => {
            Game::from_placement(placement, side).context("parsing --start placement")
        }
        None if black_first => Ok(Game::from_board(chess_core::Board::initial(), side)),
        None => Ok(Game::new()),
    }
}

/// Plays `moves` in order, stopping at the first one the game refuses.
fn replay(game: &mut Game, moves: &[String]) -> anyhow::Result<()> {
    for (ply, text) in moves.iter().enumerate() {
        let m: Move = text
            .parse()
            .with_context(|| format!("move {} ('{}')", ply + 1, text))?;
        let outcome = game
            .play_move(m)
            .with_context(|| format!("move {} ('{}')", ply + 1, text))?;
        tracing::info!(%m, ?outcome, "played");
        if let MoveOutcome::AwaitingPromotion(pending) = outcome {
            if ply + 1 < moves.len() {
                bail!(
                    "move {} ('{}') promotes on {}: add the piece letter, e.g. {}q",
                    ply + 1,
                    text,
                    pending.to,
                    m
                );
            }
        }
    }
    Ok(())
}

fn print_game(game: &Game, config: &CliConfig) {
    if config.show_board {
        println!("{}\n", game.board());
    }

    for (index, pair) in game.history().chunks(2).enumerate() {
        match pair {
            [white, black] => println!("{}. {}  {}", index + 1, white, black),
            [only] => println!("{}. {}", index + 1, only),
            _ => {}
        }
    }

    if let Some(pending) = game.pending_promotion() {
        println!(
            "{} → {} waiting for a promotion piece (q, r, b, n)",
            pending.from, pending.to
        );
    }
    println!("{} to move", game.side_to_move());
}
