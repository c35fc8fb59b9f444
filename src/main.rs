//! Headless self-play runner (default binary).
//!
//! Plays whole games through a [`Session`] with random spawns, tilting in a
//! fixed round-robin order. Nothing is drawn; each finished game is logged
//! and summarized on one line.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use twenty48::core::parse_side;
use twenty48::engine::{Session, SessionConfig};
use twenty48::types::Side;

#[derive(Parser, Debug)]
#[command(name = "twenty48", about = "Run headless 2048 games")]
struct Args {
    /// Board side length (overrides TWENTY48_SIZE).
    #[arg(long)]
    size: Option<usize>,
    /// Spawn RNG seed for the first game (overrides TWENTY48_SEED).
    #[arg(long)]
    seed: Option<u32>,
    /// Winning tile value (overrides TWENTY48_MAX_PIECE).
    #[arg(long)]
    max_piece: Option<u32>,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Comma-separated tilt order, cycled every move.
    #[arg(long, default_value = "north,east,south,west")]
    order: String,
    /// Stop a game after this many tilt attempts.
    #[arg(long, default_value_t = 100_000)]
    max_moves: u32,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    log: String,
}

fn parse_order(order: &str) -> Result<Vec<Side>> {
    let sides = order
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(parse_side)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid --order {:?}", order))?;
    if sides.is_empty() {
        bail!("--order needs at least one direction");
    }
    Ok(sides)
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = SessionConfig::from_env();
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max_piece) = args.max_piece {
        config.max_piece = max_piece;
    }
    let order = parse_order(&args.order)?;

    let mut best = 0u64;
    for game in 0..args.games {
        let game_config = SessionConfig {
            seed: config.seed.wrapping_add(game),
            ..config.clone()
        };
        let mut session = Session::from_config(&game_config)
            .with_context(|| format!("invalid session config {:?}", game_config))?;
        session.new_game()?;

        let mut attempts = 0u32;
        let mut stale = 0usize;
        while !session.game_over() && attempts < args.max_moves {
            let side = order[attempts as usize % order.len()];
            attempts += 1;
            if session.tilt(side)?.changed {
                stale = 0;
            } else {
                stale += 1;
                // Every direction in the order failed: nothing left to try.
                if stale >= order.len() {
                    break;
                }
            }
        }

        let state = session.state();
        best = best.max(state.score());
        info!(
            game,
            seed = game_config.seed,
            score = state.score(),
            moves = session.moves(),
            max_tile = state.board().max_value().unwrap_or(0),
            over = state.game_over(),
            "game finished"
        );
        println!(
            "game {} seed {} score {} moves {} max_tile {} {}",
            game,
            game_config.seed,
            state.score(),
            session.moves(),
            state.board().max_value().unwrap_or(0),
            if state.game_over() { "over" } else { "stopped" }
        );
    }

    info!(games = args.games, best, "done");
    Ok(())
}
