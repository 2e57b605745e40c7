//! Tictactoe - command-line driver
//!
//! Plays single games or tallies many simulated ones.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_minimax::{MatchConfig, Orchestrator, PlayerKind, TextRenderer, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { x, o, seed, quiet } => run_play(x, o, seed, quiet),
        Command::Simulate {
            config,
            x,
            o,
            trials,
            seed,
            json,
        } => {
            let mut match_config = match config {
                Some(path) => MatchConfig::from_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => MatchConfig::default(),
            };
            if let Some(x) = x {
                match_config = match_config.with_x(x);
            }
            if let Some(o) = o {
                match_config = match_config.with_o(o);
            }
            if let Some(trials) = trials {
                match_config = match_config.with_trials(trials);
            }
            if seed.is_some() {
                match_config = match_config.with_seed(seed);
            }
            run_simulate(match_config, json)
        }
    }
}

/// Play one game on the terminal
#[instrument]
fn run_play(x: PlayerKind, o: PlayerKind, seed: Option<u64>, quiet: bool) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "Starting single game");

    let mut game = Orchestrator::new(
        x.build(tictactoe_minimax::Mark::X, seed),
        o.build(tictactoe_minimax::Mark::O, seed.wrapping_add(1)),
    )?;
    if !quiet {
        game = game.with_observer(TextRenderer::new(std::io::stdout()));
    }

    let outcome = game.run()?;
    if quiet {
        println!("{}", outcome);
    }
    Ok(())
}

/// Simulate many games and print the tally
#[instrument(skip(config))]
fn run_simulate(config: MatchConfig, json: bool) -> Result<()> {
    if *config.trials() == 0 {
        anyhow::bail!("trials must be at least 1");
    }

    let tally = simulate(&config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
