//! Ta-Te-Ti engine CLI
//!
//! Answers the same questions as the game API (winner, move, turn) for a
//! board given on the command line or a JSON request body on stdin. Results
//! go to stdout as JSON, logs go to stderr.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tateti::protocol::{self, ErrorResponse};
use tateti::{BoardError, Engine, EngineConfig, Variant};

#[derive(Parser)]
#[command(name = "tateti-cli", version, about = "K-in-a-row engine for small boards")]
struct Cli {
    /// TOML engine configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rule preset (sets win length and depth)
    #[arg(long, value_enum, global = true)]
    variant: Option<VariantArg>,

    /// Search depth override
    #[arg(long, global = true)]
    depth: Option<u8>,

    /// Worker threads for the root split
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Four,
    Five,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Four => Variant::Four,
            VariantArg::Five => Variant::Five,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Report the winner: {"ganador": null|0|1|2}
    Check {
        #[arg(long)]
        board: String,
    },
    /// Pick a move: {"movimiento": index|-1}
    Move {
        #[arg(long)]
        board: String,
        /// 1 or 2; inferred from the board when omitted
        #[arg(long)]
        player: Option<String>,
    },
    /// Report whose turn it is: {"jugador": 1|2}
    Player {
        #[arg(long)]
        board: String,
    },
    /// Read a move request body ({"board": ..., "player": ...}) from stdin
    Request,
    /// Print the board as a grid
    Show {
        #[arg(long)]
        board: String,
    },
}

fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_or_default(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(variant) = cli.variant {
        config.apply_variant(variant.into());
    }
    if let Some(depth) = cli.depth {
        config.max_depth = depth;
    }
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    config.validate()?;
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let mut engine = Engine::with_config(config);

    match cli.command {
        Command::Check { board } => print_json(&protocol::respond_check(&engine, &board)?),
        Command::Move { board, player } => {
            let player = player.as_deref().map(protocol::parse_player).transpose()?;
            print_json(&protocol::respond_move(&mut engine, &board, player)?)
        }
        Command::Player { board } => print_json(&protocol::respond_player(&engine, &board)?),
        Command::Request => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("reading request body from stdin")?;
            print_json(&protocol::respond_move_request(&mut engine, &body)?)
        }
        Command::Show { board } => {
            let board = protocol::parse_board(&board, engine.config().board_size)?;
            print!("{board}");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(board_err) = err.downcast_ref::<BoardError>() {
                // Input errors are answered on stdout like any other response
                if let Ok(json) = serde_json::to_string(&ErrorResponse::from(board_err)) {
                    println!("{json}");
                }
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
