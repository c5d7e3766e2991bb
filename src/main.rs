use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use readme_connect_four::config::AppConfig;
use readme_connect_four::document::CellSymbols;
use readme_connect_four::game::{Board, GameStatus};
use readme_connect_four::store::read_document;
use readme_connect_four::turn::{self, Outcome};

/// Play Connect Four inside a README, one move per run.
#[derive(Parser)]
#[command(name = "connect4-readme", about = "Advance a Connect Four board stored in a document")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the document path from the configuration
    #[arg(long)]
    document: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Apply the move named by the trigger text
    Play {
        /// Trigger text, e.g. "connect4|3"
        #[arg(long, env = "ISSUE_TITLE", default_value = "")]
        title: String,
    },
    /// Replace the board with an empty one
    Reset,
    /// Print the stored board and whose turn it is
    Show,
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    let Cli {
        config: config_path,
        document,
        log_level,
        command,
    } = Cli::parse();

    initialize_logging(log_level);

    let load_config = || -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(&config_path)
            .with_context(|| format!("loading config from {}", config_path.display()))?;
        if let Some(document) = &document {
            config.document.path = document.clone();
        }
        Ok(config)
    };

    match command {
        Cmd::Play { title } => {
            let config = match load_config() {
                Ok(config) => config,
                // A broken config must not fail runs for unrelated triggers.
                Err(e) if !AppConfig::command_or_default(&config_path).is_trigger(&title) => {
                    warn!("{e:#}");
                    println!("Not a game command. Exiting.");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            let path = &config.document.path;
            let outcome = turn::play_file(path, &title, &config)
                .with_context(|| format!("playing {title:?} on {}", path.display()))?;
            match outcome {
                Outcome::Ignored => println!("Not a game command. Exiting."),
                Outcome::ColumnFull { column } => {
                    println!("Column {} is full. No move made.", column + 1)
                }
                Outcome::Written(ply) => {
                    info!(row = ply.row, column = ply.column, "ply recorded");
                    println!("Board updated successfully.");
                }
            }
        }
        Cmd::Reset => {
            let config = load_config()?;
            let path = &config.document.path;
            turn::reset_file(path, &config)
                .with_context(|| format!("resetting board in {}", path.display()))?;
            println!("Board reset.");
        }
        Cmd::Show => {
            let config = load_config()?;
            let path = &config.document.path;
            let text = read_document(path)?;
            let snapshot = turn::inspect(&text, &config)
                .with_context(|| format!("reading board from {}", path.display()))?;
            if snapshot.reconstruction.was_reset() {
                println!("(stored board did not parse; a new game would start)");
            }
            print_board(snapshot.reconstruction.board(), &config.symbols);
            match snapshot.status {
                GameStatus::InProgress(next) => {
                    println!("Next turn: {} {}", config.symbols.player(next), next)
                }
                GameStatus::Won(winner) => {
                    println!("{} {} has four in a row", config.symbols.player(winner), winner)
                }
            }
        }
        Cmd::DefaultConfig => print!("{}", AppConfig::default_toml()),
    }

    Ok(())
}

fn print_board(board: &Board, symbols: &CellSymbols) {
    let header: Vec<String> = (1..=board.cols()).map(|c| c.to_string()).collect();
    println!(" {}", header.join("  "));
    for row in 0..board.rows() {
        let cells: Vec<&str> = board.row(row).iter().map(|&c| symbols.cell(c)).collect();
        println!("{}", cells.join(" "));
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
