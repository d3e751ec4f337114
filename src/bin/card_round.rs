//! card-round CLI - play the card game in a terminal.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use card_round::session::{LineInput, Session, SessionEnd, SessionError, Terminal};
use card_round::SettingsStore;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "card-round")]
#[command(about = "Draw a card each round; highest card scores, first to pull ahead wins")]
struct Args {
    /// Settings file (defaults to settings.json next to the executable)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let path = match args.settings {
        Some(path) => path,
        None => match SettingsStore::default_path() {
            Ok(path) => path,
            Err(err) => {
                error!(error = %err, "could not resolve settings path");
                return ExitCode::FAILURE;
            }
        },
    };

    let loaded = SettingsStore::new(&path).load_or_default();
    if let Some(reason) = &loaded.fallback {
        println!("Using default settings ({reason}).");
        println!();
    }
    let settings = loaded.settings;

    let stdin = io::stdin();
    let terminal = Terminal::new(
        LineInput::new(stdin.lock()),
        BufWriter::new(io::stdout()),
        settings.exit_key,
    );

    let result = Session::start(settings, terminal, args.seed).and_then(|mut session| {
        let end = session.run()?;
        info!(games = session.games_played(), ?end, "session over");
        Ok(end)
    });

    match result {
        Ok(SessionEnd::Finished | SessionEnd::Exited | SessionEnd::EndOfInput) => ExitCode::SUCCESS,
        Err(SessionError::Exit | SessionError::EndOfInput) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "session failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
