use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use library_catalog::{hash_password, Session, SessionConfig, SessionOutcome};

#[derive(Parser)]
#[command(name = "library-catalog")]
#[command(version)]
#[command(about = "Console catalog manager for books and ebooks", long_about = None)]
struct Cli {
    /// JSON file with admin credentials and session limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog capacity (skips the startup prompt)
    #[arg(long)]
    capacity: Option<usize>,

    /// Render "Display All Books" as JSON
    #[arg(long)]
    json: bool,

    /// Log filter when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the SHA-256 digest to put in a config file's password_sha256
    HashPassword { password: String },
}

fn initialize_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    if let Some(Command::HashPassword { password }) = cli.command {
        println!("{}", hash_password(&password));
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config = config.with_capacity(capacity);
    }
    config.validate()?;

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout()).with_json_listing(cli.json);

    match session.run()? {
        SessionOutcome::AccessDenied => std::process::exit(1),
        SessionOutcome::Exited | SessionOutcome::InputClosed => Ok(()),
    }
}
