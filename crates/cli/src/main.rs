//! TechConf settings CLI - Application entry point
//!
//! CLI-based entry point that dispatches to the settings commands.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use techconf_settings::{
    cli::{Cli, Commands},
    commands, CliResult,
};

fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let settings = settings::load_named(cli.variant.as_deref())?;
    tracing::debug!("Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show(args) => commands::show::execute(args, &settings, &mut out),
        Commands::Get(args) => commands::get::execute(args, &settings, &mut out),
        Commands::Check => commands::check::execute(&settings, &mut out),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
