//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Inspect and validate TechConf settings
#[derive(Parser, Debug)]
#[command(name = "techconf-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration variant (development or production), default development
    #[arg(short = 'e', long = "env", global = true, env = "APP_ENV")]
    pub variant: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every setting with secrets redacted
    Show(ShowArgs),

    /// Print the raw value of one setting
    Get(GetArgs),

    /// Load the variant and verify its secrets
    Check,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print a JSON object instead of NAME=value lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Setting name (e.g., "SQLALCHEMY_DATABASE_URI")
    pub name: String,
}
