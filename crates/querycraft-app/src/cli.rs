use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// QueryCraft: ask questions about a SQLite database in plain language.
#[derive(Parser, Debug)]
#[command(name = "querycraft", version, about)]
pub struct Args {
    /// Database file to query in place (defaults to `database.default_path`).
    #[arg(long, conflicts_with = "upload")]
    pub db: Option<PathBuf>,

    /// Database file to copy into a private temporary file and query there.
    #[arg(long)]
    pub upload: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Completion provider override.
    #[arg(long, value_parser = ["gemini", "claude"])]
    pub provider: Option<String>,

    /// Model name override.
    #[arg(long)]
    pub model: Option<String>,

    /// Result output format override.
    #[arg(long, value_parser = ["table", "json"])]
    pub format: Option<String>,

    /// Log filter directive override (e.g. `querycraft=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a single question and exit.
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },
    /// Print the schema description sent to the model.
    Schema,
    /// Print the effective configuration.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
