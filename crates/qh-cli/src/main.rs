//! QuizHive CLI - schema migration for the quiz platform

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod hasher;

use cli::Cli;
use commands::{migrate, rollback, status};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        cli::Commands::Migrate => migrate::execute(&cli.global),
        cli::Commands::Rollback(args) => rollback::execute(args, &cli.global),
        cli::Commands::Status(args) => status::execute(args, &cli.global),
    }
}
