mod cli;
mod config;
mod convert;
mod date_cmd;
mod logging;
mod parasha_cmd;
mod products_cmd;
mod schedule_cmd;
mod serve_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::LuachConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LuachConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Serve(args) => serve_cmd::run(args, &config),
        Command::Date(args) => date_cmd::run(args),
        Command::Parasha(args) => parasha_cmd::run(args, &config),
        Command::Schedule(args) => schedule_cmd::run(args, &config),
        Command::Products(args) => products_cmd::run(args, &config),
    }
}
