use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Luach: kosher products, Hebrew dates and the weekly parasha.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar, weekly parasha and kosher product API"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Print the Hebrew date for a Gregorian date.
    Date(DateArgs),
    /// Print the weekly parasha for a date.
    Parasha(ParashaArgs),
    /// Print every Shabbat reading of a Hebrew year.
    Schedule(ScheduleArgs),
    /// List the product catalogue.
    Products(ProductsArgs),
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Override bind host from config.
    #[arg(long)]
    pub host: Option<String>,

    /// Override bind port from config.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override catalogue CSV path from config.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Override rite from config (`diaspora` or `israel`).
    #[arg(short, long)]
    pub rite: Option<String>,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Gregorian date as YYYY-MM-DD (default: today).
    pub date: Option<String>,
}

/// Arguments for the `parasha` subcommand.
#[derive(clap::Args)]
pub struct ParashaArgs {
    /// Gregorian date as YYYY-MM-DD (default: today).
    pub date: Option<String>,

    /// Override rite from config (`diaspora` or `israel`).
    #[arg(short, long)]
    pub rite: Option<String>,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Hebrew year (default: the current one).
    pub year: Option<i32>,

    /// Override rite from config (`diaspora` or `israel`).
    #[arg(short, long)]
    pub rite: Option<String>,
}

/// Arguments for the `products` subcommand.
#[derive(clap::Args)]
pub struct ProductsArgs {
    /// Only list products in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Override catalogue CSV path from config.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}
