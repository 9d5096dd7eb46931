//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vinobot")]
#[command(about = "Wine pairing Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Populate the catalog with a demo set of wines, dishes, and pairings.
    Seed {
        /// Catalog SQLite file (defaults to DATABASE_URL or vinobot.db).
        #[arg(short, long)]
        database: Option<String>,
    },
}
