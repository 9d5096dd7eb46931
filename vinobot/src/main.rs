//! Binary entry point: loads env config, bootstraps the catalog and ledger,
//! and runs the Telegram repl. Startup failures are reported once and the
//! process never starts serving messages.

mod cli;
mod seed;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vinobot_catalog::CatalogRepository;
use vinobot_core::init_tracing;
use vinobot_engine::Engine;
use vinobot_ledger::FavoritesLedger;
use vinobot_telegram::{run_repl, BotConfig};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(token).await,
        Commands::Seed { database } => {
            let database_url = database
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .unwrap_or_else(|| "vinobot.db".to_string());
            seed::cmd_seed(&database_url).await
        }
    }
}

async fn run(token: Option<String>) -> Result<()> {
    let config = BotConfig::load(token)?;
    config.validate()?;

    if let Some(parent) = Path::new(&config.log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("Failed to create log directory")?;
        }
    }
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        favorites_file = %config.favorites_file,
        "Initializing bot"
    );

    // The catalog must be reachable before serving; otherwise abort startup.
    let catalog = CatalogRepository::new(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Catalog store unreachable at startup: {}", e))?;
    let ledger = FavoritesLedger::new(&config.favorites_file);
    let engine = Arc::new(Engine::new(catalog, ledger));

    let bot = match &config.telegram_api_url {
        Some(url) => teloxide::Bot::new(&config.bot_token)
            .set_api_url(url.parse().context("Invalid Telegram API URL")?),
        None => teloxide::Bot::new(&config.bot_token),
    };

    info!("Bot started");
    run_repl(bot, engine).await
}
