//! App config: Telegram connection, logging, catalog, and ledger paths.
//! Loaded from environment variables (load .env with dotenvy before this).

use anyhow::Result;
use std::env;

/// Configuration for one bot process.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// Catalog SQLite file
    pub database_url: String,
    /// Favorites ledger file
    pub favorites_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// BOT_TOKEN is required; everything else has a default.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/vinobot.log".to_string());
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "vinobot.db".to_string());
        let favorites_file =
            env::var("FAVORITES_FILE").unwrap_or_else(|_| "favorites.jsonl".to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url,
            favorites_file,
        })
    }

    /// Validate config (e.g. telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Config with the given token and defaults for everything else.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: "logs/vinobot.log".to_string(),
            database_url: "vinobot.db".to_string(),
            favorites_file: "favorites.jsonl".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token_defaults() {
        let config = BotConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.database_url, "vinobot.db");
        assert_eq!(config.favorites_file, "favorites.jsonl");
    }

    #[test]
    fn test_validate_rejects_bad_api_url() {
        let mut config = BotConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        config.telegram_api_url = Some("https://api.example.com".to_string());
        assert!(config.validate().is_ok());
    }
}
