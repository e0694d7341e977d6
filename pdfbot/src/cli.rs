//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "pdfbot")]
#[command(about = "PDF library Telegram bot: run, list-collections", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the store's collections with their record counts.
    ListCollections,
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["pdfbot", "run", "--token", "123:ABC"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("123:ABC")),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_list_collections() {
        let cli = Cli::try_parse_from(["pdfbot", "list-collections"]).unwrap();
        assert!(matches!(cli.command, Commands::ListCollections));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["pdfbot"]).is_err());
    }
}
