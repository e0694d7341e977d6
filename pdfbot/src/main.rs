//! pdfbot binary: run the bot or inspect the document store.

use anyhow::Result;
use clap::Parser;
use pdfbot::{list_collections, load_config, run_bot, Cli, Commands, StoreConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::ListCollections => {
            let config = StoreConfig::from_env()?;
            let counts = list_collections(&config).await?;
            if counts.is_empty() {
                println!("No collections found.");
            }
            for (name, count) in counts {
                println!("{name}\t{count}");
            }
            Ok(())
        }
    }
}
