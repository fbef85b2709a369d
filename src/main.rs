use crate::clients::rawg::RawgClient;
use crate::config::cli::Commands;
use crate::config::Config;
use crate::error::Result;
use crate::screen::StalePolicy;
use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tracing::info;

mod clients;
mod config;
mod domain;
mod error;
mod screen;
mod search;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::new()?;
    let level = config.log_level()?;

    match &config.args.command {
        Some(Commands::Search { query, json }) => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();

            let client = rawg_client(&config)?;
            search::run_search(&client, query, *json).await
        }
        None => {
            // The terminal belongs to the screen, so logs go to a file.
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.args.log_file)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .init();

            let policy = if config.args.latest_only {
                StalePolicy::LatestOnly
            } else {
                StalePolicy::LastSettledWins
            };

            screen::run(Arc::new(rawg_client(&config)?), policy).await?;
            info!("Search screen closed");
            Ok(())
        }
    }
}

fn rawg_client(config: &Config) -> Result<RawgClient> {
    RawgClient::new(
        config.http_client.clone(),
        &config.args.base_url,
        config.api_key(),
    )
}
