use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api/games";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// RAWG API key sent with every catalog request
    #[clap(long, env = "RAWG_API_KEY")]
    pub rawg_api_key: Option<String>,

    /// Catalog endpoint to query
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// File the interactive screen writes its logs to
    #[arg(long, default_value = "gamelist.log")]
    pub log_file: PathBuf,

    /// Drop results of fetches that were superseded by a newer query
    #[arg(long)]
    pub latest_only: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single search and print the results
    Search {
        /// Search string; an empty string lists the default catalog page
        query: String,

        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
}
