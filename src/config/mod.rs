use crate::config::cli::Args;
use crate::error::{GameError, Result};
use clap::Parser;
use reqwest::Client;
use std::str::FromStr;
use tracing::{warn, Level};

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        // No timeout: a hung request keeps the screen loading until it settles.
        let http_client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { args, http_client })
    }

    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(&self.args.log_level)
            .map_err(|_| GameError::Config(format!("unknown log level '{}'", self.args.log_level)))
    }

    /// The key is passed through unchecked; a missing key only makes fetches fail.
    pub fn api_key(&self) -> String {
        match &self.args.rawg_api_key {
            Some(key) => key.clone(),
            None => {
                warn!("RAWG_API_KEY is not set, catalog requests will be rejected");
                String::new()
            }
        }
    }
}
