use crate::domain::{Catalog, GameRecord};
use crate::error::{GameError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::error;

const LOADING: &str = "Loading games...";

/// One fetch, printed to stdout. Unlike the screen, a failure here is the exit status.
pub async fn run_search<C: Catalog>(catalog: &C, query: &str, json: bool) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .map_err(|e| GameError::Other(e.to_string()))?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(LOADING);

    let outcome = catalog.fetch_games(query).await;
    spinner.finish_and_clear();

    let games = outcome.inspect_err(|e| error!("Error fetching data: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&games)?);
    } else {
        print!("{}", format_rows(&games));
    }

    Ok(())
}

fn format_rows(games: &[GameRecord]) -> String {
    games
        .iter()
        .map(|game| {
            format!(
                "{}\n  {}\n",
                game.name,
                game.cover().unwrap_or("(no cover)")
            )
        })
        .collect()
}
