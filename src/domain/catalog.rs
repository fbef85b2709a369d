use super::GameRecord;
use crate::error::FetchError;
use std::future::Future;
use std::pin::Pin;

pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<Vec<GameRecord>, FetchError>> + Send + 'a>>;

/// Anything the search screen can ask for games.
pub trait Catalog: Send + Sync {
    /// Runs one lookup. An empty query asks for the unfiltered catalog page.
    fn fetch_games(&self, query: &str) -> FetchFuture<'_>;
}
