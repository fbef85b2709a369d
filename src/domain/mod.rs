mod catalog;
mod game;

pub use catalog::{Catalog, FetchFuture};
pub use game::{CatalogPage, GameId, GameRecord};
