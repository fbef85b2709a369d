use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier. RAWG sends numbers, but anything that renders as a
/// string works as a list key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Number(u64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Number(id) => write!(f, "{id}"),
            GameId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub background_image: Option<String>,
}

impl GameRecord {
    /// Row identity in the result list.
    pub fn key(&self) -> String {
        self.id.to_string()
    }

    pub fn cover(&self) -> Option<&str> {
        self.background_image.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<GameRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rawg_page_ignoring_extra_fields() {
        let body = r#"{
            "count": 2,
            "next": "https://api.rawg.io/api/games?page=2",
            "results": [
                {"id": 3498, "name": "Grand Theft Auto V", "background_image": "https://media.rawg.io/gta.jpg", "rating": 4.47},
                {"id": 4200, "name": "Portal 2", "background_image": null},
                {"id": "abc", "name": "Unlisted"}
            ]
        }"#;
        let page: CatalogPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].key(), "3498");
        assert_eq!(page.results[0].cover(), Some("https://media.rawg.io/gta.jpg"));
        assert_eq!(page.results[1].cover(), None);
        assert_eq!(page.results[2].key(), "abc");
        assert_eq!(page.results[2].background_image, None);
    }

    #[test]
    fn missing_results_is_an_error() {
        assert!(serde_json::from_str::<CatalogPage>(r#"{"detail": "Invalid key"}"#).is_err());
        assert!(serde_json::from_str::<CatalogPage>(r#"{"results": [{"id": 1}]}"#).is_err());
    }

    #[test]
    fn empty_cover_url_counts_as_missing() {
        let record = GameRecord {
            id: GameId::Number(1),
            name: "A".into(),
            background_image: Some(String::new()),
        };
        assert_eq!(record.cover(), None);
    }
}
