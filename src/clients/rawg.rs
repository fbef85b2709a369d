use crate::domain::{Catalog, CatalogPage, FetchFuture, GameRecord};
use crate::error::{FetchError, GameError, Result};
use reqwest::{Client, Url};
use tracing::{error, info};

pub struct RawgClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl RawgClient {
    pub fn new(client: Client, base_url: &str, api_key: String) -> Result<Self> {
        let endpoint = Url::parse(base_url)
            .map_err(|e| GameError::Config(format!("invalid catalog URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// `search` is only added for a non-empty query; the query goes in as typed.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            if !query.is_empty() {
                pairs.append_pair("search", query);
            }
        }
        url
    }

    pub async fn get_games(&self, query: &str) -> std::result::Result<Vec<GameRecord>, FetchError> {
        let url = self.request_url(query);
        info!("Fetching from URL: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("RAWG API error: Status {}", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let page: CatalogPage = serde_json::from_slice(&bytes)?;
        info!("RAWG returned {} games for '{}'", page.results.len(), query);

        Ok(page.results)
    }
}

impl Catalog for RawgClient {
    fn fetch_games(&self, query: &str) -> FetchFuture<'_> {
        let query = query.to_string();
        Box::pin(async move { self.get_games(&query).await })
    }
}
