//! Groupie Trackers API client.
//!
//! Fetches artists and their concert locations, dates and relations from the
//! upstream REST API and decodes them into the shared domain types.

pub mod gateway;

pub use gateway::Gateway;

use std::time::Duration;

use async_trait::async_trait;
use common::config::UpstreamConfig;
use common::{Artist, DateSet, Error, IndexResponse, LocationSet, RelationSet};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Upstream API client with connection pooling and a per-call timeout.
#[derive(Debug, Clone)]
pub struct GroupieClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GroupieClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, Error> {
        let base_url = parse_base_url(&config.base_url)?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(4)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL helper.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("Fetching {}", url);

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Http(format!("HTTP error for {}: {}", url, e)))?;

        let status = resp.status().as_u16();
        if status == 404 {
            return Err(Error::NotFound(url));
        }
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status,
                message: body.chars().take(500).collect(),
            });
        }

        resp.json()
            .await
            .map_err(|e| Error::Http(format!("JSON parse error for {}: {}", url, e)))
    }

    async fn get_index<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let body: IndexResponse<T> = self.get_json(path).await?;
        debug!("Got {} entries from /{}", body.index.len(), path);
        Ok(body.index)
    }
}

#[async_trait]
impl Gateway for GroupieClient {
    async fn fetch_artists(&self) -> Result<Vec<Artist>, Error> {
        let artists: Vec<Artist> = self.get_json("artists").await?;
        debug!("Got {} artists", artists.len());
        Ok(artists)
    }

    async fn fetch_all_locations(&self) -> Result<Vec<LocationSet>, Error> {
        self.get_index("locations").await
    }

    async fn fetch_all_dates(&self) -> Result<Vec<DateSet>, Error> {
        self.get_index("dates").await
    }

    async fn fetch_all_relations(&self) -> Result<Vec<RelationSet>, Error> {
        self.get_index("relation").await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("invalid upstream base URL `{}`: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "upstream base URL must be http(s), got `{}`",
            other
        ))),
    }
}
