use reqwest::header::HeaderMap;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::ProxyError;
use crate::models::{OddsQuery, UpstreamBody, UpstreamMeta, UpstreamResult};

/// Client for The Odds API (v4)
pub struct OddsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OddsApiClient {
    /// Create a new client; `api_key` is sent as the `apiKey` query parameter
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    /// Create a client on top of a preconfigured `reqwest::Client`
    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// List available sports
    pub async fn fetch_sports(&self) -> Result<UpstreamResult, ProxyError> {
        self.fetch_upstream("/sports", &[]).await
    }

    /// List upcoming events for a sport
    pub async fn fetch_events(&self, sport: &str) -> Result<UpstreamResult, ProxyError> {
        let endpoint = format!("/sports/{}/events", urlencoding::encode(sport));
        self.fetch_upstream(&endpoint, &[]).await
    }

    /// Fetch odds for one event or a whole sport
    pub async fn fetch_odds(&self, query: &OddsQuery) -> Result<UpstreamResult, ProxyError> {
        self.fetch_upstream(&query.endpoint(), &query.upstream_params())
            .await
    }

    /// Issue a single GET against `endpoint`.
    ///
    /// Empty or absent params are dropped and the API key is appended last.
    /// Upstream failure statuses are reported in the result, not as errors;
    /// only transport failures return `Err`.
    pub async fn fetch_upstream(
        &self,
        endpoint: &str,
        params: &[(&str, Option<&str>)],
    ) -> Result<UpstreamResult, ProxyError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (*name, v)))
            .collect();

        debug!("Fetching upstream: {} {:?}", url, query);

        query.push(("apiKey", self.api_key.as_str()));

        // reqwest errors carry the request URL, which includes the key
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let meta = UpstreamMeta {
            status: status.as_u16(),
            remaining: header_value(response.headers(), "x-requests-remaining"),
            used: header_value(response.headers(), "x-requests-used"),
        };

        let text = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            warn!(
                "Odds API error: {} on {} (remaining: {:?}, used: {:?})",
                status, endpoint, meta.remaining, meta.used
            );
        }

        Ok(UpstreamResult {
            error: !status.is_success(),
            meta,
            data: UpstreamBody::from_text(text),
        })
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
