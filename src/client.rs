//! Fetch a results page over HTTP and hand it to the extractor.

use std::time::{Duration, Instant};

use config::{Config, Environment};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::parser::Extractor;
use crate::schema::SearchResult;

const SEARCH_URL: &str = "https://www.google.com/search";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36 OPR/111.0.0.0";

/// Request settings. `from_env` reads `RESEARCHES_ENDPOINT`, `RESEARCHES_HL`,
/// `RESEARCHES_USER_AGENT` and `RESEARCHES_TIMEOUT_SECS`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub endpoint: String,
    /// Interface language (`hl` query parameter).
    pub hl: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            endpoint: SEARCH_URL.to_string(),
            hl: "en".to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl SearchOptions {
    pub fn from_env() -> Result<Self> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix("RESEARCHES"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

pub struct Client {
    http: reqwest::Client,
    options: SearchOptions,
    extractor: Extractor,
}

impl Client {
    pub fn new(options: SearchOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            options,
            extractor: Extractor::default(),
        })
    }

    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Raw HTML of the results page. Non-success statuses are errors.
    pub async fn fetch(&self, query: &str) -> Result<String> {
        let start = Instant::now();
        info!("Searching {:?}", query);

        let response = self
            .http
            .get(&self.options.endpoint)
            .query(&[
                ("q", query),
                ("hl", self.options.hl.as_str()),
                ("client", "opera"),
                ("sclient", "gws-wiz-serp"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search for {:?} answered {}", query, status);
        }
        let html = response.error_for_status()?.text().await?;

        info!(
            "Fetched {} bytes for {:?} in {}ms",
            html.len(),
            query,
            start.elapsed().as_millis()
        );
        Ok(html)
    }

    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let html = self.fetch(query).await?;
        Ok(self.extractor.parse(&html))
    }
}

/// One-off search with default options and the built-in selectors.
pub async fn search(query: &str) -> Result<SearchResult> {
    Client::new(SearchOptions::default())?.search(query).await
}
