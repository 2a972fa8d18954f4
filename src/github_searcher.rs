use std::env;
use std::time::Duration;

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, info, warn};

use crate::args::{Order, Sort};
use crate::error::{Result, StigError};
use crate::models::{RateLimit, SearchResponse};
use crate::query::ReadmePath;

const API_BASE: &str = "https://api.github.com";
const SEARCH_ACCEPT: &str = "application/vnd.github.mercy-preview+json";
const README_ACCEPT: &str = "application/vnd.github.VERSION.raw";

/// Parameters of one repository search request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub sort: Option<Sort>,
    pub order: Option<Order>,
    pub page: u64,
    pub per_page: u64,
}

impl SearchQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let sort = self.sort.unwrap_or(Sort::Best);
        let order = self.order.unwrap_or_default();

        vec![
            ("q", self.query.clone()),
            ("sort", sort.as_param().to_string()),
            ("order", order.as_param().to_string()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

pub struct GitHubSearcher {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubSearcher {
    /// Create a new GitHubSearcher instance
    pub fn new(token: Option<&str>) -> Result<Self> {
        // Explicit token first, then the environment
        let token = match token {
            Some(t) if !t.trim().is_empty() => Some(t.to_string()),
            _ => env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
        };

        if token.is_none() {
            debug!("No GitHub token configured, using unauthenticated requests");
        }

        let client = Client::builder()
            .user_agent(concat!("stig/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubSearcher {
            client,
            base_url: API_BASE.to_string(),
            token,
        })
    }

    /// Point the searcher at a different API root, e.g. a GitHub Enterprise host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Run a repository search and collect the page into a [`SearchResponse`].
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let url = format!("{}/search/repositories", self.base_url);
        debug!("Requesting URL: {} with {:?}", url, query);

        let request = self
            .client
            .get(&url)
            .header("Accept", SEARCH_ACCEPT)
            .query(&query.params());

        let pb = spinner(format!("Searching '{}' - page {}", query.query, query.page));
        let response = self.send(request).await;
        pb.finish_and_clear();
        let response = response?;

        let rate_limit = rate_limit(response.headers());
        let body = response.text().await?;
        let search = SearchResponse::from_json(&body, rate_limit)?;

        info!(
            "Received {} of {} results for '{}' page {}",
            search.items.len(),
            search.total_count,
            query.query,
            query.page
        );
        Ok(search)
    }

    /// Fetch the raw README of `path`, byte for byte.
    pub async fn readme(&self, path: &ReadmePath) -> Result<Vec<u8>> {
        let url = format!("{}/repos/{}/readme", self.base_url, path.repo);
        debug!("Requesting URL: {}", url);

        let mut request = self.client.get(&url).header("Accept", README_ACCEPT);
        if let Some(git_ref) = &path.git_ref {
            request = request.query(&[("ref", git_ref)]);
        }

        let pb = spinner(format!("Fetching README of '{}'", path.repo));
        let response = self.send(request).await;
        pb.finish_and_clear();

        Ok(response?.bytes().await?.to_vec())
    }

    /// Attach auth, send, and turn any non-200 status into an error.
    async fn send(&self, mut request: RequestBuilder) -> Result<Response> {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request = request.header("X-GitHub-Api-Version", "2022-11-28");

        let response = request.send().await?;
        check_status(response.status())?;
        Ok(response)
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::OK {
        return Ok(());
    }

    Err(StigError::Http {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"))
    {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

/// Read the `X-RateLimit-*` headers, treating anything missing as 0.
fn rate_limit(headers: &HeaderMap) -> RateLimit {
    let remaining = header_u32(headers, "X-RateLimit-Remaining");
    let limit = header_u32(headers, "X-RateLimit-Limit");

    if remaining.is_none() || limit.is_none() {
        warn!("Missing or malformed rate limit headers");
    }

    let rate = RateLimit {
        remaining: remaining.unwrap_or(0),
        limit: limit.unwrap_or(0),
    };

    if remaining == Some(0) {
        let reset = headers
            .get("X-RateLimit-Reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0));

        match reset {
            Some(reset) => warn!("Rate limit reached, resets at {}", reset),
            None => warn!("Rate limit reached"),
        }
    }

    rate
}
