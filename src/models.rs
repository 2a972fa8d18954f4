use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Timestamp layout GitHub uses for `pushed_at`.
const PUSHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Body of `GET /search/repositories`.
#[derive(Debug, Deserialize)]
pub struct RepositorySearchPage {
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<Repository>,
}

/// A single repository item as returned by the search API.
#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub description: Option<String>,
    pub pushed_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Request quota reported in the `X-RateLimit-*` headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub remaining: u32,
    pub limit: u32,
}

/// One repository, reduced to what the report shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub owner: String,
    pub name: String,
    pub stars: u64,
    pub fork: bool,
    pub forks: u64,
    pub issues: u64,
    pub language: String,
    pub description: String,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl From<Repository> for SearchResultItem {
    fn from(repo: Repository) -> Self {
        let pushed_at = repo.pushed_at.as_deref().and_then(parse_pushed_at);

        SearchResultItem {
            owner: repo.owner.login,
            name: repo.name,
            stars: repo.stargazers_count,
            fork: repo.fork,
            forks: repo.forks_count,
            issues: repo.open_issues_count,
            language: repo.language.unwrap_or_default(),
            description: repo.description.unwrap_or_default(),
            pushed_at,
        }
    }
}

/// A resolved search: one page of items plus the totals needed for the
/// summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<SearchResultItem>,
    pub rate_limit: RateLimit,
}

impl SearchResponse {
    pub fn from_page(page: RepositorySearchPage, rate_limit: RateLimit) -> Self {
        SearchResponse {
            total_count: page.total_count,
            items: page.items.into_iter().map(SearchResultItem::from).collect(),
            rate_limit,
        }
    }

    pub fn from_json(body: &str, rate_limit: RateLimit) -> serde_json::Result<Self> {
        let page: RepositorySearchPage = serde_json::from_str(body)?;
        Ok(Self::from_page(page, rate_limit))
    }
}

/// Parse a `pushed_at` value; anything malformed is treated as absent.
pub fn parse_pushed_at(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, PUSHED_AT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_page_to_response() {
        let body = json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "name": "stig",
                    "owner": { "login": "octobanana" },
                    "stargazers_count": 120,
                    "fork": false,
                    "forks_count": 4,
                    "open_issues_count": 1,
                    "language": "C++",
                    "description": "A CLI tool for searching GitHub from the terminal.",
                    "pushed_at": "2018-12-11T08:30:00Z"
                },
                {
                    "name": "stig",
                    "owner": { "login": "someone" },
                    "stargazers_count": 0,
                    "fork": true,
                    "forks_count": 0,
                    "open_issues_count": 0,
                    "language": null,
                    "description": null,
                    "pushed_at": "not a date"
                }
            ]
        });

        let rate = RateLimit {
            remaining: 9,
            limit: 10,
        };
        let response = SearchResponse::from_json(&body.to_string(), rate).unwrap();

        assert_eq!(response.total_count, 2);
        assert_eq!(response.rate_limit, rate);
        assert_eq!(response.items.len(), 2);

        let first = &response.items[0];
        assert_eq!(first.owner, "octobanana");
        assert_eq!(first.language, "C++");
        assert_eq!(
            first.pushed_at.map(|t| t.timestamp()),
            Some(1_544_517_000)
        );

        let second = &response.items[1];
        assert!(second.fork);
        assert_eq!(second.language, "");
        assert_eq!(second.description, "");
        assert_eq!(second.pushed_at, None);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response =
            SearchResponse::from_json(r#"{"total_count": 0}"#, RateLimit::default()).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_parse_pushed_at() {
        assert!(parse_pushed_at("2024-02-29T23:59:59Z").is_some());
        assert!(parse_pushed_at("2024-02-30T00:00:00Z").is_none());
        assert!(parse_pushed_at("").is_none());
    }
}
