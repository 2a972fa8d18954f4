use crate::error::{Result, StigError};

/// Append space separated `key:value` qualifiers to `query`.
///
/// Every qualifier must contain exactly one `:`. The combined query must not
/// be empty.
pub fn build_query(query: &str, filter: Option<&str>) -> Result<String> {
    let mut query = query.to_string();

    if let Some(filter) = filter.filter(|f| !f.is_empty()) {
        for kv in filter.split(' ') {
            match kv.split(':').collect::<Vec<_>>().as_slice() {
                [key, value] => {
                    query.push(' ');
                    query.push_str(key);
                    query.push(':');
                    query.push_str(value);
                }
                _ => return Err(StigError::InvalidFilter(kv.to_string())),
            }
        }
    }

    if query.is_empty() {
        return Err(StigError::EmptyQuery);
    }

    Ok(query)
}

/// A `user/repo[/ref]` argument to `--readme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmePath {
    pub repo: String,
    pub git_ref: Option<String>,
}

impl std::str::FromStr for ReadmePath {
    type Err = StigError;

    fn from_str(path: &str) -> Result<Self> {
        let invalid = || StigError::InvalidRepoPath(path.to_string());

        let parts: Vec<&str> = path.split('/').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(invalid());
        }

        match parts.as_slice() {
            [owner, repo] => Ok(ReadmePath {
                repo: format!("{owner}/{repo}"),
                git_ref: None,
            }),
            [owner, repo, git_ref] => Ok(ReadmePath {
                repo: format!("{owner}/{repo}"),
                git_ref: Some(git_ref.to_string()),
            }),
            _ => Err(invalid()),
        }
    }
}
