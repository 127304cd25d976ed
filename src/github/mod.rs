//! GitHub REST API access layer.
//!
//! Two independent reads with different failure policies:
//! - [`GithubClient::fetch_profile`] fails hard and reports a [`LookupError`]
//! - [`GithubClient::fetch_repositories`] fails soft and yields an empty list
//!
pub mod models;
pub mod worker;

use std::time::Duration;

use anyhow::{Context, bail};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info, warn};

use crate::error::{LookupError, Result};
pub use models::{FEATURED_USERS, FeaturedUser, Profile, RepositorySummary};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const API_VERSION: &str = "2022-11-28";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How many recently updated repositories to request and keep.
pub const REPOSITORY_PAGE_SIZE: usize = 6;

/// Connection settings for [`GithubClient`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: Url,
    /// Optional bearer credential. Requests are unauthenticated without it.
    pub token: Option<String>,
    pub timeout: Duration,
    /// Ignore system proxy settings (`HTTP_PROXY`, `NO_PROXY`, ...).
    pub no_proxy: bool,
}

impl ClientConfig {
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url =
            Url::parse(api_url).with_context(|| format!("invalid API URL '{api_url}'"))?;
        if api_url.cannot_be_a_base() {
            bail!("API URL '{api_url}' cannot be used as a base URL");
        }
        Ok(Self {
            api_url,
            token: None,
            timeout: DEFAULT_TIMEOUT,
            no_proxy: false,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connect directly, e.g. to a test server on loopback.
    pub fn without_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }
}

/// Thin wrapper around a preconfigured `reqwest::Client`.
///
/// Holds no per-request state; shared with the worker behind an `Arc`.
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: Client,
    api_url: Url,
}

impl GithubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gh-lookup/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = &config.token {
            let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
                .context("invalid token value")?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().context("failed to build HTTP client")?;

        info!(
            api_url = %config.api_url,
            authenticated = config.token.is_some(),
            timeout_ms = config.timeout.as_millis() as u64,
            "github client ready"
        );
        Ok(Self {
            http,
            api_url: config.api_url,
        })
    }

    /// `{api_url}/{segments...}` with every segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, LookupError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                LookupError::transport(format!(
                    "cannot build a request URL from '{}'",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch one user's public profile.
    pub async fn fetch_profile(
        &self,
        username: &str,
    ) -> std::result::Result<Profile, LookupError> {
        if !is_login_segment(username) {
            info!(username, "not a valid login; skipping request");
            return Err(LookupError::NotFound);
        }
        let url = self.endpoint(&["users", username])?;
        debug!(%url, "profile request");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(username, error = %e, "profile request failed");
            LookupError::transport(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!(username, "profile not found");
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            warn!(username, %status, "profile endpoint returned an error status");
            return Err(LookupError::fetch_failed());
        }

        let profile = response.json::<Profile>().await.map_err(|e| {
            warn!(username, error = %e, "profile body could not be decoded");
            LookupError::fetch_failed()
        })?;
        info!(username, login = %profile.login, "profile fetched");
        Ok(profile)
    }

    /// Fetch the most recently updated repositories for `username`.
    ///
    /// Never fails: any problem is logged and reported as "no repositories"
    /// so the detail view always has something to render.
    pub async fn fetch_repositories(&self, username: &str) -> Vec<RepositorySummary> {
        if !is_login_segment(username) {
            return Vec::new();
        }
        match self.try_fetch_repositories(username).await {
            Ok(mut repos) => {
                repos.truncate(REPOSITORY_PAGE_SIZE);
                debug!(username, count = repos.len(), "repositories fetched");
                repos
            }
            Err(e) => {
                warn!(username, error = %e, "repository fetch failed; showing none");
                Vec::new()
            }
        }
    }

    async fn try_fetch_repositories(&self, username: &str) -> Result<Vec<RepositorySummary>> {
        let url = self.endpoint(&["users", username, "repos"])?;
        let per_page = REPOSITORY_PAGE_SIZE.to_string();
        let repos = self
            .http
            .get(url)
            .query(&[("sort", "updated"), ("per_page", per_page.as_str())])
            .send()
            .await
            .context("send repositories request")?
            .error_for_status()?
            .json::<Vec<RepositorySummary>>()
            .await
            .context("decode repositories body")?;
        Ok(repos)
    }
}

/// `.`, `..` and anything containing `/` would be read as path structure
/// rather than a single segment. GitHub logins never take those forms.
pub fn is_login_segment(username: &str) -> bool {
    let username = username.trim();
    !matches!(username, "" | "." | "..") && !username.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> ClientConfig {
        ClientConfig::new(DEFAULT_API_URL).expect("default config")
    }

    #[test]
    fn endpoint_encodes_username_as_single_segment() {
        let client = GithubClient::new(default_config()).expect("client");
        let url = client.endpoint(&["users", "a b/c"]).expect("url");
        assert_eq!(url.as_str(), "https://api.github.com/users/a%20b%2Fc");
    }

    #[test]
    fn dot_and_slash_usernames_are_not_logins() {
        for name in [".", "..", "a/b", "../repos", ""] {
            assert!(!is_login_segment(name), "{name:?}");
        }
        for name in ["tj", "a.b", "...", "x-y"] {
            assert!(is_login_segment(name), "{name:?}");
        }
    }

    #[tokio::test]
    async fn dot_usernames_never_reach_the_network() {
        // unroutable base; any request would fail as Transport, not NotFound
        let config = ClientConfig::new("http://127.0.0.1:9")
            .expect("config")
            .without_proxy();
        let client = GithubClient::new(config).expect("client");
        for name in [".", ".."] {
            assert_eq!(client.fetch_profile(name).await, Err(LookupError::NotFound));
            assert!(client.fetch_repositories(name).await.is_empty());
        }
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = ClientConfig::new("http://127.0.0.1:8080/api/v3/").expect("config");
        let client = GithubClient::new(config).expect("client");
        let url = client.endpoint(&["users", "tj", "repos"]).expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v3/users/tj/repos");
    }

    #[test]
    fn blank_token_means_unauthenticated() {
        let config = default_config().with_token(Some("   ".into()));
        assert!(config.token.is_none());
        let config = default_config().with_token(Some("abc".into()));
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn rejects_non_base_api_url() {
        assert!(ClientConfig::new("mailto:someone@example.com").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }
}
