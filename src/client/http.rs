//! reqwest-backed users source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;

use crate::client::{FetchError, UserSource};
use crate::config::ApiConfig;
use crate::constants::USER_AGENT;
use crate::models::UserRecord;

/// Fetches the users listing over HTTP.
///
/// One GET per call, no retries. When request caching is disabled the
/// request asks intermediaries not to serve a cached copy and carries a
/// `_=<unix millis>` parameter so the URL is never reused.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    http: reqwest::Client,
    url: String,
    disable_request_cache: bool,
    timeout: Duration,
}

impl HttpUserSource {
    /// Build a source for the endpoint described by `config`.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: config.users_url(),
            disable_request_cache: config.disable_request_cache(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Network(format!(
                "request to {} timed out after {}s",
                self.url,
                self.timeout.as_secs()
            ))
        } else {
            FetchError::Network(format!("{}: {e}", self.url))
        }
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let mut request = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json");

        if self.disable_request_cache {
            let stamp = chrono::Utc::now().timestamp_millis();
            request = request
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache")
                .query(&[("_", stamp)]);
        }

        debug!(url = %self.url, no_cache = self.disable_request_cache, "fetching users");

        let resp = request.send().await.map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| self.classify(e))?;
        let users: Vec<UserRecord> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        debug!(count = users.len(), "users listing decoded");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiVersion;

    #[test]
    fn new_resolves_url_and_flags() {
        let mut config = ApiConfig::default();
        config.base_url = "http://presence.local/".into();
        config.version = ApiVersion::V2;
        config.timeout_secs = 7;

        let source = HttpUserSource::new(&config).unwrap();
        assert_eq!(source.url(), "http://presence.local/api/v2/users");
        assert!(source.disable_request_cache);
        assert_eq!(source.timeout, Duration::from_secs(7));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let mut config = ApiConfig::default();
        config.base_url = format!("http://127.0.0.1:{port}");
        config.timeout_secs = 2;

        let source = HttpUserSource::new(&config).unwrap();
        let err = source.fetch_users().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    }
}
