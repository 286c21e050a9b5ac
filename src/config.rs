//! Configuration options for the Paprika client

use std::time::Duration;

/// Base URL of the Paprika sync API
pub const DEFAULT_BASE_URL: &str = "https://www.paprikaapp.com/api/v1/sync/";

/// Client identification sent as the `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("paprika-sync-rust/", env!("CARGO_PKG_VERSION"));

/// Configuration options for the Paprika client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The sync API base URL; resource paths are appended to it
    pub base_url: String,

    /// The `User-Agent` header value
    pub user_agent: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ClientOptions {
    /// Set the sync API base URL
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.to_string();
        self
    }

    /// Set the `User-Agent` header value
    pub fn with_user_agent(mut self, value: &str) -> Self {
        self.user_agent = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}
