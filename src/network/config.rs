use serde::Serialize;

use super::location::LocationContext;
use super::mode::EnvironmentMode;
use super::paths::ApiPath;
use crate::constants::{DEV_API_BASE_URL, DEV_WS_HOST, PROD_API_BASE_URL, WS_CHAT_SUFFIX};

/// Endpoint resolution for one fixed [`EnvironmentMode`].
///
/// In development every request goes to the local backend on port 8000.  In
/// production the base URL is empty so REST calls stay same-origin, and the
/// WebSocket URL is built from the page's own host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointResolver {
    mode: EnvironmentMode,
}

impl EndpointResolver {
    pub fn new(mode: EnvironmentMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> EnvironmentMode {
        self.mode
    }

    /// Get the base URL for all API calls
    pub fn api_base_url(&self) -> &'static str {
        match self.mode {
            EnvironmentMode::Development => DEV_API_BASE_URL,
            EnvironmentMode::Production => PROD_API_BASE_URL,
        }
    }

    /// Get the WebSocket URL for the chat endpoint.
    ///
    /// The scheme always follows the page (`https:` → `wss`), even in
    /// development where the host is pinned to the local backend.
    pub fn ws_url(&self, location: &LocationContext) -> String {
        let host = match self.mode {
            EnvironmentMode::Development => DEV_WS_HOST,
            EnvironmentMode::Production => location.host(),
        };
        format!("{}://{}{}", location.ws_scheme(), host, WS_CHAT_SUFFIX)
    }

    /// Full URL for a path table entry
    pub fn url(&self, path: &ApiPath<'_>) -> String {
        format!("{}{}", self.api_base_url(), path.path())
    }

    /// Everything the UI layer needs, resolved against `location`.
    pub fn snapshot(&self, location: &LocationContext) -> EndpointSnapshot {
        EndpointSnapshot {
            mode: self.mode,
            api_base_url: self.api_base_url().to_string(),
            ws_url: self.ws_url(location),
            paths: StaticPaths {
                chat: ApiPath::Chat.path(),
                sessions: ApiPath::Sessions.path(),
            },
        }
    }
}

/// Serializable view handed to JS via `endpoint_snapshot()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSnapshot {
    pub mode: EnvironmentMode,
    pub api_base_url: String,
    pub ws_url: String,
    pub paths: StaticPaths,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPaths {
    pub chat: String,
    pub sessions: String,
}
