//! Snapshot of the hosting page's `window.location`.

use crate::constants::{SECURE_PAGE_PROTOCOL, WSS_SCHEME, WS_SCHEME};
use crate::error::ConfigError;

/// Transport scheme and host of the current page.
///
/// `protocol` keeps the browser's format including the trailing colon
/// (`"https:"`), `host` is hostname plus optional `:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationContext {
    protocol: String,
    host: String,
}

impl LocationContext {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Read the location of the page this module is running in.
    pub fn current() -> Result<Self, ConfigError> {
        let win = web_sys::window().ok_or(ConfigError::LocationUnavailable("window unavailable"))?;
        let loc = win.location();
        let protocol = loc
            .protocol()
            .map_err(|_| ConfigError::LocationUnavailable("protocol unavailable"))?;
        let host = loc
            .host()
            .map_err(|_| ConfigError::LocationUnavailable("host unavailable"))?;
        Ok(Self { protocol, host })
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_secure(&self) -> bool {
        self.protocol == SECURE_PAGE_PROTOCOL
    }

    /// `wss` for pages served over TLS, `ws` for everything else.
    pub fn ws_scheme(&self) -> &'static str {
        if self.is_secure() {
            WSS_SCHEME
        } else {
            WS_SCHEME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_pages_upgrade_to_wss() {
        assert_eq!(LocationContext::new("https:", "example.com").ws_scheme(), "wss");
    }

    #[test]
    fn anything_else_uses_plain_ws() {
        assert_eq!(LocationContext::new("http:", "example.com").ws_scheme(), "ws");
        // file:// and other odd schemes never get TLS
        assert_eq!(LocationContext::new("file:", "").ws_scheme(), "ws");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn reads_the_test_runner_page() {
        let loc = LocationContext::current().expect("location");
        assert!(loc.protocol().ends_with(':'));
        assert!(!loc.host().is_empty());
    }
}
