// Endpoint configuration modules
pub mod config;
pub mod location;
pub mod mode;
pub mod paths;

// Re-export commonly used items
pub use config::{EndpointResolver, EndpointSnapshot};
pub use location::LocationContext;
pub use mode::EnvironmentMode;
pub use paths::{ApiPath, ApiPathKey};

use crate::error::ConfigError;
use crate::{debug_log, error_log};
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

/// Write-once holder for the resolver built at startup.
///
/// The mode may be set again with the same value (hot reload re-runs the
/// bootstrap) but never changed.
#[derive(Default)]
pub struct EndpointRegistry {
    slot: RwLock<Option<EndpointResolver>>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&self, mode: EnvironmentMode) -> Result<EndpointResolver, ConfigError> {
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        match *guard {
            Some(existing) if existing.mode() != mode => Err(ConfigError::ModeAlreadyFixed {
                current: existing.mode(),
                requested: mode,
            }),
            Some(existing) => Ok(existing),
            None => {
                let resolver = EndpointResolver::new(mode);
                *guard = Some(resolver);
                Ok(resolver)
            }
        }
    }

    pub fn get(&self) -> Option<EndpointResolver> {
        *self.slot.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Registered resolver, or same-origin production semantics when the
    /// bootstrap has not run yet (unit tests, early start-up).
    pub fn resolver(&self) -> EndpointResolver {
        self.get()
            .unwrap_or_else(|| EndpointResolver::new(EnvironmentMode::Production))
    }
}

lazy_static! {
    static ref ENDPOINTS: EndpointRegistry = EndpointRegistry::new();
}

/// Initialize the endpoint configuration from the build-time `APP_MODE`.
///
/// Without a baked-in mode nothing is registered: the page fixes it later
/// through `init_endpoint_config_js`, and readers see production until then.
pub fn init_endpoint_config() -> Result<Option<EndpointResolver>, ConfigError> {
    match EnvironmentMode::from_build_env()? {
        Some(mode) => init_endpoint_config_with(mode).map(Some),
        None => {
            debug_log!("APP_MODE not set at build time, waiting for runtime init");
            Ok(None)
        }
    }
}

pub fn init_endpoint_config_with(mode: EnvironmentMode) -> Result<EndpointResolver, ConfigError> {
    let resolver = ENDPOINTS.init(mode)?;
    debug_log!(
        "Endpoint config initialised: mode={} api_base_url={:?}",
        mode,
        resolver.api_base_url()
    );
    Ok(resolver)
}

/// Initialize the endpoint configuration from a JS-provided mode string,
/// then mount the app if `start()` was still waiting for a mode.
#[wasm_bindgen]
pub fn init_endpoint_config_js(mode: &str) -> Result<(), JsValue> {
    let resolver = mode
        .parse::<EnvironmentMode>()
        .and_then(init_endpoint_config_with)
        .map_err(|e| {
            error_log!("Failed to initialise endpoint config: {}", e);
            JsValue::from(e)
        })?;
    if !crate::app::is_mounted() {
        crate::app::boot(&resolver)?;
    }
    Ok(())
}

/// The process-wide resolver.
pub fn resolver() -> EndpointResolver {
    ENDPOINTS.resolver()
}

/// Get the base URL for API calls
pub fn get_api_base_url() -> &'static str {
    resolver().api_base_url()
}

/// Get the WebSocket URL for the current page.
pub fn get_ws_url() -> Result<String, ConfigError> {
    let location = LocationContext::current()?;
    let url = resolver().ws_url(&location);
    debug_log!("Resolved WebSocket URL: {}", url);
    Ok(url)
}

// ---------------------------------------------------------------------------
// JS bindings
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = apiBaseUrl)]
pub fn api_base_url_js() -> String {
    get_api_base_url().to_string()
}

#[wasm_bindgen(js_name = websocketUrl)]
pub fn websocket_url_js() -> Result<String, JsValue> {
    Ok(get_ws_url()?)
}

/// Look up `CHAT`, `SESSIONS` or `SESSION` (with `id`).
#[wasm_bindgen(js_name = apiPath)]
pub fn api_path_js(key: &str, id: Option<String>) -> Result<String, JsValue> {
    paths::lookup(key, id.as_deref()).map_err(|e| {
        error_log!("{}", e);
        JsValue::from(e)
    })
}

#[wasm_bindgen(js_name = sessionPath)]
pub fn session_path_js(id: &str) -> String {
    paths::session_path(id)
}

#[wasm_bindgen(js_name = endpointSnapshot)]
pub fn endpoint_snapshot_js() -> Result<JsValue, JsValue> {
    let location = LocationContext::current()?;
    let snapshot = resolver().snapshot(&location);
    serde_wasm_bindgen::to_value(&snapshot).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialised_registry_behaves_like_production() {
        let registry = EndpointRegistry::new();
        assert!(registry.get().is_none());
        assert_eq!(registry.resolver().api_base_url(), "");
    }

    #[test]
    fn init_fixes_the_mode() {
        let registry = EndpointRegistry::new();
        let resolver = registry.init(EnvironmentMode::Development).unwrap();
        assert_eq!(resolver.api_base_url(), "http://localhost:8000");
        assert_eq!(registry.get(), Some(resolver));
    }

    #[test]
    fn same_mode_reinit_is_a_noop() {
        let registry = EndpointRegistry::new();
        registry.init(EnvironmentMode::Production).unwrap();
        assert!(registry.init(EnvironmentMode::Production).is_ok());
    }

    #[test]
    fn mode_cannot_change_after_init() {
        let registry = EndpointRegistry::new();
        registry.init(EnvironmentMode::Production).unwrap();
        assert_eq!(
            registry.init(EnvironmentMode::Development),
            Err(ConfigError::ModeAlreadyFixed {
                current: EnvironmentMode::Production,
                requested: EnvironmentMode::Development,
            })
        );
        assert_eq!(registry.resolver().mode(), EnvironmentMode::Production);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn ws_url_uses_page_scheme() {
        let url = get_ws_url().expect("ws url");
        assert!(url.starts_with("ws://") || url.starts_with("wss://"));
        assert!(url.ends_with("/ws/chat"));
    }

    #[wasm_bindgen_test]
    fn unknown_path_key_is_rejected_at_the_boundary() {
        assert!(api_path_js("PROFILE", None).is_err());
        assert_eq!(api_path_js("SESSION", Some("abc".into())).unwrap(), "/session/abc");
    }
}
