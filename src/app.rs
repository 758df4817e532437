//! Root component and one-shot mount onto the host page.

use std::cell::Cell;

use web_sys::{Document, Element};

use crate::constants::{APP_MOUNT_SELECTOR, CSS_CHAT_ROOT, ROOT_COMPONENT_ID};
use crate::{debug_log, error_log};
use crate::error::ConfigError;
use crate::network::{EndpointResolver, LocationContext};

// WASM is single threaded, a thread_local is the whole process.
thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Root of the UI tree.
///
/// Only carries the resolved endpoints down to the view layer; the chat views
/// themselves read them back from the `data-*` attributes.
pub struct RootComponent {
    api_base_url: String,
    ws_url: String,
}

impl RootComponent {
    pub fn new(resolver: &EndpointResolver, location: &LocationContext) -> Self {
        Self {
            api_base_url: resolver.api_base_url().to_string(),
            ws_url: resolver.ws_url(location),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn ws_url(&self) -> &str {
        &self.ws_url
    }

    fn render(&self, document: &Document) -> Result<Element, ConfigError> {
        let root = document
            .create_element("div")
            .map_err(|e| ConfigError::render("create root element", e))?;
        root.set_id(ROOT_COMPONENT_ID);
        root.set_class_name(CSS_CHAT_ROOT);
        root.set_attribute("data-api-base-url", &self.api_base_url)
            .map_err(|e| ConfigError::render("set data-api-base-url", e))?;
        root.set_attribute("data-ws-url", &self.ws_url)
            .map_err(|e| ConfigError::render("set data-ws-url", e))?;
        Ok(root)
    }
}

pub fn is_mounted() -> bool {
    MOUNTED.with(Cell::get)
}

/// Construct `component` and attach it under the node matching `selector`.
///
/// The mount happens once per page; later calls fail with
/// [`ConfigError::AlreadyMounted`] and leave the DOM untouched.
pub fn mount_app(
    document: &Document,
    selector: &str,
    component: RootComponent,
) -> Result<(), ConfigError> {
    if is_mounted() {
        return Err(ConfigError::AlreadyMounted);
    }

    let target = document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| ConfigError::MountTargetMissing(selector.to_string()))?;

    let root = component.render(document)?;
    target
        .append_child(&root)
        .map_err(|e| ConfigError::render(&format!("append root to {}", selector), e))?;

    MOUNTED.with(|m| m.set(true));
    debug_log!("Mounted root component on {}", selector);
    Ok(())
}

/// Build the root component for `resolver` and mount it on `#app`.
///
/// Runs once the environment mode is fixed: from `start()` when `APP_MODE`
/// was baked in, otherwise from `init_endpoint_config_js`.
pub fn boot(resolver: &EndpointResolver) -> Result<(), ConfigError> {
    let result = mount_current_page(resolver);
    if let Err(e) = &result {
        error_log!("Startup aborted: {}", e);
    }
    result
}

fn mount_current_page(resolver: &EndpointResolver) -> Result<(), ConfigError> {
    let window = web_sys::window()
        .ok_or_else(|| ConfigError::RenderFailed("no global `window` exists".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ConfigError::RenderFailed("no document on window".into()))?;

    let location = LocationContext::current()?;
    debug_log!(
        "Starting in {} mode, api_base_url={:?} ws_url={}",
        resolver.mode(),
        resolver.api_base_url(),
        resolver.ws_url(&location)
    );

    let root = RootComponent::new(resolver, &location);
    mount_app(&document, APP_MOUNT_SELECTOR, root)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::network::EnvironmentMode;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn component() -> RootComponent {
        let resolver = EndpointResolver::new(EnvironmentMode::Development);
        RootComponent::new(&resolver, &LocationContext::new("http:", "example.com"))
    }

    #[wasm_bindgen_test]
    fn dom_failures_keep_their_message() {
        let err = ConfigError::render(
            "append root to #app",
            wasm_bindgen::JsValue::from_str("HierarchyRequestError"),
        );
        assert_eq!(
            err,
            ConfigError::RenderFailed("append root to #app: HierarchyRequestError".into())
        );

        let opaque = ConfigError::render("set data-ws-url", wasm_bindgen::JsValue::NULL);
        assert_eq!(
            opaque,
            ConfigError::RenderFailed("set data-ws-url: JsValue(null)".into())
        );
    }

    #[wasm_bindgen_test]
    fn mounts_once_then_refuses() {
        let document = web_sys::window().unwrap().document().unwrap();

        // Missing target does not consume the one mount
        assert_eq!(
            mount_app(&document, "#no-such-node", component()),
            Err(ConfigError::MountTargetMissing("#no-such-node".into()))
        );

        // The runner page has no #app, boot reports it instead of mounting
        let resolver = EndpointResolver::new(EnvironmentMode::Production);
        assert_eq!(
            boot(&resolver),
            Err(ConfigError::MountTargetMissing("#app".into()))
        );
        assert!(!is_mounted());

        let host = document.create_element("div").unwrap();
        host.set_id("mount-test");
        document.body().unwrap().append_child(&host).unwrap();

        mount_app(&document, "#mount-test", component()).unwrap();
        let root = document.get_element_by_id(ROOT_COMPONENT_ID).unwrap();
        assert_eq!(
            root.get_attribute("data-ws-url").as_deref(),
            Some("ws://localhost:8000/ws/chat")
        );

        assert_eq!(
            mount_app(&document, "#mount-test", component()),
            Err(ConfigError::AlreadyMounted)
        );
        assert_eq!(host.child_element_count(), 1);
    }
}
