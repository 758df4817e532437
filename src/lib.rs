use wasm_bindgen::prelude::*;

mod macros;

pub mod app;
pub mod constants;
pub mod error;
pub mod network;

pub use error::ConfigError;
pub use network::{
    ApiPath, ApiPathKey, EndpointResolver, EndpointSnapshot, EnvironmentMode, LocationContext,
};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Fix the environment mode before anything touches the network
    let resolver = network::init_endpoint_config().map_err(|e| {
        error_log!("Startup aborted: {}", e);
        JsValue::from(e)
    })?;

    // No baked-in mode: init_endpoint_config_js mounts once the page picks one
    if let Some(resolver) = resolver {
        app::boot(&resolver)?;
    }

    Ok(())
}
