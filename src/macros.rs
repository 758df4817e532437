//! Small crate-wide logging macros.
//!
//! Both macros write to the browser console when compiled for `wasm32`.  On
//! native targets (plain `cargo test`) the arguments are still type-checked
//! but nothing is emitted, since the `web_sys::console` bindings only exist
//! inside a JS host.

/// Log a debug line to `console.log`.  Compiled out of release builds.
///
/// ```rust,ignore
/// debug_log!("Resolved WebSocket URL: {}", url);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(target_arch = "wasm32", debug_assertions))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log an error line to `console.error`, in every build profile.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
