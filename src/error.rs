//! Error types for endpoint configuration and bootstrap

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::network::mode::EnvironmentMode;

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path table queried with a key outside the fixed set
    #[error("configuration key not found: {0}")]
    UnknownPathKey(String),

    /// Parameterized path requested without its argument
    #[error("path key {0} requires an argument")]
    MissingPathArgument(&'static str),

    /// Build or runtime mode string not recognised
    #[error("unknown environment mode: {0}")]
    UnknownEnvironmentMode(String),

    /// Attempt to switch the process-wide mode after startup
    #[error("environment mode already fixed to {current}, refusing {requested}")]
    ModeAlreadyFixed {
        current: EnvironmentMode,
        requested: EnvironmentMode,
    },

    /// `window.location` could not be read
    #[error("page location unavailable: {0}")]
    LocationUnavailable(&'static str),

    /// No DOM node matches the mount selector
    #[error("mount target not found: {0}")]
    MountTargetMissing(String),

    /// A DOM call failed while building or attaching the root component
    #[error("render failed: {0}")]
    RenderFailed(String),

    /// The root component was already mounted
    #[error("application already mounted")]
    AlreadyMounted,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Wrap a DOM exception, keeping its message. `DOMException` objects
    /// are not strings, so those fall back to the JS debug rendering.
    pub fn render(what: &str, err: JsValue) -> Self {
        let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        Self::RenderFailed(format!("{}: {}", what, detail))
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_message_names_the_key() {
        let err = ConfigError::UnknownPathKey("PROFILE".into());
        assert_eq!(err.to_string(), "configuration key not found: PROFILE");
    }

    #[test]
    fn mode_conflict_message_names_both_modes() {
        let err = ConfigError::ModeAlreadyFixed {
            current: EnvironmentMode::Production,
            requested: EnvironmentMode::Development,
        };
        assert_eq!(
            err.to_string(),
            "environment mode already fixed to production, refusing development"
        );
    }

    #[test]
    fn render_failure_is_distinct_from_missing_target() {
        let err = ConfigError::RenderFailed("append root to #app".into());
        assert_eq!(err.to_string(), "render failed: append root to #app");
        assert_ne!(err, ConfigError::MountTargetMissing("#app".into()));
    }
}
