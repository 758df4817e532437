//! Development vs production switch.
//!
//! The mode is decided once at startup and handed to the
//! [`EndpointResolver`](super::config::EndpointResolver); nothing reads it
//! from ambient state afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where the frontend is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    Development,
    Production,
}

impl EnvironmentMode {
    /// Read the mode baked in at build time through the `APP_MODE`
    /// environment variable.
    ///
    /// `None` when the variable is unset: the page is expected to call
    /// `init_endpoint_config_js` at runtime, and until then readers fall back
    /// to production (same-origin endpoints).  A value that is set but not
    /// recognised is rejected so a typo in the build pipeline cannot silently
    /// ship a bundle pointing at the wrong backend.
    pub fn from_build_env() -> Result<Option<Self>, ConfigError> {
        Self::from_optional(option_env!("APP_MODE"))
    }

    /// Same rules as [`from_build_env`](Self::from_build_env) for an
    /// explicitly supplied value.
    pub fn from_optional(raw: Option<&str>) -> Result<Option<Self>, ConfigError> {
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for EnvironmentMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironmentMode(other.to_string())),
        }
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
