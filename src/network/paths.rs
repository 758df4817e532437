//! API path table.
//!
//! The table is the same in every environment; only the base URL in front of
//! it changes.  Session identifiers are interpolated verbatim; callers that
//! need percent-encoding must do it before handing the id over.

use std::fmt;
use std::str::FromStr;

use crate::constants::{PATH_CHAT, PATH_SESSIONS, PATH_SESSION_PREFIX};
use crate::error::ConfigError;

/// Logical operation names, as spelled by the JS side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiPathKey {
    Chat,
    Sessions,
    Session,
}

impl ApiPathKey {
    pub const ALL: [ApiPathKey; 3] = [ApiPathKey::Chat, ApiPathKey::Sessions, ApiPathKey::Session];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "CHAT",
            Self::Sessions => "SESSIONS",
            Self::Session => "SESSION",
        }
    }

    /// Whether the key is a template needing a session id.
    pub fn takes_argument(self) -> bool {
        matches!(self, Self::Session)
    }
}

impl FromStr for ApiPathKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHAT" => Ok(Self::Chat),
            "SESSIONS" => Ok(Self::Sessions),
            "SESSION" => Ok(Self::Session),
            other => Err(ConfigError::UnknownPathKey(other.to_string())),
        }
    }
}

impl fmt::Display for ApiPathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-specified entry of the path table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiPath<'a> {
    Chat,
    Sessions,
    Session(&'a str),
}

impl ApiPath<'_> {
    pub fn key(&self) -> ApiPathKey {
        match self {
            ApiPath::Chat => ApiPathKey::Chat,
            ApiPath::Sessions => ApiPathKey::Sessions,
            ApiPath::Session(_) => ApiPathKey::Session,
        }
    }

    pub fn path(&self) -> String {
        match self {
            ApiPath::Chat => PATH_CHAT.to_string(),
            ApiPath::Sessions => PATH_SESSIONS.to_string(),
            ApiPath::Session(id) => session_path(id),
        }
    }
}

/// `/session/{id}` with no escaping or validation of `id`.
pub fn session_path(id: &str) -> String {
    format!("{}{}", PATH_SESSION_PREFIX, id)
}

/// String-keyed lookup used at the JS boundary.
///
/// Unknown keys are a programmer error and surface as
/// [`ConfigError::UnknownPathKey`].  `id` is ignored for static keys.
pub fn lookup(key: &str, id: Option<&str>) -> Result<String, ConfigError> {
    let key: ApiPathKey = key.parse()?;
    let path = match key {
        ApiPathKey::Chat => ApiPath::Chat,
        ApiPathKey::Sessions => ApiPath::Sessions,
        ApiPathKey::Session => {
            ApiPath::Session(id.ok_or(ConfigError::MissingPathArgument(key.as_str()))?)
        }
    };
    Ok(path.path())
}
