//! Constants for the chat frontend
//!
//! Single source of truth for every endpoint literal. Nothing outside this
//! module should spell out a path or host.

// API paths (identical in every environment)
pub const PATH_CHAT: &str = "/chat";
pub const PATH_SESSIONS: &str = "/sessions";
pub const PATH_SESSION_PREFIX: &str = "/session/";

// WebSocket chat endpoint, appended after scheme://host
pub const WS_CHAT_SUFFIX: &str = "/ws/chat";

// Local development backend
pub const DEV_API_BASE_URL: &str = "http://localhost:8000";
pub const DEV_WS_HOST: &str = "localhost:8000";

// Production uses same-origin relative URLs
pub const PROD_API_BASE_URL: &str = "";

// Page protocol that upgrades the WebSocket to TLS
pub const SECURE_PAGE_PROTOCOL: &str = "https:";
pub const WS_SCHEME: &str = "ws";
pub const WSS_SCHEME: &str = "wss";

// Bootstrap
pub const APP_MOUNT_SELECTOR: &str = "#app";
pub const ROOT_COMPONENT_ID: &str = "chat-root";
pub const CSS_CHAT_ROOT: &str = "chat-root";
