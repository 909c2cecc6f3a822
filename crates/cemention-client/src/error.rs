//! # Client Error Types
//!
//! Error types for REST calls, configuration, and the saved session.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │   Backend status        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  Unauthenticated (401)  │ │
//! │  │  InvalidUrl     │  │  Decode         │  │  Forbidden (403)        │ │
//! │  │  ConfigLoad/Save│  │                 │  │  NotFound (404)         │ │
//! │  └─────────────────┘  └─────────────────┘  │  Api (anything else)    │ │
//! │                                            └─────────────────────────┘ │
//! │  ┌─────────────────┐  ┌─────────────────┐                              │
//! │  │    Session      │  │   Business      │                              │
//! │  │                 │  │                 │                              │
//! │  │  NotLoggedIn    │  │  Core(CoreError)│                              │
//! │  │  AdminRequired  │  │                 │                              │
//! │  │  SessionStore   │  │                 │                              │
//! │  └─────────────────┘  └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Backend Error Bodies
//! The backend reports failures as `{"detail": "..."}`. Validation
//! failures send `detail` as a list of objects; those are flattened to
//! their `msg` fields.

use cemention_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong talking to the storefront.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Backend URL could not be parsed or joined.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// HTTP transport failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),

    // =========================================================================
    // Backend Status Errors
    // =========================================================================
    /// 401: missing, expired, or rejected token.
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// 403: the account may not perform this action.
    #[error("Not authorized: {0}")]
    Forbidden(String),

    /// 404: the resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("Backend returned {status}: {detail}")]
    Api { status: u16, detail: String },

    // =========================================================================
    // Session Errors
    // =========================================================================
    /// The command needs a logged-in session.
    #[error("Not logged in. Run `cemention login` first.")]
    NotLoggedIn,

    /// The command needs an admin account.
    #[error("This action requires an admin account")]
    AdminRequired,

    /// Token file could not be read or written.
    #[error("Session store error: {0}")]
    SessionStore(String),

    // =========================================================================
    // Business Errors
    // =========================================================================
    /// Cart, checkout, or validation rule violated.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Status Mapping
// =============================================================================

impl ClientError {
    /// Maps a non-2xx response to an error, using the body's `detail`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body.trim().to_string()
            }
        });

        match status {
            401 => ClientError::Unauthenticated(detail),
            403 => ClientError::Forbidden(detail),
            404 => ClientError::NotFound(detail),
            _ => ClientError::Api { status, detail },
        }
    }

    /// Returns true if re-authenticating could fix this error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Unauthenticated(_) | ClientError::NotLoggedIn)
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg").and_then(|m| m.as_str()) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect();
            Some(msgs.join("; "))
        }
        other => Some(other.to_string()),
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Core(CoreError::Validation(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}
