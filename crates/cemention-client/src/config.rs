//! # Client Configuration
//!
//! Where the backend lives, where the session token is kept, and the
//! seller details printed on invoices.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CEMENTION_BACKEND_URL=https://api.cemention.com                    │
//! │     CEMENTION_TIMEOUT_SECS=10                                          │
//! │     CEMENTION_TOKEN_PATH=/tmp/cemention.token                          │
//! │     CEMENTION_LOG_LEVEL=debug                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cemention/client.toml (Linux)                            │
//! │     ~/Library/Application Support/com.cemention.cemention/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:8000, 30s timeout, token in the data dir          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # client.toml
//! log_level = "info"
//!
//! [api]
//! backend_url = "http://localhost:8000"
//! timeout_secs = 30
//!
//! [session]
//! token_path = "/home/me/.local/share/cemention/session.token"
//!
//! [company]
//! name = "Cemention"
//! phone = "9823064024"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use cemention_core::CompanyProfile;

use crate::error::{ClientError, ClientResult};

const CONFIG_FILE: &str = "client.toml";
const TOKEN_FILE: &str = "session.token";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "cemention", "cemention")
}

// =============================================================================
// API Settings
// =============================================================================

/// How to reach the storefront backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Backend origin. The client appends `/api` itself.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            backend_url: default_backend_url(),
            timeout_secs: default_timeout(),
        }
    }
}

// =============================================================================
// Session Settings
// =============================================================================

/// Where the bearer token is persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Token file. Defaults to the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_path: Option<PathBuf>,
}

// =============================================================================
// Main Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub session: SessionSettings,

    /// Seller printed on invoices and notifications.
    #[serde(default)]
    pub company: CompanyProfile,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            log_level: default_log_level(),
            api: ApiSettings::default(),
            session: SessionSettings::default(),
            company: CompanyProfile::default(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (client.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| ClientError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file and returns the path written.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Client config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.api.backend_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "Backend URL must start with http:// or https://, got: {}",
                self.api.backend_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `CEMENTION_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CEMENTION_BACKEND_URL") {
            debug!(url = %url, "Overriding backend URL from environment");
            self.api.backend_url = url;
        }

        if let Some(timeout) = lookup("CEMENTION_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric CEMENTION_TIMEOUT_SECS"),
            }
        }

        if let Some(path) = lookup("CEMENTION_TOKEN_PATH") {
            self.session.token_path = Some(PathBuf::from(path));
        }

        if let Some(level) = lookup("CEMENTION_LOG_LEVEL") {
            self.log_level = level;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Resolved token file path, if one can be determined.
    pub fn token_path(&self) -> Option<PathBuf> {
        self.session
            .token_path
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(TOKEN_FILE)))
    }

    /// The REST base, `<backend_url>/api`.
    pub fn api_base_url(&self) -> ClientResult<Url> {
        let mut url = Url::parse(&self.api.backend_url)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.api.backend_url.clone()))?
            .pop_if_empty()
            .push("api");
        Ok(url)
    }
}
