//! # Session
//!
//! The logged-in user and their bearer token.
//!
//! ```text
//! login ──► {token, user} ──► TokenStore::save(token)
//!                                   │
//! next run ──► TokenStore::load() ──┴──► GET /auth/me ──► Session
//!                                                           │
//!                                        PricingContext ◄───┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use cemention_core::{PricingContext, Role, User};

use crate::error::{ClientError, ClientResult};

/// Response of `/auth/register` and `/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Session {
            token: token.into(),
            user,
        }
    }

    /// The pricing inputs for this user.
    pub fn pricing(&self) -> PricingContext {
        PricingContext::from(&self.user)
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }

    /// Fails with [`ClientError::AdminRequired`] unless this is an admin.
    pub fn require_admin(&self) -> ClientResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ClientError::AdminRequired)
        }
    }
}

/// A bearer token persisted in a single file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `token`, creating parent directories as needed.
    pub fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.store_error(e))?;
        }
        fs::write(&self.path, token).map_err(|e| self.store_error(e))?;
        restrict_permissions(&self.path).map_err(|e| self.store_error(e))?;

        debug!(path = ?self.path, "Session token saved");
        Ok(())
    }

    /// Reads the saved token. A missing or blank file means no session.
    pub fn load(&self) -> ClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.store_error(e)),
        }
    }

    /// Removes the saved token. Clearing an absent token is not an error.
    pub fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = ?self.path, "Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.store_error(e)),
        }
    }

    fn store_error(&self, err: std::io::Error) -> ClientError {
        ClientError::SessionStore(format!("{}: {}", self.path.display(), err))
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
