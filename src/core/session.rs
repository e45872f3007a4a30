//! # Account Session
//!
//! The signed-in account that the navigation screen is built for.
//!
//! A session is read once at startup and never changes while the screen is
//! alive. It is stored as a small JSON file (`~/.waresys/account.json` by
//! default) written by `waresys login` and removed by `waresys logout`.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Account role as stored by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Standard,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Standard => "standard",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// An authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: String,
    #[serde(default)]
    pub role: Role,
}

impl Session {
    pub fn new(identity: impl Into<String>, role: Role) -> Self {
        Self {
            identity: identity.into(),
            role,
        }
    }
}

/// Supplies the current session, if anyone is signed in.
pub trait SessionProvider {
    fn current_session(&self) -> Option<Session>;
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum AccountError {
    Io(io::Error),
    Parse(serde_json::Error),
    EmptyIdentity,
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::Io(e) => write!(f, "account I/O error: {e}"),
            AccountError::Parse(e) => write!(f, "account file is malformed: {e}"),
            AccountError::EmptyIdentity => write!(f, "account name must not be empty"),
        }
    }
}

impl std::error::Error for AccountError {}

impl From<io::Error> for AccountError {
    fn from(e: io::Error) -> Self {
        AccountError::Io(e)
    }
}

// ============================================================================
// File-backed provider
// ============================================================================

/// Reads the locally stored account file.
pub struct FileSessionProvider {
    path: PathBuf,
}

impl FileSessionProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the account file. A missing file means nobody is signed in.
    pub fn load(&self) -> Result<Option<Session>, AccountError> {
        if !self.path.exists() {
            debug!("No account file at {}", self.path.display());
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let session: Session = serde_json::from_str(&json).map_err(AccountError::Parse)?;
        if session.identity.trim().is_empty() {
            return Err(AccountError::EmptyIdentity);
        }
        Ok(Some(session))
    }
}

impl SessionProvider for FileSessionProvider {
    fn current_session(&self) -> Option<Session> {
        match self.load() {
            Ok(session) => session,
            Err(e) => {
                // A broken account file is treated like a signed-out one.
                warn!("Ignoring account file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
pub(crate) fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Store `session` as the signed-in account.
pub fn save_account(path: &Path, session: &Session) -> Result<(), AccountError> {
    if session.identity.trim().is_empty() {
        return Err(AccountError::EmptyIdentity);
    }
    atomic_write_json(path, session)?;
    info!(
        "Signed in as {} ({}) at {}",
        session.identity,
        session.role.label(),
        path.display()
    );
    Ok(())
}

/// Remove the stored account. Returns whether a file was removed.
pub fn clear_account(path: &Path) -> Result<bool, AccountError> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    info!("Signed out, removed {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_path;

    #[test]
    fn test_missing_file_means_signed_out() {
        let provider = FileSessionProvider::new(scratch_path("missing-account.json"));
        assert!(provider.load().unwrap().is_none());
        assert!(provider.current_session().is_none());
    }

    #[test]
    fn test_save_then_load_account() {
        let path = scratch_path("account.json");
        let session = Session::new("jnovak", Role::Admin);
        save_account(&path, &session).unwrap();

        let provider = FileSessionProvider::new(path.clone());
        assert_eq!(provider.current_session(), Some(session));

        assert!(clear_account(&path).unwrap());
        assert!(provider.current_session().is_none());
        assert!(!clear_account(&path).unwrap());
    }

    #[test]
    fn test_role_defaults_to_standard() {
        let session: Session = serde_json::from_str(r#"{"identity":"clerk"}"#).unwrap();
        assert_eq!(session.role, Role::Standard);
        assert!(!session.role.is_admin());
    }

    #[test]
    fn test_malformed_file_is_treated_as_signed_out() {
        let path = scratch_path("broken-account.json");
        fs::write(&path, "{ not json").unwrap();

        let provider = FileSessionProvider::new(path.clone());
        assert!(matches!(provider.load(), Err(AccountError::Parse(_))));
        assert!(provider.current_session().is_none());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_empty_identity_rejected() {
        let path = scratch_path("empty-account.json");
        let result = save_account(&path, &Session::new("  ", Role::Standard));
        assert!(matches!(result, Err(AccountError::EmptyIdentity)));
        assert!(!path.exists());
    }
}
