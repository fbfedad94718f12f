//! Credential Storage
//!
//! The Token Store holds the single bearer credential of the signed-in user.
//!
//! ## Contract
//! - `get` / `set` / `clear` never fail: when the backing storage is
//!   unavailable they degrade to absent / no-op so the client keeps working
//!   unauthenticated.
//! - No expiry checking and no refresh flow.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Credential (Zeroized on drop)
// ============================================================================

/// Bearer token representing an authenticated session
///
/// Debug output is redacted and the token is erased from memory on drop.
///
/// ## Examples
/// ```rust
/// use platform::storage::Credential;
///
/// let credential = Credential::new("eyJhbGciOi...").unwrap();
/// assert_eq!(format!("{:?}", credential), "Credential([REDACTED])");
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token; blank tokens are rejected
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Raw token, for the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

// ============================================================================
// Token Store
// ============================================================================

/// Single-slot credential storage
pub trait TokenStore: Send + Sync {
    /// Current credential, if any
    fn get(&self) -> Option<Credential>;

    /// Replace the stored credential
    fn set(&self, credential: &Credential);

    /// Remove the stored credential
    fn clear(&self);
}

/// In-memory store (lost when the process exits)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<Credential>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: RwLock::new(Some(credential)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Credential> {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, credential: &Credential) {
        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(credential.clone());
    }

    fn clear(&self) {
        *self
            .slot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// File-backed store: one file named after the storage key
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under `dir/key`
    pub fn in_dir(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::new(dir.as_ref().join(key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<Credential> {
        match fs::read_to_string(&self.path) {
            Ok(mut raw) => {
                let credential = Credential::new(raw.as_str());
                raw.zeroize();
                credential
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Credential storage unreadable, continuing signed out");
                None
            }
        }
    }

    fn set(&self, credential: &Credential) {
        if let Err(e) = self.write(credential.expose()) {
            tracing::warn!(path = %self.path.display(), error = %e, "Credential storage unwritable, credential not persisted");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Credential storage could not be cleared");
            }
        }
    }
}
