//! Session token persistence
//!
//! The store owns the one slot that holds the current credential. Nothing
//! else in the crate reads or writes the storage medium directly.

use std::path::{Path, PathBuf};

use crate::error::{Result, SessionError};

/// Scheme prefix some servers put in front of the token they hand out
const BEARER_PREFIX: &str = "Bearer ";

/// Single-slot credential storage.
///
/// Last writer wins. The store has no notion of expiry; callers inspect the
/// token on every read.
pub trait TokenStore: Send + Sync {
    /// Persist a token, dropping a leading `"Bearer "` if present.
    fn save(&self, raw: &str) -> Result<()>;

    /// Current token, or `None` when the slot is empty.
    fn read(&self) -> Option<String>;

    /// Empty the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<()>;
}

/// Remove the case-sensitive `"Bearer "` scheme prefix.
pub fn strip_bearer_prefix(raw: &str) -> &str {
    raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw)
}

/// Token store backed by a single file holding the bare token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, strip_bearer_prefix(raw))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        log::debug!("Stored session token at {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Cleared session token at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string()).into()),
        }
    }
}

/// In-process token store.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: std::sync::Mutex::new(Some(strip_bearer_prefix(token).to_string())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a usable value.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn save(&self, raw: &str) -> Result<()> {
        *self.lock() = Some(strip_bearer_prefix(raw).to_string());
        Ok(())
    }

    fn read(&self) -> Option<String> {
        self.lock().clone()
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_strip_bearer_prefix() {
        assert_eq!(strip_bearer_prefix("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(strip_bearer_prefix("abc.def.ghi"), "abc.def.ghi");
        // case-sensitive
        assert_eq!(strip_bearer_prefix("bearer abc"), "bearer abc");
    }

    #[test]
    fn test_memory_store_strips_prefix_on_save() {
        let store = MemoryTokenStore::new();
        store.save("Bearer xyz").unwrap();
        assert_eq!(store.read().as_deref(), Some("xyz"));

        store.save("plain").unwrap();
        assert_eq!(store.read().as_deref(), Some("plain"));
    }

    #[test]
    fn test_memory_store_clear_is_idempotent() {
        let store = MemoryTokenStore::new();
        store.clear().unwrap();
        assert!(store.read().is_none());

        store.save("t").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp = tempdir().unwrap();
        let store = FileTokenStore::new(temp.path().join("token"));

        assert!(store.read().is_none());
        store.save("Bearer aaa.bbb.ccc").unwrap();
        assert_eq!(store.read().as_deref(), Some("aaa.bbb.ccc"));

        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "aaa.bbb.ccc");
    }

    #[test]
    fn test_file_store_survives_new_instance() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("token");

        FileTokenStore::new(&path).save("persisted").unwrap();
        assert_eq!(
            FileTokenStore::new(&path).read().as_deref(),
            Some("persisted")
        );
    }

    #[test]
    fn test_file_store_clear_on_missing_file() {
        let temp = tempdir().unwrap();
        let store = FileTokenStore::new(temp.path().join("token"));

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let temp = tempdir().unwrap();
        let store = FileTokenStore::new(temp.path().join("a").join("b").join("token"));
        store.save("t").unwrap();
        assert_eq!(store.read().as_deref(), Some("t"));
    }

    #[test]
    fn test_file_store_last_writer_wins() {
        let temp = tempdir().unwrap();
        let store = FileTokenStore::new(temp.path().join("token"));
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.read().as_deref(), Some("second"));
    }
}
