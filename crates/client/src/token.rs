//! Local session-token storage.
//!
//! The mobile app keeps its JWT in the platform secure store; the CLI
//! counterpart is a file with owner-only permissions. The token is opaque:
//! nothing here decodes or validates it.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use spliteasy_shared::{AppError, AppResult};

/// Storage for the opaque session token.
pub trait TokenStore: Send + Sync {
    /// Returns the cached token, if any.
    fn get(&self) -> AppResult<Option<String>>;

    /// Replaces the cached token.
    fn set(&self, token: &str) -> AppResult<()>;

    /// Removes the cached token. Clearing an empty store is not an error.
    fn clear(&self) -> AppResult<()>;
}

/// Token cache backed by a file on disk.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> AppResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(store_error("read", &e)),
        }
    }

    fn set(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| store_error("create dir for", &e))?;
            }
        }
        std::fs::write(&self.path, token).map_err(|e| store_error("write", &e))?;

        // The token grants account access; keep it owner-readable only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| store_error("restrict permissions on", &e))?;
        }

        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(store_error("remove", &e)),
        }
    }
}

fn store_error(action: &str, err: &std::io::Error) -> AppError {
    AppError::Internal(format!("failed to {action} token file: {err}"))
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> AppResult<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn set(&self, token: &str) -> AppResult<()> {
        *self.lock()? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.lock()? = None;
        Ok(())
    }
}

impl MemoryTokenStore {
    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.token
            .lock()
            .map_err(|_| AppError::Internal("token store mutex poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get().unwrap(), None);

        store.set("abc").unwrap();
        assert_eq!(store.get().unwrap(), Some("abc".to_string()));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_memory_store_clear_when_empty_is_ok() {
        let store = MemoryTokenStore::default();
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "spliteasy-token-roundtrip-{}",
            std::process::id()
        ));
        let store = FileTokenStore::new(&path);

        assert_eq!(store.get().unwrap(), None);

        store.set("jwt-value").unwrap();
        assert_eq!(store.get().unwrap(), Some("jwt-value".to_string()));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
        // Idempotent.
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!(
            "spliteasy-token-nested-{}",
            std::process::id()
        ));
        let path = dir.join("inner").join("token");
        let store = FileTokenStore::new(&path);

        store.set("tok").unwrap();
        assert_eq!(store.get().unwrap(), Some("tok".to_string()));

        store.clear().unwrap();
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_trims_whitespace() {
        let path = std::env::temp_dir().join(format!(
            "spliteasy-token-trimmed-{}",
            std::process::id()
        ));
        std::fs::write(&path, "  jwt-value\n").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get().unwrap(), Some("jwt-value".to_string()));
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let path = std::env::temp_dir().join(format!(
            "spliteasy-token-perms-{}",
            std::process::id()
        ));
        let store = FileTokenStore::new(&path);
        store.set("secret").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        store.clear().unwrap();
    }
}
