//! Pointer to the session the CLI works on when no `--session` is given.

use postcraft_error::{PostcraftResult, StorageError, StorageErrorKind};
use postcraft_interface::validate_token;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File, inside the session directory, holding the current token.
pub const CURRENT_SESSION_FILE: &str = "current-session";

/// Generate a fresh session token (UUID v4).
///
/// # Examples
///
/// ```
/// let token = postcraft::new_session_token();
/// assert_eq!(token.len(), 36);
/// assert_ne!(token, postcraft::new_session_token());
/// ```
pub fn new_session_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The remembered current session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSession {
    path: PathBuf,
}

impl CurrentSession {
    /// Pointer file inside `session_dir`.
    pub fn in_dir(session_dir: impl AsRef<Path>) -> Self {
        Self {
            path: session_dir.as_ref().join(CURRENT_SESSION_FILE),
        }
    }

    /// Location of the pointer file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the remembered token, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be read or holds
    /// an unusable token.
    pub fn read(&self) -> PostcraftResult<Option<String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        validate_token(token)?;
        Ok(Some(token.to_string()))
    }

    /// Remember `token` as the current session.
    #[instrument(skip(self, token))]
    pub fn write(&self, token: &str) -> PostcraftResult<()> {
        validate_token(token)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }
        std::fs::write(&self.path, format!("{}\n", token)).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        debug!(path = %self.path.display(), "Remembered current session");
        Ok(())
    }

    /// The remembered token, or a new one that is remembered from now on.
    pub fn read_or_create(&self) -> PostcraftResult<String> {
        if let Some(token) = self.read()? {
            return Ok(token);
        }
        let token = new_session_token();
        self.write(&token)?;
        Ok(token)
    }
}
