//! Persistence of the last query and mode across invocations.

use crate::model::{SearchMode, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The single record carried from one session to the next.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Query at the end of the last session.
    #[serde(rename = "last_search", default)]
    pub last_query: String,
    /// Mode at the end of the last session.
    #[serde(rename = "mode", default)]
    pub last_mode: SearchMode,
}

/// Backing storage for [`PersistedSession`].
///
/// Passed into the session controller; nothing else reads or writes it.
pub trait SessionStore {
    /// Read the stored session. A store that was never written yields the
    /// default.
    fn load(&mut self) -> Result<PersistedSession, StoreError>;
    /// Replace the stored session.
    fn save(&mut self, session: &PersistedSession) -> Result<(), StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn load(&mut self) -> Result<PersistedSession, StoreError> {
        (**self).load()
    }

    fn save(&mut self, session: &PersistedSession) -> Result<(), StoreError> {
        (**self).save(session)
    }
}

/// JSON file store, last writer wins.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
        let path = path.to_path_buf();
        move |source| StoreError::Io { path, source }
    }
}

impl SessionStore for FileSessionStore {
    /// A missing file yields the default (empty) session.
    fn load(&mut self) -> Result<PersistedSession, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PersistedSession::default());
            }
            Err(e) => return Err(self.io_error(&self.path)(e)),
        };

        serde_json::from_str(&contents).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes to a sibling temp file and renames it over the target.
    fn save(&mut self, session: &PersistedSession) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(self.io_error(parent))?;
        }

        let json = serde_json::to_string(session).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(self.io_error(&tmp))?;
        std::fs::rename(&tmp, &self.path).map_err(self.io_error(&self.path))
    }
}
