//! String-to-string maps persisted as JSON objects.
//!
//! Used for the cookie jar and local storage of the admin session.

use super::atomic_json::AtomicJsonFile;
use learnx_core::error::{AdminError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

/// A small persistent key/value map.
///
/// Every read goes to disk; nothing is cached in memory.
pub struct KeyValueFile {
    file: AtomicJsonFile<Entries>,
}

impl KeyValueFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .file
            .load()?
            .and_then(|mut entries| entries.remove(key)))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value)])
    }

    /// Writes several entries in one locked update.
    pub fn set_many(&self, pairs: &[(&str, &str)]) -> Result<()> {
        self.file.update(Entries::new(), |entries| {
            for (key, value) in pairs {
                entries.insert((*key).to_string(), (*value).to_string());
            }
            Ok(())
        })
    }

    /// Removes the given keys; deletes the file once it is empty.
    ///
    /// A file that no longer parses is deleted as a whole.
    pub fn remove(&self, keys: &[&str]) -> Result<()> {
        match self.file.load() {
            Ok(None) => return Ok(()),
            Ok(Some(_)) => {}
            Err(AdminError::Serialization { message, .. }) => {
                tracing::warn!(
                    "Discarding unreadable {}: {}",
                    self.file.path().display(),
                    message
                );
                return self.file.remove();
            }
            Err(e) => return Err(e),
        }
        let mut now_empty = false;
        self.file.update(Entries::new(), |entries| {
            for key in keys {
                entries.remove(*key);
            }
            now_empty = entries.is_empty();
            Ok(())
        })?;
        if now_empty {
            self.file.remove()?;
        }
        Ok(())
    }
}
