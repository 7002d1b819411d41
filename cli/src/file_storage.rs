//! Session persistence in a JSON file.
//!
//! The file holds a flat object of string slots (`token`, `user_info`),
//! the same shape the browser keeps in `localStorage`. Every operation
//! re-reads the file so a logout from another shell is seen immediately.

#[cfg(test)]
#[path = "file_storage_test.rs"]
mod file_storage_test;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use session::KeyValueStorage;

type Slots = BTreeMap<String, String>;

#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Slots {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Slots::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return Slots::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "session file is not a JSON object");
            Slots::new()
        })
    }

    fn write_slots(&self, slots: &Slots) {
        if let Err(e) = self.try_write_slots(slots) {
            tracing::warn!(path = %self.path.display(), error = %e, "session file write failed");
        }
    }

    fn try_write_slots(&self, slots: &Slots) -> io::Result<()> {
        if slots.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(slots).map_err(io::Error::other)?;
        let mut file = open_private(&self.path)?;
        file.write_all(body.as_bytes())
    }
}

/// Open for writing with owner-only permissions from creation on, since
/// the file carries a bearer token. A pre-existing file is tightened too.
#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = fs::OpenOptions::new().write(true).create(true).truncate(true).mode(0o600).open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_slots().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut slots = self.read_slots();
        slots.insert(key.to_owned(), value.to_owned());
        self.write_slots(&slots);
    }

    fn remove(&self, key: &str) {
        let mut slots = self.read_slots();
        if slots.remove(key).is_some() {
            self.write_slots(&slots);
        }
    }
}
