//! One JSON data file and the in-memory state loaded from it
//!
//! Every change is made to a copy of the state. The copy is written to disk
//! first and only then published, so memory never runs ahead of the file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};

use crate::error::{PaceError, PaceResult};

pub struct JsonFile<T> {
    path: PathBuf,
    state: RwLock<T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Create a handle with default state; nothing is read until `load`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(T::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory state with the file's contents
    ///
    /// A missing file loads as the default value.
    pub fn load(&self) -> PaceResult<()> {
        let loaded = read_or_default(&self.path)?;
        *self.state.write()? = loaded;
        Ok(())
    }

    /// Run `f` against the current state
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> PaceResult<R> {
        let state = self.state.read()?;
        Ok(f(&*state))
    }

    pub fn snapshot(&self) -> PaceResult<T> {
        self.read(T::clone)
    }

    /// Change the state through `f` and persist the result
    ///
    /// If `f` fails or the write fails, both the file and the in-memory
    /// state are left as they were.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> PaceResult<R>) -> PaceResult<R> {
        let mut state = self.state.write()?;
        let mut next = T::clone(&state);
        let output = f(&mut next)?;
        write_replacing(&self.path, &next)?;
        *state = next;
        Ok(output)
    }

    pub fn replace(&self, value: T) -> PaceResult<()> {
        self.update(|state| {
            *state = value;
            Ok(())
        })
    }
}

fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> PaceResult<T> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file yet");
            return Ok(T::default());
        }
        Err(e) => return Err(PaceError::file("read", path)(e)),
    };
    serde_json::from_slice(&contents).map_err(|source| PaceError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` beside `path` and rename it into place
fn write_replacing<T: Serialize>(path: &Path, value: &T) -> PaceResult<()> {
    let staging = path.with_extension("json.partial");
    let result = write_synced(&staging, value).and_then(|()| fs::rename(&staging, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&staging);
        return Err(PaceError::file("write", path)(e));
    }
    trace!(path = %path.display(), "data file replaced");
    Ok(())
}

fn write_synced<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let mut file = fs::File::create(path)?;
    file.write_all(&bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Tally {
        counts: Vec<u32>,
    }

    fn tally_file(dir: &TempDir) -> JsonFile<Tally> {
        JsonFile::new(dir.path().join("tally.json"))
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let file = tally_file(&dir);
        file.load().unwrap();
        assert_eq!(file.snapshot().unwrap(), Tally::default());
        assert!(!file.path().exists());
    }

    #[test]
    fn test_update_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let file = tally_file(&dir);
        let len = file
            .update(|t| {
                t.counts.extend([3, 5]);
                Ok(t.counts.len())
            })
            .unwrap();
        assert_eq!(len, 2);
        assert!(!dir.path().join("tally.json.partial").exists());

        let reopened = tally_file(&dir);
        reopened.load().unwrap();
        assert_eq!(reopened.read(|t| t.counts.clone()).unwrap(), vec![3, 5]);
    }

    #[test]
    fn test_rejected_update_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let file = tally_file(&dir);
        file.replace(Tally { counts: vec![1] }).unwrap();

        let err = file
            .update(|t| {
                t.counts.push(2);
                Err::<(), _>(PaceError::Validation("no".into()))
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(file.snapshot().unwrap().counts, vec![1]);
    }

    #[test]
    fn test_failed_write_keeps_memory_in_step_with_disk() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = dir.path().join("blocked.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let file: JsonFile<Tally> = JsonFile::new(path.clone());
        let err = file.replace(Tally { counts: vec![7] }).unwrap_err();
        assert!(matches!(err, PaceError::File { action: "write", .. }));
        assert_eq!(file.snapshot().unwrap(), Tally::default());
        assert!(!path.with_extension("json.partial").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tally.json"), "{ counts: nope").unwrap();

        let err = tally_file(&dir).load().unwrap_err();
        assert!(matches!(err, PaceError::Corrupt { .. }));
    }
}
