//! Atomic TOML file operations.
//!
//! Writes go through a temporary file and a rename; read-modify-write
//! updates hold an exclusive lock on a sibling `.lock` file so that several
//! processes sharing the file see a consistent check-and-set.

use fs2::FileExt;
use prenatal_core::AssistantError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic TOML operations.
#[derive(Debug)]
pub enum AtomicTomlError {
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML deserialization error.
    TomlError(toml::de::Error),
    /// TOML serialization error.
    TomlSerError(toml::ser::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicTomlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicTomlError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicTomlError::TomlError(e) => write!(f, "TOML parse error: {}", e),
            AtomicTomlError::TomlSerError(e) => write!(f, "TOML serialization error: {}", e),
            AtomicTomlError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicTomlError {}

impl From<std::io::Error> for AtomicTomlError {
    fn from(e: std::io::Error) -> Self {
        AtomicTomlError::IoError(e)
    }
}

impl From<toml::de::Error> for AtomicTomlError {
    fn from(e: toml::de::Error) -> Self {
        AtomicTomlError::TomlError(e)
    }
}

impl From<toml::ser::Error> for AtomicTomlError {
    fn from(e: toml::ser::Error) -> Self {
        AtomicTomlError::TomlSerError(e)
    }
}

impl From<AtomicTomlError> for AssistantError {
    fn from(e: AtomicTomlError) -> Self {
        AssistantError::storage(e.to_string())
    }
}

/// A handle to a TOML file with atomic writes and locked updates.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the TOML file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the TOML file via temporary file + rename.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a read-modify-write under an exclusive lock.
    ///
    /// `f` receives the current data (or `default_value` when the file is
    /// missing) and reports whether it changed anything; the file is only
    /// rewritten when it did.
    pub fn update<F, R>(&self, default_value: T, f: F) -> Result<R, AtomicTomlError>
    where
        F: FnOnce(&mut T) -> (R, bool),
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        let (result, changed) = f(&mut data);

        if changed {
            self.save(&data)?;
        }

        Ok(result)
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicTomlError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicTomlError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// Exclusive lock guard; released when dropped.
///
/// The lock file itself is left in place: deleting it while another process
/// waits on the old inode would let two holders in at once.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        FileExt::lock_exclusive(&file)
            .map_err(|e| AtomicTomlError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        name: String,
        count: u32,
    }

    fn default_counter() -> Counter {
        Counter {
            name: "default".to_string(),
            count: 0,
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("c.toml"));

        atomic_file
            .save(&Counter {
                name: "test".to_string(),
                count: 42,
            })
            .unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded.count, 42);

        // No temp file left behind
        assert!(!temp_dir.path().join(".c.toml.tmp").exists());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("missing.toml"));
        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_update_returns_value_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let atomic_file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("c.toml"));

        let after = atomic_file
            .update(default_counter(), |c| {
                c.count += 10;
                (c.count, true)
            })
            .unwrap();
        assert_eq!(after, 10);

        let after = atomic_file
            .update(default_counter(), |c| {
                c.count += 5;
                (c.count, true)
            })
            .unwrap();
        assert_eq!(after, 15);
        assert_eq!(atomic_file.load().unwrap().unwrap().count, 15);
    }

    #[test]
    fn test_unchanged_update_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.toml");
        let atomic_file = AtomicTomlFile::<Counter>::new(path.clone());

        let count = atomic_file
            .update(default_counter(), |c| (c.count, false))
            .unwrap();

        assert_eq!(count, 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("c.toml");
        fs::write(&path, "not = [valid").unwrap();

        let atomic_file = AtomicTomlFile::<Counter>::new(path);
        let err = atomic_file.load().unwrap_err();
        assert!(matches!(err, AtomicTomlError::TomlError(_)));

        let converted: AssistantError = err.into();
        assert!(converted.is_storage());
    }
}
