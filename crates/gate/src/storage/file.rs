use super::KeyValueStorage;
use shared_types::AppError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Storage backed by one JSON file per key under a directory.
///
/// Writes land in a sibling `.tmp` file first and are renamed into place, so
/// a reader sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys become file names, so only a conservative character set is allowed.
    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(AppError::storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::storage(format!("failed to create {}: {e}", self.dir.display()))
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .map_err(|e| AppError::storage(format!("failed to write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path).map_err(|e| {
            AppError::storage(format!("failed to replace {}: {e}", path.display()))
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}
