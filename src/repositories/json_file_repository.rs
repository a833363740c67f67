use crate::error::{StorageError, StorageResult};
use crate::models::ContactGroup;
use crate::repositories::traits::GroupRepository;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Ids double as file names, so they are restricted to a path-safe alphabet.
static STORAGE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("storage id pattern is valid"));

const GROUP_FILE_EXTENSION: &str = "json";

/// Group repository backed by one pretty-printed JSON file per group.
///
/// The data directory is created on first save. Files that fail to decode
/// are left alone and skipped when listing.
#[derive(Debug, Clone)]
pub struct JsonFileGroupRepository {
    dir: PathBuf,
}

impl JsonFileGroupRepository {
    /// Create a repository rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> StorageResult<PathBuf> {
        if !STORAGE_ID.is_match(id) {
            return Err(StorageError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", id, GROUP_FILE_EXTENSION)))
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    async fn read_group(path: &Path) -> StorageResult<ContactGroup> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| Self::io_error(path, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl GroupRepository for JsonFileGroupRepository {
    async fn save(&self, group: &ContactGroup) -> StorageResult<()> {
        let path = self.path_for(group.id.as_str())?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Self::io_error(&self.dir, e))?;

        let json = serde_json::to_vec_pretty(group)?;
        fs::write(&path, json)
            .await
            .map_err(|e| Self::io_error(&path, e))?;

        debug!(group_id = %group.id, contacts = group.len(), "Saved contact group");
        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<ContactGroup>> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Self::io_error(&self.dir, e)),
        };

        let mut groups = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Self::io_error(&self.dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(GROUP_FILE_EXTENSION) {
                continue;
            }

            match Self::read_group(&path).await {
                Ok(group) => groups.push(group),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable group file"),
            }
        }

        groups.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(groups)
    }

    async fn get(&self, id: &str) -> StorageResult<ContactGroup> {
        let path = self.path_for(id)?;
        match Self::read_group(&path).await {
            Err(StorageError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(format!("Group {} not found", id)))
            }
            other => other,
        }
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(group_id = %id, "Deleted contact group");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }
}
