//! This module defines the storage interface and the file-backed implementation
//! for signal collections.
use crate::error::StoreError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// File extension of collection files.
pub const COLLECTION_EXTENSION: &str = "md";

/// A trait for managing signal collections.
#[async_trait]
pub trait CollectionStore {
    /// Lists the names of all existing collections, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DirectoryUnavailable` if the collections directory
    /// is missing or cannot be read.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    /// Creates a new, empty collection.
    ///
    /// The caller is responsible for checking that the name is unique.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the collection to create.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CreateFailed` if the file cannot be created,
    /// including when it already exists.
    async fn create_collection(&self, name: &str) -> Result<(), StoreError>;

    /// Reads the raw content of a collection.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the collection to read.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the file does not exist or cannot be read.
    async fn read_collection(&self, name: &str) -> Result<String, StoreError>;

    /// Appends one encoded line to an existing collection.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the collection to append to.
    /// * `line` - The encoded entry, including its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AppendFailed` if the collection does not exist or
    /// the write fails.
    async fn append_entry(&self, name: &str, line: &str) -> Result<(), StoreError>;
}

/// Extracts collection names from directory entries, keeping their order.
pub fn collection_names<I, S>(files: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let suffix = format!(".{COLLECTION_EXTENSION}");
    files
        .into_iter()
        .filter_map(|file| {
            file.as_ref()
                .strip_suffix(suffix.as_str())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .collect()
}

/// A `CollectionStore` keeping one markdown file per collection in a directory.
pub struct FsCollectionStore {
    dir: PathBuf,
}

impl FsCollectionStore {
    /// Creates a store rooted at `dir`. The directory is not created.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolves a collection name to its file path.
    pub fn collection_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{COLLECTION_EXTENSION}"))
    }
}

#[async_trait]
impl CollectionStore for FsCollectionStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let unavailable = |source| StoreError::DirectoryUnavailable {
            path: self.dir.clone(),
            source,
        };

        let mut read_dir = fs::read_dir(&self.dir).await.map_err(unavailable)?;
        let mut files = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(unavailable)? {
            if entry.file_type().await.map_err(unavailable)?.is_dir() {
                continue;
            }
            // Non UTF-8 names can never be typed at the prompt.
            if let Ok(file) = entry.file_name().into_string() {
                files.push(file);
            }
        }

        let mut names = collection_names(files);
        names.sort();
        debug!("Found {} collections in {}", names.len(), self.dir.display());
        Ok(names)
    }

    async fn create_collection(&self, name: &str) -> Result<(), StoreError> {
        let path = self.collection_path(name);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|source| StoreError::CreateFailed {
                path: path.clone(),
                source,
            })?;
        debug!("Created collection file {}", path.display());
        Ok(())
    }

    async fn read_collection(&self, name: &str) -> Result<String, StoreError> {
        let path = self.collection_path(name);
        fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::ReadFailed {
                path: path.clone(),
                source,
            })
    }

    async fn append_entry(&self, name: &str, line: &str) -> Result<(), StoreError> {
        let path = self.collection_path(name);
        let append_failed = |source| StoreError::AppendFailed {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .await
            .map_err(append_failed)?;
        file.write_all(line.as_bytes()).await.map_err(append_failed)?;
        file.flush().await.map_err(append_failed)?;

        debug!("Appended {} bytes to {}", line.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collection_names_filter() {
        let names = collection_names(["a.md", "b.txt", "c.md"]);
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_collection_names_needs_extension() {
        let names = collection_names(["notes.md.bak", ".md", "README", "work.md"]);
        assert_eq!(names, vec!["work"]);
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = FsCollectionStore::new(temp.path().join("missing"));

        let err = store.list_collections().await.unwrap_err();
        assert!(matches!(err, StoreError::DirectoryUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("ignored.txt"), "").unwrap();
        std::fs::create_dir(temp.path().join("folder.md")).unwrap();
        let store = FsCollectionStore::new(temp.path());

        assert!(store.list_collections().await.unwrap().is_empty());

        store.create_collection("work").await.unwrap();
        store.create_collection("health").await.unwrap();

        let names = store.list_collections().await.unwrap();
        assert_eq!(names, vec!["health", "work"]);
        assert_eq!(store.read_collection("work").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_create_existing_fails() {
        let temp = TempDir::new().unwrap();
        let store = FsCollectionStore::new(temp.path());

        store.create_collection("work").await.unwrap();
        store.append_entry("work", "EVENT|2019-06-01T00:00:00.000Z|x\n").await.unwrap();

        let err = store.create_collection("work").await.unwrap_err();
        assert!(matches!(err, StoreError::CreateFailed { .. }));
        // The existing content is left alone.
        assert_eq!(
            store.read_collection("work").await.unwrap(),
            "EVENT|2019-06-01T00:00:00.000Z|x\n"
        );
    }

    #[tokio::test]
    async fn test_append_and_read() {
        let temp = TempDir::new().unwrap();
        let store = FsCollectionStore::new(temp.path());
        store.create_collection("work").await.unwrap();

        store.append_entry("work", "first\n").await.unwrap();
        store.append_entry("work", "second\n").await.unwrap();

        assert_eq!(store.read_collection("work").await.unwrap(), "first\nsecond\n");
        assert!(temp.path().join("work.md").is_file());
    }

    #[tokio::test]
    async fn test_missing_collection_errors() {
        let temp = TempDir::new().unwrap();
        let store = FsCollectionStore::new(temp.path());

        let err = store.read_collection("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::ReadFailed { .. }));

        let err = store.append_entry("nope", "line\n").await.unwrap_err();
        assert!(matches!(err, StoreError::AppendFailed { .. }));
        assert!(!temp.path().join("nope.md").exists());
    }
}
