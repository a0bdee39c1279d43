//! Writing a rendered plan to disk
//!
//! Every write of a plan is issued at once and awaited together. A failed
//! write fails the batch, but siblings that already landed stay on disk.

use async_trait::async_trait;
use futures_util::future::join_all;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::error::{Result, ScaffoldError};

/// Filesystem port used by the generator
#[async_trait]
pub trait FileSink: Send + Sync {
    /// Create `path` and any missing parents
    async fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Create a new file, failing with [`ScaffoldError::AlreadyExists`]
    /// instead of overwriting
    async fn write_new(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`FileSink`] on top of `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSink;

#[async_trait]
impl FileSink for TokioFileSink {
    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|err| ScaffoldError::io(path, err))
    }

    async fn write_new(&self, path: &Path, content: &str) -> Result<()> {
        // create_new makes the existence check and the create one atomic step
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|err| ScaffoldError::io(path, err))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|err| ScaffoldError::io(path, err))?;
        file.flush().await.map_err(|err| ScaffoldError::io(path, err))
    }
}

/// A planned file with its rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Absolute path to create
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// Write all files concurrently
///
/// Waits for every write to finish. Returns the first failure in plan order;
/// completed writes are not rolled back.
///
/// # Errors
///
/// Returns [`ScaffoldError::AlreadyExists`] or [`ScaffoldError::Io`] from the
/// first failed write.
pub async fn materialize<S>(sink: &S, files: &[RenderedFile]) -> Result<()>
where
    S: FileSink + ?Sized,
{
    let results = join_all(
        files
            .iter()
            .map(|file| sink.write_new(&file.path, &file.content)),
    )
    .await;

    let mut first_error = None;
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(()) => tracing::info!(path = %file.path.display(), "Created file"),
            Err(err) => {
                tracing::warn!(path = %file.path.display(), error = %err, "Write failed");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    first_error.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rendered(dir: &Path, name: &str, content: &str) -> RenderedFile {
        RenderedFile {
            path: dir.join(name),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_writes_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![
            rendered(temp_dir.path(), "a.dart", "a"),
            rendered(temp_dir.path(), "b.dart", "b"),
        ];

        materialize(&TokioFileSink, &files).await.unwrap();

        assert_eq!(fs::read_to_string(temp_dir.path().join("a.dart")).unwrap(), "a");
        assert_eq!(fs::read_to_string(temp_dir.path().join("b.dart")).unwrap(), "b");
    }

    #[tokio::test]
    async fn test_existing_file_is_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.dart"), "original").unwrap();
        let files = vec![
            rendered(temp_dir.path(), "a.dart", "a"),
            rendered(temp_dir.path(), "b.dart", "b"),
            rendered(temp_dir.path(), "c.dart", "c"),
        ];

        let err = materialize(&TokioFileSink, &files).await.unwrap_err();

        assert_eq!(err.to_string(), "b.dart already exists");
        assert_eq!(fs::read_to_string(temp_dir.path().join("b.dart")).unwrap(), "original");
        // Siblings are left in place
        assert!(temp_dir.path().join("a.dart").exists());
        assert!(temp_dir.path().join("c.dart").exists());
    }

    #[tokio::test]
    async fn test_missing_parent_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let files = vec![rendered(&temp_dir.path().join("missing"), "a.dart", "a")];

        let err = materialize(&TokioFileSink, &files).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[tokio::test]
    async fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("counter").join("state");

        TokioFileSink.create_dir_all(&nested).await.unwrap();
        TokioFileSink.create_dir_all(&nested).await.unwrap();
        assert!(nested.is_dir());
    }
}
