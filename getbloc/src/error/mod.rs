//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Result type for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that terminate a scaffold or wrap command.
///
/// Every variant renders as a human-readable message; there is no
/// machine-consumed error channel beyond that.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Invalid entity name or target directory
    #[error("{0}")]
    Validation(String),

    /// A planned file is already on disk
    #[error("{file} already exists")]
    AlreadyExists {
        /// File name (not the full path) of the offending artifact
        file: String,
    },

    /// Directory creation or file write failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Path that was being created or written
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Template engine failure
    #[error("Failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Built-in template failed to compile
    #[error("Invalid template: {0}")]
    Template(#[from] handlebars::TemplateError),
}

impl ScaffoldError {
    /// Build a validation error from any displayable message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap an I/O error raised while touching `path`.
    ///
    /// `ErrorKind::AlreadyExists` is folded into [`ScaffoldError::AlreadyExists`]
    /// so callers see the same error whichever layer noticed the collision.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            return Self::AlreadyExists {
                file: file_label(&path),
            };
        }
        Self::Io { path, source }
    }

    /// Whether this error reports an existing target file
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
