use std::path::Path;

use thiserror::Error;

/// Error types for the devicedoc application.
///
/// This enum represents all possible errors that can occur while loading
/// device module manifests and generating documentation from them.
#[derive(Error, Debug)]
pub enum DevicedocError {
    /// I/O operation error with path context
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where the I/O error occurred
        path: std::path::PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error without extra context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse manifest at '{location}': {details}")]
    ManifestParseError {
        /// Location of the manifest being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A device module manifest could not be loaded
    #[error("failed to load module '{path}': {details}")]
    ModuleLoadError {
        /// Path of the manifest being loaded
        path: std::path::PathBuf,
        /// Load error details
        details: String,
    },

    /// A requested class does not exist in the loaded module, or is not
    /// marked as a device
    #[error("unknown device class '{0}'")]
    UnknownClass(String),
}

/// A specialized `Result` type for devicedoc operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `DevicedocError` for all devicedoc operations.
pub type Result<T> = std::result::Result<T, DevicedocError>;

impl DevicedocError {
    /// Creates a manifest parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn manifest_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        DevicedocError::ManifestParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a module load error with file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying load error
    /// * `path` - Path to the manifest that failed to load
    pub fn module_load(error: impl std::fmt::Display, path: &Path) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        DevicedocError::ModuleLoadError {
            path: clean_path,
            details: error.to_string(),
        }
    }
}
