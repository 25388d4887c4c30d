use miette::Diagnostic;
use thiserror::Error;

/// The filesystem call that failed.
#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    /// Reading an entry's metadata to decide between creating and keeping it.
    #[error("inspecting a file")]
    Stat,
    /// Creating or truncating an entry to an empty file.
    #[error("creating a file")]
    Create,
    /// Creating an entry's parent directory and its ancestors.
    #[error("creating a directory")]
    Mkdir,
}
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(
    code(scaffolder::io),
    help("Check file permissions, disk space, or that no file sits where a directory is expected.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}
