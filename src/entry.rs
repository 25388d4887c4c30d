use miette::Diagnostic;
use std::{
    ffi::OsStr,
    fmt,
    path::{Component, Path, PathBuf},
};
use thiserror::Error;

/// Name of the top-level directory the built-in skeleton lives in.
pub const PROJECT_NAME: &str = "airbnb-backend";

/// Files of the backend skeleton, relative to [`PROJECT_NAME`].
///
/// `__init__.py` files only exist so that their directory gets created.
const BACKEND_FILES: &[&str] = &[
    "src/app.js",
    "src/server.js",
    "src/config/prismaClient.js",
    "src/controllers/__init__.py",
    "src/routes/__init__.py",
    "src/middlewares/errorHandler.js",
    "prisma/schema.prisma",
    "prisma/seed.js",
    ".env",
    "package.json",
    "README.md",
];

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum EntryError {
    #[error("scaffold entry is empty")]
    #[diagnostic(code(scaffolder::entry::empty))]
    Empty,

    #[error("scaffold entry must be relative: '{path}'")]
    #[diagnostic(
        code(scaffolder::entry::absolute),
        help("Entries are resolved beneath the scaffold root, drop the leading separator")
    )]
    Absolute { path: PathBuf },

    #[error("scaffold entry does not name a file: '{path}'")]
    #[diagnostic(code(scaffolder::entry::missing_file_name))]
    MissingFileName { path: PathBuf },
}

/// A relative path naming a file that should exist once the scaffold is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaffoldEntry {
    path: PathBuf,
}
impl ScaffoldEntry {
    pub fn new(raw: &str) -> Result<Self, EntryError> {
        if raw.is_empty() {
            return Err(EntryError::Empty);
        }

        let path = PathBuf::from(raw);

        let anchored = path
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
        if anchored {
            return Err(EntryError::Absolute { path });
        }

        // `Path` drops a trailing separator or `.`, so look at the raw last segment
        let last_segment = raw.rsplit(std::path::is_separator).next().unwrap_or_default();
        if matches!(last_segment, "" | "." | "..") || path.file_name().is_none() {
            return Err(EntryError::MissingFileName { path });
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Splits the entry into `(directory, file_name)`.
    ///
    /// `directory` is the empty path for top-level entries.
    pub fn split(&self) -> (&Path, &OsStr) {
        let directory = self.path.parent().unwrap_or_else(|| Path::new(""));
        let file_name = self.path.file_name().unwrap_or_default();

        (directory, file_name)
    }
}
impl fmt::Display for ScaffoldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// The backend project skeleton, in creation order.
pub fn backend_skeleton() -> Vec<ScaffoldEntry> {
    BACKEND_FILES
        .iter()
        .map(|file| ScaffoldEntry {
            path: Path::new(PROJECT_NAME).join(file),
        })
        .collect()
}
