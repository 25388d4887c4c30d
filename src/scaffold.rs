use crate::{
    entry::ScaffoldEntry,
    errors::{FileOperation, IoError},
};
use miette::Diagnostic;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(scaffolder::scaffold::io))]
    Io(#[from] IoError),

    #[error("a directory already exists where a file is expected: '{path}'")]
    #[diagnostic(
        code(scaffolder::scaffold::path_collision),
        help("A directory is never treated as an existing file or replaced, move it out of the way")
    )]
    PathCollision { path: PathBuf },
}

/// What was found on disk at an entry's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileState {
    Missing,
    Empty,
    Populated,
    Directory,
}
impl FileState {
    /// Zero-length files count as missing and get recreated.
    pub(crate) fn needs_creation(self) -> bool {
        matches!(self, Self::Missing | Self::Empty)
    }
}

pub(crate) fn inspect(path: &Path) -> Result<FileState, IoError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(FileState::Directory),
        Ok(metadata) if metadata.len() == 0 => Ok(FileState::Empty),
        Ok(_) => Ok(FileState::Populated),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(FileState::Missing),
        Err(error) => Err(IoError::new(FileOperation::Stat, path.into(), error)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was absent or empty and is now an empty file.
    Created,
    /// The file had content and was left untouched.
    Kept,
}

/// Per-entry outcomes of a completed [`ensure_scaffold`] run, in entry order.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    outcomes: Vec<(ScaffoldEntry, FileOutcome)>,
}
impl ScaffoldReport {
    pub fn outcomes(&self) -> &[(ScaffoldEntry, FileOutcome)] {
        &self.outcomes
    }

    pub fn created(&self) -> impl Iterator<Item = &ScaffoldEntry> {
        self.with_outcome(FileOutcome::Created)
    }

    pub fn kept(&self) -> impl Iterator<Item = &ScaffoldEntry> {
        self.with_outcome(FileOutcome::Kept)
    }

    fn with_outcome(&self, outcome: FileOutcome) -> impl Iterator<Item = &ScaffoldEntry> {
        self.outcomes
            .iter()
            .filter(move |(_, o)| *o == outcome)
            .map(|(entry, _)| entry)
    }
}

/// Materializes `entries` beneath `root`.
///
/// Missing parent directories are created, missing or zero-length files are
/// created empty and files with content are never touched. Running it again
/// over the same entries changes nothing.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] on the first entry that fails. Entries processed
/// before it stay on disk.
pub fn ensure_scaffold(
    root: &Path,
    entries: &[ScaffoldEntry],
) -> Result<ScaffoldReport, ScaffoldError> {
    log::debug!(
        "scaffolding {} entries under {}",
        entries.len(),
        root.display()
    );

    let mut report = ScaffoldReport::default();

    for entry in entries {
        let outcome = ensure_entry(root, entry)?;

        report.outcomes.push((entry.clone(), outcome));
    }

    Ok(report)
}

fn ensure_entry(root: &Path, entry: &ScaffoldEntry) -> Result<FileOutcome, ScaffoldError> {
    let (directory, file_name) = entry.split();

    if !directory.as_os_str().is_empty() {
        create_directory(&root.join(directory))?;

        log::info!(
            "Creating directory: {} for the file: {}",
            directory.display(),
            file_name.to_string_lossy()
        );
    }

    let file_path = root.join(entry.path());

    match inspect(&file_path)? {
        FileState::Directory => Err(ScaffoldError::PathCollision { path: file_path }),
        state if state.needs_creation() => {
            create_empty_file(&file_path)?;

            log::info!("Creating empty file: {}", entry);

            Ok(FileOutcome::Created)
        }
        _ => {
            log::info!("File already exists: {}", entry);

            Ok(FileOutcome::Kept)
        }
    }
}

/// Creates `path` and any missing ancestors. An existing directory is not an error.
fn create_directory(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path).map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))
}

/// Creates `path` as an empty file, truncating it if it already exists.
fn create_empty_file(path: &Path) -> Result<(), IoError> {
    fs::File::create(path)
        .map(drop)
        .map_err(|error| IoError::new(FileOperation::Create, path.into(), error))
}
