use crate::{
    entry::{backend_skeleton, EntryError, ScaffoldEntry},
    plan::Plan,
    preview::preview_as_tree,
    scaffold::{self, ScaffoldReport},
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffolderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Entry(#[from] EntryError),
}

/// Creates the backend skeleton beneath `root`.
///
/// # Errors
///
/// Returns a [`ScaffolderError`] if:
///
/// - A directory cannot be created, including when a file is in its way.
/// - A file cannot be inspected or created.
/// - A directory exists where a skeleton file should be.
pub fn scaffold(root: &Path) -> Result<ScaffoldReport, ScaffolderError> {
    let report = scaffold::ensure_scaffold(root, &backend_skeleton())?;

    log::debug!(
        "{} file(s) created, {} left untouched",
        report.created().count(),
        report.kept().count()
    );

    Ok(report)
}

/// Creates an arbitrary list of relative `paths` beneath `root`.
///
/// Every path is validated before anything is written.
///
/// # Errors
///
/// Returns a [`ScaffolderError`] if a path is empty, absolute or does not name a
/// file, or for the same reasons as [`scaffold`].
pub fn scaffold_paths(root: &Path, paths: &[&str]) -> Result<ScaffoldReport, ScaffolderError> {
    let entries = paths
        .iter()
        .map(|path| ScaffoldEntry::new(path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(scaffold::ensure_scaffold(root, &entries)?)
}

/// Prints what [`scaffold`] would do beneath `root` as a tree. Nothing is written.
///
/// # Errors
///
/// Returns a [`ScaffolderError`] if a skeleton file cannot be inspected or a
/// directory exists where a skeleton file should be.
pub fn preview(root: &Path) -> Result<Plan, ScaffolderError> {
    let plan = Plan::inspect(root, &backend_skeleton())?;

    preview_as_tree(&plan, root);

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::PROJECT_NAME;
    use tempfile::TempDir;

    #[test]
    fn scaffold_creates_backend_skeleton() {
        let tmp = TempDir::new().unwrap();

        let report = scaffold(tmp.path()).unwrap();

        let project = tmp.path().join(PROJECT_NAME);
        for file in [
            "src/app.js",
            "src/config/prismaClient.js",
            "src/controllers/__init__.py",
            "prisma/schema.prisma",
            ".env",
            "README.md",
        ] {
            assert!(project.join(file).is_file(), "missing {file}");
        }
        assert_eq!(report.created().count(), backend_skeleton().len());
    }

    #[test]
    fn invalid_path_writes_nothing() {
        let tmp = TempDir::new().unwrap();

        let result = scaffold_paths(tmp.path(), &["ok/file.txt", "/absolute.txt"]);

        assert!(matches!(result, Err(ScaffolderError::Entry(EntryError::Absolute { .. }))));
        assert!(!tmp.path().join("ok").exists());
    }

    #[test]
    fn directory_like_path_writes_nothing() {
        let tmp = TempDir::new().unwrap();

        let result = scaffold_paths(tmp.path(), &["ok/a.txt", "proj/"]);

        assert!(matches!(
            result,
            Err(ScaffolderError::Entry(EntryError::MissingFileName { .. }))
        ));
        assert!(!tmp.path().join("ok").exists());
        assert!(!tmp.path().join("proj").exists());
    }

    #[test]
    fn preview_leaves_root_untouched() {
        let tmp = TempDir::new().unwrap();

        let plan = preview(tmp.path()).unwrap();

        assert_eq!(plan.to_create(), backend_skeleton().len());
        assert!(!tmp.path().join(PROJECT_NAME).exists());
    }
}
