use crate::{
    entry::ScaffoldEntry,
    scaffold::{inspect, FileState, ScaffoldError},
};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedAction {
    Create,
    Keep,
}

/// A scaffold entry together with what applying it would do.
#[derive(Debug, Clone)]
pub struct PlannedEntry {
    pub entry: ScaffoldEntry,
    pub action: PlannedAction,
}

/// Read-only prediction of an [`ensure_scaffold`](crate::scaffold::ensure_scaffold) run.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub entries: Vec<PlannedEntry>,
}
impl Plan {
    /// Inspects `root` without modifying it.
    ///
    /// # Errors
    ///
    /// Fails when an entry's metadata cannot be read for a reason other than the
    /// file being absent, or when a directory sits where an entry's file should be.
    pub fn inspect(root: &Path, entries: &[ScaffoldEntry]) -> Result<Self, ScaffoldError> {
        let mut plan = Plan::default();

        for entry in entries {
            let path = root.join(entry.path());

            let action = match inspect(&path)? {
                FileState::Directory => return Err(ScaffoldError::PathCollision { path }),
                state if state.needs_creation() => PlannedAction::Create,
                _ => PlannedAction::Keep,
            };

            log::debug!("planned {:?} for {}", action, entry);

            plan.entries.push(PlannedEntry {
                entry: entry.clone(),
                action,
            });
        }

        Ok(plan)
    }

    pub fn to_create(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.action == PlannedAction::Create)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn predicts_without_touching_disk() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("p")).unwrap();
        fs::write(tmp.path().join("p/full.txt"), "content").unwrap();
        fs::write(tmp.path().join("p/empty.txt"), "").unwrap();
        let entries: Vec<_> = ["p/full.txt", "p/empty.txt", "p/new/file.txt"]
            .iter()
            .map(|p| ScaffoldEntry::new(p).unwrap())
            .collect();

        let plan = Plan::inspect(tmp.path(), &entries).unwrap();

        let actions: Vec<_> = plan.entries.iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![
                PlannedAction::Keep,
                PlannedAction::Create,
                PlannedAction::Create
            ]
        );
        assert_eq!(plan.to_create(), 2);
        assert!(!tmp.path().join("p/new").exists());
    }

    #[test]
    fn directory_at_file_location_is_reported() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("p/app.js")).unwrap();
        let entries = vec![ScaffoldEntry::new("p/app.js").unwrap()];

        let result = Plan::inspect(tmp.path(), &entries);

        assert!(matches!(result, Err(ScaffoldError::PathCollision { .. })));
    }
}
