use crate::plan::{Plan, PlannedAction};
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum NodeKind {
    Directory,
    File(PlannedAction),
}

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    kind: NodeKind,
}
impl TreeNode {
    fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            children: Vec::new(),
            kind,
        }
    }
}

/// Build the directory tree from the plan, returning the root node.
///
/// Directories are never listed in the plan, so every ancestor of an entry is
/// created on first sight. Shared ancestors end up as a single node.
fn build_tree(plan: &Plan, root: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = root
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let root_node = Rc::new(RefCell::new(TreeNode::new(root_name, NodeKind::Directory)));

    // map relative path to node
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();

    for planned in &plan.entries {
        let components: Vec<_> = planned.entry.path().components().collect();

        let mut parent = Rc::clone(&root_node);
        let mut current = PathBuf::new();

        for (i, component) in components.iter().enumerate() {
            current.push(component);

            let node = match lookup.get(&current) {
                Some(node) => Rc::clone(node),
                None => {
                    let kind = if i + 1 == components.len() {
                        NodeKind::File(planned.action)
                    } else {
                        NodeKind::Directory
                    };
                    let name = component.as_os_str().to_string_lossy().to_string();
                    let node = Rc::new(RefCell::new(TreeNode::new(name, kind)));

                    parent.borrow_mut().children.push(Rc::clone(&node));
                    lookup.insert(current.clone(), Rc::clone(&node));

                    node
                }
            };

            parent = node;
        }
    }

    root_node
}

/// Write the tree with a nice ASCII style.
fn write_tree(
    f: &mut fmt::Formatter<'_>,
    node: &Rc<RefCell<TreeNode>>,
    prefix: &str,
    is_last: bool,
) -> fmt::Result {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = match node_borrow.kind {
        NodeKind::Directory => node_borrow.name.blue(),
        NodeKind::File(PlannedAction::Create) => node_borrow.name.green(),
        NodeKind::File(PlannedAction::Keep) => format!("{} (exists)", node_borrow.name).dimmed(),
    };
    writeln!(f, "{}{}{}", prefix.yellow(), connector, name)?;

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        write_tree(f, child, &child_prefix, last)?;
    }

    Ok(())
}

/// A [`Plan`] rendered as a tree rooted at the scaffold root.
pub struct TreePreview {
    root: Rc<RefCell<TreeNode>>,
}
impl TreePreview {
    pub fn new(plan: &Plan, root: &Path) -> Self {
        Self {
            root: build_tree(plan, root),
        }
    }
}
impl fmt::Display for TreePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, &self.root, "", true)
    }
}

pub fn preview_as_tree(plan: &Plan, root: &Path) {
    println!(
        "Legend: {} = (directory), {} = (new file), {} = (left untouched)",
        "blue".blue(),
        "green".green(),
        "dimmed".dimmed()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", TreePreview::new(plan, root));

    let fancy_prompt = format!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        format!("{} file(s) would be created", plan.to_create()).bright_green()
    );

    println!("{}", fancy_prompt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entry::ScaffoldEntry, plan::PlannedEntry};

    fn planned(path: &str, action: PlannedAction) -> PlannedEntry {
        PlannedEntry {
            entry: ScaffoldEntry::new(path).unwrap(),
            action,
        }
    }

    #[test]
    fn renders_shared_ancestors_once() {
        colored::control::set_override(false);
        let plan = Plan {
            entries: vec![
                planned("p/src/app.js", PlannedAction::Create),
                planned("p/src/server.js", PlannedAction::Keep),
                planned("p/README.md", PlannedAction::Create),
            ],
        };

        let rendered = TreePreview::new(&plan, Path::new("proj")).to_string();

        let expected = "\
└── proj
    └── p
        ├── src
        │   ├── app.js
        │   └── server.js (exists)
        └── README.md
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn current_directory_root_keeps_its_name() {
        colored::control::set_override(false);
        let plan = Plan {
            entries: vec![planned("README.md", PlannedAction::Create)],
        };

        let rendered = TreePreview::new(&plan, Path::new(".")).to_string();

        assert_eq!(rendered, "└── .\n    └── README.md\n");
    }
}
