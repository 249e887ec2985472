use crate::plan::ProjectPlan;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// A node in the printed tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

fn node_name(path: &PathBuf) -> String {
    path.file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Builds the tree from the plan's footprint. The first staged path is the
/// project root; every later path finds its parent among the earlier ones.
fn build_tree(plan: &ProjectPlan) -> Option<Rc<RefCell<TreeNode>>> {
    let mut entries = plan.footprint().into_iter();

    let (root_path, _) = entries.next()?;
    let root = Rc::new(RefCell::new(TreeNode::new(node_name(&root_path), false)));

    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(root_path, Rc::clone(&root));

    for (path, is_file) in entries {
        let Some(parent) = path.parent() else {
            continue;
        };
        let Some(parent_node) = lookup.get(parent).map(Rc::clone) else {
            log::debug!("no staged parent for: {}", path.display());
            continue;
        };

        let node = Rc::new(RefCell::new(TreeNode::new(node_name(&path), is_file)));

        parent_node.borrow_mut().children.push(Rc::clone(&node));
        lookup.insert(path, node);
    }

    Some(root)
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        print_tree(child, &child_prefix, i == len - 1);
    }
}

/// Prints the layout the plan is about to materialize.
pub fn print_layout(plan: &ProjectPlan) {
    let Some(tree_root) = build_tree(plan) else {
        return;
    };

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );
    println!("{} {}\n", "┌─".bold().bright_blue(), "Layout".bold().bright_blue());

    print_tree(&tree_root, "", true);

    println!();
}
