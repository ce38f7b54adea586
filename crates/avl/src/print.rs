//! Text rendering of the tree shape, for test diagnostics.

use std::fmt::Debug;

use crate::node::Node;
use crate::AvlTree;

/// Render one node per line with its cached height, children drawn with
/// `├─` / `└─` branch glyphs and `L:` / `R:` side tags.
///
/// ```text
/// 20 (h=2)
/// ├─ L: 10 (h=1)
/// └─ R: 30 (h=1)
/// ```
pub fn print_tree<T: Debug>(tree: &AvlTree<T>) -> String {
    let Some(root) = tree.root.as_deref() else {
        return "(empty)".to_string();
    };
    let mut out = label(root);
    out.push_str(&children(root, ""));
    out
}

fn label<T: Debug>(node: &Node<T>) -> String {
    format!("{:?} (h={})", node.value, node.height)
}

fn children<T: Debug>(node: &Node<T>, tab: &str) -> String {
    let mut out = String::new();
    let kids: Vec<(&str, &Node<T>)> = [
        node.left.as_deref().map(|n| ("L", n)),
        node.right.as_deref().map(|n| ("R", n)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let last = kids.len().saturating_sub(1);
    for (i, (side, child)) in kids.iter().enumerate() {
        let is_last = i == last;
        let branch = if is_last { "└─" } else { "├─" };
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        out.push(' ');
        out.push_str(side);
        out.push_str(": ");
        out.push_str(&label(child));
        out.push_str(&children(child, &child_tab));
    }
    out
}
