//! Sideways tree rendering.
//!
//! [`visualize`] walks the right subtree first, so reading the rendered
//! lines top to bottom and tilting your head left shows the tree with its
//! root on the left and larger keys above smaller ones.

use crate::types::{AvlNode, Key};

/// Indent width used by [`AvlTree`](crate::AvlTree)'s `Display` impl.
pub const DEFAULT_INDENT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualRow {
    pub key: Key,
    /// Distance from the root; the root is at depth 0.
    pub depth: usize,
}

/// Right-first (reverse in-order) projection of the subtree at `root`.
pub fn visualize(arena: &[AvlNode], root: Option<u32>) -> Vec<VisualRow> {
    let mut rows = Vec::new();
    walk(arena, root, 0, &mut rows);
    rows
}

fn walk(arena: &[AvlNode], node: Option<u32>, depth: usize, rows: &mut Vec<VisualRow>) {
    let Some(i) = node else {
        return;
    };
    let n = &arena[i as usize];
    walk(arena, n.r, depth + 1, rows);
    rows.push(VisualRow { key: n.key, depth });
    walk(arena, n.l, depth + 1, rows);
}

/// One line per row, indented `depth * indent` spaces.
pub fn render(rows: &[VisualRow], indent: usize) -> String {
    let mut out = String::new();
    for row in rows {
        let width = row.depth * indent;
        out.push_str(&format!("{:width$}{}\n", "", row.key));
    }
    out
}
