//! Depth-first traversals.
//!
//! The walk keeps its own stack instead of recursing, so traversal depth is
//! bounded by heap memory rather than the thread's call stack.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOrderError;
use crate::types::{AvlNode, Key};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    In,
    /// Left subtree, right subtree, then node.
    Post,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Pre, Order::In, Order::Post];

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Pre => "pre",
            Order::In => "in",
            Order::Post => "post",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Order::Pre),
            "in" | "inorder" | "in-order" | "symmetric" => Ok(Order::In),
            "post" | "postorder" | "post-order" => Ok(Order::Post),
            other => Err(ParseOrderError(other.to_string())),
        }
    }
}

/// Calls `f` with every key reachable from `root`, in `order`.
pub fn for_each<F: FnMut(Key)>(arena: &[AvlNode], root: Option<u32>, order: Order, mut f: F) {
    // `true` marks a node whose children are already scheduled.
    let mut stack: Vec<(u32, bool)> = Vec::new();
    if let Some(root) = root {
        stack.push((root, false));
    }

    while let Some((i, expanded)) = stack.pop() {
        let n = &arena[i as usize];
        if expanded {
            f(n.key);
            continue;
        }
        // Pushed in reverse of visiting order.
        match order {
            Order::Pre => {
                push(&mut stack, n.r);
                push(&mut stack, n.l);
                stack.push((i, true));
            }
            Order::In => {
                push(&mut stack, n.r);
                stack.push((i, true));
                push(&mut stack, n.l);
            }
            Order::Post => {
                stack.push((i, true));
                push(&mut stack, n.r);
                push(&mut stack, n.l);
            }
        }
    }
}

#[inline]
fn push(stack: &mut Vec<(u32, bool)>, child: Option<u32>) {
    if let Some(c) = child {
        stack.push((c, false));
    }
}

/// Materialized [`for_each`].
pub fn collect(arena: &[AvlNode], root: Option<u32>, order: Order) -> Vec<Key> {
    let mut keys = Vec::new();
    for_each(arena, root, order, |k| keys.push(k));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    //      4
    //    /   \
    //   2     6
    //  / \   /
    // 1   3 5
    fn sample() -> (Vec<AvlNode>, Option<u32>) {
        let mut arena: Vec<AvlNode> = [4, 2, 6, 1, 3, 5].into_iter().map(AvlNode::new).collect();
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].l = Some(3);
        arena[1].r = Some(4);
        arena[2].l = Some(5);
        (arena, Some(0))
    }

    #[test]
    fn test_pre_order() {
        let (arena, root) = sample();
        assert_eq!(collect(&arena, root, Order::Pre), vec![4, 2, 1, 3, 6, 5]);
    }

    #[test]
    fn test_in_order() {
        let (arena, root) = sample();
        assert_eq!(collect(&arena, root, Order::In), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_post_order() {
        let (arena, root) = sample();
        assert_eq!(collect(&arena, root, Order::Post), vec![1, 3, 2, 5, 6, 4]);
    }

    #[test]
    fn test_empty_tree() {
        let arena: Vec<AvlNode> = Vec::new();
        for order in Order::ALL {
            assert!(collect(&arena, None, order).is_empty());
        }
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("pre".parse::<Order>().unwrap(), Order::Pre);
        assert_eq!(" In-Order ".parse::<Order>().unwrap(), Order::In);
        assert_eq!("symmetric".parse::<Order>().unwrap(), Order::In);
        assert_eq!("POST".parse::<Order>().unwrap(), Order::Post);
        assert!("level".parse::<Order>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for order in Order::ALL {
            assert_eq!(order.to_string().parse::<Order>().unwrap(), order);
        }
    }
}
