use std::cmp::Ordering;

use crate::balance::{balance, Balance};
use crate::rotate::{ll_rotate, lr_rotate, rl_rotate, rr_rotate};
use crate::types::{AvlNode, Key};

/// Index of the node holding `key`, if any.
pub fn find(arena: &[AvlNode], root: Option<u32>, key: Key) -> Option<u32> {
    let i = root?;
    let n = &arena[i as usize];
    match key.cmp(&n.key) {
        Ordering::Less => find(arena, n.l, key),
        Ordering::Greater => find(arena, n.r, key),
        Ordering::Equal => Some(i),
    }
}

/// Leftmost node of a subtree.
pub fn min_node(arena: &[AvlNode], node: Option<u32>) -> Option<u32> {
    node.map(|i| leftmost(arena, i))
}

fn leftmost(arena: &[AvlNode], mut i: u32) -> u32 {
    while let Some(l) = arena[i as usize].l {
        i = l;
    }
    i
}

/// Links the detached leaf `n` into the subtree at `root` and returns the
/// new subtree root.
///
/// If a node with the same key already exists the subtree comes back
/// unchanged and `n` stays detached; callers that own the arena should
/// check with [`find`] before allocating.
pub fn insert(arena: &mut [AvlNode], root: Option<u32>, n: u32) -> u32 {
    let Some(curr) = root else {
        return n;
    };

    let key = arena[n as usize].key;
    let c = curr as usize;
    match key.cmp(&arena[c].key) {
        Ordering::Less => {
            let l = arena[c].l;
            arena[c].l = Some(insert(arena, l, n));
        }
        Ordering::Greater => {
            let r = arena[c].r;
            arena[c].r = Some(insert(arena, r, n));
        }
        Ordering::Equal => return curr,
    }

    rebalance_after_insert(arena, curr, key)
}

// The inserted key tells which grandchild grew: same side as the heavy
// child is the outer case, the other side is the zig-zag.
fn rebalance_after_insert(arena: &mut [AvlNode], n: u32, key: Key) -> u32 {
    let (l, r) = (arena[n as usize].l, arena[n as usize].r);
    match balance(arena, Some(n)) {
        Balance::LeftUnbalanced => match l {
            Some(l) if key < arena[l as usize].key => ll_rotate(arena, n),
            Some(_) => lr_rotate(arena, n),
            None => n,
        },
        Balance::RightUnbalanced => match r {
            Some(r) if key > arena[r as usize].key => rr_rotate(arena, n),
            Some(_) => rl_rotate(arena, n),
            None => n,
        },
        _ => n,
    }
}

/// Removes `key` from the subtree at `root`.
///
/// Returns the new subtree root and the arena slot that was unlinked, if
/// the key was present. The unlinked slot is not always the slot that held
/// `key`: a node with two children takes its successor's key, and the
/// successor's slot is the one released.
pub fn remove(arena: &mut [AvlNode], root: Option<u32>, key: Key) -> (Option<u32>, Option<u32>) {
    let mut vacated = None;
    let root = remove_node(arena, root, key, &mut vacated);
    (root, vacated)
}

fn remove_node(
    arena: &mut [AvlNode],
    node: Option<u32>,
    key: Key,
    vacated: &mut Option<u32>,
) -> Option<u32> {
    let i = node?;
    let n = i as usize;
    match key.cmp(&arena[n].key) {
        Ordering::Less => {
            let l = arena[n].l;
            arena[n].l = remove_node(arena, l, key, vacated);
        }
        Ordering::Greater => {
            let r = arena[n].r;
            arena[n].r = remove_node(arena, r, key, vacated);
        }
        Ordering::Equal => match (arena[n].l, arena[n].r) {
            (Some(_), Some(r)) => {
                let succ = arena[leftmost(arena, r) as usize].key;
                arena[n].key = succ;
                arena[n].r = remove_node(arena, Some(r), succ, vacated);
            }
            (child, None) | (None, child) => {
                arena[n].l = None;
                arena[n].r = None;
                *vacated = Some(i);
                return child;
            }
        },
    }

    // Height may have dropped at every level, so every ancestor is checked.
    Some(rebalance_after_remove(arena, i))
}

fn rebalance_after_remove(arena: &mut [AvlNode], n: u32) -> u32 {
    let (l, r) = (arena[n as usize].l, arena[n as usize].r);
    match balance(arena, Some(n)) {
        Balance::LeftUnbalanced => match balance(arena, l) {
            Balance::RightLeaning | Balance::RightUnbalanced => lr_rotate(arena, n),
            _ => ll_rotate(arena, n),
        },
        Balance::RightUnbalanced => match balance(arena, r) {
            Balance::LeftLeaning | Balance::LeftUnbalanced => rl_rotate(arena, n),
            _ => rr_rotate(arena, n),
        },
        _ => n,
    }
}

/// Checks strict key order and `|bf| <= 1` at every node reachable from
/// `root`.
pub fn assert_avl_tree(arena: &[AvlNode], root: Option<u32>) -> Result<(), String> {
    let mut budget = arena.len();
    validate(arena, root, None, None, &mut budget).map(|_| ())
}

fn validate(
    arena: &[AvlNode],
    node: Option<u32>,
    lo: Option<Key>,
    hi: Option<Key>,
    budget: &mut usize,
) -> Result<i32, String> {
    let Some(i) = node else {
        return Ok(-1);
    };
    let n = arena
        .get(i as usize)
        .ok_or_else(|| format!("Dangling link to slot {i}"))?;
    if *budget == 0 {
        return Err("Cycle detected".to_string());
    }
    *budget -= 1;

    if lo.is_some_and(|lo| n.key <= lo) || hi.is_some_and(|hi| n.key >= hi) {
        return Err(format!("Node order violated at key {}", n.key));
    }

    let lh = validate(arena, n.l, lo, Some(n.key), budget)?;
    let rh = validate(arena, n.r, Some(n.key), hi, budget)?;
    if !Balance::from_heights(lh, rh).is_within_tolerance() {
        return Err(format!(
            "AVL balance violated at key {}: left height {lh}, right height {rh}",
            n.key
        ));
    }

    Ok(1 + lh.max(rh))
}
