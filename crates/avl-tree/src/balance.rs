//! Height and balance-factor computation.
//!
//! Nothing here is cached on the node: `height` walks the whole subtree
//! each time it is asked.

use crate::types::AvlNode;

/// Height of a subtree: `-1` when absent, `0` for a leaf.
pub fn height(arena: &[AvlNode], node: Option<u32>) -> i32 {
    match node {
        None => -1,
        Some(i) => {
            let n = &arena[i as usize];
            1 + height(arena, n.l).max(height(arena, n.r))
        }
    }
}

/// `height(left) - height(right)`; `0` for an absent node.
pub fn balance_factor(arena: &[AvlNode], node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(i) => {
            let n = &arena[i as usize];
            height(arena, n.l) - height(arena, n.r)
        }
    }
}

/// Balance category of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Balance {
    /// Left subtree two levels taller; needs a rotation.
    LeftUnbalanced,
    /// Left subtree one level taller.
    LeftLeaning,
    Balanced,
    /// Right subtree one level taller.
    RightLeaning,
    /// Right subtree two levels taller; needs a rotation.
    RightUnbalanced,
}

impl Balance {
    pub fn from_heights(left: i32, right: i32) -> Self {
        Self::from_factor(left - right)
    }

    /// Differences beyond `±2` saturate to the unbalanced variants.
    pub fn from_factor(bf: i32) -> Self {
        match bf {
            i32::MIN..=-2 => Balance::RightUnbalanced,
            -1 => Balance::RightLeaning,
            0 => Balance::Balanced,
            1 => Balance::LeftLeaning,
            2..=i32::MAX => Balance::LeftUnbalanced,
        }
    }

    pub fn is_within_tolerance(self) -> bool {
        !matches!(self, Balance::LeftUnbalanced | Balance::RightUnbalanced)
    }
}

pub fn balance(arena: &[AvlNode], node: Option<u32>) -> Balance {
    Balance::from_factor(balance_factor(arena, node))
}
