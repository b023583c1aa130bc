//! Single and double rotations.
//!
//! Every rotation takes the index of the subtree root and returns the index
//! of the node that replaces it; the caller stores the result back into the
//! parent slot. A rotation whose pivot child is missing leaves the subtree
//! untouched.

use crate::types::AvlNode;

/// Promotes `n.l`: it becomes the subtree root with `n` as its right child.
pub fn ll_rotate(arena: &mut [AvlNode], n: u32) -> u32 {
    let Some(nl) = arena[n as usize].l else {
        return n;
    };
    log::trace!(
        "ll rotation at {} promotes {}",
        arena[n as usize].key,
        arena[nl as usize].key
    );

    let nlr = arena[nl as usize].r;
    arena[n as usize].l = nlr;
    arena[nl as usize].r = Some(n);
    nl
}

/// Promotes `n.r`: it becomes the subtree root with `n` as its left child.
pub fn rr_rotate(arena: &mut [AvlNode], n: u32) -> u32 {
    let Some(nr) = arena[n as usize].r else {
        return n;
    };
    log::trace!(
        "rr rotation at {} promotes {}",
        arena[n as usize].key,
        arena[nr as usize].key
    );

    let nrl = arena[nr as usize].l;
    arena[n as usize].r = nrl;
    arena[nr as usize].l = Some(n);
    nr
}

/// Left subtree leans right: straighten it, then rotate `n` right.
pub fn lr_rotate(arena: &mut [AvlNode], n: u32) -> u32 {
    let Some(nl) = arena[n as usize].l else {
        return n;
    };
    let nl = rr_rotate(arena, nl);
    arena[n as usize].l = Some(nl);
    ll_rotate(arena, n)
}

/// Right subtree leans left: straighten it, then rotate `n` left.
pub fn rl_rotate(arena: &mut [AvlNode], n: u32) -> u32 {
    let Some(nr) = arena[n as usize].r else {
        return n;
    };
    let nr = ll_rotate(arena, nr);
    arena[n as usize].r = Some(nr);
    rr_rotate(arena, n)
}
