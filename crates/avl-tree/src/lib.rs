//! AVL tree over unique integer keys.
//!
//! Nodes live in a caller-owned `Vec<AvlNode>` arena and refer to their
//! children by `Option<u32>` index. There are no parent links and no cached
//! heights: every balance decision is made from heights computed on demand.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`] and the [`Key`] alias |
//! [`balance`] | `height`, balance factor, [`Balance`] categories |
//! [`rotate`] | LL / RR / LR / RL rotations |
//! [`util`] | `find`, `insert`, `remove`, `assert_avl_tree` |
//! [`traverse`] | pre-, in- and post-order walks |
//! [`print`] | right-first `(key, depth)` projection and text rendering |
//! [`tree`] | [`AvlTree`], the owning handle |
//! [`menu`] | numbered-option console front end used by `avl-menu` |

pub mod balance;
pub mod error;
pub mod menu;
pub mod print;
pub mod rotate;
pub mod traverse;
pub mod tree;
pub mod types;
pub mod util;

pub use balance::{balance, balance_factor, height, Balance};
pub use error::{AvlError, MenuError, ParseOrderError};
pub use print::{render, visualize, VisualRow};
pub use rotate::{ll_rotate, lr_rotate, rl_rotate, rr_rotate};
pub use traverse::{collect, for_each, Order};
pub use tree::AvlTree;
pub use types::{AvlNode, Key};
pub use util::{assert_avl_tree, find, insert, min_node, remove};
