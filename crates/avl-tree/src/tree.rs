use std::fmt;

use crate::balance::{balance, height, Balance};
use crate::error::AvlError;
use crate::print::{render, visualize, VisualRow, DEFAULT_INDENT};
use crate::traverse::{collect, for_each, Order};
use crate::types::{AvlNode, Key};
use crate::util::{assert_avl_tree, find, insert, min_node, remove};

/// Owning handle for an AVL tree of unique integer keys.
///
/// Nodes are stored in `arena`; slots released by [`AvlTree::delete`] are
/// kept on a free list and reused by later inserts. Dropping the tree (or
/// calling [`AvlTree::clear`]) releases every node at once.
#[derive(Clone, Debug, Default)]
pub struct AvlTree {
    pub root: Option<u32>,
    arena: Vec<AvlNode>,
    free: Vec<u32>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_node(&mut self, key: Key) -> Result<u32, AvlError> {
        if let Some(i) = self.free.pop() {
            self.arena[i as usize] = AvlNode::new(key);
            return Ok(i);
        }

        let idx = u32::try_from(self.arena.len()).map_err(|_| AvlError::CapacityExceeded)?;
        self.arena.try_reserve(1)?;
        // The free list can always hold every slot, so `delete` never allocates.
        self.free.try_reserve(self.arena.len() + 1 - self.free.len())?;
        self.arena.push(AvlNode::new(key));
        Ok(idx)
    }

    /// Adds `key`. Returns `Ok(false)` and leaves the tree untouched when the
    /// key is already present.
    pub fn insert(&mut self, key: Key) -> Result<bool, AvlError> {
        if find(&self.arena, self.root, key).is_some() {
            log::debug!("insert {key}: already present");
            return Ok(false);
        }

        let node = self.push_node(key)?;
        self.root = Some(insert(&mut self.arena, self.root, node));
        log::debug!("insert {key}: tree height {}", self.height());
        Ok(true)
    }

    /// Removes `key`. Returns `false` when the key was not present.
    pub fn delete(&mut self, key: Key) -> bool {
        let (root, vacated) = remove(&mut self.arena, self.root, key);
        self.root = root;
        match vacated {
            Some(i) => {
                self.free.push(i);
                log::debug!("delete {key}: tree height {}", self.height());
                true
            }
            None => {
                log::debug!("delete {key}: not found");
                false
            }
        }
    }

    pub fn search(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Arena index of the node holding `key`.
    pub fn find(&self, key: Key) -> Option<u32> {
        find(&self.arena, self.root, key)
    }

    pub fn node(&self, idx: u32) -> &AvlNode {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> Key {
        self.arena[idx as usize].key
    }

    /// Balance category of the node at `idx`.
    pub fn balance(&self, idx: u32) -> Balance {
        balance(&self.arena, Some(idx))
    }

    pub fn root_key(&self) -> Option<Key> {
        self.root.map(|i| self.key(i))
    }

    /// Smallest key in the tree.
    pub fn min(&self) -> Option<Key> {
        min_node(&self.arena, self.root).map(|i| self.key(i))
    }

    /// `-1` for an empty tree.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.arena.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.free.clear();
    }

    pub fn traverse(&self, order: Order) -> Vec<Key> {
        collect(&self.arena, self.root, order)
    }

    pub fn for_each<F: FnMut(Key)>(&self, order: Order, f: F) {
        for_each(&self.arena, self.root, order, f)
    }

    pub fn visualize(&self) -> Vec<VisualRow> {
        visualize(&self.arena, self.root)
    }

    pub fn render(&self, indent: usize) -> String {
        render(&self.visualize(), indent)
    }

    /// Validates order and balance, and that every live slot is reachable
    /// from the root.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root)?;
        let mut reachable = 0usize;
        self.for_each(Order::Pre, |_| reachable += 1);
        if reachable != self.len() {
            return Err(format!(
                "Reachable node count {reachable} does not match size {}",
                self.len()
            ));
        }
        Ok(())
    }
}

impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_INDENT))
    }
}
