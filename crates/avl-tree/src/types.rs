/// Key type stored in the tree.
pub type Key = i32;

/// Arena-resident AVL node.
///
/// `l` and `r` are indices into the arena that owns this node. A node is
/// referenced by exactly one parent slot (or by the tree root), so the
/// arena never contains cycles or shared children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlNode {
    pub key: Key,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl AvlNode {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            l: None,
            r: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}
