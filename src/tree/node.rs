use std::fmt;
use std::cmp;

#[cfg(test)]
use std::mem;
#[cfg(test)]
use static_assertions::const_assert_eq;

/// An owning link to a subtree, or `None` for an empty subtree
pub(crate) type Link<K> = Option<Box<Node<K>>>;

// An empty subtree costs no more than a pointer thanks to the `Box` niche
#[cfg(test)]
const_assert_eq!(mem::size_of::<Link<i64>>(), mem::size_of::<usize>());

/// A single node of the AVL tree
///
/// Nodes can only be read from outside the crate. Every structural change goes through the tree so
/// that the cached heights and the balance invariant stay correct.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    /// Height of the subtree rooted at this node, counted in nodes (a leaf has height 1)
    pub(crate) height: usize,
}

impl<K> fmt::Debug for Node<K>
    where K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", self.key())
            .field("height", &self.height)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    /// Creates a new leaf
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Returns the key of this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the cached height of the subtree rooted at this node
    ///
    /// A leaf has height 1. This never walks the subtree.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree
    ///
    /// Positive values mean the node is left-heavy, negative values mean it is right-heavy.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recomputes the cached height from the (already correct) heights of the children
    ///
    /// Must be called bottom-up, immediately after the children of this node change.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }
}

/// Returns the cached height of a subtree, or 0 for an empty subtree
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Returns the balance factor of a subtree, or 0 for an empty subtree
pub(crate) fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// Returns the node with the smallest key in the given subtree
pub(crate) fn min_node<K>(node: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut current = node?;
    while let Some(left) = current.left() {
        current = left;
    }

    Some(current)
}

/// Returns the node with the largest key in the given subtree
pub(crate) fn max_node<K>(node: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut current = node?;
    while let Some(right) = current.right() {
        current = right;
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Link<i32> {
        Some(Box::new(Node::new(key)))
    }

    #[test]
    fn empty_subtree_height() {
        let empty: Link<i32> = None;
        assert_eq!(height(&empty), 0);
        assert_eq!(balance_factor(&empty), 0);
        assert_eq!(height(&leaf(3)), 1);
        assert_eq!(balance_factor(&leaf(3)), 0);
    }

    #[test]
    fn update_height_reads_children() {
        let mut node = Node::new(5);
        node.left = leaf(2);
        node.update_height();
        assert_eq!(node.height(), 2);
        assert_eq!(node.balance_factor(), 1);

        // Heights are cached, not recomputed from the subtree
        node.left.as_mut().unwrap().height = 4;
        assert_eq!(node.height(), 2);
        node.update_height();
        assert_eq!(node.height(), 5);
        assert_eq!(node.balance_factor(), 4);

        node.right = leaf(9);
        node.update_height();
        assert_eq!(node.balance_factor(), 3);
    }

    #[test]
    fn min_and_max() {
        assert!(min_node::<i32>(None).is_none());
        assert!(max_node::<i32>(None).is_none());

        let mut root = Node::new(10);
        let mut left = Node::new(5);
        left.left = leaf(1);
        left.update_height();
        root.left = Some(Box::new(left));
        root.right = leaf(20);
        root.update_height();

        assert_eq!(min_node(Some(&root)).map(Node::key), Some(&1));
        assert_eq!(max_node(Some(&root)).map(Node::key), Some(&20));
    }
}
