mod node;
mod balance;
mod preorder;
mod inorder;
mod level;

pub use node::Node;
pub use preorder::*;
pub use inorder::*;
pub use level::*;

use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::iter::FromIterator;

use log::debug;

use crate::alloc::try_box;
use crate::error::AllocError;

use node::{Link, min_node, max_node};

/// A self-balancing binary search tree (AVL tree)
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than `k`
///
/// Balance property: For each node, the heights of its left and right subtrees differ by at most
/// one. This keeps the height of the tree logarithmic in the number of keys, so searching,
/// inserting and removing are all `O(log n)`.
///
/// Duplicate keys are not allowed. Inserting a key that already exists in the tree does not modify
/// the tree.
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K> fmt::Debug for AvlTree<K>
    where K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("root", &self.root())
            .finish()
    }
}

impl<K: Ord> PartialEq for AvlTree<K> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same keys may have different shapes (e.g. if insertion order is
        // different). In-order traversal always produces the keys in sorted order, so comparing
        // that compares the contents.
        self.len() == other.len() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<K: Ord> Eq for AvlTree<K> {}

impl<K> AvlTree<K> {
    /// Creates an empty `AvlTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    /// let mut tree: AvlTree<i32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the tree (i.e. the number of nodes)
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the height of the tree, counted in nodes
    ///
    /// An empty tree has height 0 and a tree with a single key has height 1.
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.extend(vec![1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.minimum(), None);
    /// tree.extend(vec![15, 10, 20, 8, 12]);
    /// assert_eq!(tree.minimum(), Some(&8));
    /// ```
    pub fn minimum(&self) -> Option<&K> {
        min_node(self.root()).map(Node::key)
    }

    /// Returns the largest key in the tree, or `None` if the tree is empty
    ///
    /// Time complexity: `O(log n)`
    pub fn maximum(&self) -> Option<&K> {
        max_node(self.root()).map(Node::key)
    }

    /// Removes every key from the tree, releasing all of its nodes
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert("abc");
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        // Dropping the root frees every node. The recursion is only as deep as the tree is tall.
        self.root = None;
        self.len = 0;
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, K> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree, producing the keys in ascending order
    pub fn iter_inorder(&self) -> IterInorder<'_, K> {
        IterInorder::new(self.root())
    }

    /// Returns the keys of all the nodes at the given depth, from left to right
    ///
    /// The root is at level 1. Level 0 and levels deeper than the tree produce no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.extend(vec![10, 20, 30]);
    ///
    /// let level: Vec<_> = tree.iter_level(1).copied().collect();
    /// assert_eq!(level, &[20]);
    /// let level: Vec<_> = tree.iter_level(2).copied().collect();
    /// assert_eq!(level, &[10, 30]);
    /// ```
    pub fn iter_level(&self, level: usize) -> IterLevel<'_, K> {
        IterLevel::new(self.root(), level)
    }

    /// Returns the keys of every level of the tree, starting with the root level
    ///
    /// This produces exactly `height()` items.
    pub fn iter_levels(&self) -> IterLevels<'_, K> {
        IterLevels::new(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** node inserted into the tree. This changes as the tree
    /// rebalances itself. For a guaranteed ordering, use the various iteration methods.
    ///
    /// This is a low-level API meant to be used for implementing traversals. Nodes are read-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.extend(vec![30, 20, 10]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.key(), &20);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(10));
    /// assert_eq!(root.right().map(|node| *node.key()), Some(30));
    /// ```
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> AvlTree<K> {
    /// Returns `true` if the tree contains the specified key
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(log n)`
    pub fn contains<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Returns a reference to the key in the tree that is equal to the given one, if any
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.get("abc"), Some(&String::from("abc")));
    /// assert_eq!(tree.get("def"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(key).map(Node::key)
    }

    /// Returns the node holding the given key, or `None` if no such key exists in the tree
    ///
    /// Searching never modifies the tree.
    ///
    /// Time complexity: `O(log n)`
    pub fn search<Q>(&self, key: &Q) -> Option<&Node<K>>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Inserts a key into the tree, rebalancing it as needed
    ///
    /// If the tree did not have this key present, `true` is returned.
    ///
    /// If the tree did have this key present, `false` is returned, and the tree is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(37));
    /// assert!(!tree.insert(37));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let alloc = |key| Ok::<_, Infallible>(Box::new(Node::new(key)));
        match balance::insert(&mut self.root, key, alloc) {
            Ok(inserted) => self.finish_insert(inserted),
            Err(never) => match never {},
        }
    }

    /// Inserts a key into the tree, returning an error if memory for the new node could not be
    /// allocated
    ///
    /// On success, behaves exactly like [`insert`](Self::insert). On failure, the tree is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.try_insert(5), Ok(true));
    /// assert_eq!(tree.try_insert(5), Ok(false));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<bool, AllocError> {
        let alloc = |key| try_box(Node::new(key));
        match balance::insert(&mut self.root, key, alloc) {
            Ok(inserted) => Ok(self.finish_insert(inserted)),
            Err(err) => {
                debug!("insert failed, tree left unchanged: {}", err);
                Err(err)
            },
        }
    }

    fn finish_insert(&mut self, inserted: Option<Ordering>) -> bool {
        let inserted = inserted.is_some();
        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Removes a key from the tree, rebalancing it as needed. Returns whether the key was present.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.remove("abc"));
    /// assert!(!tree.remove("abc"));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes and returns the key in the tree, if any, that is equal to the given one
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.take("abc"), Some(String::from("abc")));
    /// assert_eq!(tree.take("def"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let (root, removed) = balance::remove(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = IterInorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
