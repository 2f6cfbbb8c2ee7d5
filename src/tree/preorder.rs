use std::iter::FusedIterator;

use super::Node;

/// An iterator over the keys of a tree, visiting each node before its subtrees
pub struct IterPreorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> IterPreorder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, K> Iterator for IterPreorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

impl<'a, K> FusedIterator for IterPreorder<'a, K> {}
