use std::iter::FusedIterator;

use super::Node;

/// An iterator over the keys of a tree in ascending order
pub struct IterInorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K> IterInorder<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut stack = Vec::new();
        push_left_spine(&mut stack, root);

        Self {stack}
    }
}

/// Pushes `node` and all of its left descendants onto the stack
fn push_left_spine<'a, K>(stack: &mut Vec<&'a Node<K>>, node: Option<&'a Node<K>>) {
    let mut current = node;
    while let Some(current_node) = current {
        stack.push(current_node);
        current = current_node.left();
    }
}

impl<'a, K> Iterator for IterInorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        push_left_spine(&mut self.stack, node.right());

        Some(node.key())
    }
}

impl<'a, K> FusedIterator for IterInorder<'a, K> {}
