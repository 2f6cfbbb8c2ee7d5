use std::iter::FusedIterator;

use super::Node;

/// An iterator over the keys of the nodes at a single depth of a tree, from left to right
///
/// Depths are 1-based: the root is at level 1.
pub struct IterLevel<'a, K> {
    /// Nodes still to visit, along with their depth
    stack: Vec<(&'a Node<K>, usize)>,
    level: usize,
}

impl<'a, K> IterLevel<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>, level: usize) -> Self {
        let stack = match root {
            Some(root) if level >= 1 => vec![(root, 1)],
            _ => Vec::new(),
        };

        Self {stack, level}
    }
}

impl<'a, K> Iterator for IterLevel<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            if depth == self.level {
                return Some(node.key());
            }

            // Never descend below the requested level
            self.stack.extend(node.right().map(|right| (right, depth + 1)));
            self.stack.extend(node.left().map(|left| (left, depth + 1)));
        }

        None
    }
}

impl<'a, K> FusedIterator for IterLevel<'a, K> {}

/// An iterator over every level of a tree, from the root level down
///
/// Each item holds the keys of one level from left to right.
pub struct IterLevels<'a, K> {
    current: Vec<&'a Node<K>>,
}

impl<'a, K> IterLevels<'a, K> {
    pub(super) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            current: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for IterLevels<'a, K> {
    type Item = Vec<&'a K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() {
            return None;
        }

        let keys = self.current.iter().map(|&node| node.key()).collect();
        self.current = self.current.iter()
            .flat_map(|&node| node.left().into_iter().chain(node.right()))
            .collect();

        Some(keys)
    }
}

impl<'a, K> FusedIterator for IterLevels<'a, K> {}
