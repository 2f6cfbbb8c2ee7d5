//! Rotations and the recursive insert/remove routines that rebalance on the way back up
//!
//! Every routine here follows the same shape: mutate a subtree, then hand the (possibly new)
//! subtree root back so that the caller can store it in the slot that owns it. That keeps the
//! height updates ordered bottom-up.

use std::mem;
use std::borrow::Borrow;
use std::cmp::Ordering;

use log::trace;

use super::node::{Node, Link, balance_factor};

/// Rotates the subtree right, making the left child the new subtree root
///
/// ```text
///       node            pivot
///      /    \          /     \
///   pivot    c   =>   a      node
///   /   \                   /    \
///  a     b                 b      c
/// ```
pub(crate) fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut pivot = node.left.take().expect("bug: right rotation requires a left child");
    node.left = pivot.right.take();
    // `node` is now below `pivot`, so its height must be fixed first
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Rotates the subtree left, making the right child the new subtree root
pub(crate) fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut pivot = node.right.take().expect("bug: left rotation requires a right child");
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Inserts `key` into the subtree owned by `slot`
///
/// The node is only created once the empty slot where it belongs has been found, by calling
/// `alloc`. If `alloc` fails, the error is returned before anything in the tree has been touched.
///
/// Returns `Ok(None)` if the key was already present (nothing changes). Otherwise returns the
/// direction the insertion took at the root of this subtree, or `Ordering::Equal` if the new node
/// *is* the root of this subtree. Since the key has been moved into its node by the time the
/// recursion unwinds, this is how a parent learns how the inserted key compares to its child's key.
pub(crate) fn insert<K, E, F>(slot: &mut Link<K>, key: K, alloc: F) -> Result<Option<Ordering>, E>
    where K: Ord,
          F: FnOnce(K) -> Result<Box<Node<K>>, E>,
{
    let node = match slot {
        Some(node) => node,
        None => {
            *slot = Some(alloc(key)?);
            return Ok(Some(Ordering::Equal));
        },
    };

    let dir = key.cmp(&node.key);
    let child_dir = match dir {
        Ordering::Less => insert(&mut node.left, key, alloc)?,
        Ordering::Greater => insert(&mut node.right, key, alloc)?,
        // Duplicate keys are ignored
        Ordering::Equal => return Ok(None),
    };
    let child_dir = match child_dir {
        Some(child_dir) => child_dir,
        None => return Ok(None),
    };

    node.update_height();

    // How the inserted key compares to the key of each child. If the key went down the other side,
    // the ordering follows from the BST property.
    let vs_left = if dir == Ordering::Less { child_dir } else { Ordering::Greater };
    let vs_right = if dir == Ordering::Greater { child_dir } else { Ordering::Less };

    if let Some(node) = slot.take() {
        *slot = Some(rebalance_after_insert(node, vs_left, vs_right));
    }

    Ok(Some(dir))
}

/// Restores the balance of a node on the insertion path
///
/// This runs at every ancestor of the new node, even after a rotation has already fired lower down.
fn rebalance_after_insert<K>(mut node: Box<Node<K>>, vs_left: Ordering, vs_right: Ordering) -> Box<Node<K>> {
    let balance = node.balance_factor();

    if balance > 1 && vs_left == Ordering::Less {
        trace!("insert: left-left case, balance factor {}", balance);
        return rotate_right(node);
    }

    if balance < -1 && vs_right == Ordering::Greater {
        trace!("insert: right-right case, balance factor {}", balance);
        return rotate_left(node);
    }

    if balance > 1 && vs_left == Ordering::Greater {
        trace!("insert: left-right case, balance factor {}", balance);
        node.left = node.left.take().map(rotate_left);
        return rotate_right(node);
    }

    if balance < -1 && vs_right == Ordering::Less {
        trace!("insert: right-left case, balance factor {}", balance);
        node.right = node.right.take().map(rotate_right);
        return rotate_left(node);
    }

    node
}

/// Removes the node with the given key from the subtree rooted at `link`
///
/// Returns the new root of the subtree along with the removed key, if it was found.
pub(crate) fn remove<K, Q>(link: Link<K>, key: &Q) -> (Link<K>, Option<K>)
    where K: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let mut node = match link {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            removed
        },

        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            removed
        },

        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.key)),

            // The sole child is already a valid AVL subtree, so it simply takes this node's place
            (Some(child), None) | (None, Some(child)) => return (Some(child), Some(node.key)),

            (Some(left), Some(right)) => {
                node.left = Some(left);
                let (right, successor) = remove_min(right);
                node.right = right;
                Some(mem::replace(&mut node.key, successor))
            },
        },
    };

    if removed.is_none() {
        // Nothing below this node changed
        return (Some(node), None);
    }

    node.update_height();
    (Some(rebalance_after_remove(node)), removed)
}

/// Removes the node with the smallest key from the given subtree, rebalancing every level on the
/// way back up
///
/// Returns the new root of the subtree and the removed key.
pub(crate) fn remove_min<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            node.update_height();
            (Some(rebalance_after_remove(node)), min)
        },

        None => {
            let right = node.right.take();
            (right, node.key)
        },
    }
}

/// Restores the balance of a node on the removal path
///
/// Unlike insertion, this may rotate at every level up to the root.
fn rebalance_after_remove<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let balance = node.balance_factor();

    if balance > 1 && balance_factor(&node.left) >= 0 {
        trace!("remove: left-left case, balance factor {}", balance);
        return rotate_right(node);
    }

    if balance > 1 && balance_factor(&node.left) < 0 {
        trace!("remove: left-right case, balance factor {}", balance);
        node.left = node.left.take().map(rotate_left);
        return rotate_right(node);
    }

    if balance < -1 && balance_factor(&node.right) <= 0 {
        trace!("remove: right-right case, balance factor {}", balance);
        return rotate_left(node);
    }

    if balance < -1 && balance_factor(&node.right) > 0 {
        trace!("remove: right-left case, balance factor {}", balance);
        node.right = node.right.take().map(rotate_right);
        return rotate_left(node);
    }

    node
}
