use avl::{AvlTree, avltree, tree::Node};

/// Returns (key, height, left key, right key) for a node
fn describe(node: &Node<i32>) -> (i32, usize, Option<i32>, Option<i32>) {
    (
        *node.key(),
        node.height(),
        node.left().map(|left| *left.key()),
        node.right().map(|right| *right.key()),
    )
}

fn root(tree: &AvlTree<i32>) -> &Node<i32> {
    tree.root().expect("tree should not be empty")
}

#[test]
fn left_rotation() {
    let tree = avltree![10, 20, 30];
    let root = root(&tree);
    assert_eq!(describe(root), (20, 2, Some(10), Some(30)));
    assert_eq!(root.left().map(describe), Some((10, 1, None, None)));
    assert_eq!(root.right().map(describe), Some((30, 1, None, None)));
}

#[test]
fn right_rotation() {
    let tree = avltree![30, 20, 10];
    let root = root(&tree);
    assert_eq!(describe(root), (20, 2, Some(10), Some(30)));
    assert_eq!(root.left().map(describe), Some((10, 1, None, None)));
    assert_eq!(root.right().map(describe), Some((30, 1, None, None)));
}

#[test]
fn left_right_rotation() {
    let tree = avltree![30, 10, 20];
    assert_eq!(describe(root(&tree)), (20, 2, Some(10), Some(30)));
}

#[test]
fn right_left_rotation() {
    let tree = avltree![10, 30, 20];
    assert_eq!(describe(root(&tree)), (20, 2, Some(10), Some(30)));
}

#[test]
fn rotation_below_the_root() {
    //     20              20
    //    /  \            /  \
    //   10   30   =>    5    30
    //   /              / \
    //  5              1   10
    // /
    // 1
    let tree = avltree![20, 10, 30, 5, 1];
    let root = root(&tree);
    assert_eq!(describe(root), (20, 3, Some(5), Some(30)));
    assert_eq!(root.left().map(describe), Some((5, 2, Some(1), Some(10))));
    assert_eq!(root.balance_factor(), 1);
}

#[test]
fn minimum_of_unrotated_tree() {
    let tree = avltree![15, 10, 20, 8, 12];
    assert_eq!(tree.minimum(), Some(&8));
    assert_eq!(tree.height(), 3);
}

#[test]
fn keys_at_level() {
    let tree = avltree![10, 20, 30];
    assert_eq!(tree.iter_level(1).copied().collect::<Vec<_>>(), &[20]);
    assert_eq!(tree.iter_level(2).copied().collect::<Vec<_>>(), &[10, 30]);
}

#[test]
fn delete_promotes_and_rebalances() {
    let mut tree = avltree![20, 10, 30, 25];
    //    20
    //   /  \
    //  10   30
    //       /
    //      25
    assert!(tree.remove(&10));
    // 20 becomes right-heavy by two and its right child leans left: right-left case
    assert_eq!(describe(root(&tree)), (25, 2, Some(20), Some(30)));

    assert!(tree.remove(&25));
    // Two children: the in-order successor takes the root's place
    assert_eq!(describe(root(&tree)), (30, 2, Some(20), None));

    assert!(tree.remove(&30));
    assert_eq!(describe(root(&tree)), (20, 1, None, None));

    assert!(tree.remove(&20));
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), 0);
}

#[test]
fn idempotent_operations() {
    let mut tree = avltree![5, 3, 8, 1, 4, 7, 9];
    let keys: Vec<_> = tree.iter_inorder().copied().collect();

    assert!(!tree.insert(4));
    assert!(!tree.remove(&6));
    assert_eq!(tree.iter_inorder().copied().collect::<Vec<_>>(), keys);
    assert_eq!(tree.len(), 7);
}

#[test]
fn fallible_insert() {
    let mut tree = AvlTree::new();
    for key in 0..100 {
        assert_eq!(tree.try_insert(key), Ok(true));
    }
    assert_eq!(tree.try_insert(42), Ok(false));
    assert_eq!(tree.len(), 100);
    assert_eq!(tree.height(), 7);
}
