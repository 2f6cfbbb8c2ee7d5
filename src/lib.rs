pub mod tree;
pub mod error;

mod alloc;

pub use tree::AvlTree;
pub use error::AllocError;

#[macro_export(local_inner_macros)]
macro_rules! avltree {
    ($($key:expr,)+) => { avltree!($($key),+) };
    ($($key:expr),*) => {
        {
            let mut _tree = $crate::AvlTree::new();
            $(
                let _ = _tree.insert($key);
            )*
            _tree
        }
    };
}
