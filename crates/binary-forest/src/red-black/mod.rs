//! Red-black tree and its fixup routines.

#[path = "RedBlackTree.rs"]
mod red_black_tree;
pub mod util;

pub use red_black_tree::RedBlackTree;
pub use util::assert_red_black_tree;
