//! Arena-backed binary trees.
//!
//! Three layers, each built on the one below:
//!
//! - [`LinkedBinaryTree`]: a plain linked binary tree with free-form
//!   structural edits.
//! - [`BinarySearchTree`]: ordered insert, search and remove over a
//!   comparator, without balancing.
//! - [`RedBlackTree`]: a search tree that recolors and rotates after every
//!   change to keep its height logarithmic.
//!
//! Nodes are stored in a `Vec` owned by the tree and linked by `Option<u32>`
//! indices. Callers hold [`NodeRef`] handles, which the tree checks on every
//! call, so a handle from another tree or to a removed node is an error
//! instead of undefined behavior.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`](types::Node) link trait, [`Color`], [`NodeRef`], comparators |
//! [`tree_node`] | Arena slot type |
//! [`util`] | Index-level navigation and node swapping |
//! [`traversal`] | Pre-, in-, post-order and breadth-first walks |
//! [`tree`] | [`BinaryTree`] read-side trait |
//! [`linked_binary_tree`] | [`LinkedBinaryTree`] |
//! [`binary_search_tree`] | [`BinarySearchTree`] |
//! [`balance`] | Rotations and [`BalanceAbleTree`] |
//! [`red_black`] | [`RedBlackTree`] and its fixups |
//! [`print`](mod@print) | Debug dump |

pub mod balance;
#[path = "BinarySearchTree.rs"]
pub mod binary_search_tree;
pub mod error;
#[path = "LinkedBinaryTree.rs"]
pub mod linked_binary_tree;
pub mod print;
#[path = "red-black/mod.rs"]
pub mod red_black;
pub mod traversal;
pub mod tree;
#[path = "TreeNode.rs"]
pub mod tree_node;
pub mod types;
pub mod util;

pub use balance::BalanceAbleTree;
pub use binary_search_tree::BinarySearchTree;
pub use error::TreeError;
pub use linked_binary_tree::LinkedBinaryTree;
pub use print::print;
pub use red_black::RedBlackTree;
pub use traversal::Elements;
pub use tree::BinaryTree;
pub use types::{natural_order, Color, Comparator, NodeRef};
