//! Link trait, node colors and node handles.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Every "pointer"
//! is an `Option<u32>` index into that arena; the parent link is a plain
//! back-index and never owns anything.

use std::cmp::Ordering;

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Ordering function used by search trees.
///
/// `None` means the two operands cannot be ordered against each other.
pub type Comparator<E> = fn(&E, &E) -> Option<Ordering>;

/// Natural ordering of `E`.
pub fn natural_order<E: PartialOrd>(a: &E, b: &E) -> Option<Ordering> {
    a.partial_cmp(b)
}

/// Node color of the red-black variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Handle to a node of one particular tree.
///
/// Handles are cheap to copy and stay valid until the node they name is
/// removed. Passing a handle to a different tree, or after its node was
/// removed, is reported as [`TreeError::InvalidArgument`](crate::TreeError).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) tree: u32,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeRef {
    /// Arena slot of the node.
    pub fn index(&self) -> u32 {
        self.index
    }
}
