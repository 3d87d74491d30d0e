//! Rotations shared by self-balancing binary trees.
//!
//! All of these keep the in-order sequence of the tree intact and touch no
//! colors or other balance data; callers do their own bookkeeping around
//! them.

use log::trace;

use crate::error::{TreeError, NO_PARENT};
use crate::linked_binary_tree::LinkedBinaryTree;
use crate::tree::BinaryTree;
use crate::types::NodeRef;

/// Puts `child` in `parent`'s place and hangs `parent` below it.
///
/// With `make_left_child` (child was the right child of parent):
///
/// ```text
///     p              c
///    / \            / \
///   a   c    →     p   y
///      / \        / \
///     x   y      a   x
/// ```
///
/// The mirrored shape otherwise. The grandparent's slot (or the root slot)
/// is re-pointed at `child`.
pub(crate) fn relink<E>(
    tree: &mut LinkedBinaryTree<E>,
    parent: u32,
    child: u32,
    make_left_child: bool,
) {
    match tree.parent_of(parent) {
        None => {
            tree.set_root(Some(child));
        }
        Some(g) => {
            if tree.left_of(g) == Some(parent) {
                tree.set_left(g, Some(child));
            } else {
                tree.set_right(g, Some(child));
            }
        }
    }
    if make_left_child {
        let inner = tree.left_of(child);
        tree.set_right(parent, inner);
        tree.set_left(child, Some(parent));
    } else {
        let inner = tree.right_of(child);
        tree.set_left(parent, inner);
        tree.set_right(child, Some(parent));
    }
}

fn no_null_parent<E>(tree: &LinkedBinaryTree<E>, node: u32) -> Result<u32, TreeError> {
    tree.parent_of(node).ok_or(TreeError::InvalidArgument(NO_PARENT))
}

/// Single rotation of `node` above its parent.
pub(crate) fn rotate<E>(tree: &mut LinkedBinaryTree<E>, node: u32) -> Result<(), TreeError> {
    let parent = no_null_parent(tree, node)?;
    let make_left_child = tree.right_of(parent) == Some(node);
    trace!("rotate {node} above {parent}");
    relink(tree, parent, node, make_left_child);
    Ok(())
}

/// Lowers the subtree rooted at `node`'s grandparent by one level.
///
/// Zig-zig (node and parent on the same side) rotates the parent over the
/// grandparent; zig-zag rotates `node` twice. Needs three generations and
/// checks that before changing anything. Returns the new subtree top.
pub(crate) fn reduce_subtree_height<E>(
    tree: &mut LinkedBinaryTree<E>,
    node: u32,
) -> Result<u32, TreeError> {
    let parent = no_null_parent(tree, node)?;
    let grand_parent = no_null_parent(tree, parent)?;
    let node_is_left = tree.left_of(parent) == Some(node);
    let parent_is_left = tree.left_of(grand_parent) == Some(parent);
    if node_is_left == parent_is_left {
        rotate(tree, parent)?;
        Ok(parent)
    } else {
        rotate(tree, node)?;
        rotate(tree, node)?;
        Ok(node)
    }
}

/// Public rotation surface for trees whose shape the caller may restructure
/// freely.
pub trait BalanceAbleTree<E>: BinaryTree<E> {
    fn as_tree_mut(&mut self) -> &mut LinkedBinaryTree<E>;

    /// Rotates `node` above its parent.
    ///
    /// Fails with [`TreeError::InvalidArgument`] for the root.
    fn rotate(&mut self, node: NodeRef) -> Result<(), TreeError> {
        let idx = self.as_tree().validate(node)?;
        rotate(self.as_tree_mut(), idx)
    }

    /// Lowers the subtree above `node` by one level with one rotation
    /// (zig-zig) or two (zig-zag). Fails with
    /// [`TreeError::InvalidArgument`] unless `node` has a grandparent.
    /// Returns the handle of the new subtree top.
    fn reduce_subtree_height(&mut self, node: NodeRef) -> Result<NodeRef, TreeError> {
        let idx = self.as_tree().validate(node)?;
        let top = reduce_subtree_height(self.as_tree_mut(), idx)?;
        Ok(self.as_tree().handle(top))
    }
}
