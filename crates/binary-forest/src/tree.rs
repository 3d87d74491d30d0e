//! Read-side contract shared by every tree in the crate.

use crate::error::TreeError;
use crate::linked_binary_tree::LinkedBinaryTree;
use crate::traversal::{self, Elements};
use crate::tree_node::TreeNode;
use crate::types::NodeRef;
use crate::util;

/// Navigation and traversal over a linked binary tree.
///
/// Implementors only expose their substrate; every method is provided.
/// Methods taking a [`NodeRef`] fail with
/// [`TreeError::InvalidArgument`] for handles of another tree or of a
/// removed node.
pub trait BinaryTree<E> {
    fn as_tree(&self) -> &LinkedBinaryTree<E>;

    fn root(&self) -> Option<NodeRef> {
        let tree = self.as_tree();
        tree.root.map(|i| tree.handle(i))
    }

    fn parent(&self, node: NodeRef) -> Result<Option<NodeRef>, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok(tree.parent_of(idx).map(|i| tree.handle(i)))
    }

    fn left(&self, node: NodeRef) -> Result<Option<NodeRef>, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok(tree.left_of(idx).map(|i| tree.handle(i)))
    }

    fn right(&self, node: NodeRef) -> Result<Option<NodeRef>, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok(tree.right_of(idx).map(|i| tree.handle(i)))
    }

    /// The other child of `node`'s parent; `None` for the root.
    fn sibling(&self, node: NodeRef) -> Result<Option<NodeRef>, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok(util::sibling(&tree.arena, idx).map(|i| tree.handle(i)))
    }

    /// Present children, left first.
    fn children(&self, node: NodeRef) -> Result<Vec<NodeRef>, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok([tree.left_of(idx), tree.right_of(idx)]
            .into_iter()
            .flatten()
            .map(|i| tree.handle(i))
            .collect())
    }

    fn children_number(&self, node: NodeRef) -> Result<usize, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok(util::children_number(&tree.arena, idx))
    }

    fn is_root(&self, node: NodeRef) -> Result<bool, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok(tree.root == Some(idx))
    }

    fn element(&self, node: NodeRef) -> Result<&E, TreeError> {
        let tree = self.as_tree();
        let idx = tree.validate(node)?;
        Ok(tree.element_of(idx))
    }

    fn size(&self) -> usize {
        self.as_tree().size()
    }

    fn is_empty(&self) -> bool {
        self.as_tree().is_empty()
    }

    /// Number of levels; 0 for an empty tree.
    fn height(&self) -> usize {
        let tree = self.as_tree();
        util::height(&tree.arena, tree.root)
    }

    fn pre_order(&self) -> Vec<NodeRef> {
        handles(self.as_tree(), traversal::pre_order)
    }

    fn in_order(&self) -> Vec<NodeRef> {
        handles(self.as_tree(), traversal::in_order)
    }

    fn post_order(&self) -> Vec<NodeRef> {
        handles(self.as_tree(), traversal::post_order)
    }

    fn breadth_first(&self) -> Vec<NodeRef> {
        handles(self.as_tree(), traversal::breadth_first)
    }

    /// All nodes, breadth-first.
    fn nodes(&self) -> Vec<NodeRef> {
        self.breadth_first()
    }

    /// Elements in breadth-first order.
    fn iter(&self) -> Elements<'_, E> {
        Elements::new(self.as_tree())
    }
}

impl<E> BinaryTree<E> for LinkedBinaryTree<E> {
    fn as_tree(&self) -> &LinkedBinaryTree<E> {
        self
    }
}

fn handles<E>(
    tree: &LinkedBinaryTree<E>,
    walk: fn(&[TreeNode<E>], Option<u32>) -> Vec<u32>,
) -> Vec<NodeRef> {
    walk(&tree.arena, tree.root)
        .into_iter()
        .map(|i| tree.handle(i))
        .collect()
}
