use std::cmp::Ordering;

use log::debug;

use crate::binary_search_tree::BinarySearchTree;
use crate::error::TreeError;
use crate::linked_binary_tree::LinkedBinaryTree;
use crate::tree::BinaryTree;
use crate::types::{Color, Comparator, NodeRef};
use crate::util::children_number;

use super::util::{after_element_added, assert_red_black_tree, before_element_removed, is_black};

/// Self-balancing binary search tree.
///
/// Keeps the five red-black rules after every public call, which bounds
/// the height by `2 * log2(n + 1)`. Rotations are internal; the shape can
/// only be changed through [`add`](Self::add) and the removal methods.
pub struct RedBlackTree<E, C = Comparator<E>>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    bst: BinarySearchTree<E, C>,
}

impl<E> RedBlackTree<E, Comparator<E>>
where
    E: PartialOrd,
{
    pub fn new() -> Self {
        Self {
            bst: BinarySearchTree::new(),
        }
    }
}

impl<E> Default for RedBlackTree<E, Comparator<E>>
where
    E: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> RedBlackTree<E, C>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            bst: BinarySearchTree::with_comparator(comparator),
        }
    }

    pub fn compare(&self, a: &E, b: &E) -> Result<Ordering, TreeError> {
        self.bst.compare(a, b)
    }

    /// Adds `value`, or returns the node already holding an equal element.
    pub fn add(&mut self, value: E) -> Result<NodeRef, TreeError> {
        let (idx, inserted) = self.bst.insert_index(value)?;
        if inserted {
            let tree = &mut self.bst.tree;
            tree.set_color(idx, Color::Red);
            after_element_added(tree, idx)?;
        }
        Ok(self.bst.tree.handle(idx))
    }

    /// Removes the element equal to `value`, if present.
    pub fn remove(&mut self, value: &E) -> Result<Option<E>, TreeError> {
        match self.bst.search_index(self.bst.tree.root, value)? {
            Some(idx) => self.remove_index(idx).map(Some),
            None => Ok(None),
        }
    }

    /// Removes `node` and returns its element.
    ///
    /// Handles of every other node stay valid; a node with two children
    /// has its in-order successor take over its position and color.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<E, TreeError> {
        let idx = self.bst.tree.validate(node)?;
        self.remove_index(idx)
    }

    fn remove_index(&mut self, idx: u32) -> Result<E, TreeError> {
        if children_number(&self.bst.tree.arena, idx) == 2 {
            let right = self.bst.tree.right_of(idx).unwrap_or(idx);
            let successor = self.bst.leftmost(right);
            let tree = &mut self.bst.tree;
            let (a, b) = (tree.color_of(idx), tree.color_of(successor));
            tree.swap_positions(idx, successor);
            tree.arena[idx as usize].color = b;
            tree.arena[successor as usize].color = a;
            debug!("node {idx} traded places with successor {successor}");
        }
        // `idx` has at most one child from here on.
        before_element_removed(&mut self.bst.tree, idx)?;
        self.bst.remove_index(idx)
    }

    pub fn search(&self, value: &E) -> Result<Option<&E>, TreeError> {
        self.bst.search(value)
    }

    pub fn contains(&self, value: &E) -> Result<bool, TreeError> {
        self.bst.contains(value)
    }

    pub fn tree_search(
        &self,
        from: Option<NodeRef>,
        value: &E,
    ) -> Result<Option<NodeRef>, TreeError> {
        self.bst.tree_search(from, value)
    }

    pub fn color(&self, node: NodeRef) -> Result<Color, TreeError> {
        let idx = self.bst.tree.validate(node)?;
        Ok(if is_black(&self.bst.tree, Some(idx)) {
            Color::Black
        } else {
            Color::Red
        })
    }

    pub fn is_red(&self, node: NodeRef) -> Result<bool, TreeError> {
        Ok(self.color(node)? == Color::Red)
    }

    pub fn is_black(&self, node: NodeRef) -> Result<bool, TreeError> {
        Ok(self.color(node)? == Color::Black)
    }

    pub fn clear(&mut self) {
        self.bst.clear();
    }

    /// Verifies parent links, the coloring rules, the black height, the
    /// element order and the size counter.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_red_black_tree(&self.bst.tree, self.bst.comparator())
    }
}

impl<E, C> BinaryTree<E> for RedBlackTree<E, C>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    fn as_tree(&self) -> &LinkedBinaryTree<E> {
        &self.bst.tree
    }
}
