use std::cmp::Ordering;

use log::debug;

use crate::balance::BalanceAbleTree;
use crate::error::{TreeError, CANNOT_COMPARE, NODE_REMOVED};
use crate::linked_binary_tree::LinkedBinaryTree;
use crate::tree::BinaryTree;
use crate::types::{natural_order, Comparator, NodeRef};
use crate::util::{children_number, first};

/// Unbalanced binary search tree.
///
/// Elements are kept in comparator order; duplicates are not stored. New
/// elements always become leaves, so the shape depends on insertion order.
pub struct BinarySearchTree<E, C = Comparator<E>>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    pub(crate) tree: LinkedBinaryTree<E>,
    comparator: C,
}

impl<E> BinarySearchTree<E, Comparator<E>>
where
    E: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<E>)
    }
}

impl<E> Default for BinarySearchTree<E, Comparator<E>>
where
    E: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> BinarySearchTree<E, C>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: LinkedBinaryTree::new(),
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Orders two elements; fails with [`TreeError::InvalidState`] when the
    /// comparator cannot order them.
    pub fn compare(&self, a: &E, b: &E) -> Result<Ordering, TreeError> {
        (self.comparator)(a, b).ok_or(TreeError::InvalidState(CANNOT_COMPARE))
    }

    pub(crate) fn search_index(
        &self,
        from: Option<u32>,
        value: &E,
    ) -> Result<Option<u32>, TreeError> {
        let mut curr = from;
        while let Some(i) = curr {
            curr = match self.compare(self.tree.element_of(i), value)? {
                Ordering::Equal => return Ok(Some(i)),
                Ordering::Less => self.tree.right_of(i),
                Ordering::Greater => self.tree.left_of(i),
            };
        }
        Ok(None)
    }

    /// Looks for `value` in the subtree under `from`.
    ///
    /// `None` is an empty subtree, not the root; pass [`root`](BinaryTree::root)
    /// to search the whole tree.
    pub fn tree_search(
        &self,
        from: Option<NodeRef>,
        value: &E,
    ) -> Result<Option<NodeRef>, TreeError> {
        let from = from.map(|n| self.tree.validate(n)).transpose()?;
        Ok(self
            .search_index(from, value)?
            .map(|i| self.tree.handle(i)))
    }

    /// The stored element equal to `value`.
    pub fn search(&self, value: &E) -> Result<Option<&E>, TreeError> {
        Ok(self
            .search_index(self.tree.root, value)?
            .map(|i| self.tree.element_of(i)))
    }

    pub fn contains(&self, value: &E) -> Result<bool, TreeError> {
        Ok(self.search_index(self.tree.root, value)?.is_some())
    }

    /// Inserts `value` as a new leaf. Returns its index and whether it was
    /// inserted; an equal element already present is returned unchanged.
    ///
    /// All comparisons run before the tree is touched.
    pub(crate) fn insert_index(&mut self, value: E) -> Result<(u32, bool), TreeError> {
        let Some(mut curr) = self.tree.root else {
            let root = self.tree.add_root(value)?;
            return Ok((root.index, true));
        };
        loop {
            let ord = self.compare(self.tree.element_of(curr), &value)?;
            let next = match ord {
                Ordering::Equal => return Ok((curr, false)),
                Ordering::Greater => self.tree.left_of(curr),
                Ordering::Less => self.tree.right_of(curr),
            };
            match next {
                Some(next) => curr = next,
                None => {
                    let node = if ord == Ordering::Greater {
                        self.tree.attach_left(curr, value)
                    } else {
                        self.tree.attach_right(curr, value)
                    };
                    debug!("inserted leaf {node} under {curr}");
                    return Ok((node, true));
                }
            }
        }
    }

    /// Adds `value`, or returns the node already holding an equal element.
    pub fn add(&mut self, value: E) -> Result<NodeRef, TreeError> {
        let (idx, _) = self.insert_index(value)?;
        Ok(self.tree.handle(idx))
    }

    pub(crate) fn leftmost(&self, idx: u32) -> u32 {
        first(&self.tree.arena, Some(idx)).unwrap_or(idx)
    }

    /// Removes any node. A node with two children is replaced by its
    /// in-order successor, which moves into its position.
    pub(crate) fn remove_index(&mut self, idx: u32) -> Result<E, TreeError> {
        if children_number(&self.tree.arena, idx) == 2 {
            let right_child = self.tree.right_of(idx).unwrap_or(idx);
            let successor = self.leftmost(right_child);
            self.tree.unlink(successor);

            let left = self.tree.left_of(idx);
            let right = self.tree.right_of(idx);
            self.tree.set_left(successor, left);
            self.tree.set_right(successor, right);
            match self.tree.parent_of(idx) {
                None => {
                    self.tree.set_root(Some(successor));
                }
                Some(p) => {
                    if self.tree.left_of(p) == Some(idx) {
                        self.tree.set_left(p, Some(successor));
                    } else {
                        self.tree.set_right(p, Some(successor));
                    }
                }
            }
            // `unlink` already counted one node out; `idx` is detached now
            // and its stale links are cleared by `release`.
            debug!("node {idx} replaced by successor {successor}");
        } else {
            self.tree.unlink(idx);
        }
        self.tree
            .release(idx)
            .ok_or(TreeError::InvalidArgument(NODE_REMOVED))
    }

    /// Removes `node` from the tree and returns its element.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<E, TreeError> {
        let idx = self.tree.validate(node)?;
        self.remove_index(idx)
    }

    /// Removes the element equal to `value`, if present.
    pub fn remove(&mut self, value: &E) -> Result<Option<E>, TreeError> {
        match self.search_index(self.tree.root, value)? {
            Some(idx) => self.remove_index(idx).map(Some),
            None => Ok(None),
        }
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    // Shape-building passthroughs. They follow the substrate rules and do
    // not check the search order.

    pub fn add_root(&mut self, value: E) -> Result<NodeRef, TreeError> {
        self.tree.add_root(value)
    }

    pub fn add_left(&mut self, parent: NodeRef, value: E) -> Result<NodeRef, TreeError> {
        self.tree.add_left(parent, value)
    }

    pub fn add_right(&mut self, parent: NodeRef, value: E) -> Result<NodeRef, TreeError> {
        self.tree.add_right(parent, value)
    }

    pub fn set(&mut self, node: NodeRef, value: E) -> Result<E, TreeError> {
        self.tree.set(node, value)
    }
}

impl<E, C> BinaryTree<E> for BinarySearchTree<E, C>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    fn as_tree(&self) -> &LinkedBinaryTree<E> {
        &self.tree
    }
}

impl<E, C> BalanceAbleTree<E> for BinarySearchTree<E, C>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    fn as_tree_mut(&mut self) -> &mut LinkedBinaryTree<E> {
        &mut self.tree
    }
}
