use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

use log::trace;

use crate::error::{
    TreeError, NODE_REMOVED, ROOT_EXISTS, TWO_CHILDREN_ADD, TWO_CHILDREN_REMOVE, WRONG_NODE,
};
use crate::tree_node::TreeNode;
use crate::types::{Color, NodeRef};
use crate::util::{children_number, get_l, get_p, get_r, set_l, set_p, set_r, swap};

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(1);

/// Plain linked binary tree, the substrate of every other tree here.
///
/// Nodes are stored in an arena owned by the tree and addressed from the
/// outside through [`NodeRef`] handles. Released slots are recycled; the
/// per-slot generation makes handles to removed nodes detectable.
///
/// Read access (navigation, traversals) comes from the
/// [`BinaryTree`](crate::BinaryTree) trait.
pub struct LinkedBinaryTree<E> {
    id: u32,
    pub(crate) arena: Vec<TreeNode<E>>,
    free: Vec<u32>,
    pub(crate) root: Option<u32>,
    len: usize,
}

impl<E> Default for LinkedBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> LinkedBinaryTree<E> {
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, AtomicOrdering::Relaxed),
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node. Handles issued before stay invalid forever.
    pub fn clear(&mut self) {
        for idx in 0..self.arena.len() as u32 {
            if self.arena[idx as usize].is_live() {
                self.release(idx);
            }
        }
        self.root = None;
        self.len = 0;
    }

    /// Creates the root of an empty tree.
    pub fn add_root(&mut self, element: E) -> Result<NodeRef, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::InvalidState(ROOT_EXISTS));
        }
        let node = self.alloc(element);
        self.set_root(Some(node));
        self.len = 1;
        Ok(self.handle(node))
    }

    /// Attaches `element` on the first free side of `parent`, left first.
    pub fn add(&mut self, parent: NodeRef, element: E) -> Result<NodeRef, TreeError> {
        let p = self.validate(parent)?;
        if children_number(&self.arena, p) == 2 {
            return Err(TreeError::InvalidArgument(TWO_CHILDREN_ADD));
        }
        let node = if get_l(&self.arena, p).is_none() {
            self.attach_left(p, element)
        } else {
            self.attach_right(p, element)
        };
        Ok(self.handle(node))
    }

    /// Inserts a new left child of `parent`. An existing left subtree is
    /// pushed down to become the new node's left subtree.
    pub fn add_left(&mut self, parent: NodeRef, element: E) -> Result<NodeRef, TreeError> {
        let p = self.validate(parent)?;
        let node = self.attach_left(p, element);
        Ok(self.handle(node))
    }

    /// Mirror of [`add_left`](Self::add_left).
    pub fn add_right(&mut self, parent: NodeRef, element: E) -> Result<NodeRef, TreeError> {
        let p = self.validate(parent)?;
        let node = self.attach_right(p, element);
        Ok(self.handle(node))
    }

    /// Replaces the element of `node`, returning the previous one.
    pub fn set(&mut self, node: NodeRef, element: E) -> Result<E, TreeError> {
        let idx = self.validate(node)?;
        self.arena[idx as usize]
            .element
            .replace(element)
            .ok_or(TreeError::InvalidArgument(NODE_REMOVED))
    }

    /// Removes a node with at most one child, splicing that child into the
    /// freed position.
    pub fn remove(&mut self, node: NodeRef) -> Result<E, TreeError> {
        let idx = self.validate(node)?;
        if children_number(&self.arena, idx) == 2 {
            return Err(TreeError::InvalidArgument(TWO_CHILDREN_REMOVE));
        }
        self.unlink(idx);
        self.release(idx).ok_or(TreeError::InvalidArgument(NODE_REMOVED))
    }

    // ── handles ───────────────────────────────────────────────────────────

    pub(crate) fn handle(&self, idx: u32) -> NodeRef {
        NodeRef {
            tree: self.id,
            index: idx,
            generation: self.arena[idx as usize].generation,
        }
    }

    pub(crate) fn validate(&self, node: NodeRef) -> Result<u32, TreeError> {
        if node.tree != self.id {
            return Err(TreeError::InvalidArgument(WRONG_NODE));
        }
        match self.arena.get(node.index as usize) {
            Some(slot) if slot.generation == node.generation && slot.is_live() => Ok(node.index),
            Some(_) => Err(TreeError::InvalidArgument(NODE_REMOVED)),
            None => Err(TreeError::InvalidArgument(WRONG_NODE)),
        }
    }

    // ── index-level access ────────────────────────────────────────────────

    pub(crate) fn parent_of(&self, idx: u32) -> Option<u32> {
        get_p(&self.arena, idx)
    }

    pub(crate) fn left_of(&self, idx: u32) -> Option<u32> {
        get_l(&self.arena, idx)
    }

    pub(crate) fn right_of(&self, idx: u32) -> Option<u32> {
        get_r(&self.arena, idx)
    }

    // `idx` must be a live node: validated or reached through links.
    pub(crate) fn element_of(&self, idx: u32) -> &E {
        self.arena[idx as usize]
            .element
            .as_ref()
            .expect("linked node holds an element")
    }

    pub(crate) fn color_of(&self, idx: u32) -> Option<Color> {
        self.arena[idx as usize].color
    }

    pub(crate) fn set_color(&mut self, idx: u32, color: Color) {
        self.arena[idx as usize].color = Some(color);
    }

    // ── raw relinking ─────────────────────────────────────────────────────
    //
    // These touch exactly one link and the child's back-reference. They do
    // not check anything, so balancing code can pass through shapes that
    // are briefly inconsistent in the middle of a rotation.

    pub(crate) fn set_left(&mut self, node: u32, child: Option<u32>) -> Option<u32> {
        let old = get_l(&self.arena, node);
        set_l(&mut self.arena, node, child);
        if let Some(child) = child {
            set_p(&mut self.arena, child, Some(node));
        }
        old
    }

    pub(crate) fn set_right(&mut self, node: u32, child: Option<u32>) -> Option<u32> {
        let old = get_r(&self.arena, node);
        set_r(&mut self.arena, node, child);
        if let Some(child) = child {
            set_p(&mut self.arena, child, Some(node));
        }
        old
    }

    pub(crate) fn set_root(&mut self, node: Option<u32>) -> Option<u32> {
        if let Some(node) = node {
            set_p(&mut self.arena, node, None);
        }
        std::mem::replace(&mut self.root, node)
    }

    /// Exchanges the positions of two nodes of this tree.
    pub(crate) fn swap_positions(&mut self, x: u32, y: u32) {
        if let Some(root) = self.root {
            self.root = Some(swap(&mut self.arena, root, x, y));
        }
    }

    // ── structural insert / remove ────────────────────────────────────────

    pub(crate) fn attach_left(&mut self, parent: u32, element: E) -> u32 {
        let node = self.alloc(element);
        if let Some(old) = self.set_left(parent, Some(node)) {
            self.set_left(node, Some(old));
        }
        self.len += 1;
        node
    }

    pub(crate) fn attach_right(&mut self, parent: u32, element: E) -> u32 {
        let node = self.alloc(element);
        if let Some(old) = self.set_right(parent, Some(node)) {
            self.set_right(node, Some(old));
        }
        self.len += 1;
        node
    }

    /// Splices out a node with at most one child. The node keeps its slot
    /// (and element) until [`release`](Self::release).
    pub(crate) fn unlink(&mut self, idx: u32) {
        let child = get_l(&self.arena, idx).or(get_r(&self.arena, idx));
        match get_p(&self.arena, idx) {
            None => {
                self.set_root(child);
            }
            Some(p) => {
                if get_l(&self.arena, p) == Some(idx) {
                    self.set_left(p, child);
                } else {
                    self.set_right(p, child);
                }
            }
        }
        set_p(&mut self.arena, idx, None);
        set_l(&mut self.arena, idx, None);
        set_r(&mut self.arena, idx, None);
        self.len -= 1;
        trace!("unlinked node {idx}, {} left", self.len);
    }

    fn alloc(&mut self, element: E) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize].reuse(element);
                idx
            }
            None => {
                self.arena.push(TreeNode::new(element));
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Hands the element back and recycles the slot.
    pub(crate) fn release(&mut self, idx: u32) -> Option<E> {
        let slot = &mut self.arena[idx as usize];
        let element = slot.element.take();
        slot.p = None;
        slot.l = None;
        slot.r = None;
        slot.color = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(idx);
        element
    }
}
