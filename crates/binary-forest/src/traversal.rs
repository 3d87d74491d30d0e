//! Tree walks over the arena.
//!
//! The index-level functions return arena indices; the
//! [`BinaryTree`](crate::BinaryTree) trait turns them into handles.

use std::collections::VecDeque;

use crate::linked_binary_tree::LinkedBinaryTree;
use crate::types::Node;
use crate::util::{first, get_l, get_r, next};

/// Node, then left subtree, then right subtree.
pub fn pre_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        out.push(i);
        if let Some(r) = get_r(arena, i) {
            stack.push(r);
        }
        if let Some(l) = get_l(arena, i) {
            stack.push(l);
        }
    }
    out
}

/// Left subtree, node, right subtree. For search trees this is sorted order.
pub fn in_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(i);
        curr = next(arena, i);
    }
    out
}

/// Left subtree, right subtree, then the node.
pub fn post_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        out.push(i);
        if let Some(l) = get_l(arena, i) {
            stack.push(l);
        }
        if let Some(r) = get_r(arena, i) {
            stack.push(r);
        }
    }
    out.reverse();
    out
}

/// Level by level, left to right.
pub fn breadth_first<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while let Some(i) = queue.pop_front() {
        out.push(i);
        queue.extend(get_l(arena, i));
        queue.extend(get_r(arena, i));
    }
    out
}

/// Lazy breadth-first iterator over the elements of a tree.
pub struct Elements<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    queue: VecDeque<u32>,
}

impl<'a, E> Elements<'a, E> {
    pub(crate) fn new(tree: &'a LinkedBinaryTree<E>) -> Self {
        Self {
            tree,
            queue: tree.root.into_iter().collect(),
        }
    }
}

impl<'a, E> Iterator for Elements<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.queue.pop_front()?;
        self.queue.extend(self.tree.left_of(i));
        self.queue.extend(self.tree.right_of(i));
        Some(self.tree.element_of(i))
    }
}
