use crate::types::{Color, Node};

/// Arena slot holding one tree node.
#[derive(Clone, Debug)]
pub struct TreeNode<E> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    // `None` once the node has been removed; the slot then waits on the
    // free list and the element has been handed back to the caller.
    pub element: Option<E>,
    /// Only set on red-black nodes.
    pub color: Option<Color>,
    pub generation: u32,
}

impl<E> TreeNode<E> {
    pub fn new(element: E) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            element: Some(element),
            color: None,
            generation: 0,
        }
    }

    /// Puts a fresh element into a recycled slot, keeping its generation.
    pub(crate) fn reuse(&mut self, element: E) {
        self.p = None;
        self.l = None;
        self.r = None;
        self.element = Some(element);
        self.color = None;
    }

    pub fn is_live(&self) -> bool {
        self.element.is_some()
    }
}

impl<E> Node for TreeNode<E> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
