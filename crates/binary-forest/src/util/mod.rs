//! Index-level link helpers shared by all tree layers.
//!
//! Everything here works on a raw arena slice and `u32` indices and does no
//! validation; the tree types check handles before calling in.

pub mod swap;

use crate::types::Node;

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// The other child of `node`'s parent. `None` for the root.
pub fn sibling<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    let p = get_p(arena, node)?;
    if get_l(arena, p) == Some(node) {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    }
}

/// Number of present children, 0 to 2.
pub fn children_number<N: Node>(arena: &[N], node: u32) -> usize {
    get_l(arena, node).is_some() as usize + get_r(arena, node).is_some() as usize
}

/// Number of levels under `root`; 0 for an empty subtree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut level: Vec<u32> = root.into_iter().collect();
    let mut height = 0;
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|&i| [get_l(arena, i), get_r(arena, i)])
            .flatten()
            .collect();
    }
    height
}
