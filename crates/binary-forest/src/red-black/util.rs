//! Red-black fixup state machines over the linked substrate.
//!
//! Absent nodes count as black everywhere here, and so do nodes that were
//! never colored.

use std::cmp::Ordering;

use log::trace;

use crate::balance::{reduce_subtree_height, rotate};
use crate::error::{TreeError, BROKEN_INVARIANT};
use crate::linked_binary_tree::LinkedBinaryTree;
use crate::traversal::in_order;
use crate::types::Color;
use crate::util::sibling;

#[inline]
pub(crate) fn is_black<E>(tree: &LinkedBinaryTree<E>, node: Option<u32>) -> bool {
    node.map_or(true, |i| tree.color_of(i) != Some(Color::Red))
}

#[inline]
pub(crate) fn is_red<E>(tree: &LinkedBinaryTree<E>, node: Option<u32>) -> bool {
    !is_black(tree, node)
}

/// Restores the invariants after `n` was attached as a red leaf.
pub(crate) fn after_element_added<E>(
    tree: &mut LinkedBinaryTree<E>,
    mut n: u32,
) -> Result<(), TreeError> {
    loop {
        let Some(p) = tree.parent_of(n) else {
            trace!("insert fixup: {n} is root");
            tree.set_color(n, Color::Black);
            return Ok(());
        };
        if is_black(tree, Some(p)) {
            return Ok(());
        }
        // A red parent is never the root.
        let g = tree
            .parent_of(p)
            .ok_or(TreeError::InvalidState(BROKEN_INVARIANT))?;
        let u = sibling(&tree.arena, p);

        if is_red(tree, u) {
            trace!("insert fixup: red uncle of {n}, moving up to {g}");
            tree.set_color(p, Color::Black);
            if let Some(u) = u {
                tree.set_color(u, Color::Black);
            }
            tree.set_color(g, Color::Red);
            n = g;
            continue;
        }

        let zig_zig = (tree.left_of(p) == Some(n)) == (tree.left_of(g) == Some(p));
        trace!("insert fixup: black uncle of {n}, zig-zig={zig_zig}");
        tree.set_color(if zig_zig { p } else { n }, Color::Black);
        tree.set_color(g, Color::Red);
        reduce_subtree_height(tree, n)?;
        return Ok(());
    }
}

/// Prepares `n` for being spliced out. `n` must have at most one child.
pub(crate) fn before_element_removed<E>(
    tree: &mut LinkedBinaryTree<E>,
    n: u32,
) -> Result<(), TreeError> {
    if is_red(tree, Some(n)) {
        return Ok(());
    }
    match tree.left_of(n).or(tree.right_of(n)) {
        Some(child) => {
            trace!("remove fixup: black {n} hands its color to {child}");
            tree.set_color(child, Color::Black);
            Ok(())
        }
        None => remove_black_leaf(tree, n),
    }
}

/// Six-case rebalancing for a black leaf about to be removed.
///
/// Runs while `n` is still linked; the black-height deficit it repairs is
/// the one the splice will create.
fn remove_black_leaf<E>(tree: &mut LinkedBinaryTree<E>, mut n: u32) -> Result<(), TreeError> {
    loop {
        // case 1
        let Some(p) = tree.parent_of(n) else {
            trace!("remove fixup: reached root {n}");
            tree.set_color(n, Color::Black);
            return Ok(());
        };
        let n_is_left = tree.left_of(p) == Some(n);
        let s = sibling(&tree.arena, n).ok_or(TreeError::InvalidState(BROKEN_INVARIANT))?;

        // case 2
        if is_red(tree, Some(s)) {
            trace!("remove fixup: red sibling {s}");
            tree.set_color(s, Color::Black);
            tree.set_color(p, Color::Red);
            rotate(tree, s)?;
            continue;
        }

        let (near, far) = if n_is_left {
            (tree.left_of(s), tree.right_of(s))
        } else {
            (tree.right_of(s), tree.left_of(s))
        };

        if is_black(tree, near) && is_black(tree, far) {
            tree.set_color(s, Color::Red);
            if is_black(tree, Some(p)) {
                // case 3
                trace!("remove fixup: pushing double black up to {p}");
                n = p;
                continue;
            }
            // case 4
            trace!("remove fixup: red parent {p} absorbs the deficit");
            tree.set_color(p, Color::Black);
            return Ok(());
        }

        // case 5
        if is_black(tree, far) {
            let Some(near) = near else {
                return Err(TreeError::InvalidState(BROKEN_INVARIANT));
            };
            trace!("remove fixup: red near nephew {near}");
            tree.set_color(s, Color::Red);
            tree.set_color(near, Color::Black);
            rotate(tree, near)?;
            continue;
        }

        // case 6
        let Some(far) = far else {
            return Err(TreeError::InvalidState(BROKEN_INVARIANT));
        };
        trace!("remove fixup: red far nephew {far}");
        let parent_color = tree.color_of(p).unwrap_or(Color::Black);
        tree.set_color(s, parent_color);
        tree.set_color(far, Color::Black);
        tree.set_color(p, Color::Black);
        rotate(tree, s)?;
        return Ok(());
    }
}

/// Checks links, the coloring rules and the element order.
///
/// Returns a description of the first violation found.
pub fn assert_red_black_tree<E, C>(tree: &LinkedBinaryTree<E>, compare: C) -> Result<(), String>
where
    C: Fn(&E, &E) -> Option<Ordering>,
{
    let Some(root) = tree.root else {
        return if tree.size() == 0 {
            Ok(())
        } else {
            Err(format!("Empty tree reports size {}", tree.size()))
        };
    };

    if tree.parent_of(root).is_some() {
        return Err("Root has parent".to_string());
    }
    if tree.color_of(root) != Some(Color::Black) {
        return Err("Root is not black".to_string());
    }

    fn black_height<E>(tree: &LinkedBinaryTree<E>, node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(1);
        };
        let Some(color) = tree.color_of(node) else {
            return Err(format!("Node {node} has no color"));
        };

        let l = tree.left_of(node);
        let r = tree.right_of(node);
        for child in [l, r].into_iter().flatten() {
            if tree.parent_of(child) != Some(node) {
                return Err(format!("Broken parent link on {child}"));
            }
            if color == Color::Red && tree.color_of(child) == Some(Color::Red) {
                return Err(format!("Red node {node} has red child {child}"));
            }
        }

        let lh = black_height(tree, l)?;
        let rh = black_height(tree, r)?;
        if lh != rh {
            return Err(format!("Black height mismatch under {node}: {lh} vs {rh}"));
        }
        Ok(lh + usize::from(color == Color::Black))
    }

    black_height(tree, Some(root))?;

    let order = in_order(&tree.arena, Some(root));
    if order.len() != tree.size() {
        return Err(format!(
            "Tree reports size {} but holds {} nodes",
            tree.size(),
            order.len()
        ));
    }
    for pair in order.windows(2) {
        let a = tree.element_of(pair[0]);
        let b = tree.element_of(pair[1]);
        if compare(a, b) != Some(Ordering::Less) {
            return Err(format!("Node order violated between {} and {}", pair[0], pair[1]));
        }
    }

    Ok(())
}
