use crate::types::Node;

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Exchanges the tree positions of `x` and `y`.
///
/// The nodes keep their identity (and everything stored on them); only the
/// links move. Works for adjacent nodes and for siblings. Returns the new
/// root.
pub fn swap<N: Node>(arena: &mut [N], mut root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let xp = get_p(arena, x);
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);

    let yp = get_p(arena, y);
    let yl = get_l(arena, y);
    let yr = get_r(arena, y);

    // Sides are read up front: with siblings, the first slot update would
    // otherwise change what the second one sees.
    let x_is_left = xp.map(|p| get_l(arena, p) == Some(x));
    let y_is_left = yp.map(|p| get_l(arena, p) == Some(y));

    let swapped = |i: Option<u32>| match i {
        Some(i) if i == x => Some(y),
        Some(i) if i == y => Some(x),
        other => other,
    };

    set_p(arena, x, swapped(yp));
    set_l(arena, x, swapped(yl));
    set_r(arena, x, swapped(yr));
    set_p(arena, y, swapped(xp));
    set_l(arena, y, swapped(xl));
    set_r(arena, y, swapped(xr));

    for (node, children) in [(x, [yl, yr]), (y, [xl, xr])] {
        for child in children.into_iter().flatten() {
            if child != x && child != y {
                set_p(arena, child, Some(node));
            }
        }
    }

    match (xp, x_is_left) {
        (Some(p), Some(left)) if p != y => {
            if left {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
        }
        (None, _) => root = y,
        _ => {}
    }

    match (yp, y_is_left) {
        (Some(p), Some(left)) if p != x => {
            if left {
                set_l(arena, p, Some(x));
            } else {
                set_r(arena, p, Some(x));
            }
        }
        (None, _) => root = x,
        _ => {}
    }

    root
}
