//! Error type shared by every tree layer.

use thiserror::Error;

pub const WRONG_NODE: &str = "wrong node";
pub const NODE_REMOVED: &str = "node was removed";
pub const TWO_CHILDREN_ADD: &str = "node already has two children";
pub const TWO_CHILDREN_REMOVE: &str = "cannot delete node with two children";
pub const NO_PARENT: &str = "node's parent can't be null";
pub const ROOT_EXISTS: &str = "root already exists";
pub const CANNOT_COMPARE: &str = "cannot compare";
pub const BROKEN_INVARIANT: &str = "red-black invariants are broken";

/// Contract violations reported by tree operations.
///
/// None of these are transient: each one means the caller asked for
/// something the tree cannot do in its current shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Foreign or stale handle, or a structurally disallowed request.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// The request conflicts with the current tree state.
    #[error("{0}")]
    InvalidState(&'static str),
}
