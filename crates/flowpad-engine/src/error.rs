use flowpad_graph::BranchKey;
use thiserror::Error;

/// Errors produced by mutation operations.
///
/// All are recoverable and local: a failed operation yields no new store
/// and the input store is untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
  /// The referenced id has no entry in the store.
  #[error("node not found: {0}")]
  NodeNotFound(String),

  /// The kind cannot be inserted (only the root is ever a start node).
  #[error("invalid node kind for insert: {0}")]
  InvalidKind(String),

  /// A branch parent needs an explicit `true`/`false` slot key.
  #[error("missing or invalid branch key for node '{node_id}'")]
  InvalidBranchKey { node_id: String },

  /// The target slot already holds a child, or the parent has no free
  /// slot at all (end nodes are terminal).
  #[error("slot already occupied on node '{node_id}'")]
  SlotOccupied {
    node_id: String,
    slot: Option<BranchKey>,
  },

  /// The start node is never deleted.
  #[error("cannot delete the root node")]
  CannotDeleteRoot,
}
