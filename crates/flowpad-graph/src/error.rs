use thiserror::Error;

use crate::node::NodeKind;

/// Error type for graph model parsing and invariant checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
  /// The text does not name one of the four node kinds.
  #[error("invalid node kind: {0}")]
  InvalidKind(String),

  /// A slot references an identifier with no entry in the store.
  #[error("node '{node_id}' references missing child '{child_id}'")]
  DanglingChild { node_id: String, child_id: String },

  /// An identifier is attached to more than one parent slot.
  #[error("node '{child_id}' is attached to more than one parent slot")]
  SharedChild { child_id: String },

  /// The designated root is missing or is not a start node.
  #[error("root '{0}' is missing or not a start node")]
  BadRoot(String),

  /// A start node exists outside the root position.
  #[error("extra start node: {0}")]
  ExtraStart(String),

  /// A node's slot shape does not match its kind.
  #[error("node '{node_id}' has a slot shape that does not match kind '{kind}'")]
  MalformedSlots { node_id: String, kind: NodeKind },
}
