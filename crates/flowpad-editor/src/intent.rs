use flowpad_graph::{BranchKey, NodeKind};
use serde::{Deserialize, Serialize};

/// A user-requested edit, dispatched by the presentation adapter.
///
/// Serializes with an `op` tag, e.g.
/// `{"op": "insert", "parent_id": "...", "kind": "action"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
  /// Attach a new node of `kind` to an empty slot of `parent_id`.
  Insert {
    parent_id: String,
    /// Required for branch parents; ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slot: Option<BranchKey>,
    kind: NodeKind,
  },

  /// Remove a node, rewiring the parent slot that pointed at it.
  Delete { node_id: String },

  /// Replace a node's label.
  Relabel { node_id: String, label: String },

  /// Step back one snapshot.
  Undo,

  /// Step forward one snapshot.
  Redo,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_intent_wire_shape() {
    let intent: Intent = serde_json::from_value(json!({
      "op": "insert",
      "parent_id": "n1",
      "slot": "true",
      "kind": "branch",
    }))
    .unwrap();
    assert_eq!(
      intent,
      Intent::Insert {
        parent_id: "n1".to_string(),
        slot: Some(BranchKey::True),
        kind: NodeKind::Branch,
      }
    );

    let undo: Intent = serde_json::from_value(json!({ "op": "undo" })).unwrap();
    assert_eq!(undo, Intent::Undo);
  }

  #[test]
  fn test_insert_slot_defaults_to_none() {
    let intent: Intent = serde_json::from_value(json!({
      "op": "insert",
      "parent_id": "n1",
      "kind": "action",
    }))
    .unwrap();
    assert_eq!(
      intent,
      Intent::Insert {
        parent_id: "n1".to_string(),
        slot: None,
        kind: NodeKind::Action,
      }
    );
  }
}
