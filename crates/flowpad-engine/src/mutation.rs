//! The three structural edits.
//!
//! Each function clones the input store and edits its own copy, so error
//! paths can bail at any point without leaving a half-applied edit.

use flowpad_graph::{BranchKey, GraphStore, IdSource, Node, NodeKind, Slots};
use tracing::debug;

use crate::error::EditError;

/// Insert a new node of `kind` under `parent_id`.
///
/// Branch parents require `slot` to name the `true` or `false` side;
/// start/action parents ignore it and use their single slot. The target
/// slot must be empty. The new node gets the kind's default label.
pub fn insert(
  store: &GraphStore,
  ids: &mut dyn IdSource,
  parent_id: &str,
  slot: Option<BranchKey>,
  kind: NodeKind,
) -> Result<GraphStore, EditError> {
  if kind == NodeKind::Start {
    return Err(EditError::InvalidKind(kind.to_string()));
  }

  let mut next = store.clone();
  let parent = next
    .get_mut(parent_id)
    .ok_or_else(|| EditError::NodeNotFound(parent_id.to_string()))?;

  let target = match (&mut parent.slots, slot) {
    (Slots::Pair { .. }, None) => {
      return Err(EditError::InvalidBranchKey {
        node_id: parent_id.to_string(),
      });
    }
    (Slots::Pair { when_true, .. }, Some(BranchKey::True)) => when_true,
    (Slots::Pair { when_false, .. }, Some(BranchKey::False)) => when_false,
    (Slots::Single { child }, _) => child,
    (Slots::None, _) => {
      // End nodes are terminal: there is no slot to fill.
      return Err(EditError::SlotOccupied {
        node_id: parent_id.to_string(),
        slot,
      });
    }
  };

  if target.is_some() {
    return Err(EditError::SlotOccupied {
      node_id: parent_id.to_string(),
      slot,
    });
  }

  let node = Node::create(ids, kind, kind.default_label());
  let node_id = node.node_id.clone();
  *target = Some(node_id.clone());
  next.insert_node(node);

  debug!(%node_id, parent_id, kind = %kind, "inserted node");
  Ok(next)
}

/// Delete `node_id`, rewiring whichever parent slot points at it.
///
/// Non-branch nodes are spliced out: their single child (if any) takes
/// their place in the parent slot. Deleting a branch empties the parent
/// slot instead - the subtree below it is detached, and the sweep at the
/// end drops everything the root can no longer reach.
pub fn delete(store: &GraphStore, node_id: &str) -> Result<GraphStore, EditError> {
  if node_id == store.root_id() {
    return Err(EditError::CannotDeleteRoot);
  }
  let target = store
    .get(node_id)
    .ok_or_else(|| EditError::NodeNotFound(node_id.to_string()))?;

  let replacement = match target.kind {
    NodeKind::Branch => None,
    _ => target.slots.single_child().map(str::to_string),
  };

  let mut next = store.clone();
  next.replace_child_refs(node_id, replacement);
  next.remove_node(node_id);
  let swept = next.sweep_unreachable();

  debug!(node_id, swept, "deleted node");
  Ok(next)
}

/// Replace a node's label. No structural change.
pub fn relabel(store: &GraphStore, node_id: &str, label: &str) -> Result<GraphStore, EditError> {
  let mut next = store.clone();
  match next.get_mut(node_id) {
    Some(node) => node.label = label.to_string(),
    None => return Err(EditError::NodeNotFound(node_id.to_string())),
  }

  debug!(node_id, label, "relabeled node");
  Ok(next)
}
