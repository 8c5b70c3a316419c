use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::id::IdSource;
use crate::node::{Node, NodeKind, Slots};

/// The entire workflow at one point in time: an id-to-node mapping plus
/// the designated root.
///
/// A store is replaced, never edited in place: the mutation engine clones
/// it, edits its own copy, and the history manager adopts the result.
/// The `&mut self` methods here exist for that engine-owned copy; a store
/// that has been committed is only ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStore {
  root_id: String,
  nodes: HashMap<String, Node>,
}

impl GraphStore {
  /// Seed store: a single start node.
  pub fn new(ids: &mut dyn IdSource) -> Self {
    let root = Node::create(ids, NodeKind::Start, "Start");
    let root_id = root.node_id.clone();
    let mut nodes = HashMap::new();
    nodes.insert(root_id.clone(), root);
    Self { root_id, nodes }
  }

  /// Identifier of the start node. Invariant across all edits.
  pub fn root_id(&self) -> &str {
    &self.root_id
  }

  /// Get a node by id.
  pub fn get(&self, node_id: &str) -> Option<&Node> {
    self.nodes.get(node_id)
  }

  pub fn get_mut(&mut self, node_id: &str) -> Option<&mut Node> {
    self.nodes.get_mut(node_id)
  }

  pub fn contains(&self, node_id: &str) -> bool {
    self.nodes.contains_key(node_id)
  }

  /// Number of nodes, reachable or not.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Iterate nodes in no particular order.
  pub fn iter(&self) -> impl Iterator<Item = &Node> {
    self.nodes.values()
  }

  /// Add a node under its own id.
  pub fn insert_node(&mut self, node: Node) {
    self.nodes.insert(node.node_id.clone(), node);
  }

  /// Remove a node entry. Slots pointing at it are the caller's problem;
  /// the mutation engine rewires before removing.
  pub fn remove_node(&mut self, node_id: &str) -> Option<Node> {
    self.nodes.remove(node_id)
  }

  /// Replace every slot holding `target` with `replacement`, across all
  /// nodes. By the tree invariant at most one slot matches.
  pub fn replace_child_refs(&mut self, target: &str, replacement: Option<String>) {
    for node in self.nodes.values_mut() {
      node.slots.replace_child(target, replacement.clone());
    }
  }

  /// Ids reachable from the root by following slots.
  pub fn reachable(&self) -> HashSet<&str> {
    let mut seen = HashSet::new();
    let mut stack = vec![self.root_id.as_str()];
    while let Some(id) = stack.pop() {
      if !seen.insert(id) {
        continue;
      }
      if let Some(node) = self.nodes.get(id) {
        stack.extend(node.slots.child_ids());
      }
    }
    seen
  }

  /// Drop every node not reachable from the root. Returns how many were
  /// removed.
  pub fn sweep_unreachable(&mut self) -> usize {
    let keep: HashSet<String> = self.reachable().into_iter().map(String::from).collect();
    let before = self.nodes.len();
    self.nodes.retain(|id, _| keep.contains(id));
    before - self.nodes.len()
  }

  /// Check the structural invariants: a single start node at the root,
  /// no dangling child references, no child attached to two parent slots,
  /// and slot shapes matching node kinds. Returns the first violation.
  pub fn validate(&self) -> Result<(), GraphError> {
    match self.nodes.get(&self.root_id) {
      Some(root) if root.kind == NodeKind::Start => {}
      _ => return Err(GraphError::BadRoot(self.root_id.clone())),
    }

    let mut parent_of: HashMap<&str, &str> = HashMap::new();
    for node in self.nodes.values() {
      if node.kind == NodeKind::Start && node.node_id != self.root_id {
        return Err(GraphError::ExtraStart(node.node_id.clone()));
      }

      let shape_ok = matches!(
        (node.kind, &node.slots),
        (NodeKind::End, Slots::None)
          | (NodeKind::Start | NodeKind::Action, Slots::Single { .. })
          | (NodeKind::Branch, Slots::Pair { .. })
      );
      if !shape_ok {
        return Err(GraphError::MalformedSlots {
          node_id: node.node_id.clone(),
          kind: node.kind,
        });
      }

      for child in node.slots.child_ids() {
        if !self.nodes.contains_key(child) {
          return Err(GraphError::DanglingChild {
            node_id: node.node_id.clone(),
            child_id: child.to_string(),
          });
        }
        if parent_of.insert(child, node.node_id.as_str()).is_some() {
          return Err(GraphError::SharedChild {
            child_id: child.to_string(),
          });
        }
      }
    }

    Ok(())
  }
}
