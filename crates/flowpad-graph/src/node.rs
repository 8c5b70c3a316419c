use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::id::IdSource;

/// The kind of a workflow node. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
  /// The workflow entry point. Singular; always the root.
  Start,
  /// A single step with one downstream slot.
  Action,
  /// A two-way conditional with `true`/`false` slots.
  Branch,
  /// A terminal node with no downstream slots.
  End,
}

impl NodeKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      NodeKind::Start => "start",
      NodeKind::Action => "action",
      NodeKind::Branch => "branch",
      NodeKind::End => "end",
    }
  }

  /// Label given to freshly inserted nodes of this kind.
  pub fn default_label(&self) -> String {
    self.as_str().to_uppercase()
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for NodeKind {
  type Err = GraphError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "start" => Ok(NodeKind::Start),
      "action" => Ok(NodeKind::Action),
      "branch" => Ok(NodeKind::Branch),
      "end" => Ok(NodeKind::End),
      other => Err(GraphError::InvalidKind(other.to_string())),
    }
  }
}

/// Names one of the two outgoing slots of a branch node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchKey {
  True,
  False,
}

impl fmt::Display for BranchKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BranchKey::True => f.write_str("true"),
      BranchKey::False => f.write_str("false"),
    }
  }
}

/// Outgoing slots of a node. The shape is fixed by the node's kind:
/// branches always carry the two-key pair, start/action nodes a single
/// optional child, end nodes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Slots {
  /// Terminal: no outgoing slot.
  None,
  /// At most one downstream child.
  Single { child: Option<String> },
  /// Children keyed by condition outcome.
  Pair {
    when_true: Option<String>,
    when_false: Option<String>,
  },
}

impl Slots {
  /// The empty slot shape for a kind.
  pub fn empty_for(kind: NodeKind) -> Self {
    match kind {
      NodeKind::End => Slots::None,
      NodeKind::Branch => Slots::Pair {
        when_true: None,
        when_false: None,
      },
      NodeKind::Start | NodeKind::Action => Slots::Single { child: None },
    }
  }

  /// Ids of all attached children.
  pub fn child_ids(&self) -> Vec<&str> {
    match self {
      Slots::None => Vec::new(),
      Slots::Single { child } => child.iter().map(String::as_str).collect(),
      Slots::Pair {
        when_true,
        when_false,
      } => when_true
        .iter()
        .chain(when_false.iter())
        .map(String::as_str)
        .collect(),
    }
  }

  /// The sole attached child, if any. For a branch this is only meaningful
  /// when at most one slot is filled; delete rewiring never asks otherwise.
  pub fn single_child(&self) -> Option<&str> {
    match self {
      Slots::None => None,
      Slots::Single { child } => child.as_deref(),
      Slots::Pair {
        when_true,
        when_false,
      } => when_true.as_deref().or(when_false.as_deref()),
    }
  }

  /// Replace every slot holding `target` with `replacement`.
  pub fn replace_child(&mut self, target: &str, replacement: Option<String>) {
    match self {
      Slots::None => {}
      Slots::Single { child } => {
        if child.as_deref() == Some(target) {
          *child = replacement;
        }
      }
      Slots::Pair {
        when_true,
        when_false,
      } => {
        if when_true.as_deref() == Some(target) {
          *when_true = replacement.clone();
        }
        if when_false.as_deref() == Some(target) {
          *when_false = replacement;
        }
      }
    }
  }
}

/// A single step in the workflow graph.
///
/// `node_id` and `kind` are immutable after creation; only the label is
/// ever edited, and only through the mutation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub node_id: String,
  pub kind: NodeKind,
  pub label: String,
  pub slots: Slots,
}

impl Node {
  /// Construct a node of `kind` with empty slots and a fresh identifier.
  pub fn create(ids: &mut dyn IdSource, kind: NodeKind, label: impl Into<String>) -> Self {
    Self {
      node_id: ids.next_id(),
      kind,
      label: label.into(),
      slots: Slots::empty_for(kind),
    }
  }
}
