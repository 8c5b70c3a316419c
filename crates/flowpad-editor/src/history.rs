use std::collections::VecDeque;

use flowpad_graph::GraphStore;

use crate::error::HistoryError;

/// Owns the live store and the undo/redo snapshot stacks.
///
/// `past` is ordered oldest first; `future` holds the next redo at the
/// front. Every entry is a full store value - nothing is shared between
/// the live store and either stack, so adopting a snapshot is just a
/// move. A commit invalidates the future stack: new edits branch the
/// timeline and the abandoned redo states are dropped.
#[derive(Debug, Clone)]
pub struct History {
  live: GraphStore,
  past: Vec<GraphStore>,
  future: VecDeque<GraphStore>,
}

impl History {
  /// Start a timeline at `initial` with empty stacks.
  pub fn new(initial: GraphStore) -> Self {
    Self {
      live: initial,
      past: Vec::new(),
      future: VecDeque::new(),
    }
  }

  /// The current store.
  pub fn live(&self) -> &GraphStore {
    &self.live
  }

  pub fn can_undo(&self) -> bool {
    !self.past.is_empty()
  }

  pub fn can_redo(&self) -> bool {
    !self.future.is_empty()
  }

  /// Snapshots behind the live store.
  pub fn past_len(&self) -> usize {
    self.past.len()
  }

  /// Snapshots ahead of the live store.
  pub fn future_len(&self) -> usize {
    self.future.len()
  }

  /// Adopt `next` as the live store. The previous live store moves onto
  /// `past` and any redo history is invalidated.
  pub fn commit(&mut self, next: GraphStore) {
    let prev = std::mem::replace(&mut self.live, next);
    self.past.push(prev);
    self.future.clear();
  }

  /// Step back one snapshot. Advisory no-op when `past` is empty.
  pub fn undo(&mut self) -> Result<&GraphStore, HistoryError> {
    let prev = self.past.pop().ok_or(HistoryError::NothingToUndo)?;
    let current = std::mem::replace(&mut self.live, prev);
    self.future.push_front(current);
    Ok(&self.live)
  }

  /// Step forward one snapshot. Advisory no-op when `future` is empty.
  pub fn redo(&mut self) -> Result<&GraphStore, HistoryError> {
    let next = self.future.pop_front().ok_or(HistoryError::NothingToRedo)?;
    let current = std::mem::replace(&mut self.live, next);
    self.past.push(current);
    Ok(&self.live)
  }
}
