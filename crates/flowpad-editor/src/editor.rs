use flowpad_engine as engine;
use flowpad_graph::{GraphStore, IdSource, UuidIdSource};
use tracing::info;

use crate::error::DispatchError;
use crate::events::{EditEvent, EditNotifier, NoopNotifier};
use crate::history::History;
use crate::intent::Intent;

/// The stateful editing surface handed to a presentation adapter.
///
/// Generic over the id source (so tests and scripts can use deterministic
/// ids) and the notifier (so a renderer can observe adopted stores).
/// `Editor::new()` gives the default random-id, no-op-notifier
/// configuration.
///
/// The editor processes one intent at a time, to completion; it assumes
/// exclusive, serialized access.
pub struct Editor<I: IdSource = UuidIdSource, N: EditNotifier = NoopNotifier> {
  history: History,
  ids: I,
  notifier: N,
  revision: u64,
  saved_revision: u64,
}

impl Editor<UuidIdSource, NoopNotifier> {
  /// Editor over a fresh single-start graph.
  pub fn new() -> Self {
    Self::with_parts(UuidIdSource, NoopNotifier)
  }
}

impl Default for Editor<UuidIdSource, NoopNotifier> {
  fn default() -> Self {
    Self::new()
  }
}

impl<I: IdSource> Editor<I, NoopNotifier> {
  /// Editor with an explicit id source.
  pub fn with_ids(ids: I) -> Self {
    Self::with_parts(ids, NoopNotifier)
  }
}

impl<N: EditNotifier> Editor<UuidIdSource, N> {
  /// Editor with a custom notifier.
  pub fn with_notifier(notifier: N) -> Self {
    Self::with_parts(UuidIdSource, notifier)
  }
}

impl<I: IdSource, N: EditNotifier> Editor<I, N> {
  /// Editor with explicit id source and notifier.
  pub fn with_parts(mut ids: I, notifier: N) -> Self {
    let initial = GraphStore::new(&mut ids);
    Self {
      history: History::new(initial),
      ids,
      notifier,
      revision: 0,
      saved_revision: 0,
    }
  }

  /// Read-only view of the live store, for rendering.
  pub fn live(&self) -> &GraphStore {
    self.history.live()
  }

  pub fn can_undo(&self) -> bool {
    self.history.can_undo()
  }

  pub fn can_redo(&self) -> bool {
    self.history.can_redo()
  }

  /// Monotonic count of adopted stores (commits, undos, redos).
  pub fn revision(&self) -> u64 {
    self.revision
  }

  /// Whether the live store has changed since the last [`save`](Self::save).
  pub fn is_dirty(&self) -> bool {
    self.revision != self.saved_revision
  }

  /// Apply one intent.
  ///
  /// On success the updated live store is returned and the notifier has
  /// been told. On failure the live store and both history stacks are
  /// exactly as they were.
  pub fn dispatch(&mut self, intent: Intent) -> Result<&GraphStore, DispatchError> {
    match intent {
      Intent::Insert {
        parent_id,
        slot,
        kind,
      } => {
        let next = engine::insert(self.history.live(), &mut self.ids, &parent_id, slot, kind)?;
        self.commit(next);
      }
      Intent::Delete { node_id } => {
        let next = engine::delete(self.history.live(), &node_id)?;
        self.commit(next);
      }
      Intent::Relabel { node_id, label } => {
        let next = engine::relabel(self.history.live(), &node_id, &label)?;
        self.commit(next);
      }
      Intent::Undo => {
        self.history.undo()?;
        self.revision += 1;
        info!(revision = self.revision, "undo");
        self.notifier.notify(EditEvent::Undone {
          revision: self.revision,
        });
      }
      Intent::Redo => {
        self.history.redo()?;
        self.revision += 1;
        info!(revision = self.revision, "redo");
        self.notifier.notify(EditEvent::Redone {
          revision: self.revision,
        });
      }
    }
    Ok(self.history.live())
  }

  fn commit(&mut self, next: GraphStore) {
    self.history.commit(next);
    self.revision += 1;
    info!(
      revision = self.revision,
      nodes = self.history.live().len(),
      "commit"
    );
    self.notifier.notify(EditEvent::Committed {
      revision: self.revision,
    });
  }

  /// Export the live store as a serializable value.
  ///
  /// There is no load counterpart - the dump is for logs, clipboards,
  /// and debugging, not persistence.
  pub fn export(&self) -> serde_json::Value {
    serde_json::to_value(self.history.live()).unwrap_or(serde_json::Value::Null)
  }

  /// Export and mark the current revision as saved.
  ///
  /// The saved marker lives outside the history snapshots: undoing past
  /// it simply makes the editor dirty again.
  pub fn save(&mut self) -> serde_json::Value {
    self.saved_revision = self.revision;
    info!(revision = self.revision, "saved");
    self.export()
  }
}
