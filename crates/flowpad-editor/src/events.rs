//! Edit events and notifiers.
//!
//! An event is emitted every time the editor adopts a store - commit,
//! undo, or redo. Consumers decide what to do with them (re-render,
//! log, ignore); the editor does not care.

use serde::{Deserialize, Serialize};

/// Emitted after the live store changes.
///
/// `revision` is the editor's monotonic adoption counter, so consumers
/// can detect missed events or order them in logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditEvent {
  /// An edit was committed.
  Committed { revision: u64 },

  /// An undo restored an earlier snapshot.
  Undone { revision: u64 },

  /// A redo restored a later snapshot.
  Redone { revision: u64 },
}

/// Trait for observing live-store changes.
///
/// The editor calls `notify` after each adopted store. Rejected intents
/// emit nothing - the store did not change.
pub trait EditNotifier {
  /// Called when the live store changes.
  fn notify(&self, event: EditEvent);
}

/// A no-op notifier that discards all events.
///
/// Useful for tests or when nothing observes the editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl EditNotifier for NoopNotifier {
  fn notify(&self, _event: EditEvent) {}
}
