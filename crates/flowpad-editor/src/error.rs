use flowpad_engine::EditError;
use thiserror::Error;

/// Advisory history no-ops.
///
/// These are not user-visible failures: adapters should gate their
/// affordances with `can_undo`/`can_redo` and treat these as "nothing
/// happened". The store and both stacks are unchanged when one is
/// returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
  /// Undo requested with an empty past stack.
  #[error("nothing to undo")]
  NothingToUndo,

  /// Redo requested with an empty future stack.
  #[error("nothing to redo")]
  NothingToRedo,
}

/// Failure of a dispatched intent. The live store is unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
  /// A mutation was rejected by the engine.
  #[error(transparent)]
  Edit(#[from] EditError),

  /// An advisory undo/redo no-op.
  #[error(transparent)]
  History(#[from] HistoryError),
}
