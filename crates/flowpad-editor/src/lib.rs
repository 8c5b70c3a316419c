//! Flowpad Editor
//!
//! The stateful shell around the pure mutation engine. This crate owns
//! the live [`GraphStore`](flowpad_graph::GraphStore) and its edit
//! timeline:
//!
//! - [`History`] keeps the past/future snapshot stacks and implements
//!   commit, undo, and redo as all-or-nothing transitions.
//! - [`Editor`] is the surface handed to a presentation adapter:
//!   [`Intent`] dispatch, affordance gating (`can_undo`/`can_redo`), and
//!   export/save of the live store.
//! - [`EditNotifier`] lets consumers observe every adopted store, which
//!   is the hook a renderer re-renders from.
//!
//! Everything here is single-threaded and synchronous: one intent runs to
//! completion before the next is looked at.

mod editor;
mod error;
mod events;
mod history;
mod intent;

pub use editor::Editor;
pub use error::{DispatchError, HistoryError};
pub use events::{EditEvent, EditNotifier, NoopNotifier};
pub use history::History;
pub use intent::Intent;
