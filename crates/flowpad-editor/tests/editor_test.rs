//! Integration tests for the editor facade: dispatch, history laws,
//! events, and the save marker.

use std::cell::RefCell;
use std::rc::Rc;

use flowpad_editor::{DispatchError, EditEvent, EditNotifier, Editor, HistoryError, Intent};
use flowpad_engine::EditError;
use flowpad_graph::{BranchKey, NodeKind, SequentialIdSource};

fn seq_editor() -> Editor<SequentialIdSource> {
  Editor::with_ids(SequentialIdSource::new())
}

fn insert(parent_id: &str, slot: Option<BranchKey>, kind: NodeKind) -> Intent {
  Intent::Insert {
    parent_id: parent_id.to_string(),
    slot,
    kind,
  }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
  events: Rc<RefCell<Vec<EditEvent>>>,
}

impl EditNotifier for RecordingNotifier {
  fn notify(&self, event: EditEvent) {
    self.events.borrow_mut().push(event);
  }
}

#[test]
fn test_dispatch_insert_commits() {
  let mut editor = seq_editor();
  assert!(!editor.can_undo());

  editor
    .dispatch(insert("n1", None, NodeKind::Action))
    .unwrap();

  assert_eq!(editor.live().len(), 2);
  assert!(editor.can_undo());
  assert!(!editor.can_redo());
  assert!(editor.live().validate().is_ok());
}

#[test]
fn test_undo_redo_inverse_law() {
  let mut editor = seq_editor();
  editor
    .dispatch(insert("n1", None, NodeKind::Action))
    .unwrap();

  let before = editor.live().clone();
  editor
    .dispatch(insert("n2", None, NodeKind::End))
    .unwrap();
  let after = editor.live().clone();
  assert_ne!(before, after);

  editor.dispatch(Intent::Undo).unwrap();
  assert_eq!(editor.live(), &before);

  editor.dispatch(Intent::Redo).unwrap();
  assert_eq!(editor.live(), &after);
}

#[test]
fn test_commit_invalidates_redo() {
  let mut editor = seq_editor();
  editor
    .dispatch(insert("n1", None, NodeKind::Action))
    .unwrap();
  editor.dispatch(Intent::Undo).unwrap();
  assert!(editor.can_redo());

  editor
    .dispatch(insert("n1", None, NodeKind::Branch))
    .unwrap();
  assert!(!editor.can_redo());

  let err = editor.dispatch(Intent::Redo).unwrap_err();
  assert_eq!(err, DispatchError::History(HistoryError::NothingToRedo));
}

#[test]
fn test_noop_boundaries_leave_state_unchanged() {
  let mut editor = seq_editor();
  let before = editor.live().clone();

  let err = editor.dispatch(Intent::Undo).unwrap_err();
  assert_eq!(err, DispatchError::History(HistoryError::NothingToUndo));
  let err = editor.dispatch(Intent::Redo).unwrap_err();
  assert_eq!(err, DispatchError::History(HistoryError::NothingToRedo));

  assert_eq!(editor.live(), &before);
  assert_eq!(editor.revision(), 0);
  assert!(!editor.can_undo());
  assert!(!editor.can_redo());
}

#[test]
fn test_rejected_edit_leaves_history_untouched() {
  let mut editor = seq_editor();
  editor
    .dispatch(insert("n1", None, NodeKind::Action))
    .unwrap();
  let live = editor.live().clone();
  let revision = editor.revision();

  // The root slot is already occupied.
  let err = editor
    .dispatch(insert("n1", None, NodeKind::Action))
    .unwrap_err();
  assert!(matches!(
    err,
    DispatchError::Edit(EditError::SlotOccupied { .. })
  ));

  assert_eq!(editor.live(), &live);
  assert_eq!(editor.revision(), revision);

  // The one real commit is still undoable.
  editor.dispatch(Intent::Undo).unwrap();
  assert_eq!(editor.live().len(), 1);
}

#[test]
fn test_notifier_sees_every_adoption() {
  let recorder = RecordingNotifier::default();
  let mut editor = Editor::with_parts(SequentialIdSource::new(), recorder.clone());

  editor
    .dispatch(insert("n1", None, NodeKind::Action))
    .unwrap();
  editor.dispatch(Intent::Undo).unwrap();
  editor.dispatch(Intent::Redo).unwrap();

  // A rejected intent emits nothing.
  let _ = editor.dispatch(Intent::Redo).unwrap_err();

  assert_eq!(
    *recorder.events.borrow(),
    vec![
      EditEvent::Committed { revision: 1 },
      EditEvent::Undone { revision: 2 },
      EditEvent::Redone { revision: 3 },
    ]
  );
}

#[test]
fn test_save_marker() {
  let mut editor = seq_editor();
  assert!(!editor.is_dirty());

  editor
    .dispatch(insert("n1", None, NodeKind::Action))
    .unwrap();
  assert!(editor.is_dirty());

  let exported = editor.save();
  assert!(!editor.is_dirty());
  assert_eq!(exported["root_id"], "n1");
  assert!(exported["nodes"]["n2"].is_object());

  // Undoing past the saved revision makes the editor dirty again.
  editor.dispatch(Intent::Undo).unwrap();
  assert!(editor.is_dirty());
}

#[test]
fn test_branch_editing_session() {
  let mut editor = seq_editor();

  editor
    .dispatch(insert("n1", None, NodeKind::Branch))
    .unwrap();
  editor
    .dispatch(insert("n2", Some(BranchKey::True), NodeKind::Action))
    .unwrap();
  editor
    .dispatch(insert("n2", Some(BranchKey::False), NodeKind::End))
    .unwrap();
  editor
    .dispatch(Intent::Relabel {
      node_id: "n2".to_string(),
      label: "payment ok?".to_string(),
    })
    .unwrap();

  assert_eq!(editor.live().len(), 4);
  assert_eq!(editor.live().get("n2").unwrap().label, "payment ok?");

  // Deleting the branch detaches both arms...
  editor
    .dispatch(Intent::Delete {
      node_id: "n2".to_string(),
    })
    .unwrap();
  assert_eq!(editor.live().len(), 1);

  // ...and undo brings the whole subtree back, label included.
  editor.dispatch(Intent::Undo).unwrap();
  assert_eq!(editor.live().len(), 4);
  assert_eq!(editor.live().get("n2").unwrap().label, "payment ok?");

  assert_eq!(editor.live().root_id(), "n1");
  assert!(editor.live().validate().is_ok());
}
