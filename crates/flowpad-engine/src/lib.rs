//! Flowpad Engine
//!
//! Pure structural edits over a [`flowpad_graph::GraphStore`]: insertion,
//! deletion with rewiring, and relabeling.
//!
//! Every operation borrows the current store and returns a fresh one; the
//! input is never modified. This is what makes history snapshotting
//! correct - the store a caller holds stays valid whatever the engine
//! does. Failures are typed ([`EditError`]) and produce no store at all,
//! so a failed edit leaves no partial state anywhere.
//!
//! The engine keeps nothing between calls. Serialization of edits is the
//! caller's job (in flowpad, the editor facade owns the store and
//! dispatches one intent at a time).

mod error;
mod mutation;

pub use error::EditError;
pub use mutation::{delete, insert, relabel};
