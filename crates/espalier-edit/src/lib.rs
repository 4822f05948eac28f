//! Structural editing for behaviour trees.
//!
//! [`TreeEditor`] wraps an `espalier-core` tree with the operations an
//! authoring front-end needs: create, add under a selection, delete a
//! subtree, clear, and load a flat description. Each operation reports an
//! [`EditOutcome`] or an [`EditError`]; the editor never panics on bad input
//! and never leaves the tree half-edited.

#![forbid(unsafe_code)]

pub mod demo;
pub mod editor;
pub mod outcome;

pub use editor::{EditorConfig, TreeEditor};
pub use outcome::{EditError, EditOutcome};
