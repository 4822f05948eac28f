use std::fmt;

use espalier_core::{DecodeError, NodeId};
use thiserror::Error;

/// What an editing operation did, for reporting back to the user.
///
/// The `Display` form is the user-facing message; front-ends prefix it with
/// the operation they ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A fresh single-node tree replaced the previous structure.
    TreeCreated,
    /// A node was appended under the selected parent.
    NodeAdded { id: NodeId },
    /// The selected node and everything below it was removed.
    NodeDeleted { removed: usize },
    /// The structure was reset to the empty state.
    Cleared,
    /// A flat description was decoded and installed.
    Loaded { nodes: usize },
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::TreeCreated => write!(f, "new tree created"),
            EditOutcome::NodeAdded { .. } => write!(f, "node added"),
            EditOutcome::NodeDeleted { removed } => {
                write!(f, "node deleted ({removed} removed)")
            }
            EditOutcome::Cleared => write!(f, "tree cleared"),
            EditOutcome::Loaded { nodes } => write!(f, "tree loaded ({nodes} nodes)"),
        }
    }
}

/// Why an editing operation refused to run.
///
/// Refusal leaves the tree exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// No node was supplied, or the supplied handle no longer resolves.
    #[error("no node selected")]
    NoSelection,

    /// A required field was blank after trimming.
    #[error("incomplete data: {missing} is required")]
    IncompleteData { missing: &'static str },

    /// The root stays; dropping the whole tree is what `clear` is for.
    #[error("can't delete the root node")]
    DeleteRoot,

    /// Strict mode only: the kind text is outside the canonical set.
    #[error("unknown node kind: {0}")]
    UnknownKind(String),

    /// A flat description failed to decode during `load`.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
