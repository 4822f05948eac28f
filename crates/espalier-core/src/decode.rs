use thiserror::Error;
use tracing::debug;

use crate::kind::NodeKind;
use crate::record::NodeRecord;
use crate::spec::{NodeSpec, TreeSpec};
use crate::tree::{NodeId, Tree};

/// Why a flat description failed to resolve into a single rooted tree.
///
/// Decoding is all-or-nothing: any of these aborts the whole call and no
/// partial tree is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The description contained no entries.
    #[error("empty description: nothing to decode")]
    EmptyInput,

    /// An entry declared more children than there were finished subtrees
    /// at that point in the sequence.
    #[error(
        "entry {index} ({name}) declares {declared} children but only {available} subtrees are available"
    )]
    NotEnoughChildren {
        index: usize,
        name: String,
        declared: usize,
        available: usize,
    },

    /// Every entry was consumed but more than one subtree remained.
    #[error("description resolves to {remaining} disconnected subtrees instead of one")]
    DanglingSubtrees { remaining: usize },
}

/// Fold a flat post-order description back into a [`Tree`].
///
/// Entries are scanned once, left to right, against a stack of finished
/// subtrees: a zero-arity entry is pushed as a new subtree, an entry with
/// arity `n` pops the top `n` subtrees and adopts them in their original
/// left-to-right order. A well-formed description leaves exactly one subtree
/// on the stack, which becomes the root.
pub fn decode(spec: &TreeSpec) -> Result<Tree, DecodeError> {
    let mut tree = Tree::new();
    // Roots of finished subtrees, oldest first.
    let mut built: Vec<NodeId> = Vec::new();

    for (index, entry) in spec.nodes.iter().enumerate() {
        let id = tree.alloc_detached(record_of(entry));

        if entry.children > 0 {
            if built.len() < entry.children {
                return Err(DecodeError::NotEnoughChildren {
                    index,
                    name: entry.name.clone(),
                    declared: entry.children,
                    available: built.len(),
                });
            }
            // Draining the tail of the stack yields the adopted subtrees in
            // the order their entries appeared.
            let first = built.len() - entry.children;
            for child in built.drain(first..) {
                tree.attach(id, child);
            }
        }
        built.push(id);
    }

    match built.len() {
        0 => Err(DecodeError::EmptyInput),
        1 => {
            tree.set_root(built[0]);
            debug!(nodes = tree.len(), "decoded flat description");
            Ok(tree)
        }
        remaining => Err(DecodeError::DanglingSubtrees { remaining }),
    }
}

/// Flatten a tree back into its post-order description.
///
/// Each node is emitted after its children, with `children` set to its actual
/// child count, so the result decodes back to a tree of the same shape. The
/// empty tree flattens to an empty description, which [`decode`] rejects; the
/// empty state exists in memory only.
pub fn encode(tree: &Tree) -> TreeSpec {
    let mut nodes = Vec::with_capacity(tree.len());
    for (id, record) in tree.iter_postorder() {
        let mut entry = NodeSpec::branch(
            record.kind.as_str(),
            record.name.clone(),
            tree.children(id).len(),
        );
        if let Some(behavior) = &record.behavior {
            entry = entry.with_behavior(behavior.clone());
        }
        nodes.push(entry);
    }
    TreeSpec::new(nodes)
}

fn record_of(entry: &NodeSpec) -> NodeRecord {
    let mut record = NodeRecord::new(NodeKind::parse(&entry.kind), entry.name.clone());
    // Blank behavior text in hand-written descriptions means "none".
    if let Some(behavior) = entry.behavior.as_deref().filter(|b| !b.is_empty()) {
        record = record.with_behavior(behavior);
    }
    record
}
