#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of a flat tree description.
///
/// Entries are listed in post-order: every child of a node appears somewhere
/// before the node itself, and `children` declares how many of the subtrees
/// described so far the node consumes. `kind` stays free text at this
/// boundary; it is bound to a [`NodeKind`](crate::NodeKind) during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeSpec {
    pub kind: String,
    pub name: String,
    pub behavior: Option<String>,
    pub children: usize,
}

impl NodeSpec {
    /// Entry that consumes no subtrees.
    pub fn leaf(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::branch(kind, name, 0)
    }

    /// Entry that consumes the `children` most recent subtrees.
    pub fn branch(kind: impl Into<String>, name: impl Into<String>, children: usize) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            behavior: None,
            children,
        }
    }

    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.behavior = Some(behavior.into());
        self
    }
}

/// A complete flat tree description.
///
/// This is the interchange form: an ordered list of [`NodeSpec`] entries
/// that [`decode`](crate::decode()) folds back into a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeSpec {
    pub nodes: Vec<NodeSpec>,
}

impl TreeSpec {
    pub fn new(nodes: Vec<NodeSpec>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of entries that declare no children.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.children == 0).count()
    }
}
