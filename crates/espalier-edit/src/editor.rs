use espalier_core::{decode, NodeId, NodeKind, NodeRecord, Tree, TreeSpec};
use tracing::debug;

use crate::outcome::{EditError, EditOutcome};

/// Tuning for a [`TreeEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorConfig {
    /// Reject kind text outside [`NodeKind::CANONICAL`] instead of storing
    /// it as a custom kind.
    pub strict_kinds: bool,
}

/// Owns the current tree and applies structural edits to it.
///
/// The editor holds no selection: the front-end tracks what is selected and
/// passes the handle into each call, so a handle invalidated by an earlier
/// edit simply fails to resolve. Every operation returns an [`EditOutcome`]
/// or refuses with an [`EditError`], leaving the tree untouched on refusal.
#[derive(Debug, Default)]
pub struct TreeEditor {
    tree: Tree,
    config: EditorConfig,
}

impl TreeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// The current tree, for rendering and traversal.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Replace the current structure with a single default root node.
    pub fn new_tree(&mut self) -> EditOutcome {
        self.tree = Tree::with_root(NodeRecord::new(NodeKind::Root, "root"));
        debug!("created new tree");
        EditOutcome::TreeCreated
    }

    /// Append a node under `target` from raw field text.
    ///
    /// Fields are trimmed before validation. `behavior` may be blank except
    /// for kinds that require one; blank means the node carries none.
    pub fn add_child(
        &mut self,
        target: Option<NodeId>,
        kind: &str,
        name: &str,
        behavior: &str,
    ) -> Result<EditOutcome, EditError> {
        let target = target
            .filter(|&id| self.tree.contains(id))
            .ok_or(EditError::NoSelection)?;

        let kind = kind.trim();
        let name = name.trim();
        let behavior = behavior.trim();

        if kind.is_empty() {
            return Err(EditError::IncompleteData { missing: "kind" });
        }
        if name.is_empty() {
            return Err(EditError::IncompleteData { missing: "name" });
        }

        let kind = NodeKind::parse(kind);
        if self.config.strict_kinds && !kind.is_canonical() {
            return Err(EditError::UnknownKind(kind.as_str().to_string()));
        }
        if kind.requires_behavior() && behavior.is_empty() {
            return Err(EditError::IncompleteData {
                missing: "behavior",
            });
        }

        let mut record = NodeRecord::new(kind, name);
        if !behavior.is_empty() {
            record = record.with_behavior(behavior);
        }
        let id = self
            .tree
            .insert_child(target, record)
            .ok_or(EditError::NoSelection)?;
        debug!(name, "added node");
        Ok(EditOutcome::NodeAdded { id })
    }

    /// Remove `target` and its whole subtree. The root is never deleted.
    pub fn delete_node(&mut self, target: Option<NodeId>) -> Result<EditOutcome, EditError> {
        let target = target
            .filter(|&id| self.tree.contains(id))
            .ok_or(EditError::NoSelection)?;
        if self.tree.parent(target).is_none() {
            return Err(EditError::DeleteRoot);
        }

        let removed = self.tree.remove_subtree(target);
        debug!(removed, "deleted subtree");
        Ok(EditOutcome::NodeDeleted { removed })
    }

    /// Reset to the empty structure. Already-empty editors stay empty.
    pub fn clear(&mut self) -> EditOutcome {
        self.tree.clear();
        EditOutcome::Cleared
    }

    /// Decode `spec` and install the result as the current tree.
    ///
    /// A malformed description leaves the current tree untouched.
    pub fn load(&mut self, spec: &TreeSpec) -> Result<EditOutcome, EditError> {
        let tree = decode(spec)?;
        let nodes = tree.len();
        self.tree = tree;
        debug!(nodes, "loaded flat description");
        Ok(EditOutcome::Loaded { nodes })
    }
}
