use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};

use crate::record::NodeRecord;

// Every Tree gets a distinct epoch so handles cannot outlive the tree that
// issued them. A fresh arena restarts its generation counter, so without this
// a handle held across a tree replacement would alias the replacement's nodes.
static NEXT_TREE_EPOCH: AtomicU64 = AtomicU64::new(0);

/// Stable handle to a node in a [`Tree`].
///
/// Handles are generational twice over: the arena index stops resolving once
/// the node is removed, and the tree epoch stops resolving once the whole
/// tree is replaced. Callers holding a handle across mutations check
/// [`Tree::contains`] rather than trusting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    epoch: u64,
    index: Index,
}

#[derive(Debug)]
struct Slot {
    record: NodeRecord,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An ordered tree of [`NodeRecord`]s with parent links.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. Child order
/// is significant and preserved by every operation. The empty state (no root)
/// is a first-class value: [`Tree::clear`] produces it and decoding or
/// [`Tree::with_root`] replace it.
#[derive(Debug)]
pub struct Tree {
    epoch: u64,
    arena: Arena<Slot>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            epoch: NEXT_TREE_EPOCH.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
            root: None,
        }
    }

    /// Build a single-node tree.
    pub fn with_root(record: NodeRecord) -> Self {
        let mut tree = Self::new();
        let id = tree.alloc_detached(record);
        tree.root = Some(id);
        tree
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeRecord> {
        self.slot(id).map(|slot| &slot.record)
    }

    /// Parent of `id`, if `id` resolves and is not the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|slot| slot.parent)
    }

    /// Children of `id` in insertion order. Empty for leaves and for handles
    /// that no longer resolve.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.iter()
            .filter(|(id, _)| self.children(*id).is_empty())
            .count()
    }

    /// Append `record` as the last child of `parent`.
    ///
    /// Returns `None` when `parent` does not resolve; the tree is unchanged.
    pub fn insert_child(&mut self, parent: NodeId, record: NodeRecord) -> Option<NodeId> {
        if !self.contains(parent) {
            return None;
        }
        let child = self.alloc_detached(record);
        self.attach(parent, child);
        Some(child)
    }

    /// Remove `id` and every node below it. Returns the number of nodes
    /// removed, zero when `id` does not resolve.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        match self.parent(id) {
            Some(parent) => {
                if let Some(slot) = self.arena.get_mut(parent.index) {
                    slot.children.retain(|&child| child != id);
                }
            }
            None => {
                if self.root == Some(id) {
                    self.root = None;
                }
            }
        }
        let mut removed = 0;
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(slot) = self.arena.remove(current.index) {
                pending.extend(slot.children);
                removed += 1;
            }
        }
        removed
    }

    /// Drop every node, returning to the empty state.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Visit nodes parent-first, children in order.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Visit nodes children-first, the root last.
    pub fn iter_postorder(&self) -> Postorder<'_> {
        Postorder {
            tree: self,
            stack: self.root.map(|id| (id, false)).into_iter().collect(),
        }
    }

    pub(crate) fn alloc_detached(&mut self, record: NodeRecord) -> NodeId {
        NodeId {
            epoch: self.epoch,
            index: self.arena.insert(Slot {
                record,
                parent: None,
                children: Vec::new(),
            }),
        }
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(slot) = self.arena.get_mut(child.index) {
            slot.parent = Some(parent);
        }
        if let Some(slot) = self.arena.get_mut(parent.index) {
            slot.children.push(child);
        }
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        if id.epoch != self.epoch {
            return None;
        }
        self.arena.get(id.index)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first iterator over a [`Tree`], parents before children.
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a NodeRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let slot = self.tree.arena.get(id.index)?;
        for &child in slot.children.iter().rev() {
            self.stack.push(child);
        }
        Some((id, &slot.record))
    }
}

/// Depth-first iterator over a [`Tree`], children before parents.
pub struct Postorder<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> Iterator for Postorder<'a> {
    type Item = (NodeId, &'a NodeRecord);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            let slot = self.tree.arena.get(id.index)?;
            if expanded {
                return Some((id, &slot.record));
            }
            self.stack.push((id, true));
            for &child in slot.children.iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}
