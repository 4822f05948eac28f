use std::fmt;

use crate::kind::NodeKind;

/// Data carried by a single tree node.
///
/// A record is a plain value: constructing one performs no validation, and
/// `behavior` is simply present or absent. Whether a given kind ought to
/// carry a behavior is editing policy, not a property of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub kind: NodeKind,
    pub name: String,
    pub behavior: Option<String>,
}

impl NodeRecord {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            behavior: None,
        }
    }

    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.behavior = Some(behavior.into());
        self
    }
}

impl fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
