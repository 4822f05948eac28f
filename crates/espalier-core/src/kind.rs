use std::fmt;

/// Role of a node in a behaviour tree.
///
/// `Selector`, `Sequence` and `Loop` are composites; `Condition` and `Action`
/// are leaves that refer to a named behavior. Authoring surfaces accept free
/// text, so text outside the canonical set is preserved verbatim as
/// [`NodeKind::Custom`] instead of being rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Selector,
    Sequence,
    Loop,
    Condition,
    Action,
    Custom(String),
}

impl NodeKind {
    /// The canonical kinds, in menu order.
    pub const CANONICAL: [NodeKind; 6] = [
        NodeKind::Root,
        NodeKind::Selector,
        NodeKind::Sequence,
        NodeKind::Loop,
        NodeKind::Condition,
        NodeKind::Action,
    ];

    /// Parse kind text. Never fails: unrecognized text becomes [`NodeKind::Custom`].
    pub fn parse(text: &str) -> NodeKind {
        match text {
            "Root" => NodeKind::Root,
            "Selector" => NodeKind::Selector,
            "Sequence" => NodeKind::Sequence,
            "Loop" => NodeKind::Loop,
            "Condition" => NodeKind::Condition,
            "Action" => NodeKind::Action,
            other => NodeKind::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Selector => "Selector",
            NodeKind::Sequence => "Sequence",
            NodeKind::Loop => "Loop",
            NodeKind::Condition => "Condition",
            NodeKind::Action => "Action",
            NodeKind::Custom(text) => text,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, NodeKind::Custom(_))
    }

    /// Leaf kinds that must name the behavior they invoke.
    pub fn requires_behavior(&self) -> bool {
        matches!(self, NodeKind::Condition | NodeKind::Action)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
