/*!
A record of a derivation.

A trace is a tree which mirrors the recursion of a derivation:
- The root is labelled with the query.
- Each rule attempted is a node labelled with the rule, whose children record the derivation of the premise of the rule.
- Each goal resolved without (further) rules is a leaf.

Every node is tagged with an [Outcome] once resolved.
For the root this is the answer to the query, and for a rule this is whether the rule established its conclusion.

Sibling nodes may share a label, e.g. when an atom is required twice by a conjunction.
Telling these apart, if needed, is left to whatever displays a trace.
*/

use serde::Serialize;

/// How a goal was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Derived as true.
    Proved,

    /// Failed to derive.
    Failed,

    /// True, from an earlier derivation during the same query.
    AlreadyProved,

    /// False, from an earlier derivation during the same query.
    AlreadyFailed,
}

impl Outcome {
    pub fn fresh(value: bool) -> Self {
        match value {
            true => Self::Proved,
            false => Self::Failed,
        }
    }

    pub fn cached(value: bool) -> Self {
        match value {
            true => Self::AlreadyProved,
            false => Self::AlreadyFailed,
        }
    }

    pub fn value(&self) -> bool {
        matches!(self, Self::Proved | Self::AlreadyProved)
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, Self::AlreadyProved | Self::AlreadyFailed)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proved => write!(f, "true"),
            Self::Failed => write!(f, "false"),
            Self::AlreadyProved => write!(f, "true (already proved)"),
            Self::AlreadyFailed => write!(f, "false (already proved)"),
        }
    }
}

/// A node of a trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceNode {
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TraceNode>,
}

impl TraceNode {
    /// A node to which the record of some attempt will be added, and which is yet to be resolved.
    pub fn branch(label: impl Into<String>) -> Self {
        TraceNode {
            label: label.into(),
            outcome: None,
            children: Vec::default(),
        }
    }

    pub fn leaf(label: impl Into<String>, outcome: Outcome) -> Self {
        TraceNode {
            label: label.into(),
            outcome: Some(outcome),
            children: Vec::default(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The first child with the given label, if any.
    pub fn child(&self, label: &str) -> Option<&TraceNode> {
        self.children.iter().find(|child| child.label == label)
    }

    /// All nodes of the trace, in depth first order, starting with this node.
    pub fn iter(&self) -> TraceIter<'_> {
        TraceIter { stack: vec![self] }
    }
}

/// A depth first iterator over the nodes of a trace.
pub struct TraceIter<'t> {
    stack: Vec<&'t TraceNode>,
}

impl<'t> Iterator for TraceIter<'t> {
    type Item = &'t TraceNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
