use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a graph node.
///
/// The kind selects the session state a visitor settles into on entry
/// and feeds the intensity policy (faction encounters run hotter than
/// rooms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A navigable chamber or space.
    Room,
    /// An encounter with a resident faction.
    Faction,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => write!(f, "room"),
            Self::Faction => write!(f, "faction"),
        }
    }
}

/// A named location or encounter in the exploration graph.
///
/// Nodes are immutable after load; the full node set is fixed for the
/// lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier, referenced by edges and sessions.
    pub id: String,
    /// Whether this is a room or a faction encounter.
    pub kind: NodeKind,
    /// Display name of the node.
    pub name: String,
    /// Symbolic overlay label, consulted for high-intensity status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Artifact type handed through to external generators, unused here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
}

impl Node {
    /// Create a new node with no tag or artifact type.
    pub fn new(id: impl Into<String>, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            tag: None,
            artifact_type: None,
        }
    }

    /// Attach a symbolic tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach an artifact type for external generators.
    pub fn with_artifact(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }
}
