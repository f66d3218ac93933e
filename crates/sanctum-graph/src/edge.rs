use serde::{Deserialize, Serialize};

/// A directed, typed connection between two nodes.
///
/// At most one edge may exist per ordered `(from, to)` pair. The edge
/// type is free vocabulary; types without an entry in the behavior
/// table simply contribute no effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Edge type, the key into the behavior table.
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Human-readable description of the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Intensity hint in `[0, 1]` shown to callers as a move option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Edge {
    /// Create a new edge with no note or weight.
    pub fn new(
        from: impl Into<String>,
        edge_type: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
            note: None,
            weight: None,
        }
    }

    /// Attach a human-readable note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Attach an intensity hint.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Effect tags fired when an edge of a given type is traversed.
///
/// Both lists are ordered and opaque to this crate; the session layer's
/// policy interprets them by keyword.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeBehavior {
    /// Effects applied when entering the target node.
    #[serde(default)]
    pub on_enter: Vec<String>,
    /// Effects resolved when leaving the source node.
    #[serde(default)]
    pub on_exit: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains() {
        let edge = Edge::new("atrium", "amplifies", "choir")
            .with_note("the hum grows")
            .with_weight(0.8);
        assert_eq!(edge.edge_type, "amplifies");
        assert_eq!(edge.weight, Some(0.8));
    }

    #[test]
    fn edge_type_serializes_as_type() {
        let edge = Edge::new("a", "grounds", "b");
        let json = serde_json::to_string(&edge).unwrap();
        assert!(json.contains(r#""type":"grounds""#));
    }

    #[test]
    fn behavior_defaults_to_empty() {
        let behavior: EdgeBehavior = serde_json::from_str("{}").unwrap();
        assert!(behavior.on_enter.is_empty());
        assert!(behavior.on_exit.is_empty());
    }
}
