//! Narration tables for node entries.
//!
//! Two static tables: an entry line per node id, and a short suffix per
//! edge type describing how the visitor arrived. Both are fixed at
//! construction; the controller only ever reads them.

use std::collections::HashMap;

use sanctum_graph::Node;

/// Fallback line for nodes without a configured entry.
const GENERIC_ENTRY: &str = "You have entered a sacred space.";

/// Produces the narration string for a node entry.
#[derive(Debug, Clone)]
pub struct Narrator {
    node_lines: HashMap<String, String>,
    edge_lines: HashMap<String, String>,
}

impl Default for Narrator {
    /// A narrator with suffixes for the standard edge-type vocabulary
    /// and no per-node lines.
    fn default() -> Self {
        let edge_lines = [
            ("amplifies", "The energy builds toward a crescendo."),
            ("requiresReset", "A fresh start beckons through the gate."),
            ("seeksProtection", "Shelter and counsel offer their embrace."),
            ("summons", "Unseen presences gather at the threshold."),
            ("tests", "Your resolve faces quiet examination."),
            ("influences", "Old knowledge passes hand to hand."),
            ("inspires", "A creative spark kindles as you cross."),
            ("feeds", "Strength flows toward the work ahead."),
            ("fortifies", "The walls seem to settle and hold."),
            ("grounds", "What was airy takes on weight and form."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            node_lines: HashMap::new(),
            edge_lines,
        }
    }
}

impl Narrator {
    /// Install an entry line for a node id.
    pub fn with_node_line(mut self, node_id: impl Into<String>, line: impl Into<String>) -> Self {
        self.node_lines.insert(node_id.into(), line.into());
        self
    }

    /// Install (or replace) a suffix for an edge type.
    pub fn with_edge_line(mut self, edge_type: impl Into<String>, line: impl Into<String>) -> Self {
        self.edge_lines.insert(edge_type.into(), line.into());
        self
    }

    /// The narration for entering `node`, optionally via an edge type.
    ///
    /// Unknown nodes get a generic line; unknown edge types add nothing.
    pub fn narration_for(&self, node: &Node, edge_type: Option<&str>) -> String {
        let mut line = self
            .node_lines
            .get(&node.id)
            .map(String::as_str)
            .unwrap_or(GENERIC_ENTRY)
            .to_string();

        if let Some(suffix) = edge_type.and_then(|t| self.edge_lines.get(t)) {
            line.push(' ');
            line.push_str(suffix);
        }

        line
    }
}
