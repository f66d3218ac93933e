//! Definition document shapes and directory loading.
//!
//! A graph definition lives in three JSON documents inside one
//! directory: `graph.json` (nodes and edges), `rules.json` (edge
//! behaviors and safety limits), and an optional `hints.json` (opaque
//! render metadata for an external presentation layer).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::edge::{Edge, EdgeBehavior};
use crate::error::{GraphError, GraphResult};
use crate::node::Node;
use crate::safety::SafetyConfig;
use crate::store::GraphStore;

/// File name of the node/edge document.
pub const GRAPH_FILE: &str = "graph.json";
/// File name of the behaviors/safety document.
pub const RULES_FILE: &str = "rules.json";
/// File name of the optional render-hint document.
pub const HINTS_FILE: &str = "hints.json";

/// The node/edge document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDoc {
    /// All nodes in the graph.
    pub nodes: Vec<Node>,
    /// All directed edges between them.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// The behaviors/safety document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesDoc {
    /// Effect lists keyed by edge type.
    #[serde(default)]
    pub edge_behaviors: HashMap<String, EdgeBehavior>,
    /// Session safety limits.
    pub safety: SafetyConfig,
}

/// The render-hint document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintsDoc {
    /// Opaque per-node render metadata, passed through untouched.
    #[serde(default)]
    pub render_hints: HashMap<String, Value>,
}

/// Load and validate a graph definition directory.
///
/// Reads `graph.json` and `rules.json`, plus `hints.json` when present,
/// and returns the validated store together with the safety config.
pub fn load_dir(dir: &Path) -> GraphResult<(GraphStore, SafetyConfig)> {
    let graph: GraphDoc = read_doc(&dir.join(GRAPH_FILE))?;
    let rules: RulesDoc = read_doc(&dir.join(RULES_FILE))?;

    let hints_path = dir.join(HINTS_FILE);
    let hints: HintsDoc = if hints_path.exists() {
        read_doc(&hints_path)?
    } else {
        HintsDoc::default()
    };

    let store = GraphStore::new(graph.nodes, graph.edges, rules.edge_behaviors)?
        .with_render_hints(hints.render_hints);
    Ok((store, rules.safety))
}

fn read_doc<T: serde::de::DeserializeOwned>(path: &Path) -> GraphResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| GraphError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| GraphError::Parse {
        path: path.display().to_string(),
        source,
    })
}
