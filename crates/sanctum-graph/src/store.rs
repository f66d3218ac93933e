use std::collections::HashMap;

use serde_json::Value;

use crate::edge::{Edge, EdgeBehavior};
use crate::error::{GraphError, GraphResult};
use crate::node::Node;

/// The validated, immutable exploration graph.
///
/// Nodes and edges are referenced by id, never by pointer. Validation
/// happens once at construction; after that every lookup is infallible
/// or returns `Option`/empty, and the store is safe to share across any
/// number of sessions.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: HashMap<String, Node>,
    node_order: Vec<String>,
    edges: Vec<Edge>,
    behaviors: HashMap<String, EdgeBehavior>,
    render_hints: HashMap<String, Value>,

    // Indexes
    outgoing: HashMap<String, Vec<usize>>,
    by_pair: HashMap<(String, String), usize>,

    empty_behavior: EdgeBehavior,
}

impl GraphStore {
    /// Build a store from definition data, validating graph integrity.
    ///
    /// Fails if a node id repeats, an edge references a node outside the
    /// node set, or an ordered `(from, to)` pair appears twice.
    pub fn new(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        behaviors: HashMap<String, EdgeBehavior>,
    ) -> GraphResult<Self> {
        let mut node_map = HashMap::with_capacity(nodes.len());
        let mut node_order = Vec::with_capacity(nodes.len());
        for node in nodes {
            if node_map.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
            node_order.push(node.id.clone());
            node_map.insert(node.id.clone(), node);
        }

        let mut outgoing: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_pair = HashMap::with_capacity(edges.len());
        for (idx, edge) in edges.iter().enumerate() {
            for endpoint in [&edge.from, &edge.to] {
                if !node_map.contains_key(endpoint) {
                    return Err(GraphError::MissingEndpoint {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            let pair = (edge.from.clone(), edge.to.clone());
            if by_pair.insert(pair, idx).is_some() {
                return Err(GraphError::DuplicateEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }
            outgoing.entry(edge.from.clone()).or_default().push(idx);
        }

        Ok(Self {
            nodes: node_map,
            node_order,
            edges,
            behaviors,
            render_hints: HashMap::new(),
            outgoing,
            by_pair,
            empty_behavior: EdgeBehavior::default(),
        })
    }

    /// Attach render hints (opaque pass-through metadata keyed by node id).
    pub fn with_render_hints(mut self, hints: HashMap<String, Value>) -> Self {
        self.render_hints = hints;
        self
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All edges leaving a node, in definition order.
    ///
    /// Empty when the node has no outgoing edges or does not exist.
    pub fn outgoing(&self, node_id: &str) -> Vec<&Edge> {
        self.outgoing
            .get(node_id)
            .map(|ids| ids.iter().map(|&i| &self.edges[i]).collect())
            .unwrap_or_default()
    }

    /// The edge between an ordered pair of nodes, if one exists.
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&Edge> {
        self.by_pair
            .get(&(from.to_string(), to.to_string()))
            .map(|&i| &self.edges[i])
    }

    /// The behavior for an edge type.
    ///
    /// An edge type absent from the behavior table is valid and yields
    /// the empty behavior, not an error.
    pub fn behavior_for(&self, edge_type: &str) -> &EdgeBehavior {
        self.behaviors.get(edge_type).unwrap_or(&self.empty_behavior)
    }

    /// The render hint for a node, if the hints document provided one.
    pub fn render_hint(&self, node_id: &str) -> Option<&Value> {
        self.render_hints.get(node_id)
    }

    /// All nodes, in definition order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// All edges, in definition order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn two_rooms() -> Vec<Node> {
        vec![
            Node::new("atrium", NodeKind::Room, "the Atrium"),
            Node::new("crypt", NodeKind::Room, "the Crypt"),
        ]
    }

    #[test]
    fn valid_graph_builds() {
        let edges = vec![Edge::new("atrium", "grounds", "crypt")];
        let store = GraphStore::new(two_rooms(), edges, HashMap::new()).unwrap();
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert!(store.node("atrium").is_some());
        assert!(store.node("nave").is_none());
    }

    #[test]
    fn edge_to_unknown_node_rejected() {
        let edges = vec![Edge::new("atrium", "grounds", "nave")];
        let err = GraphStore::new(two_rooms(), edges, HashMap::new()).unwrap_err();
        assert!(matches!(err, GraphError::MissingEndpoint { missing, .. } if missing == "nave"));
    }

    #[test]
    fn duplicate_pair_rejected() {
        let edges = vec![
            Edge::new("atrium", "grounds", "crypt"),
            Edge::new("atrium", "feeds", "crypt"),
        ];
        let err = GraphStore::new(two_rooms(), edges, HashMap::new()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
    }

    #[test]
    fn reverse_pair_allowed() {
        let edges = vec![
            Edge::new("atrium", "grounds", "crypt"),
            Edge::new("crypt", "feeds", "atrium"),
        ];
        assert!(GraphStore::new(two_rooms(), edges, HashMap::new()).is_ok());
    }

    #[test]
    fn duplicate_node_rejected() {
        let nodes = vec![
            Node::new("atrium", NodeKind::Room, "the Atrium"),
            Node::new("atrium", NodeKind::Faction, "the Other Atrium"),
        ];
        let err = GraphStore::new(nodes, Vec::new(), HashMap::new()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode(id) if id == "atrium"));
    }

    #[test]
    fn outgoing_preserves_definition_order() {
        let mut nodes = two_rooms();
        nodes.push(Node::new("nave", NodeKind::Room, "the Nave"));
        let edges = vec![
            Edge::new("atrium", "grounds", "crypt"),
            Edge::new("atrium", "inspires", "nave"),
        ];
        let store = GraphStore::new(nodes, edges, HashMap::new()).unwrap();
        let out = store.outgoing("atrium");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].to, "crypt");
        assert_eq!(out[1].to, "nave");
        assert!(store.outgoing("crypt").is_empty());
        assert!(store.outgoing("missing").is_empty());
    }

    #[test]
    fn edge_between_is_directional() {
        let edges = vec![Edge::new("atrium", "grounds", "crypt")];
        let store = GraphStore::new(two_rooms(), edges, HashMap::new()).unwrap();
        assert!(store.edge_between("atrium", "crypt").is_some());
        assert!(store.edge_between("crypt", "atrium").is_none());
    }

    #[test]
    fn unknown_behavior_is_empty() {
        let mut behaviors = HashMap::new();
        behaviors.insert(
            "amplifies".to_string(),
            EdgeBehavior {
                on_enter: vec!["surge".to_string()],
                on_exit: vec![],
            },
        );
        let store = GraphStore::new(two_rooms(), Vec::new(), behaviors).unwrap();
        assert_eq!(store.behavior_for("amplifies").on_enter.len(), 1);
        assert!(store.behavior_for("unmapped").on_enter.is_empty());
        assert!(store.behavior_for("unmapped").on_exit.is_empty());
    }

    #[test]
    fn render_hints_pass_through() {
        let mut hints = HashMap::new();
        hints.insert(
            "atrium".to_string(),
            serde_json::json!({"palette": "dawn gold"}),
        );
        let store = GraphStore::new(two_rooms(), Vec::new(), HashMap::new())
            .unwrap()
            .with_render_hints(hints);
        assert!(store.render_hint("atrium").is_some());
        assert!(store.render_hint("crypt").is_none());
    }
}
