use thiserror::Error;

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while loading or validating graph definitions.
///
/// Integrity failures are fatal: a graph that references missing nodes
/// or repeats an edge pair must not be served.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge references a node id absent from the node set.
    #[error("graph integrity: edge {from} -> {to} references unknown node \"{missing}\"")]
    MissingEndpoint {
        /// Source node id of the offending edge.
        from: String,
        /// Target node id of the offending edge.
        to: String,
        /// The endpoint that does not exist.
        missing: String,
    },

    /// Two edges share the same ordered `(from, to)` pair.
    #[error("graph integrity: duplicate edge {from} -> {to}")]
    DuplicateEdge {
        /// Source node id of the repeated pair.
        from: String,
        /// Target node id of the repeated pair.
        to: String,
    },

    /// Two nodes share the same id.
    #[error("graph integrity: duplicate node id \"{0}\"")]
    DuplicateNode(String),

    /// A definition document could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable document.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A definition document is not valid JSON for its expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the malformed document.
        path: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}
