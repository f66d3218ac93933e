//! Error types for the exploration session engine.

use thiserror::Error;

/// Result type for session operations.
pub type NavResult<T> = Result<T, NavError>;

/// Errors raised by session operations.
///
/// All of these are recoverable caller-input errors: the session in
/// question is left unchanged and the caller may retry with corrected
/// input. None are retried internally.
#[derive(Debug, Error)]
pub enum NavError {
    /// No session is tracked under this id.
    #[error("unknown session: \"{0}\"")]
    UnknownSession(String),

    /// A session with this id already exists.
    #[error("session already exists: \"{0}\"")]
    DuplicateSession(String),

    /// The requested node is not in the graph.
    #[error("unknown node: \"{0}\"")]
    UnknownNode(String),

    /// The session has not entered any node yet.
    #[error("session \"{0}\" has no current node to traverse from")]
    NoCurrentNode(String),

    /// No direct edge connects the current node to the target.
    #[error("no edge from \"{from}\" to \"{to}\"")]
    NoSuchEdge {
        /// The session's current node.
        from: String,
        /// The requested target node.
        to: String,
    },

    /// The respawn gate is disabled by the safety configuration.
    #[error("respawn is disabled")]
    RespawnDisabled,
}
