//! Definition tables for the Sanctum exploration engine.
//!
//! This crate holds everything that is loaded once and read-only
//! thereafter: the node/edge graph, the per-edge-type behavior table,
//! the safety configuration, and opaque render hints. It owns no
//! session state. A [`GraphStore`] can be constructed programmatically
//! or loaded from a directory of JSON definition documents.

/// Edge types, behavior tables, and edge data.
pub mod edge;
/// Error types used throughout the crate.
pub mod error;
/// Definition document shapes and directory loading.
pub mod load;
/// Node types and identifiers.
pub mod node;
/// Safety limits applied to exploration sessions.
pub mod safety;
/// The validated, immutable graph store.
pub mod store;

/// Re-export edge types.
pub use edge::{Edge, EdgeBehavior};
/// Re-export error types.
pub use error::{GraphError, GraphResult};
/// Re-export directory loading.
pub use load::{GraphDoc, HintsDoc, RulesDoc, load_dir};
/// Re-export node types.
pub use node::{Node, NodeKind};
/// Re-export safety configuration.
pub use safety::SafetyConfig;
/// Re-export the graph store.
pub use store::GraphStore;
