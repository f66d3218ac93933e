//! Session state: lifecycle states, visit records, the session itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// `Transitioning` is held only momentarily while traversing an edge,
/// before the session settles into the target node's state. There is no
/// terminal state; a session stays usable across repeated traversals
/// and respawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavState {
    /// Fresh session, no node entered yet.
    Idle,
    /// Settled in a room node.
    InRoom,
    /// Settled in a faction node.
    FactionEncounter,
    /// Mid-edge, between nodes.
    Transitioning,
    /// Just reset through the respawn gate.
    RespawnGate,
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::InRoom => write!(f, "in room"),
            Self::FactionEncounter => write!(f, "faction encounter"),
            Self::Transitioning => write!(f, "transitioning"),
            Self::RespawnGate => write!(f, "respawn gate"),
        }
    }
}

/// One entry in a session's visit history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    /// The node entered.
    pub node_id: String,
    /// Intensity contributed by this entry.
    pub intensity: f64,
    /// Edge type traversed to arrive, if any.
    pub edge_type: Option<String>,
    /// Wall-clock entry time. Cosmetic; never used in decisions.
    pub entered_at: DateTime<Utc>,
}

/// The mutable state of one visitor's walk through the graph.
///
/// Owned exclusively by the controller. Visit history and active
/// effects are append-only within a session; accumulated intensity only
/// ever decreases through a respawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSession {
    /// Caller-supplied session id.
    pub session_id: String,
    /// Node the visitor currently occupies, if any.
    pub current_node: Option<String>,
    /// Lifecycle state.
    pub state: NavState,
    /// Every node entry, in order.
    pub visit_history: Vec<VisitRecord>,
    /// Effect tags accumulated across the session, never pruned.
    pub active_effects: Vec<String>,
    /// Running sum of per-entry intensities.
    pub accumulated_intensity: f64,
    /// How many times this session has passed the respawn gate.
    pub respawn_count: u32,
}

impl NavigationSession {
    /// Create a fresh idle session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            current_node: None,
            state: NavState::Idle,
            visit_history: Vec::new(),
            active_effects: Vec::new(),
            accumulated_intensity: 0.0,
            respawn_count: 0,
        }
    }

    /// Number of nodes visited so far.
    pub fn visit_count(&self) -> usize {
        self.visit_history.len()
    }
}
