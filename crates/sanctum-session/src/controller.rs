//! The session controller and its response types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sanctum_graph::{GraphStore, Node, NodeKind, SafetyConfig};

use crate::artifact::{ArtifactOpportunity, artifact_opportunity};
use crate::error::{NavError, NavResult};
use crate::narrator::Narrator;
use crate::policy::IntensityPolicy;
use crate::session::{NavState, NavigationSession, VisitRecord};

/// One available move out of the current node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOption {
    /// Target node id.
    pub target: String,
    /// Target node display name.
    pub target_name: String,
    /// Type of the connecting edge.
    pub edge_type: String,
    /// The edge's human-readable note.
    pub note: Option<String>,
    /// The edge's weight, or 0.5 when unspecified.
    pub intensity_hint: f64,
}

/// Everything a caller learns from entering a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResult {
    /// The node entered.
    pub node: Node,
    /// The session state after settling in.
    pub state: NavState,
    /// Intensity contributed by this entry.
    pub intensity: f64,
    /// Enter effects triggered by the traversed edge type.
    pub triggered_effects: Vec<String>,
    /// Exit effects of the edge left behind. Recorded, not acted upon.
    pub departing_effects: Vec<String>,
    /// Narration line for this entry.
    pub narration: String,
    /// Content-generation opportunity, when intensity warrants one.
    pub artifact: Option<ArtifactOpportunity>,
    /// Valid moves out of this node.
    pub moves: Vec<MoveOption>,
    /// Opaque render hint for the presentation layer, if configured.
    pub render_hint: Option<Value>,
}

/// Outcome of a respawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespawnReport {
    /// The configured respawn node the session now occupies.
    pub current_node: String,
    /// Total respawns for this session, including this one.
    pub respawn_count: u32,
    /// Human-readable confirmation.
    pub message: String,
}

/// Derived safety booleans reported with a status snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyStatus {
    /// Whether accumulated intensity is still under the ceiling.
    pub within_intensity_limit: bool,
    /// Whether the respawn gate may be invoked.
    pub respawn_available: bool,
}

/// Read-only snapshot of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// The session's id.
    pub session_id: String,
    /// Node the visitor currently occupies, if any.
    pub current_node: Option<String>,
    /// Lifecycle state.
    pub state: NavState,
    /// Running sum of per-entry intensities.
    pub accumulated_intensity: f64,
    /// Number of nodes visited.
    pub nodes_visited: usize,
    /// Respawns so far.
    pub respawn_count: u32,
    /// Effect tags accumulated across the session.
    pub active_effects: Vec<String>,
    /// Derived safety booleans.
    pub safety: SafetyStatus,
}

/// The exploration session controller.
///
/// Owns every [`NavigationSession`] in an explicit map keyed by session
/// id; there is no ambient "current session". The graph store, policy,
/// and narrator it consults are read-only, so distinct sessions are
/// fully independent. Callers must serialize operations against the
/// same session id; a failed operation never mutates the session it
/// targeted.
#[derive(Debug)]
pub struct Navigator {
    store: GraphStore,
    policy: IntensityPolicy,
    narrator: Narrator,
    config: SafetyConfig,
    sessions: HashMap<String, NavigationSession>,
}

impl Navigator {
    /// Build a controller over a validated store and safety config.
    pub fn new(store: GraphStore, config: SafetyConfig) -> Self {
        Self {
            store,
            policy: IntensityPolicy::new(config.clone()),
            narrator: Narrator::default(),
            config,
            sessions: HashMap::new(),
        }
    }

    /// Replace the default narrator.
    pub fn with_narrator(mut self, narrator: Narrator) -> Self {
        self.narrator = narrator;
        self
    }

    /// The graph this controller serves.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// The safety configuration in force.
    pub fn config(&self) -> &SafetyConfig {
        &self.config
    }

    /// Look up a session by id.
    pub fn session(&self, session_id: &str) -> Option<&NavigationSession> {
        self.sessions.get(session_id)
    }

    /// Create a fresh idle session under a caller-supplied id.
    pub fn start(&mut self, session_id: &str) -> NavResult<&NavigationSession> {
        if self.sessions.contains_key(session_id) {
            return Err(NavError::DuplicateSession(session_id.to_string()));
        }
        let session = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| NavigationSession::new(session_id));
        Ok(session)
    }

    /// Enter a node, optionally via an edge type.
    ///
    /// Applies the edge type's enter effects, adds the (uncapped)
    /// per-entry intensity to the session total, appends a visit
    /// record, and settles the session into the node's state.
    pub fn enter(
        &mut self,
        session_id: &str,
        node_id: &str,
        edge_type: Option<&str>,
    ) -> NavResult<EntryResult> {
        // All lookups happen before any mutation so failures leave the
        // session untouched.
        if !self.sessions.contains_key(session_id) {
            return Err(NavError::UnknownSession(session_id.to_string()));
        }
        let node = self
            .store
            .node(node_id)
            .cloned()
            .ok_or_else(|| NavError::UnknownNode(node_id.to_string()))?;

        let triggered_effects: Vec<String> = edge_type
            .map(|t| self.store.behavior_for(t).on_enter.clone())
            .unwrap_or_default();

        let intensity = self.policy.entry_intensity(&node, &triggered_effects);
        let narration = self.narrator.narration_for(&node, edge_type);
        let artifact = artifact_opportunity(&node, intensity);
        let moves = self.moves_from(node_id);
        let render_hint = self.store.render_hint(node_id).cloned();

        let state = match node.kind {
            NodeKind::Room => NavState::InRoom,
            NodeKind::Faction => NavState::FactionEncounter,
        };

        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| NavError::UnknownSession(session_id.to_string()))?;
        session
            .active_effects
            .extend(triggered_effects.iter().cloned());
        session.accumulated_intensity += intensity;
        session.visit_history.push(VisitRecord {
            node_id: node_id.to_string(),
            intensity,
            edge_type: edge_type.map(str::to_string),
            entered_at: chrono::Utc::now(),
        });
        session.current_node = Some(node_id.to_string());
        session.state = state;

        Ok(EntryResult {
            node,
            state,
            intensity,
            triggered_effects,
            departing_effects: Vec::new(),
            narration,
            artifact,
            moves,
            render_hint,
        })
    }

    /// Traverse the edge from the current node to a target node.
    ///
    /// Passes through `Transitioning`, then delegates to [`enter`]
    /// with the edge's type. The edge's exit effects are surfaced in
    /// the result's `departing_effects`.
    ///
    /// [`enter`]: Navigator::enter
    pub fn traverse(&mut self, session_id: &str, target_node_id: &str) -> NavResult<EntryResult> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or_else(|| NavError::UnknownSession(session_id.to_string()))?;
        let current = session
            .current_node
            .clone()
            .ok_or_else(|| NavError::NoCurrentNode(session_id.to_string()))?;

        let edge = self
            .store
            .edge_between(&current, target_node_id)
            .cloned()
            .ok_or_else(|| NavError::NoSuchEdge {
                from: current.clone(),
                to: target_node_id.to_string(),
            })?;

        let departing_effects = self.store.behavior_for(&edge.edge_type).on_exit.clone();

        if let Some(session) = self.sessions.get_mut(session_id) {
            session.state = NavState::Transitioning;
        }

        let mut result = self.enter(session_id, target_node_id, Some(&edge.edge_type))?;
        result.departing_effects = departing_effects;
        Ok(result)
    }

    /// Reset a session through the respawn gate.
    ///
    /// The sole operation that decreases accumulated intensity. Every
    /// call returns the session to the same baseline, while the
    /// respawn count keeps incrementing.
    pub fn respawn(&mut self, session_id: &str) -> NavResult<RespawnReport> {
        if !self.config.respawn_enabled {
            // Check before touching the session; a disabled gate must
            // leave it byte-for-byte unchanged.
            if !self.sessions.contains_key(session_id) {
                return Err(NavError::UnknownSession(session_id.to_string()));
            }
            return Err(NavError::RespawnDisabled);
        }

        let respawn_node = self.config.respawn_node.clone();
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| NavError::UnknownSession(session_id.to_string()))?;

        session.accumulated_intensity = 0.0;
        session.active_effects.clear();
        session.current_node = Some(respawn_node.clone());
        session.state = NavState::RespawnGate;
        session.respawn_count += 1;

        Ok(RespawnReport {
            current_node: respawn_node,
            respawn_count: session.respawn_count,
            message: "Respawn gate activated. All intensity reset. A new walk begins.".to_string(),
        })
    }

    /// Read-only snapshot of a session and its safety standing.
    pub fn status(&self, session_id: &str) -> NavResult<StatusSnapshot> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or_else(|| NavError::UnknownSession(session_id.to_string()))?;

        Ok(StatusSnapshot {
            session_id: session.session_id.clone(),
            current_node: session.current_node.clone(),
            state: session.state,
            accumulated_intensity: session.accumulated_intensity,
            nodes_visited: session.visit_count(),
            respawn_count: session.respawn_count,
            active_effects: session.active_effects.clone(),
            safety: SafetyStatus {
                within_intensity_limit: session.accumulated_intensity
                    < self.config.max_intensity,
                respawn_available: self.config.respawn_enabled,
            },
        })
    }

    fn moves_from(&self, node_id: &str) -> Vec<MoveOption> {
        self.store
            .outgoing(node_id)
            .into_iter()
            .map(|edge| MoveOption {
                target: edge.to.clone(),
                target_name: self
                    .store
                    .node(&edge.to)
                    .map(|n| n.name.clone())
                    .unwrap_or_else(|| edge.to.clone()),
                edge_type: edge.edge_type.clone(),
                note: edge.note.clone(),
                intensity_hint: edge.weight.unwrap_or(0.5),
            })
            .collect()
    }
}
