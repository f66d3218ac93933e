//! The Sanctum exploration session engine.
//!
//! Moves a visitor through a fixed directed graph of rooms and faction
//! encounters, applies edge-triggered effects, accumulates a bounded
//! per-entry "intensity" resource, gates content-generation
//! opportunities on that resource, and provides a safety-capped reset.
//!
//! [`Navigator`] is the only stateful component; everything it consults
//! (the graph store, the intensity policy, the narration tables) is
//! read-only after load and shared freely across sessions.

/// Artifact-opportunity gating.
pub mod artifact;
/// The session controller and its response types.
pub mod controller;
/// Error types for session operations.
pub mod error;
/// Narration tables for node entries.
pub mod narrator;
/// Intensity computation and effect classification.
pub mod policy;
/// Session state: lifecycle states, visit records, the session itself.
pub mod session;

/// Re-export artifact types.
pub use artifact::{ArtifactOpportunity, QualityTier, artifact_opportunity};
/// Re-export the controller and its responses.
pub use controller::{
    EntryResult, MoveOption, Navigator, RespawnReport, SafetyStatus, StatusSnapshot,
};
/// Re-export error types.
pub use error::{NavError, NavResult};
/// Re-export the narrator.
pub use narrator::Narrator;
/// Re-export the intensity policy.
pub use policy::{EffectClass, IntensityPolicy};
/// Re-export session state types.
pub use session::{NavState, NavigationSession, VisitRecord};
