use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Process-wide safety limits for exploration sessions.
///
/// Loaded with the rules document and immutable thereafter. The maximum
/// bounds each entry's intensity contribution; it does not cap a
/// session's accumulated total, which is reported against the limit but
/// never clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyConfig {
    /// Ceiling for a single entry's intensity contribution.
    #[serde(default = "default_max_intensity")]
    pub max_intensity: f64,
    /// Whether the respawn gate may be invoked at all.
    #[serde(default = "default_respawn_enabled")]
    pub respawn_enabled: bool,
    /// Node a session is placed at after a respawn.
    pub respawn_node: String,
    /// Node tags that mark a location as high-intensity.
    #[serde(default)]
    pub high_intensity_tags: HashSet<String>,
}

fn default_max_intensity() -> f64 {
    1.0
}

fn default_respawn_enabled() -> bool {
    true
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_intensity: 1.0,
            respawn_enabled: true,
            respawn_node: String::new(),
            high_intensity_tags: HashSet::new(),
        }
    }
}

impl SafetyConfig {
    /// Set the per-entry intensity ceiling (floored at zero).
    pub fn with_max_intensity(mut self, max: f64) -> Self {
        self.max_intensity = max.max(0.0);
        self
    }

    /// Enable or disable the respawn gate.
    pub fn with_respawn_enabled(mut self, enabled: bool) -> Self {
        self.respawn_enabled = enabled;
        self
    }

    /// Set the respawn node id.
    pub fn with_respawn_node(mut self, node: impl Into<String>) -> Self {
        self.respawn_node = node.into();
        self
    }

    /// Add a tag to the high-intensity set.
    pub fn with_high_intensity_tag(mut self, tag: impl Into<String>) -> Self {
        self.high_intensity_tags.insert(tag.into());
        self
    }

    /// Whether a node tag marks its node as high-intensity.
    pub fn is_high_intensity(&self, tag: &str) -> bool {
        self.high_intensity_tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SafetyConfig::default();
        assert_eq!(cfg.max_intensity, 1.0);
        assert!(cfg.respawn_enabled);
        assert!(cfg.high_intensity_tags.is_empty());
    }

    #[test]
    fn builder_methods() {
        let cfg = SafetyConfig::default()
            .with_max_intensity(0.7)
            .with_respawn_enabled(false)
            .with_respawn_node("still-gate")
            .with_high_intensity_tag("storm");
        assert_eq!(cfg.max_intensity, 0.7);
        assert!(!cfg.respawn_enabled);
        assert_eq!(cfg.respawn_node, "still-gate");
        assert!(cfg.is_high_intensity("storm"));
        assert!(!cfg.is_high_intensity("calm"));
    }

    #[test]
    fn max_intensity_floored_at_zero() {
        let cfg = SafetyConfig::default().with_max_intensity(-1.0);
        assert_eq!(cfg.max_intensity, 0.0);
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: SafetyConfig = serde_json::from_str(r#"{"respawnNode":"gate"}"#).unwrap();
        assert_eq!(cfg.max_intensity, 1.0);
        assert!(cfg.respawn_enabled);
        assert_eq!(cfg.respawn_node, "gate");
    }
}
