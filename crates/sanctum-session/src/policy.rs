//! Intensity computation and effect classification.
//!
//! Pure functions only: the policy owns no mutable state and can be
//! consulted concurrently by any number of sessions. The keyword
//! families live behind [`classify_effect`] so they can change without
//! touching the state machine.

use sanctum_graph::{Node, NodeKind, SafetyConfig};

/// Intensity added by every entry before modifiers.
const BASE_INTENSITY: f64 = 0.3;
/// Added when the node is a faction encounter.
const FACTION_BONUS: f64 = 0.2;
/// Added when the node carries a configured high-intensity tag.
const HIGH_TAG_BONUS: f64 = 0.3;
/// Added per effect tag in the surge family.
const SURGE_BONUS: f64 = 0.2;
/// Added per effect tag in the disruption family.
const DISRUPTION_BONUS: f64 = 0.15;

/// How an effect tag's text reads to the intensity policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectClass {
    /// Raw energy: "intensity" / "lightning" wording.
    Surge,
    /// Unrest: "chaos" / "disruption" wording.
    Disruption,
    /// Everything else; contributes nothing.
    Neutral,
}

/// Classify an effect tag by its keywords (case-insensitive).
pub fn classify_effect(tag: &str) -> EffectClass {
    let lower = tag.to_lowercase();
    if lower.contains("intensity") || lower.contains("lightning") {
        EffectClass::Surge
    } else if lower.contains("chaos") || lower.contains("disruption") {
        EffectClass::Disruption
    } else {
        EffectClass::Neutral
    }
}

/// Computes per-entry intensity under the configured safety ceiling.
#[derive(Debug, Clone)]
pub struct IntensityPolicy {
    config: SafetyConfig,
}

impl IntensityPolicy {
    /// Build a policy from the loaded safety configuration.
    pub fn new(config: SafetyConfig) -> Self {
        Self { config }
    }

    /// The per-entry intensity ceiling.
    pub fn max_intensity(&self) -> f64 {
        self.config.max_intensity
    }

    /// Intensity contributed by entering `node` with these enter effects.
    ///
    /// The result is clamped to `[0, max_intensity]` no matter how many
    /// effects are present. This bounds each entry's contribution only;
    /// accumulating across visits is the controller's business.
    pub fn entry_intensity(&self, node: &Node, on_enter: &[String]) -> f64 {
        let mut intensity = BASE_INTENSITY;

        if node.kind == NodeKind::Faction {
            intensity += FACTION_BONUS;
        }
        if node
            .tag
            .as_deref()
            .is_some_and(|t| self.config.is_high_intensity(t))
        {
            intensity += HIGH_TAG_BONUS;
        }
        for effect in on_enter {
            intensity += match classify_effect(effect) {
                EffectClass::Surge => SURGE_BONUS,
                EffectClass::Disruption => DISRUPTION_BONUS,
                EffectClass::Neutral => 0.0,
            };
        }

        // Not `clamp`: a malformed config could carry a negative
        // ceiling, and the floor at zero must still win.
        intensity.min(self.config.max_intensity).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn policy() -> IntensityPolicy {
        IntensityPolicy::new(
            SafetyConfig::default()
                .with_max_intensity(1.0)
                .with_high_intensity_tag("storm"),
        )
    }

    #[test]
    fn plain_room_is_base() {
        let node = Node::new("atrium", NodeKind::Room, "the Atrium");
        assert_eq!(policy().entry_intensity(&node, &[]), 0.3);
    }

    #[test]
    fn faction_adds_bonus() {
        let node = Node::new("choir", NodeKind::Faction, "the Choir");
        assert_eq!(policy().entry_intensity(&node, &[]), 0.5);
    }

    #[test]
    fn high_tag_adds_bonus() {
        let node = Node::new("spire", NodeKind::Room, "the Spire").with_tag("storm");
        assert_eq!(policy().entry_intensity(&node, &[]), 0.6);
    }

    #[test]
    fn unconfigured_tag_adds_nothing() {
        let node = Node::new("spire", NodeKind::Room, "the Spire").with_tag("calm");
        assert_eq!(policy().entry_intensity(&node, &[]), 0.3);
    }

    #[test]
    fn effect_keywords_stack() {
        let node = Node::new("atrium", NodeKind::Room, "the Atrium");
        let effects = vec!["lightning surge".to_string(), "chaos ripple".to_string()];
        // 0.3 + 0.2 + 0.15
        let got = policy().entry_intensity(&node, &effects);
        assert!((got - 0.65).abs() < 1e-9);
    }

    #[test]
    fn surge_takes_precedence_over_disruption() {
        // A tag matching both families counts once, as surge.
        assert_eq!(classify_effect("lightning chaos"), EffectClass::Surge);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_effect("LIGHTNING crown"), EffectClass::Surge);
        assert_eq!(classify_effect("quiet Disruption"), EffectClass::Disruption);
        assert_eq!(classify_effect("soft rain"), EffectClass::Neutral);
    }

    #[test]
    fn clamped_at_ceiling() {
        let node = Node::new("choir", NodeKind::Faction, "the Choir").with_tag("storm");
        let effects: Vec<String> = (0..10).map(|i| format!("lightning {i}")).collect();
        assert_eq!(policy().entry_intensity(&node, &effects), 1.0);
    }

    #[test]
    fn respects_lower_ceiling() {
        let tight = IntensityPolicy::new(SafetyConfig::default().with_max_intensity(0.4));
        let node = Node::new("choir", NodeKind::Faction, "the Choir");
        assert_eq!(tight.entry_intensity(&node, &[]), 0.4);
    }

    proptest! {
        #[test]
        fn entry_intensity_always_in_bounds(
            is_faction in any::<bool>(),
            tag in proptest::option::of("[a-z ]{0,16}"),
            effects in proptest::collection::vec("[a-zA-Z ]{0,24}", 0..12),
            max in 0.0f64..2.0,
        ) {
            let kind = if is_faction { NodeKind::Faction } else { NodeKind::Room };
            let mut node = Node::new("n", kind, "Node");
            node.tag = tag;
            let p = IntensityPolicy::new(
                SafetyConfig::default()
                    .with_max_intensity(max)
                    .with_high_intensity_tag("storm"),
            );
            let got = p.entry_intensity(&node, &effects);
            prop_assert!(got >= 0.0);
            prop_assert!(got <= max);
        }
    }
}
