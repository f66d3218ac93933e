//! Artifact-opportunity gating.
//!
//! A pure check with no side effects: it returns a descriptor that the
//! caller may hand to an external art or text generator. The engine
//! never invokes such a generator itself and does not depend on one
//! existing.

use serde::{Deserialize, Serialize};

use sanctum_graph::Node;

/// Intensity above which an opportunity is offered.
const OFFER_THRESHOLD: f64 = 0.6;
/// Intensity above which the offered tier is high.
const HIGH_TIER_THRESHOLD: f64 = 0.8;

/// Quality tier suggested to the external generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Ordinary output.
    Standard,
    /// Exceptional output, warranted by very high intensity.
    High,
}

/// A signal that external content generation is warranted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactOpportunity {
    /// The node's declared artifact type, passed through unchanged.
    pub artifact_type: String,
    /// Suggested quality tier for the generator.
    pub quality: QualityTier,
    /// Ready-made prompt for the generator.
    pub prompt: String,
}

/// Check whether entering a node at this intensity warrants an artifact.
///
/// Offered only above the threshold, and only for nodes that declare an
/// artifact type; there is nothing to generate otherwise.
pub fn artifact_opportunity(node: &Node, intensity: f64) -> Option<ArtifactOpportunity> {
    if intensity <= OFFER_THRESHOLD {
        return None;
    }
    let artifact_type = node.artifact_type.clone()?;

    let quality = if intensity > HIGH_TIER_THRESHOLD {
        QualityTier::High
    } else {
        QualityTier::Standard
    };
    let prompt = format!("Generate {artifact_type} in the style of {}", node.name);

    Some(ArtifactOpportunity {
        artifact_type,
        quality,
        prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanctum_graph::NodeKind;

    fn artifact_node() -> Node {
        Node::new("choir", NodeKind::Faction, "the Choir of Sparks").with_artifact("hymn")
    }

    #[test]
    fn below_threshold_not_offered() {
        assert!(artifact_opportunity(&artifact_node(), 0.5).is_none());
        assert!(artifact_opportunity(&artifact_node(), 0.6).is_none());
    }

    #[test]
    fn standard_tier_between_thresholds() {
        let offer = artifact_opportunity(&artifact_node(), 0.7).unwrap();
        assert_eq!(offer.quality, QualityTier::Standard);
        assert_eq!(offer.artifact_type, "hymn");
    }

    #[test]
    fn high_tier_above_upper_threshold() {
        let offer = artifact_opportunity(&artifact_node(), 0.9).unwrap();
        assert_eq!(offer.quality, QualityTier::High);
    }

    #[test]
    fn boundary_point_eight_is_standard() {
        let offer = artifact_opportunity(&artifact_node(), 0.8).unwrap();
        assert_eq!(offer.quality, QualityTier::Standard);
    }

    #[test]
    fn node_without_artifact_type_never_offers() {
        let bare = Node::new("atrium", NodeKind::Room, "the Atrium");
        assert!(artifact_opportunity(&bare, 1.0).is_none());
    }

    #[test]
    fn prompt_names_the_node() {
        let offer = artifact_opportunity(&artifact_node(), 0.9).unwrap();
        assert_eq!(offer.prompt, "Generate hymn in the style of the Choir of Sparks");
    }
}
