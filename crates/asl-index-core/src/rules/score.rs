use crate::rules::catalog::behaviour_weight;
use crate::signals::model::{BehaviourSet, FeatureSet};

/// Complexity points per code line. Line-based scoring is currently off;
/// `loc` is reported but never contributes.
pub const POINTS_PER_LOC: u32 = 0;

/// Scores a script: one point per feature plus the weight of each behaviour.
pub fn complexity(features: &FeatureSet, behaviours: &BehaviourSet, loc: u32) -> u32 {
    let feature_points = features.len() as u32;
    let behaviour_points: u32 = behaviours.iter().map(behaviour_weight).sum();

    feature_points + behaviour_points + loc.saturating_mul(POINTS_PER_LOC)
}
