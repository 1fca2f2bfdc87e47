//! Heuristic classification of autosplitter scripts.
//!
//! Two independent classifiers:
//!
//!   - features:   named methods from the block table, filtered by a
//!                 triviality predicate on their bodies
//!   - behaviours: plain substring markers over the raw source
//!
//! Neither classifier depends on table iteration order. The only
//! cross-tag adjustment is that game time suppresses load removal.

use crate::rules::catalog::{BEHAVIOUR_MARKERS, GAME_TIME_METHOD, feature_for_method};
use crate::signals::model::{BehaviourSet, Feature, FeatureSet};
use crate::source::blocks::BlockTable;

/// Returns `true` when a body is a single unconditional `return false`.
///
/// Trivial means the body mentions `return false` and contains exactly one
/// `return`. Anything else, including `if (x) return false; return true;`,
/// is treated as real logic.
pub fn is_trivial_body(body: &str) -> bool {
    body.contains("return false") && body.matches("return").count() == 1
}

/// Derives feature tags from extracted method blocks.
///
/// Rule-table methods are tagged only when their body is non-empty and
/// non-trivial. `gameTime` is tagged unconditionally. If game time is
/// present, load removal is dropped.
pub fn classify_features(blocks: &BlockTable) -> FeatureSet {
    let mut features = FeatureSet::new();

    for (name, body) in blocks.iter() {
        if name == GAME_TIME_METHOD {
            features.insert(Feature::GameTime);
            continue;
        }

        let Some(feature) = feature_for_method(name) else {
            continue;
        };

        if !body.is_empty() && !is_trivial_body(body) {
            features.insert(feature);
        }
    }

    if features.contains(Feature::GameTime) {
        features.remove(Feature::LoadRemoval);
    }

    features
}

/// Derives behaviour tags from the raw, un-stripped source.
pub fn classify_behaviours(source: &str) -> BehaviourSet {
    BEHAVIOUR_MARKERS
        .iter()
        .filter(|(marker, _)| source.contains(marker))
        .map(|(_, behaviour)| *behaviour)
        .collect()
}
