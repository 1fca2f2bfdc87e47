//! Immutable rule tables driving classification and scoring.
//!
//! Classifiers only walk these tables; adding a rule never touches
//! parsing or classification code.

use crate::signals::model::{Behaviour, Feature};

/// Method that reports game time directly. Tagged regardless of its body.
pub const GAME_TIME_METHOD: &str = "gameTime";

/// Method name → feature, applied only to non-trivial bodies.
pub const FEATURE_RULES: &[(&str, Feature)] = &[
    ("isLoading", Feature::LoadRemoval),
    ("start", Feature::Start),
    ("onStart", Feature::OnStart),
    ("reset", Feature::Reset),
    ("onReset", Feature::OnReset),
    ("split", Feature::Split),
    ("startup", Feature::Startup),
    ("update", Feature::Update),
    ("init", Feature::Init),
];

/// Raw source marker → behaviour. Several markers may share a behaviour.
pub const BEHAVIOUR_MARKERS: &[(&str, Behaviour)] = &[
    ("SignatureScanner", Behaviour::SignatureScanner),
    ("version =", Behaviour::DetectsVersions),
    (".WriteBytes", Behaviour::WritesMemory),
    ("MemoryWatcher", Behaviour::MemoryWatcher),
    ("settings.Add", Behaviour::Settings),
    ("Func<", Behaviour::Functions),
    ("Action<", Behaviour::Functions),
    (".MemoryPages", Behaviour::MemoryPages),
];

/// Complexity points per behaviour. Behaviours not listed score 0.
pub const BEHAVIOUR_WEIGHTS: &[(Behaviour, u32)] = &[
    (Behaviour::SignatureScanner, 4),
    (Behaviour::WritesMemory, 5),
    (Behaviour::MemoryWatcher, 2),
    (Behaviour::Settings, 1),
    (Behaviour::Functions, 1),
    (Behaviour::DetectsVersions, 2),
];

pub fn feature_for_method(name: &str) -> Option<Feature> {
    FEATURE_RULES
        .iter()
        .find(|(method, _)| *method == name)
        .map(|(_, feature)| *feature)
}

pub fn behaviour_weight(behaviour: Behaviour) -> u32 {
    BEHAVIOUR_WEIGHTS
        .iter()
        .find(|(b, _)| *b == behaviour)
        .map_or(0, |(_, weight)| *weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn method_names_are_unique() {
        let names: HashSet<&str> = FEATURE_RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), FEATURE_RULES.len());
        assert!(!names.contains(&GAME_TIME_METHOD));
    }

    #[test]
    fn game_time_has_no_name_rule() {
        assert!(
            FEATURE_RULES
                .iter()
                .all(|(_, feature)| *feature != Feature::GameTime)
        );
    }

    #[test]
    fn lookups() {
        assert_eq!(feature_for_method("isLoading"), Some(Feature::LoadRemoval));
        assert_eq!(feature_for_method("onReset"), Some(Feature::OnReset));
        assert_eq!(feature_for_method("Start"), None);
        assert_eq!(feature_for_method("gameTime"), None);
    }

    #[test]
    fn unweighted_behaviours_score_zero() {
        assert_eq!(behaviour_weight(Behaviour::WritesMemory), 5);
        assert_eq!(behaviour_weight(Behaviour::DebugOutput), 0);
        assert_eq!(behaviour_weight(Behaviour::Comments), 0);
        assert_eq!(behaviour_weight(Behaviour::MemoryPages), 0);
    }
}
