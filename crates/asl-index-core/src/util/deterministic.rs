//! Deterministic ordering helpers.

use crate::report::model::ScriptRecord;

/// Sort records by game name, ignoring case.
///
/// The sort is stable: games whose names differ only in case keep their
/// registry order.
pub fn sort_by_game(records: &mut [ScriptRecord]) {
    records.sort_by_cached_key(|r| r.game.to_lowercase());
}
