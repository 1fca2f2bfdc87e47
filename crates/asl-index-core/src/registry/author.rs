//! Author attribution for registry entries.

use regex::Regex;
use std::sync::OnceLock;

/// Shown when no author can be derived.
pub const UNKNOWN_AUTHOR: &str = "?";

#[allow(clippy::unwrap_used)] // Static regex pattern is hardcoded and valid
fn credit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\(By ([^)]+)").unwrap())
}

#[allow(clippy::unwrap_used)] // Static regex pattern is hardcoded and valid
fn github_owner_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"githubusercontent\.com/([^/]+)").unwrap())
}

/// Derives the script author.
///
/// Tries, in order: the first `(By <name>` credit in the description
/// (case-insensitive), the repository owner of a `githubusercontent.com`
/// URL, then [`UNKNOWN_AUTHOR`].
pub fn derive_author(description: &str, url: &str) -> String {
    credit_re()
        .captures(description)
        .or_else(|| github_owner_re().captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
