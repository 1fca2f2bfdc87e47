use std::time::Duration;

/// Registry of community autosplitters.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/LiveSplit/LiveSplit.AutoSplitters/master/LiveSplit.AutoSplitters.xml";

/// Bound applied to every outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the HTML page lands when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "docs/index.html";

/// Batch run configuration.
///
/// `Default` reproduces the fixed, unparameterized run; the CLI only
/// overrides individual fields.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub registry_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", crate::TOOL_NAME, env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fixed_run() {
        let config = CatalogConfig::default();

        assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("asl-index/"));
    }
}
