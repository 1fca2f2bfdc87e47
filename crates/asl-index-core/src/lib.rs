pub mod config;
pub mod registry;
pub mod report;
pub mod rules;
pub mod signals;
pub mod source;
pub mod util;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::registry::fetch::{FetchError, Fetcher};
use crate::registry::parse::{RegistryEntry, parse_registry};
use crate::report::model::{Catalog, ScriptRecord, ToolInfo};
use crate::rules::classify::{classify_behaviours, classify_features};
use crate::rules::score::complexity;
use crate::signals::model::ScriptSignals;
use crate::source::blocks::extract_blocks;
use crate::source::fingerprint::ScriptSource;
use crate::source::strip::{count_code_lines, strip_line_comments};

pub const TOOL_NAME: &str = "asl-index";

/// JSON schema version of the catalogue output.
/// Bump only when the serialized `Catalog` shape changes.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Classifies one script's source text.
///
/// Pipeline: strip line comments → extract blocks → feature rules;
/// behaviour markers run over the raw text; the score combines both.
pub fn analyze(source: &str) -> ScriptSignals {
    let stripped = strip_line_comments(source);
    let blocks = extract_blocks(&stripped);

    let features = classify_features(&blocks);
    let behaviours = classify_behaviours(source);
    let loc = count_code_lines(source);

    ScriptSignals {
        features,
        behaviours,
        loc,
        complexity: complexity(&features, &behaviours, loc),
    }
}

/// Downloads the registry document. Failure here aborts the run.
pub fn fetch_registry(fetcher: &dyn Fetcher, url: &str) -> Result<String> {
    info!(url = %url, "fetching registry");
    let bytes = fetcher
        .fetch(url)
        .with_context(|| format!("failed to fetch registry from {url}"))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Downloads and classifies one registry entry.
pub fn collect_script(fetcher: &dyn Fetcher, entry: RegistryEntry) -> Result<ScriptRecord, FetchError> {
    info!(url = %entry.url, "fetching script");
    let bytes = fetcher.fetch(&entry.url)?;

    Ok(ScriptRecord::new(entry, ScriptSource::from_bytes(&bytes)))
}

/// Builds the catalogue from an already-retrieved registry document.
///
/// Scripts are processed one at a time. A script whose download fails is
/// logged and left out; only a malformed registry fails the whole batch.
pub fn build_catalog(
    registry_xml: &str,
    registry_url: &str,
    fetcher: &dyn Fetcher,
    tool: ToolInfo,
) -> Result<Catalog> {
    let entries = parse_registry(registry_xml).context("failed to parse registry")?;
    info!(count = entries.len(), "registry parsed");

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let game = entry.game.clone();
        match collect_script(fetcher, entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!(game = %game, "skipping script: {e}"),
        }
    }

    info!(count = records.len(), "scripts classified");
    Ok(Catalog::new(tool, registry_url, records))
}
