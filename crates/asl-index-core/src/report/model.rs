use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::registry::author::derive_author;
use crate::registry::parse::RegistryEntry;
use crate::signals::model::ScriptSignals;
use crate::source::fingerprint::ScriptSource;
use crate::util::deterministic::sort_by_game;

/// One downloaded and classified script.
///
/// Built once per successful download and read-only afterwards. Lives for
/// a single batch run.
#[derive(Debug, Clone)]
pub struct ScriptRecord {
    pub game: String,
    pub url: String,
    pub description: String,
    pub author: String,
    pub website: Option<String>,
    pub source: String,
    pub source_info: SourceInfo,
    pub signals: ScriptSignals,
}

impl ScriptRecord {
    /// Attributes and classifies a downloaded script.
    pub fn new(entry: RegistryEntry, source: ScriptSource) -> Self {
        let author = derive_author(&entry.description, &entry.url);
        let signals = crate::analyze(&source.text);
        let source_info = source.info();

        Self {
            game: entry.game,
            url: entry.url,
            description: entry.description,
            author,
            website: entry.website,
            source: source.text,
            source_info,
            signals,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Identity of the downloaded script bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceInfo {
    pub size_bytes: u64,
    pub sha256: String,
}

/// Top-level catalogue handed to the renderers.
///
/// Entries are ordered by game name, case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub registry_url: String,
    pub script_count: usize,
    pub scripts: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(tool: ToolInfo, registry_url: impl Into<String>, mut records: Vec<ScriptRecord>) -> Self {
        sort_by_game(&mut records);

        let scripts: Vec<CatalogEntry> = records.into_iter().map(CatalogEntry::from).collect();

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            registry_url: registry_url.into(),
            script_count: scripts.len(),
            scripts,
        }
    }
}

/// Render-facing script entry. Tags are flattened to display labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub game: String,
    pub url: String,
    pub description: String,
    pub author: String,
    pub website: Option<String>,
    pub source: String,
    pub source_info: SourceInfo,
    pub loc: u32,
    pub features: Vec<String>,
    pub behaviours: Vec<String>,
    pub complexity: u32,
}

impl From<ScriptRecord> for CatalogEntry {
    fn from(record: ScriptRecord) -> Self {
        Self {
            features: record.signals.features.labels(),
            behaviours: record.signals.behaviours.labels(),
            loc: record.signals.loc,
            complexity: record.signals.complexity,
            game: record.game,
            url: record.url,
            description: record.description,
            author: record.author,
            website: record.website,
            source: record.source,
            source_info: record.source_info,
        }
    }
}
