//! Registry document parsing.
//!
//! The registry is an XML list of `AutoSplitter` elements. Only entries of
//! type `Script` pointing at non-WASM sources are kept; malformed entries
//! are logged and dropped without affecting their neighbours.

use roxmltree::{Document, Node};
use thiserror::Error;
use tracing::{debug, warn};

const ENTRY_TAG: &str = "AutoSplitter";
const SCRIPT_TYPE: &str = "Script";
const WASM_SUFFIX: &str = ".wasm";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("registry entry #{index} has no `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// One script listed in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub game: String,
    pub url: String,
    pub description: String,
    pub website: Option<String>,
}

/// Trimmed, non-empty text at `path` below `node`.
fn child_text<'a>(node: Node<'a, '_>, path: &[&str]) -> Option<&'a str> {
    let mut current = node;
    for tag in path {
        current = current.children().find(|n| n.has_tag_name(*tag))?;
    }
    current.text().map(str::trim).filter(|t| !t.is_empty())
}

fn required<'a>(
    node: Node<'a, '_>,
    index: usize,
    path: &[&str],
    field: &'static str,
) -> Result<&'a str, RegistryError> {
    child_text(node, path).ok_or(RegistryError::MissingField { index, field })
}

/// Reads one `AutoSplitter` element.
///
/// Returns `Ok(None)` for entries that are valid but not processed
/// (non-script components, WASM autosplitters).
pub fn read_entry(node: Node<'_, '_>, index: usize) -> Result<Option<RegistryEntry>, RegistryError> {
    let game = required(node, index, &["Games", "Game"], "Games/Game")?;

    let kind = required(node, index, &["Type"], "Type")?;
    if kind != SCRIPT_TYPE {
        debug!(game = %game, kind = %kind, "skipping non-script component");
        return Ok(None);
    }

    let url = required(node, index, &["URLs", "URL"], "URLs/URL")?;
    if url.ends_with(WASM_SUFFIX) {
        debug!(game = %game, url = %url, "skipping wasm autosplitter");
        return Ok(None);
    }

    let description = required(node, index, &["Description"], "Description")?;
    let website = child_text(node, &["Website"]).map(str::to_string);

    Ok(Some(RegistryEntry {
        game: game.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        website,
    }))
}

/// Parses the registry document into processable script entries.
///
/// A document that is not well-formed XML is an error. Individual
/// entries missing a required field are logged and skipped.
pub fn parse_registry(xml: &str) -> Result<Vec<RegistryEntry>, RegistryError> {
    let doc = Document::parse(xml)?;

    let mut entries = Vec::new();
    for (index, node) in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name(ENTRY_TAG))
        .enumerate()
    {
        match read_entry(node, index) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(e) => warn!("a component failed: {e}"),
        }
    }

    Ok(entries)
}
