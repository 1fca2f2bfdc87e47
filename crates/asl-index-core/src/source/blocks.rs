//! Named block extraction.
//!
//! Delimits the top-level `name { ... }` spans of a script without
//! understanding its grammar. The scanner is a single left-to-right pass
//! driven by an explicit cursor mode:
//!
//!   - `Scanning`            accumulate a candidate name, look for openers
//!   - `BalancingBraces(n)`  inside a block body, `n` unmatched `{`
//!   - `BalancingParens(n)`  inside a skipped `( ... )` span
//!   - `BalancingComment(n)` inside a skipped `/* ... */` span
//!
//! Balancing modes only count their own delimiter pair. Braces inside a
//! parenthesized span, or parentheses inside a body, are plain text.
//!
//! Unterminated spans never fail: the scan stops at end of input and an
//! open block keeps everything up to the end as its body.

use std::collections::BTreeMap;

/// Name of the declarative section that is never treated as a method.
const STATE_BLOCK: &str = "state";

const BRACES: (&str, &str) = ("{", "}");
const PARENS: (&str, &str) = ("(", ")");
const BLOCK_COMMENT: (&str, &str) = ("/*", "*/");

/// Extracted method bodies keyed by block name.
///
/// Bodies are whitespace-trimmed. Inserting a name twice keeps the later
/// body, and blocks named `state` are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockTable {
    blocks: BTreeMap<String, String>,
}

impl BlockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a block, trimming its body. Returns `false` for `state`.
    pub fn insert(&mut self, name: impl Into<String>, body: &str) -> bool {
        let name = name.into();
        if name == STATE_BLOCK {
            return false;
        }
        self.blocks.insert(name, body.trim().to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates `(name, body)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Scanning,
    BalancingBraces(usize),
    BalancingParens(usize),
    BalancingComment(usize),
}

impl Mode {
    /// `(open, close)` for balancing modes; `None` while scanning.
    fn delimiters(self) -> Option<(&'static str, &'static str)> {
        match self {
            Mode::Scanning => None,
            Mode::BalancingBraces(_) => Some(BRACES),
            Mode::BalancingParens(_) => Some(PARENS),
            Mode::BalancingComment(_) => Some(BLOCK_COMMENT),
        }
    }

    fn depth(self) -> usize {
        match self {
            Mode::Scanning => 0,
            Mode::BalancingBraces(d) | Mode::BalancingParens(d) | Mode::BalancingComment(d) => d,
        }
    }

    fn with_depth(self, depth: usize) -> Self {
        match self {
            Mode::Scanning => Mode::Scanning,
            Mode::BalancingBraces(_) => Mode::BalancingBraces(depth),
            Mode::BalancingParens(_) => Mode::BalancingParens(depth),
            Mode::BalancingComment(_) => Mode::BalancingComment(depth),
        }
    }
}

/// A block whose opening `{` has been consumed but not yet matched.
#[derive(Debug)]
struct OpenBlock {
    name: String,
    body_start: usize,
}

/// Scans comment-stripped source text and returns its top-level blocks.
///
/// The name buffer collects every non-whitespace character seen while
/// scanning (identifiers and punctuation alike) and is only reset when a
/// `{` claims it. Parenthesized and `/* */` spans are skipped without
/// touching the buffer, so `split(a, b) {` yields the name `split`.
pub fn extract_blocks(source: &str) -> BlockTable {
    let mut table = BlockTable::new();
    let mut mode = Mode::Scanning;
    let mut name = String::new();
    let mut open: Option<OpenBlock> = None;
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];

        let Some((open_delim, close_delim)) = mode.delimiters() else {
            if rest.starts_with(BRACES.0) {
                pos += BRACES.0.len();
                open = Some(OpenBlock {
                    name: std::mem::take(&mut name),
                    body_start: pos,
                });
                mode = Mode::BalancingBraces(1);
            } else if rest.starts_with(PARENS.0) {
                pos += PARENS.0.len();
                mode = Mode::BalancingParens(1);
            } else if rest.starts_with(BLOCK_COMMENT.0) {
                pos += BLOCK_COMMENT.0.len();
                mode = Mode::BalancingComment(1);
            } else if let Some(ch) = rest.chars().next() {
                if !ch.is_whitespace() {
                    name.push(ch);
                }
                pos += ch.len_utf8();
            }
            continue;
        };

        let depth = mode.depth();
        if rest.starts_with(open_delim) {
            pos += open_delim.len();
            mode = mode.with_depth(depth + 1);
        } else if rest.starts_with(close_delim) {
            let close_at = pos;
            pos += close_delim.len();

            if depth > 1 {
                mode = mode.with_depth(depth - 1);
                continue;
            }

            if let (Mode::BalancingBraces(_), Some(block)) = (mode, open.take()) {
                table.insert(block.name, &source[block.body_start..close_at]);
            }
            mode = Mode::Scanning;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    // Unterminated body: keep everything up to end of input.
    if let (Mode::BalancingBraces(_), Some(block)) = (mode, open) {
        table.insert(block.name, &source[block.body_start..]);
    }

    table
}
