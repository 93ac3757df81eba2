//! Global-reference extraction.
//!
//! Finds every statement that uses one of the configured browser globals
//! as a free identifier and collects its source text.

use std::{collections::HashSet, fmt};

use tracing::debug;

use crate::core::parsers::ParsedScript;
use crate::core::scope::ScopeTree;


/// Globals extracted when nothing else is configured.
pub const DEFAULT_GLOBALS: &[&str] = &["window", "document", "localStorage"];

/// Names treated as browser-provided ambient objects.
///
/// Keeps insertion order and ignores duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalIdentifierSet {
    names: Vec<String>,
}

impl GlobalIdentifierSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self { names: Vec::new() };
        for name in names {
            let name = name.into();
            if !set.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for GlobalIdentifierSet {
    fn default() -> Self {
        Self::new(DEFAULT_GLOBALS.iter().copied())
    }
}

/// Deduplicated statements in order of first appearance.
///
/// This is the only thing handed to the templates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GlobalCodeBlock {
    statements: Vec<String>,
}

impl GlobalCodeBlock {
    pub fn from_statements<I, S>(statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let statements = statements
            .into_iter()
            .map(Into::into)
            .filter(|statement: &String| seen.insert(statement.clone()))
            .collect();
        Self { statements }
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements joined by newlines.
    pub fn as_text(&self) -> String {
        self.statements.join("\n")
    }
}

impl fmt::Display for GlobalCodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Collect the statements of `parsed` holding a free reference to any name
/// in `globals`.
///
/// A statement using several globals, or one global several times, is
/// recorded once. Statements are compared by their trimmed source text.
pub fn extract_globals(parsed: &ParsedScript, globals: &GlobalIdentifierSet) -> GlobalCodeBlock {
    let tree = ScopeTree::build(&parsed.module);

    let statements = tree
        .references()
        .iter()
        .filter(|reference| globals.contains(&reference.name))
        .filter(|reference| {
            let free = tree.is_free(&reference.name, reference.scope);
            if !free {
                debug!(name = %reference.name, "skipping shadowed reference");
            }
            free
        })
        .filter_map(|reference| reference.statement)
        .filter_map(|span| parsed.snippet(span))
        .map(str::trim);

    let block = GlobalCodeBlock::from_statements(statements);
    debug!(
        references = tree.references().len(),
        scopes = tree.scope_count(),
        statements = block.len(),
        "extracted global statements"
    );
    block
}
