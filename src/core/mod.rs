//! Core analysis engine.
//!
//! Runs in a single pass per input file:
//!
//! 1. **Front-end** (`frontend`): pick the format from the extension and cut
//!    the script region out of single-file components.
//! 2. **Parse** (`parsers`): turn that script into an swc `Module`.
//! 3. **Scope** (`scope`): build the scope table and the ordered list of
//!    identifier references.
//! 4. **Extract** (`extract`): keep the statements holding free references
//!    to the configured globals.

pub mod extract;
pub mod frontend;
pub mod parsers;
pub mod scope;

pub use extract::{GlobalCodeBlock, GlobalIdentifierSet, extract_globals};
pub use frontend::{ScriptExtractor, SourceFormat, load_script};
pub use parsers::{ParsedScript, parse_script_source};
pub use scope::{Reference, ScopeId, ScopeKind, ScopeTree};
