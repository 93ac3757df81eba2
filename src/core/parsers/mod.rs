//! Source parsers.
//!
//! - `script`: JavaScript/TypeScript/JSX program parser (uses swc for AST generation)

pub mod script;

pub use script::{ParsedScript, parse_script_source};
