//! Transpile - lift browser-global side effects out of a component
//!
//! Transpile reads one JavaScript, TypeScript, Vue or Svelte source file,
//! collects every statement that touches a browser global (`window`,
//! `document`, `localStorage`, ...) without that name being shadowed, and
//! re-emits the collected code inside the mount hook of several component
//! frameworks.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run loop, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing front-ends, scope resolution and global extraction
//! - `logger`: Tracing subscriber setup
//! - `output`: Rendering every variant and writing artifacts to disk
//! - `render`: Per-framework templates

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod output;
pub mod render;
