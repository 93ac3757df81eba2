//! Svelte script region lookup.
//!
//! The region is the first `<script ...>...</script>` pair found by a plain
//! text match. A second script block (e.g. `<script context="module">`) is
//! ignored, and script tags inside HTML comments or strings are matched as
//! if they were real.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<script[^>]*>([\s\S]*?)</script>").unwrap());

pub(super) fn first_script_block(text: &str) -> Option<String> {
    SCRIPT_BLOCK_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
