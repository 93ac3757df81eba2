//! Vue single-file component block splitting.
//!
//! Only the top level of the file is scanned. `<template>` blocks may nest
//! further `<template>` tags, so their closing tag is found by depth
//! counting; every other block ends at the first matching closing tag.

use std::sync::LazyLock;

use regex::Regex;

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s=/>"']+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#).unwrap()
});

/// One top-level block of a single-file component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock {
    pub tag: String,
    /// Attributes in source order; valueless attributes map to `None`.
    pub attrs: Vec<(String, Option<String>)>,
    pub content: String,
}

impl SfcBlock {
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key == name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }
}

/// The blocks of a Vue single-file component.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SfcDescriptor {
    pub template: Option<SfcBlock>,
    pub script: Option<SfcBlock>,
    pub script_setup: Option<SfcBlock>,
    pub styles: Vec<SfcBlock>,
    pub custom_blocks: Vec<SfcBlock>,
}

impl SfcDescriptor {
    pub fn parse(source: &str) -> Self {
        let mut descriptor = Self::default();
        for block in scan_blocks(source) {
            match block.tag.as_str() {
                "template" if descriptor.template.is_none() => descriptor.template = Some(block),
                "script" if block.has_attr("setup") => {
                    if descriptor.script_setup.is_none() {
                        descriptor.script_setup = Some(block);
                    }
                }
                "script" => {
                    if descriptor.script.is_none() {
                        descriptor.script = Some(block);
                    }
                }
                "style" => descriptor.styles.push(block),
                _ => descriptor.custom_blocks.push(block),
            }
        }
        descriptor
    }

    /// Program text of the component: the plain `<script>` block followed
    /// by the `<script setup>` block.
    pub fn script_content(&self) -> Option<String> {
        match (&self.script, &self.script_setup) {
            (Some(script), Some(setup)) => Some(format!("{}\n{}", script.content, setup.content)),
            (Some(block), None) | (None, Some(block)) => Some(block.content.clone()),
            (None, None) => None,
        }
    }
}

fn scan_blocks(source: &str) -> Vec<SfcBlock> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(offset) = source[pos..].find('<') {
        let lt = pos + offset;
        let rest = &source[lt..];

        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(end) => {
                    pos = lt + end + "-->".len();
                    continue;
                }
                None => break,
            }
        }

        let tag: String = rest[1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        if tag.is_empty() {
            pos = lt + 1;
            continue;
        }

        let attrs_start = lt + 1 + tag.len();
        let Some(gt) = find_tag_end(source, attrs_start) else {
            break;
        };
        let raw_attrs = source[attrs_start..gt].trim_end_matches('/');
        let attrs = parse_attrs(raw_attrs);

        if source[..gt].ends_with('/') {
            blocks.push(SfcBlock {
                tag,
                attrs,
                content: String::new(),
            });
            pos = gt + 1;
            continue;
        }

        let content_start = gt + 1;
        let close = if tag == "template" {
            find_template_close(source, content_start)
        } else {
            source[content_start..]
                .find(&format!("</{}", tag))
                .map(|off| content_start + off)
        };
        let Some(close) = close else {
            break;
        };

        blocks.push(SfcBlock {
            content: source[content_start..close].to_string(),
            tag,
            attrs,
        });

        pos = match source[close..].find('>') {
            Some(off) => close + off + 1,
            None => source.len(),
        };
    }

    blocks
}

/// Index of the `>` closing an opening tag, skipping quoted attribute values.
fn find_tag_end(source: &str, from: usize) -> Option<usize> {
    let mut quote = None;
    for (i, c) in source[from..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(from + i),
            (None, _) => {}
        }
    }
    None
}

fn find_template_close(source: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = from;

    while let Some(offset) = source[cursor..].find('<') {
        let at = cursor + offset;
        let rest = &source[at..];
        if rest.starts_with("</template") {
            depth -= 1;
            if depth == 0 {
                return Some(at);
            }
            cursor = at + "</template".len();
        } else if rest.starts_with("<template")
            && rest["<template".len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_whitespace() || c == '>')
        {
            depth += 1;
            cursor = at + "<template".len();
        } else {
            cursor = at + 1;
        }
    }
    None
}

fn parse_attrs(raw: &str) -> Vec<(String, Option<String>)> {
    ATTRIBUTE_REGEX
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string());
            Some((name, value))
        })
        .collect()
}
