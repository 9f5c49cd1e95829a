//! Synthesis of raw snippets from leaf heading groups.
//!
//! Each leaf heading names a snippet. Its prefix comes from inline code in the heading itself or
//! from the first paragraph or block quote beneath it that carries inline code. Every fenced
//! code block after the prefix is known becomes one raw snippet.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::heading::NestedHeading;
use crate::node::{Code, Node};
use crate::text_group::{extract_from_text_group, TextGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Snippet body and language tags before scope resolution.
pub struct RawSnippet {
    /// Trigger prefix.
    pub prefix: String,
    /// Code block content, one entry per line.
    pub body: Vec<String>,
    /// Lowercase language tags declared on the code block.
    pub langs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// All raw snippets found under one leaf heading.
pub struct HeadingSnippets {
    /// Snippet name derived from the heading text.
    pub name: String,
    /// Text accompanying the prefix in the paragraph that supplied it.
    pub description: Option<String>,
    /// One entry per code block after the prefix, in document order.
    pub snippets: Vec<RawSnippet>,
}

/// Language tags of a code block: `lang` followed by each word of `meta`, lowercased.
///
/// A block without `lang` has no tags, whatever its meta.
#[must_use]
pub fn code_langs(code: &Code) -> Vec<String> {
    let Some(lang) = &code.lang else {
        return Vec::new();
    };
    let mut langs = vec![lang.to_lowercase()];
    if let Some(meta) = &code.meta {
        langs.extend(meta.split_whitespace().map(str::to_lowercase));
    }
    langs
}

/// Text group of a block that may supply the prefix, if the block is of a kind that can.
fn prefix_source(content: &Node) -> Option<TextGroup> {
    match content {
        Node::Paragraph(children) => Some(extract_from_text_group(children)),
        Node::Blockquote(_) => {
            let paragraph = content.find_first(&|node| {
                matches!(node, Node::Paragraph(_)) && node.first_inline_code().is_some()
            });
            Some(paragraph.map_or_else(
                || TextGroup {
                    inline_code: content.first_inline_code().map(ToString::to_string),
                    text: String::new(),
                },
                |paragraph| extract_from_text_group(paragraph.children()),
            ))
        }
        _ => None,
    }
}

fn description_from(text: &str) -> Option<String> {
    let description = text.trim_start_matches(':').trim();
    (!description.is_empty()).then(|| description.to_string())
}

fn non_empty(code: Option<String>) -> Option<String> {
    code.filter(|value| !value.is_empty())
}

/// Collect raw snippets for every leaf heading, rejecting duplicate heading names.
///
/// Code blocks that appear before any prefix is known are skipped, and a heading without
/// code blocks still reserves its name.
///
/// # Errors
///
/// Returns [`Error::DuplicateHeading`] when two headings produce the same name.
pub fn raw_snippets_by_heading(groups: &[NestedHeading<'_>]) -> Result<Vec<HeadingSnippets>> {
    let mut seen = HashSet::new();
    let mut by_heading = Vec::with_capacity(groups.len());

    for group in groups {
        let TextGroup {
            inline_code,
            text: name,
        } = extract_from_text_group(&group.heading.children);

        if !seen.insert(name.clone()) {
            return Err(Error::DuplicateHeading { name });
        }

        let mut prefix = non_empty(inline_code);
        let mut description = None;
        let mut snippets = Vec::new();

        for content in &group.contents {
            if let Some(prefix) = &prefix {
                if let Node::Code(code) = content {
                    snippets.push(RawSnippet {
                        prefix: prefix.clone(),
                        body: code.value.split('\n').map(ToString::to_string).collect(),
                        langs: code_langs(code),
                    });
                }
            } else if let Some(source) = prefix_source(content) {
                prefix = non_empty(source.inline_code);
                if prefix.is_some() {
                    description = description_from(&source.text);
                }
            }
        }

        debug!(name = %name, snippets = snippets.len(), "synthesised heading");
        by_heading.push(HeadingSnippets {
            name,
            description,
            snippets,
        });
    }

    Ok(by_heading)
}

#[cfg(test)]
#[path = "tests/synth.rs"]
mod tests;
