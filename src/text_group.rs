//! Splitting a heading or paragraph into a trigger prefix and its surrounding text.
//!
//! Authors write headings like ``Use Ref (`useRef`)`` or paragraphs like
//! `` `usr`: description text ``, so the inline code span is taken as the prefix and the
//! punctuation left around it is stripped from the text.

use crate::node::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A heading or paragraph split into its first inline code span and remaining text.
pub struct TextGroup {
    /// Value of the first inline code span, if any.
    pub inline_code: Option<String>,
    /// Remaining plain text.
    pub text: String,
}

/// Split the inline children of a heading or paragraph into prefix candidate and text.
///
/// Without inline code the text is the flattened content minus a trailing colon. With inline
/// code only the node's direct text children are kept, each cleaned of the separators authors
/// put around the code span, and joined with single spaces.
#[must_use]
pub fn extract_from_text_group(children: &[Node]) -> TextGroup {
    let Some(inline_code) = children.iter().find_map(Node::first_inline_code) else {
        let text: String = children.iter().map(Node::to_plain_text).collect();
        return TextGroup {
            inline_code: None,
            text: strip_trailing_colon(&text).to_string(),
        };
    };

    let text = children
        .iter()
        .filter_map(|child| match child {
            Node::Text(value) => Some(clean_separators(value)),
            _ => None,
        })
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    TextGroup {
        inline_code: Some(inline_code.to_string()),
        text: strip_trailing_colon(&text).to_string(),
    }
}

fn clean_separators(value: &str) -> String {
    let value = value.strip_suffix(").").unwrap_or(value);
    let value = value.replacen(')', "", 1).replacen('(', "", 1);
    let value = value.strip_prefix(". ").unwrap_or(&value);
    value.trim().to_string()
}

fn strip_trailing_colon(text: &str) -> &str {
    text.strip_suffix(':').unwrap_or(text)
}

#[cfg(test)]
#[path = "tests/text_group.rs"]
mod tests;
