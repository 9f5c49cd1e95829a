//! Markdown format implementation using tree-sitter-md.
//!
//! The block grammar gives document structure. Headings and paragraphs hold `inline` nodes whose
//! text is parsed again with the inline grammar to find code spans, emphasis and links. The
//! block grammar nests content in `section` nodes per heading; these are flattened so that
//! headings and their content end up as siblings under the root.

use tree_sitter::{Language, Node as TsNode, Parser, Tree};

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::node::{Code, Heading, Node};

/// GitHub-flavoured markdown parsed with tree-sitter-md.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn inline_language(&self) -> Language {
        tree_sitter_md::INLINE_LANGUAGE.into()
    }

    fn parse(&self, source: &str) -> Result<Node> {
        let mut block = parser_for(&self.language())?;
        let tree = parse_tree(&mut block, source)?;
        let mut converter = Converter {
            source,
            inline: parser_for(&self.inline_language())?,
        };
        let children = converter.blocks(tree.root_node())?;
        Ok(Node::Root(children))
    }
}

fn parser_for(language: &Language) -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| Error::Parse(e.to_string()))?;
    Ok(parser)
}

fn parse_tree(parser: &mut Parser, text: &str) -> Result<Tree> {
    parser
        .parse(text, None)
        .ok_or_else(|| Error::Parse("tree-sitter produced no tree".to_string()))
}

fn slice(text: &str, start: usize, end: usize) -> &str {
    text.get(start..end).unwrap_or_default()
}

fn named_children(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

struct Converter<'s> {
    source: &'s str,
    inline: Parser,
}

impl Converter<'_> {
    fn text(&self, node: TsNode<'_>) -> &str {
        slice(self.source, node.start_byte(), node.end_byte())
    }

    /// Source of `node` with block quote and list continuation markers cut out.
    fn text_without_continuations(&self, node: TsNode<'_>) -> String {
        let mut out = String::new();
        let mut pos = node.start_byte();
        for child in named_children(node) {
            if child.kind() == "block_continuation" {
                out.push_str(slice(self.source, pos, child.start_byte()));
                pos = child.end_byte();
            }
        }
        out.push_str(slice(self.source, pos, node.end_byte()));
        out
    }

    fn blocks(&mut self, node: TsNode<'_>) -> Result<Vec<Node>> {
        let mut out = Vec::new();
        for child in named_children(node) {
            out.extend(self.block(child)?);
        }
        Ok(out)
    }

    fn block(&mut self, node: TsNode<'_>) -> Result<Vec<Node>> {
        let converted = match node.kind() {
            "section" => return self.blocks(node),
            "atx_heading" => Node::Heading(self.atx_heading(node)?),
            "setext_heading" => Node::Heading(self.setext_heading(node)?),
            "paragraph" => Node::Paragraph(self.paragraph_inlines(node)?),
            "block_quote" => Node::Blockquote(self.blocks(node)?),
            "fenced_code_block" => Node::Code(self.fenced_code(node)),
            "indented_code_block" => Node::Code(self.indented_code(node)),
            "html_block" => Node::Html(self.text(node).trim_end().to_string()),
            "inline" => {
                let text = self.text_without_continuations(node);
                Node::Group(self.inlines(text.trim())?)
            }
            _ => {
                let children = self.blocks(node)?;
                if children.is_empty() {
                    return Ok(Vec::new());
                }
                Node::Group(children)
            }
        };
        Ok(vec![converted])
    }

    fn atx_heading(&mut self, node: TsNode<'_>) -> Result<Heading> {
        let mut depth = 1;
        let mut children = Vec::new();
        for child in named_children(node) {
            let kind = child.kind();
            if let Some(level) = kind
                .strip_prefix("atx_h")
                .and_then(|rest| rest.strip_suffix("_marker"))
                .and_then(|level| level.parse().ok())
            {
                depth = level;
            } else if kind == "inline" {
                let text = self.text_without_continuations(child);
                children = self.inlines(strip_closing_sequence(text.trim()))?;
            }
        }
        Ok(Heading { depth, children })
    }

    fn setext_heading(&mut self, node: TsNode<'_>) -> Result<Heading> {
        let mut depth = 1;
        let mut children = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "setext_h2_underline" => depth = 2,
                "paragraph" => children = self.paragraph_inlines(child)?,
                _ => {}
            }
        }
        Ok(Heading { depth, children })
    }

    fn paragraph_inlines(&mut self, node: TsNode<'_>) -> Result<Vec<Node>> {
        let text = named_children(node)
            .into_iter()
            .filter(|child| child.kind() == "inline")
            .map(|child| self.text_without_continuations(child))
            .collect::<Vec<_>>()
            .join("\n");
        let text = text
            .lines()
            .map(str::trim_start)
            .collect::<Vec<_>>()
            .join("\n");
        self.inlines(text.trim_end())
    }

    fn fenced_code(&self, node: TsNode<'_>) -> Code {
        let mut code = Code::default();
        let mut indent = None;
        for child in named_children(node) {
            match child.kind() {
                "fenced_code_block_delimiter" if indent.is_none() => {
                    indent = Some(self.indent_before(child));
                }
                "info_string" => {
                    let info = self.text(child).trim();
                    let (lang, meta) = info
                        .split_once(char::is_whitespace)
                        .map_or((info, ""), |(lang, meta)| (lang, meta.trim()));
                    code.lang = (!lang.is_empty()).then(|| lang.to_string());
                    code.meta = (!meta.is_empty()).then(|| meta.to_string());
                }
                "code_fence_content" => code.value = self.text_without_continuations(child),
                _ => {}
            }
        }

        let content = strip_final_newline(&code.value);
        code.value = dedent(content, indent.unwrap_or(0));
        code
    }

    fn indented_code(&self, node: TsNode<'_>) -> Code {
        let text = self.text_without_continuations(node);
        let value = dedent(&text, 4);
        Code {
            value: value.trim_end_matches(['\n', '\r']).to_string(),
            ..Code::default()
        }
    }

    /// Spaces before a fence on its line, zero if anything else precedes it.
    fn indent_before(&self, node: TsNode<'_>) -> usize {
        let start = node.start_byte();
        let line_start = slice(self.source, 0, start)
            .rfind('\n')
            .map_or(0, |i| i + 1);
        let prefix = slice(self.source, line_start, start);
        if prefix.bytes().all(|b| b == b' ') {
            prefix.len()
        } else {
            0
        }
    }

    fn inlines(&mut self, text: &str) -> Result<Vec<Node>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let tree = parse_tree(&mut self.inline, text)?;
        Ok(convert_span(tree.root_node(), text, 0, text.len()))
    }
}

/// Convert the inline children of `node` lying within `start..end` of `text`.
///
/// Text between child nodes is accumulated into [`Node::Text`] runs so that adjacent plain
/// text and escapes form a single text node. Autolinks become link groups of their own.
fn convert_span(node: TsNode<'_>, text: &str, start: usize, end: usize) -> Vec<Node> {
    let mut out = Vec::new();
    let mut buffer = String::new();
    let mut pos = start;

    for child in named_children(node) {
        if child.start_byte() < pos || child.end_byte() > end {
            continue;
        }
        buffer.push_str(slice(text, pos, child.start_byte()));
        pos = child.end_byte();

        match child.kind() {
            "code_span" => {
                flush_text(&mut buffer, &mut out);
                out.push(Node::InlineCode(code_span_value(child, text)));
            }
            "emphasis" | "strong_emphasis" | "strikethrough" => {
                flush_text(&mut buffer, &mut out);
                out.push(Node::Group(convert_span(
                    child,
                    text,
                    child.start_byte(),
                    child.end_byte(),
                )));
            }
            "inline_link" | "full_reference_link" | "collapsed_reference_link"
            | "shortcut_link" | "image" => {
                flush_text(&mut buffer, &mut out);
                out.push(Node::Group(link_label(child, text)));
            }
            "html_tag" => {
                flush_text(&mut buffer, &mut out);
                out.push(Node::Html(slice(text, child.start_byte(), child.end_byte()).to_string()));
            }
            "uri_autolink" | "email_autolink" => {
                flush_text(&mut buffer, &mut out);
                let url =
                    slice(text, child.start_byte(), child.end_byte()).trim_matches(['<', '>']);
                out.push(Node::Group(vec![Node::Text(url.to_string())]));
            }
            "backslash_escape" => {
                buffer.push_str(slice(text, child.start_byte() + 1, child.end_byte()));
            }
            "hard_line_break" => {
                flush_text(&mut buffer, &mut out);
                out.push(Node::Break);
            }
            "emphasis_delimiter" | "code_span_delimiter" => {}
            _ => buffer.push_str(slice(text, child.start_byte(), child.end_byte())),
        }
    }

    buffer.push_str(slice(text, pos, end));
    flush_text(&mut buffer, &mut out);
    out
}

fn flush_text(buffer: &mut String, out: &mut Vec<Node>) {
    if !buffer.is_empty() {
        out.push(Node::Text(std::mem::take(buffer)));
    }
}

/// Visible label of a link or image, without its brackets.
fn link_label(node: TsNode<'_>, text: &str) -> Vec<Node> {
    let Some(label) = named_children(node)
        .into_iter()
        .find(|child| matches!(child.kind(), "link_text" | "image_description"))
    else {
        return Vec::new();
    };
    let mut start = label.start_byte();
    let mut end = label.end_byte();
    if slice(text, start, start + 1) == "[" {
        start += 1;
    }
    if end > start && slice(text, end - 1, end) == "]" {
        end -= 1;
    }
    convert_span(label, text, start, end)
}

/// Content of a code span: line endings become spaces, and one space is stripped from each
/// side when both sides have one and the content is not only spaces.
fn code_span_value(node: TsNode<'_>, text: &str) -> String {
    let delimiters: Vec<_> = named_children(node)
        .into_iter()
        .filter(|child| child.kind() == "code_span_delimiter")
        .collect();
    let raw = match (delimiters.first(), delimiters.last()) {
        (Some(open), Some(close)) if delimiters.len() > 1 => {
            slice(text, open.end_byte(), close.start_byte())
        }
        _ => slice(text, node.start_byte(), node.end_byte()).trim_matches('`'),
    };

    let value = raw.replace("\r\n", " ").replace('\n', " ");
    let strip = value.len() >= 2
        && value.starts_with(' ')
        && value.ends_with(' ')
        && !value.bytes().all(|b| b == b' ');
    if strip {
        value[1..value.len() - 1].to_string()
    } else {
        value
    }
}

/// Remove an ATX closing sequence such as the ` ##` in `## Title ##`.
fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.len() == text.len() {
        return text;
    }
    if without.is_empty() {
        return without;
    }
    if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Remove up to `width` leading spaces from every line.
fn dedent(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| {
            let spaces = line.bytes().take(width).take_while(|b| *b == b' ').count();
            &line[spaces..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
