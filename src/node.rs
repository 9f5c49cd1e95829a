//! Document tree representation consumed by snippet extraction.
//!
//! The markdown format converts its tree-sitter parse into this closed set of node kinds so
//! that extraction can pattern-match exhaustively instead of dispatching on grammar strings.
//! Each variant carries only the fields extraction needs.

#[derive(Clone, Debug, PartialEq, Eq)]
/// A node of a parsed markdown document.
pub enum Node {
    /// The whole document; its children are the top-level blocks.
    Root(Vec<Node>),
    /// An ATX or setext heading.
    Heading(Heading),
    /// A paragraph of inline content.
    Paragraph(Vec<Node>),
    /// A block quote containing further blocks.
    Blockquote(Vec<Node>),
    /// A fenced or indented code block.
    Code(Code),
    /// An inline code span, holding its normalised content.
    InlineCode(String),
    /// A run of plain text.
    Text(String),
    /// Raw HTML, either a block or an inline tag.
    Html(String),
    /// A hard line break inside inline content.
    Break,
    /// Any other container (lists, tables, emphasis, links) whose own shape is irrelevant.
    Group(Vec<Node>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Heading with its nesting depth (1 for `#`).
pub struct Heading {
    /// Nesting depth, 1 through 6.
    pub depth: u8,
    /// Inline content of the heading line.
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
/// Code block with its info string split into language and meta.
pub struct Code {
    /// First word of the info string.
    pub lang: Option<String>,
    /// Remainder of the info string after the language.
    pub meta: Option<String>,
    /// Block content without the trailing newline.
    pub value: String,
}

impl Node {
    /// Direct children of container nodes, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::Blockquote(children)
            | Node::Group(children)
            | Node::Heading(Heading { children, .. }) => children,
            Node::Code(_)
            | Node::InlineCode(_)
            | Node::Text(_)
            | Node::Html(_)
            | Node::Break => &[],
        }
    }

    /// Depth-first, pre-order search for the first node (this one included) matching `pred`.
    pub fn find_first<'a, P>(&'a self, pred: &P) -> Option<&'a Node>
    where
        P: Fn(&Node) -> bool,
    {
        if pred(self) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_first(pred))
    }

    /// Value of the first inline code span in this subtree.
    #[must_use]
    pub fn first_inline_code(&self) -> Option<&str> {
        match self.find_first(&|node| matches!(node, Node::InlineCode(_))) {
            Some(Node::InlineCode(value)) => Some(value),
            _ => None,
        }
    }

    /// Concatenated literal content of this subtree.
    ///
    /// Leaves contribute their value (text, inline code, code and HTML alike, breaks nothing) and
    /// containers contribute their children in order, with no separators inserted.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Node::Text(value) | Node::InlineCode(value) | Node::Html(value) => out.push_str(value),
            Node::Code(code) => out.push_str(&code.value),
            Node::Break => {}
            Node::Root(_)
            | Node::Heading(_)
            | Node::Paragraph(_)
            | Node::Blockquote(_)
            | Node::Group(_) => {
                for child in self.children() {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/node.rs"]
mod tests;
