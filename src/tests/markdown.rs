use super::{code_span_value, dedent, strip_closing_sequence, MarkdownFormat};
use crate::formats::Format;
use crate::node::{Code, Heading, Node};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Vec<Node> {
    match MarkdownFormat.parse(source).unwrap() {
        Node::Root(children) => children,
        other => panic!("expected root, got {other:?}"),
    }
}

#[test]
fn test_sections_are_flattened() {
    let children = parse("# Parent\n\n## Child\n\nBody text.\n");

    assert_eq!(children.len(), 3);
    assert!(matches!(&children[0], Node::Heading(Heading { depth: 1, .. })));
    assert!(matches!(&children[1], Node::Heading(Heading { depth: 2, .. })));
    assert_eq!(children[2].to_plain_text(), "Body text.");
}

#[test]
fn test_heading_with_inline_code() {
    let children = parse("## Use Ref (`useRef`)\n");

    let Node::Heading(heading) = &children[0] else {
        panic!("expected heading, got {:?}", children[0]);
    };
    assert_eq!(heading.depth, 2);
    assert_eq!(
        heading.children,
        vec![
            Node::Text("Use Ref (".to_string()),
            Node::InlineCode("useRef".to_string()),
            Node::Text(")".to_string()),
        ]
    );
}

#[test]
fn test_heading_closing_sequence_removed() {
    let children = parse("### Title ###\n");
    assert_eq!(children[0].to_plain_text(), "Title");
}

#[test]
fn test_setext_heading_depth() {
    let children = parse("Title\n-----\n");
    assert!(matches!(&children[0], Node::Heading(Heading { depth: 2, .. })));
    assert_eq!(children[0].to_plain_text(), "Title");
}

#[test]
fn test_fenced_code_block() {
    let children = parse("# A\n\n```js jsx\nconst a = 1;\n\nconst b = 2;\n```\n");

    assert_eq!(
        children[1],
        Node::Code(Code {
            lang: Some("js".to_string()),
            meta: Some("jsx".to_string()),
            value: "const a = 1;\n\nconst b = 2;".to_string(),
        })
    );
}

#[test]
fn test_fenced_code_without_info_or_content() {
    let children = parse("```\n```\n");
    assert_eq!(children[0], Node::Code(Code::default()));
}

#[test]
fn test_blockquote_with_inline_code() {
    let children = parse("> Trigger with `clg`\n");

    let Node::Blockquote(quote) = &children[0] else {
        panic!("expected blockquote, got {:?}", children[0]);
    };
    assert!(matches!(&quote[0], Node::Paragraph(_)));
    assert_eq!(children[0].first_inline_code(), Some("clg"));
}

#[test]
fn test_html_comment_block() {
    let children = parse("<!--markdown-to-snippet start-->\n\n# A\n");
    assert_eq!(
        children[0],
        Node::Html("<!--markdown-to-snippet start-->".to_string())
    );
}

#[test]
fn test_emphasis_groups_text() {
    let children = parse("Some *emphasised* text\n");
    assert_eq!(children[0].to_plain_text(), "Some emphasised text");
}

#[test]
fn test_autolink_is_its_own_group() {
    let children = parse("Visit <https://a.b> now\n");
    assert_eq!(
        children[0],
        Node::Paragraph(vec![
            Node::Text("Visit ".to_string()),
            Node::Group(vec![Node::Text("https://a.b".to_string())]),
            Node::Text(" now".to_string()),
        ])
    );
    assert_eq!(children[0].to_plain_text(), "Visit https://a.b now");
}

#[test]
fn test_hard_break_splits_text() {
    let children = parse("first\\\nsecond\n");
    let pieces: Vec<Node> = children[0]
        .children()
        .iter()
        .map(|node| match node {
            Node::Text(value) => Node::Text(value.trim().to_string()),
            other => other.clone(),
        })
        .collect();
    assert_eq!(
        pieces,
        vec![
            Node::Text("first".to_string()),
            Node::Break,
            Node::Text("second".to_string()),
        ]
    );
}

#[test]
fn test_code_span_normalisation() {
    assert_eq!(strip_closing_sequence("C#"), "C#");
    assert_eq!(strip_closing_sequence("Title ##"), "Title");
    assert_eq!(strip_closing_sequence("##"), "");

    let children = parse("`` a`b ``\n");
    assert_eq!(children[0].first_inline_code(), Some("a`b"));
}

#[test]
fn test_code_span_value_helper_strips_single_space() {
    let text = "` x `";
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&MarkdownFormat.inline_language())
        .unwrap();
    let tree = parser.parse(text, None).unwrap();
    let root = tree.root_node();
    let span = root.named_child(0).unwrap();
    assert_eq!(span.kind(), "code_span");
    assert_eq!(code_span_value(span, text), "x");
}

#[test]
fn test_dedent() {
    assert_eq!(dedent("    a\n  b\nc", 2), "  a\nb\nc");
    assert_eq!(dedent("  a", 0), "  a");
}
