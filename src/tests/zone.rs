use super::{enabled_zones, parse_marker, Marker, DEFAULT_ZONE_ID};
use crate::node::Node;

fn html(value: &str) -> Node {
    Node::Html(value.to_string())
}

fn para(value: &str) -> Node {
    Node::Paragraph(vec![Node::Text(value.to_string())])
}

#[test]
fn test_parse_marker_variants() {
    assert_eq!(
        parse_marker("<!--markdown-to-snippet start-->", DEFAULT_ZONE_ID),
        Some(Marker::Start)
    );
    assert_eq!(
        parse_marker("<!-- markdown-to-snippet end -->\n", DEFAULT_ZONE_ID),
        Some(Marker::End)
    );
    assert_eq!(parse_marker("<!-- other start -->", DEFAULT_ZONE_ID), None);
    assert_eq!(parse_marker("<div>markdown-to-snippet start</div>", DEFAULT_ZONE_ID), None);
    assert_eq!(parse_marker("<!-- markdown-to-snippet -->", DEFAULT_ZONE_ID), None);
}

#[test]
fn test_without_markers_whole_document() {
    let children = vec![para("a"), para("b")];
    let zones = enabled_zones(&children, DEFAULT_ZONE_ID);
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].len(), 2);
}

#[test]
fn test_closed_zones_only() {
    let children = vec![
        para("outside"),
        html("<!--markdown-to-snippet start-->"),
        para("first"),
        html("<!--markdown-to-snippet end-->"),
        para("between"),
        html("<!--markdown-to-snippet start-->"),
        para("second"),
        para("second again"),
        html("<!--markdown-to-snippet end-->"),
        html("<!--markdown-to-snippet start-->"),
        para("never closed"),
    ];
    let zones = enabled_zones(&children, DEFAULT_ZONE_ID);

    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0], &[para("first")][..]);
    assert_eq!(zones[1], &[para("second"), para("second again")][..]);
}

#[test]
fn test_unclosed_start_falls_back_to_document() {
    let children = vec![html("<!--markdown-to-snippet start-->"), para("a")];
    let zones = enabled_zones(&children, DEFAULT_ZONE_ID);
    assert_eq!(zones, vec![&children[..]]);
}

#[test]
fn test_custom_zone_id() {
    let children = vec![
        para("skip"),
        html("<!-- mine start -->"),
        para("keep"),
        html("<!-- mine end -->"),
    ];
    let zones = enabled_zones(&children, "mine");
    assert_eq!(zones, vec![&[para("keep")][..]]);
}

#[test]
fn test_nested_markers_span_outermost_pair() {
    let children = vec![
        html("<!--markdown-to-snippet start-->"),
        para("outer"),
        html("<!--markdown-to-snippet start-->"),
        para("inner"),
        html("<!--markdown-to-snippet end-->"),
        para("still outer"),
        html("<!--markdown-to-snippet end-->"),
        para("after"),
    ];
    let zones = enabled_zones(&children, DEFAULT_ZONE_ID);

    assert_eq!(zones, vec![&children[1..6]]);
}

#[test]
fn test_stray_end_is_ignored() {
    let children = vec![
        html("<!--markdown-to-snippet end-->"),
        html("<!--markdown-to-snippet start-->"),
        para("kept"),
        html("<!--markdown-to-snippet end-->"),
    ];
    let zones = enabled_zones(&children, DEFAULT_ZONE_ID);
    assert_eq!(zones, vec![&[para("kept")][..]]);
}
