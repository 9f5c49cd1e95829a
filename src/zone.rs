//! Zones restrict extraction to marked regions of a document.
//!
//! A zone is delimited by HTML comment markers at the top level of the document:
//!
//! ```markdown
//! <!--markdown-to-snippet start-->
//! ...snippets...
//! <!--markdown-to-snippet end-->
//! ```
//!
//! Documents without any closed zone are treated as a single zone spanning the whole document.

use crate::node::Node;

/// Zone id used when none is configured.
pub const DEFAULT_ZONE_ID: &str = "markdown-to-snippet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

/// Parse an HTML comment such as `<!-- name start -->` into a marker for `zone_id`.
fn parse_marker(html: &str, zone_id: &str) -> Option<Marker> {
    let inner = html
        .trim()
        .strip_prefix("<!--")?
        .strip_suffix("-->")?
        .trim();
    let mut words = inner.split_whitespace();
    if words.next()? != zone_id {
        return None;
    }
    match words.next()? {
        "start" => Some(Marker::Start),
        "end" => Some(Marker::End),
        _ => None,
    }
}

/// Top-level node runs to extract snippets from, in document order.
///
/// Each closed `start`/`end` pair yields the nodes strictly between the markers. Markers nest:
/// a `start` inside an open zone is matched by its own `end`, and the zone runs until the
/// `end` matching the outermost `start`. A start marker without a matching end opens nothing.
#[must_use]
pub fn enabled_zones<'a>(children: &'a [Node], zone_id: &str) -> Vec<&'a [Node]> {
    let mut zones = Vec::new();
    let mut level = 0usize;
    let mut start = 0;

    for (index, child) in children.iter().enumerate() {
        let Node::Html(html) = child else {
            continue;
        };
        match parse_marker(html, zone_id) {
            Some(Marker::Start) => {
                if level == 0 {
                    start = index + 1;
                }
                level += 1;
            }
            Some(Marker::End) if level > 0 => {
                level -= 1;
                if level == 0 {
                    zones.push(&children[start..index]);
                }
            }
            _ => {}
        }
    }

    if zones.is_empty() {
        zones.push(children);
    }
    zones
}

#[cfg(test)]
#[path = "tests/zone.rs"]
mod tests;
