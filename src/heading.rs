//! Grouping top-level blocks under the leaf heading they belong to.

use crate::node::{Heading, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A leaf heading with the non-heading blocks that follow it.
pub struct NestedHeading<'a> {
    /// The heading that names the group.
    pub heading: &'a Heading,
    /// Blocks between this heading and the next one, in document order.
    pub contents: Vec<&'a Node>,
}

/// Group a flat run of top-level blocks into leaf headings.
///
/// A heading deeper than the most recent group replaces that group, so in an unbroken chain
/// such as `# Parent` followed by `## Child` only the deepest heading survives. A heading at
/// the same or a shallower depth starts a new group. Blocks before the first heading belong
/// to no group and are dropped.
#[must_use]
pub fn leaf_headings(blocks: &[Node]) -> Vec<NestedHeading<'_>> {
    let mut groups: Vec<NestedHeading<'_>> = Vec::new();

    for block in blocks {
        if let Node::Heading(heading) = block {
            let nests_deeper = groups
                .last()
                .is_some_and(|previous| previous.heading.depth < heading.depth);
            if nests_deeper {
                groups.pop();
            }
            groups.push(NestedHeading {
                heading,
                contents: Vec::new(),
            });
        } else if let Some(previous) = groups.last_mut() {
            previous.contents.push(block);
        }
    }

    groups
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
