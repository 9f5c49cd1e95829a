//! Format trait and implementations for source document types.
//!
//! A format supplies the tree-sitter grammars for its documents and converts their parse into
//! the crate's own [`Node`] tree, which is all snippet extraction ever sees.

use crate::error::Result;
use crate::node::Node;

pub mod markdown;

/// A document grammar able to produce a [`Node`] tree.
pub trait Format {
    /// Grammar for block structure.
    fn language(&self) -> tree_sitter::Language;

    /// Grammar for the inline content of blocks.
    fn inline_language(&self) -> tree_sitter::Language;

    /// Parse `source` into a [`Node::Root`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Parse`] if a grammar cannot be loaded or yields no tree.
    fn parse(&self, source: &str) -> Result<Node>;
}
