//! VSCode snippet records and the ordered name-to-snippet map written to disk.
//!
//! The map only ever grows by [`Snippets::insert`], which refuses to overwrite an existing
//! name, so the serialised object always has unique keys in document order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::lang::scope_for;
use crate::synth::HeadingSnippets;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A snippet as VSCode reads it from a `.code-snippets` file.
pub struct Snippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Text shown alongside the snippet in completion lists.
    pub description: Option<String>,
    /// Text typed to trigger the snippet.
    pub prefix: String,
    /// Lines inserted on expansion.
    pub body: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Comma-separated language identifiers; absent means every language.
    pub scope: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
/// Snippets keyed by unique name in insertion order.
pub struct Snippets(IndexMap<String, Snippet>);

impl Snippets {
    /// Add a snippet under a name not yet present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateHeading`] if `name` is already taken.
    pub fn insert(&mut self, name: String, snippet: Snippet) -> Result<()> {
        if self.0.contains_key(&name) {
            return Err(Error::DuplicateHeading { name });
        }
        self.0.insert(name, snippet);
        Ok(())
    }

    /// Resolve scopes and output names for each heading's raw snippets.
    ///
    /// The first snippet under a heading takes the heading's name; later ones are named
    /// `"<name> (<tags>)"` with their space-joined language tags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateHeading`] if a derived name collides with an earlier one.
    pub fn from_headings(headings: Vec<HeadingSnippets>) -> Result<Self> {
        let mut snippets = Self::default();
        for heading in headings {
            for (index, raw) in heading.snippets.into_iter().enumerate() {
                let name = if index == 0 {
                    heading.name.clone()
                } else {
                    format!("{} ({})", heading.name, raw.langs.join(" "))
                };
                let snippet = Snippet {
                    description: heading.description.clone(),
                    prefix: raw.prefix,
                    body: raw.body,
                    scope: scope_for(&raw.langs),
                };
                snippets.insert(name, snippet)?;
            }
        }
        Ok(snippets)
    }

    /// Look up a snippet by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.0.get(name)
    }

    /// Iterate over `(name, snippet)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Snippet)> {
        self.0.iter()
    }

    /// Number of snippets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no snippet was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a Snippets {
    type Item = (&'a String, &'a Snippet);
    type IntoIter = indexmap::map::Iter<'a, String, Snippet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "tests/snippet.rs"]
mod tests;
