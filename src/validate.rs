//! Checks that every trigger prefix can be resolved unambiguously by the editor.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::snippet::{Snippet, Snippets};

/// Reject prefixes that are both global and scoped, or scoped to one language twice.
///
/// Snippets are grouped by prefix in order of first appearance. Within a group each snippet
/// contributes its individual scope identifiers, or an empty marker when it has no scope.
///
/// # Errors
///
/// Returns [`Error::GlobalAndScoped`] when a prefix appears with and without a scope, and
/// [`Error::DuplicateScope`] when a scope identifier repeats for one prefix.
pub fn assert_one_snippet_per_prefix_scope(snippets: &Snippets) -> Result<()> {
    let mut by_prefix: IndexMap<&str, Vec<&Snippet>> = IndexMap::new();
    for (_, snippet) in snippets {
        by_prefix.entry(&snippet.prefix).or_default().push(snippet);
    }

    for (prefix, group) in by_prefix {
        let scopes: Vec<&str> = group
            .iter()
            .flat_map(|snippet| snippet.scope.as_deref().unwrap_or("").split(','))
            .collect();

        if scopes.contains(&"") && scopes.len() > 1 {
            return Err(Error::GlobalAndScoped {
                prefix: prefix.to_string(),
                scopes: scopes
                    .iter()
                    .filter(|scope| !scope.is_empty())
                    .map(ToString::to_string)
                    .collect(),
            });
        }

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for scope in &scopes {
            *counts.entry(*scope).or_default() += 1;
        }
        let duplicated: Vec<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(scope, _)| scope.to_string())
            .collect();

        if !duplicated.is_empty() {
            return Err(Error::DuplicateScope {
                prefix: prefix.to_string(),
                scopes: duplicated,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/validate.rs"]
mod tests;
