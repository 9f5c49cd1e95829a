//! The conversion pipeline from a markdown document to snippet JSON.
//!
//! Extraction is synchronous and works on a fully parsed tree; only reading the document is
//! asynchronous. Stages run in order: parse, select zones, group leaf headings, synthesise raw
//! snippets, resolve scopes, validate prefixes and serialise.
//!
//! [`Pipeline::run_jobs`] converts several documents concurrently, one task each. A failing
//! document never stops the others and leaves its output file untouched.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::heading::leaf_headings;
use crate::input::{write_output, Job};
use crate::node::Node;
use crate::snippet::Snippets;
use crate::synth::raw_snippets_by_heading;
use crate::validate::assert_one_snippet_per_prefix_scope;
use crate::zone::{enabled_zones, DEFAULT_ZONE_ID};

#[derive(Debug)]
/// Result of converting one document with [`Pipeline::run_jobs`].
pub struct Outcome {
    /// The document and its destination.
    pub job: Job,
    /// Generated snippet JSON, or the reason the document failed.
    pub result: Result<String>,
}

/// Converts markdown documents into VSCode snippet files.
pub struct Pipeline<F = MarkdownFormat> {
    format: F,
    zone_id: String,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(MarkdownFormat, DEFAULT_ZONE_ID)
    }
}

impl<F: Format> Pipeline<F> {
    /// Pipeline parsing with `format` and honouring zones named `zone_id`.
    #[must_use]
    pub fn new(format: F, zone_id: impl Into<String>) -> Self {
        Self {
            format,
            zone_id: zone_id.into(),
        }
    }

    /// Extract validated snippets from a parsed document tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateHeading`] for repeated snippet names and
    /// [`Error::GlobalAndScoped`] or [`Error::DuplicateScope`] for conflicting prefixes.
    pub fn extract(&self, root: &Node) -> Result<Snippets> {
        let zones = enabled_zones(root.children(), &self.zone_id);
        let groups: Vec<_> = zones.into_iter().flat_map(leaf_headings).collect();
        debug!(headings = groups.len(), "grouped leaf headings");

        let by_heading = raw_snippets_by_heading(&groups)?;
        let snippets = Snippets::from_headings(by_heading)?;
        assert_one_snippet_per_prefix_scope(&snippets)?;
        debug!(snippets = snippets.len(), "validated snippets");
        Ok(snippets)
    }

    /// Convert markdown source text into snippet JSON.
    ///
    /// # Errors
    ///
    /// Returns any error from parsing, [`Pipeline::extract`] or serialisation.
    pub fn compile(&self, source: &str) -> Result<String> {
        let root = self.format.parse(source)?;
        self.extract(&root)?.to_json()
    }

    /// Read the markdown document at `path` and convert it into snippet JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileDoesNotExist`] if `path` does not exist, any other read failure
    /// as [`Error::Io`], and otherwise the errors of [`Pipeline::compile`].
    pub async fn run(&self, path: &Path) -> Result<String> {
        let source = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::FileDoesNotExist {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read markdown");
        self.compile(&source)
    }

    /// Convert `job.input`, writing the JSON to `job.output` when `write` is set.
    ///
    /// Nothing is written unless conversion succeeds.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Pipeline::run`], and [`Error::Write`] if the output cannot be
    /// written.
    pub async fn process(&self, job: &Job, write: bool) -> Result<String> {
        let json = self.run(&job.input).await?;
        if write {
            write_output(&job.output, &json)
                .await
                .map_err(|source| Error::Write {
                    path: job.output.clone(),
                    source,
                })?;
        }
        Ok(json)
    }
}

impl<F: Format + Send + Sync + 'static> Pipeline<F> {
    /// Process every job on its own task, returning outcomes in job order.
    pub async fn run_jobs(self: Arc<Self>, jobs: Vec<Job>, write: bool) -> Vec<Outcome> {
        let handles: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                let pipeline = Arc::clone(&self);
                let task_job = job.clone();
                let handle =
                    tokio::spawn(async move { pipeline.process(&task_job, write).await });
                (job, handle)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (job, handle) in handles {
            let result = handle.await.unwrap_or_else(|e| Err(Error::Aborted(e)));
            outcomes.push(Outcome { job, result });
        }
        outcomes
    }
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
