//! markdown-to-snippet: generate VSCode snippet files from structured markdown.
//!
//! Headings name snippets, inline code in the heading (or in the first paragraph or block quote
//! under it) gives the trigger prefix, and each fenced code block becomes a snippet body scoped
//! to the block's declared language.
//!
//! ```no_run
//! # async fn demo() -> markdown_to_snippet::error::Result<()> {
//! use markdown_to_snippet::pipeline::Pipeline;
//!
//! let pipeline: Pipeline = Pipeline::default();
//! let json = pipeline.run("snippets.md".as_ref()).await?;
//! println!("{json}");
//! # Ok(())
//! # }
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod lang;
pub mod node;
pub mod pipeline;
pub mod snippet;
pub mod synth;
pub mod text_group;
pub mod validate;
pub mod zone;
