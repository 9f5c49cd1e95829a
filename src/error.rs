//! Error types for snippet generation.
//!
//! Every error is terminal for the document it concerns. The shell distinguishes the known,
//! user-facing categories from unexpected failures through [`Error::kind`].

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
/// Failures raised while turning a markdown document into snippets.
pub enum Error {
    /// The input document could not be found.
    #[error("File does not exist: {}", .path.display())]
    FileDoesNotExist {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Two headings produced the same snippet name.
    #[error(
        "Found duplicate heading {name}. Two snippets with the same name are impossible for VSCode's snippet format"
    )]
    DuplicateHeading {
        /// The colliding snippet name.
        name: String,
    },

    /// A prefix is used both without a scope and with one.
    #[error("Prefix {prefix} is defined both globally and for scopes {}", .scopes.join(", "))]
    GlobalAndScoped {
        /// The offending trigger prefix.
        prefix: String,
        /// Scopes the prefix was also defined for.
        scopes: Vec<String>,
    },

    /// A prefix is defined more than once for the same scope.
    #[error("Prefix {prefix} is defined multiple times for scope {}", .scopes.join(", "))]
    DuplicateScope {
        /// The offending trigger prefix.
        prefix: String,
        /// Scopes that appear more than once.
        scopes: Vec<String>,
    },

    /// A command line path is neither an input nor an output file.
    #[error("Expected {} to be a {inputs} file{}", .path.display(), output_hint(.outputs.as_ref()))]
    UnrecognisedPath {
        /// The rejected path.
        path: PathBuf,
        /// Accepted input extensions, for the message.
        inputs: String,
        /// Accepted output extensions, present once an input has been seen.
        outputs: Option<String>,
    },

    /// Output paths were given but not one per input.
    #[error("When supplying output files, you must supply one for each input file")]
    OutputCountMismatch,

    /// The generated snippets could not be written.
    #[error("Failed to write to file {}: {source}", .path.display())]
    Write {
        /// Destination that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A document task panicked or was cancelled.
    #[error("Processing was aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),

    /// The markdown grammar could not produce a tree.
    #[error("Failed to parse markdown: {0}")]
    Parse(String),

    /// Serialisation of the snippet map failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn output_hint(outputs: Option<&String>) -> String {
    outputs
        .map(|exts| format!(" or an output {exts} file"))
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Broad category of an [`Error`], used to choose how it is reported.
pub enum ErrorKind {
    /// The input document is missing.
    InputNotFound,
    /// The document's content has an impossible shape.
    MarkdownParsing,
    /// The user's snippets or arguments conflict.
    UserInput,
    /// Anything the tool did not anticipate.
    Unexpected,
}

impl Error {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileDoesNotExist { .. } => ErrorKind::InputNotFound,
            Error::DuplicateHeading { .. } => ErrorKind::MarkdownParsing,
            Error::GlobalAndScoped { .. }
            | Error::DuplicateScope { .. }
            | Error::UnrecognisedPath { .. }
            | Error::OutputCountMismatch
            | Error::Write { .. } => ErrorKind::UserInput,
            Error::Aborted(_) | Error::Parse(_) | Error::Json(_) | Error::Io(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    /// Whether this error has a user-facing message of its own.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.kind() != ErrorKind::Unexpected
    }
}

#[cfg(test)]
#[path = "tests/error.rs"]
mod tests;
