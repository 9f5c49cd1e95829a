//! Command line path handling: pairing inputs with outputs and writing results.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One markdown document and the snippet file generated from it.
pub struct Job {
    /// Markdown source.
    pub input: PathBuf,
    /// Destination for the generated snippets.
    pub output: PathBuf,
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let name = path.to_string_lossy();
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

fn describe(extensions: &[String]) -> String {
    extensions.join(" or ")
}

/// Output path derived from an input by swapping its markdown extension.
#[must_use]
pub fn derive_output(input: &Path, config: &Config) -> PathBuf {
    let name = input.to_string_lossy();
    let stem = config
        .input_extensions
        .iter()
        .find_map(|ext| name.strip_suffix(ext.as_str()))
        .unwrap_or(&*name);
    PathBuf::from(format!("{stem}{}", config.output_extension))
}

/// Sort command line paths into inputs and outputs and pair them up.
///
/// Outputs, when any are given, must match the inputs one for one in order. Otherwise each
/// output is derived from its input with [`derive_output`].
///
/// # Errors
///
/// Returns [`Error::UnrecognisedPath`] for a path with neither an input nor an output
/// extension, and [`Error::OutputCountMismatch`] when outputs do not pair with inputs.
pub fn pair_paths(paths: &[PathBuf], config: &Config) -> Result<Vec<Job>> {
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();

    for path in paths {
        if has_extension(path, &config.input_extensions) {
            inputs.push(path.clone());
        } else if has_extension(path, &config.output_extensions) {
            outputs.push(path.clone());
        } else {
            return Err(Error::UnrecognisedPath {
                path: path.clone(),
                inputs: describe(&config.input_extensions),
                outputs: (!inputs.is_empty()).then(|| describe(&config.output_extensions)),
            });
        }
    }

    if outputs.is_empty() {
        outputs = inputs
            .iter()
            .map(|input| derive_output(input, config))
            .collect();
    } else if outputs.len() != inputs.len() {
        return Err(Error::OutputCountMismatch);
    }

    Ok(inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| Job { input, output })
        .collect())
}

/// Write `contents` to `path`, creating the parent directory if only it is missing.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be written, including when more than one level of
/// parent directories is missing.
pub async fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    match tokio::fs::write(path, contents).await {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
                return Err(e);
            };
            let grandparent = parent
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            if !tokio::fs::try_exists(grandparent).await.unwrap_or(false) {
                return Err(e);
            }
            debug!(dir = %parent.display(), "creating output directory");
            tokio::fs::create_dir(parent).await?;
            tokio::fs::write(path, contents).await
        }
        result => result,
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
