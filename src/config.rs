//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a markdown-to-snippet.toml, and if present we load settings from
//! there. This provides the recognised input and output extensions and the zone marker id.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::zone::DEFAULT_ZONE_ID;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "markdown-to-snippet.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from markdown-to-snippet.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec![".md".to_string(), ".markdown".to_string()])]
    /// Suffixes marking a command line path as a markdown input.
    pub input_extensions: Vec<String>,
    #[facet(default = vec![".code-snippets".to_string(), ".json".to_string()])]
    /// Suffixes marking a command line path as a snippet output.
    pub output_extensions: Vec<String>,
    #[facet(default = ".code-snippets".to_string())]
    /// Suffix replacing the input extension when no output path is given.
    pub output_extension: String,
    #[facet(default = DEFAULT_ZONE_ID.to_string())]
    /// Name used in `<!--name start-->` / `<!--name end-->` zone markers.
    pub zone_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_extensions: vec![".md".to_string(), ".markdown".to_string()],
            output_extensions: vec![".code-snippets".to_string(), ".json".to_string()],
            output_extension: ".code-snippets".to_string(),
            zone_id: DEFAULT_ZONE_ID.to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from markdown-to-snippet.toml in the working directory if present.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Self::default()
        }
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is unreadable or invalid.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "could not read config, using defaults"
                );
                return Self::default();
            }
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
