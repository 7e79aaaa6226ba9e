//! Index build configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{IndexError, Result};
use crate::text::DEFAULT_EXCERPT_LEN;

/// File name of the generated index inside the site directory
pub const DEFAULT_OUTPUT_FILE: &str = "search-index.json";

pub const DEFAULT_INDENT: usize = 2;

const MAX_INDENT: usize = 8;

/// Settings for one index build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexConfig {
    /// Directory holding the HTML pages.
    pub site_dir: PathBuf,
    /// Path of the JSON file to (over)write.
    pub output: PathBuf,
    /// Excerpt bound in characters.
    pub excerpt_len: usize,
    /// Spaces per indentation level in the output.
    pub indent: usize,
    /// Also index the table-of-contents page.
    pub include_toc: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("."),
            output: Path::new(".").join(DEFAULT_OUTPUT_FILE),
            excerpt_len: DEFAULT_EXCERPT_LEN,
            indent: DEFAULT_INDENT,
            include_toc: false,
        }
    }
}

impl IndexConfig {
    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::default()
    }
}

/// Builder for a validated [`IndexConfig`].
///
/// The output defaults to `search-index.json` inside the site directory.
#[derive(Debug, Clone, Default)]
pub struct IndexConfigBuilder {
    site_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    excerpt_len: Option<usize>,
    indent: Option<usize>,
    include_toc: bool,
}

impl IndexConfigBuilder {
    pub fn site_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.site_dir = Some(dir.into());
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn excerpt_len(mut self, len: usize) -> Self {
        self.excerpt_len = Some(len);
        self
    }

    pub fn indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }

    pub fn include_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }

    /// # Errors
    ///
    /// Returns [`IndexError::Config`] if `excerpt_len` is zero or `indent` is
    /// outside `1..=8`.
    pub fn build(self) -> Result<IndexConfig> {
        let excerpt_len = self.excerpt_len.unwrap_or(DEFAULT_EXCERPT_LEN);
        if excerpt_len == 0 {
            return Err(IndexError::Config(
                "excerpt_len must be greater than zero".to_string(),
            ));
        }

        let indent = self.indent.unwrap_or(DEFAULT_INDENT);
        if indent == 0 || indent > MAX_INDENT {
            return Err(IndexError::Config(format!(
                "indent ({}) must be between 1 and {}",
                indent, MAX_INDENT
            )));
        }

        let site_dir = self.site_dir.unwrap_or_else(|| PathBuf::from("."));
        let output = self
            .output
            .unwrap_or_else(|| site_dir.join(DEFAULT_OUTPUT_FILE));

        Ok(IndexConfig {
            site_dir,
            output,
            excerpt_len,
            indent,
            include_toc: self.include_toc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndexConfig::builder().build().unwrap();
        assert_eq!(config, IndexConfig::default());
    }

    #[test]
    fn test_output_follows_site_dir() {
        let config = IndexConfig::builder().site_dir("site").build().unwrap();
        assert_eq!(config.output, Path::new("site").join("search-index.json"));

        let config = IndexConfig::builder()
            .site_dir("site")
            .output("dist/index.json")
            .build()
            .unwrap();
        assert_eq!(config.output, PathBuf::from("dist/index.json"));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            IndexConfig::builder().excerpt_len(0).build(),
            Err(IndexError::Config(_))
        ));
        assert!(IndexConfig::builder().indent(0).build().is_err());
        assert!(IndexConfig::builder().indent(9).build().is_err());
        assert!(IndexConfig::builder().indent(1).build().is_ok());
    }
}
