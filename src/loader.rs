use crate::error::{IndexError, Result};
use scraper::Html;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Content directory holding the site's HTML pages
#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
}

impl Site {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn page_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Load and parse a page.
    ///
    /// Returns `Ok(None)` when the file does not exist; some pages are optional.
    pub fn load(&self, filename: &str) -> Result<Option<Html>> {
        let path = self.page_path(filename);
        if !path.exists() {
            warn!("Skipping {} (not found)", filename);
            return Ok(None);
        }

        let source = std::fs::read_to_string(&path).map_err(|e| IndexError::io(&path, e))?;
        debug!("Parsing {} ({} bytes)", path.display(), source.len());
        Ok(Some(Html::parse_document(&source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_load_missing_page() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path());
        assert!(site.load("qa.html")?.is_none());
        Ok(())
    }

    #[test]
    fn test_load_existing_page() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("qa.html"), "<html><body><h1>Kysymykset</h1></body></html>")
            .unwrap();

        let site = Site::new(dir.path());
        let doc = site.load("qa.html")?.expect("page should load");
        let h1 = Selector::parse("h1").unwrap();
        assert_eq!(doc.select(&h1).count(), 1);

        Ok(())
    }

    #[test]
    fn test_load_unreadable_page_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("qa.html"), [0xff, 0xfe]).unwrap();

        let site = Site::new(dir.path());
        match site.load("qa.html") {
            Err(IndexError::Io { path, .. }) => assert!(path.ends_with("qa.html")),
            other => panic!("expected I/O error, got {:?}", other.map(|d| d.is_some())),
        }
    }
}
