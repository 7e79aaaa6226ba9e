use crate::text::{truncate, DEFAULT_EXCERPT_LEN};
use serde::{Deserialize, Serialize};

/// Category of a record: machine tag plus its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordType {
    pub tag: &'static str,
    pub label: &'static str,
}

impl RecordType {
    pub const QA: RecordType = RecordType::new("qa", "Q&A");
    pub const ARGUMENT: RecordType = RecordType::new("arg", "Systeemivirhe");
    pub const LANGUAGE: RecordType = RecordType::new("kieli", "Kielen valta");
    pub const INCENTIVE: RecordType = RecordType::new("kannustin", "Kannustinketju");
    pub const TOC: RecordType = RecordType::new("toc", "Sisällys");
    pub const TERM: RecordType = RecordType::new("termi", "Käsite");

    pub const fn new(tag: &'static str, label: &'static str) -> Self {
        Self { tag, label }
    }
}

/// One searchable entry of the output index.
///
/// Fields are declared in alphabetical order so the serialized objects have
/// sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub content: String,
    pub excerpt: String,
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub type_label: String,
    pub url: String,
}

impl SearchRecord {
    /// Build a record; the excerpt is derived from `content`
    pub fn new(
        kind: RecordType,
        id: String,
        title: String,
        content: String,
        url: String,
    ) -> Self {
        let excerpt = truncate(&content, DEFAULT_EXCERPT_LEN);
        Self {
            content,
            excerpt,
            id,
            title,
            record_type: kind.tag.to_string(),
            type_label: kind.label.to_string(),
            url,
        }
    }

    /// Recompute the excerpt for a different length bound
    pub fn with_excerpt_len(mut self, max_len: usize) -> Self {
        self.excerpt = truncate(&self.content, max_len);
        self
    }
}
