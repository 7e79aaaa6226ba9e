use super::selector;
use crate::document::{RecordType, SearchRecord};
use crate::text::{normalize, select_first, select_text};
use scraper::{Html, Selector};

pub const GLOSSARY_URL: &str = "/sanakirja";

lazy_static::lazy_static! {
    static ref TERM: Selector = selector(".term");
    static ref HEADING: Selector = selector("h3");
    static ref DEFINITION: Selector = selector("p");
}

/// Term/definition pairs of the glossary page; terms without a heading are skipped
pub fn extract_terms(doc: &Html) -> Vec<SearchRecord> {
    doc.select(&TERM)
        .filter_map(|term| {
            let heading = select_first(term, &HEADING)?;
            let title = normalize(Some(heading));
            let content = select_text(term, &DEFINITION);

            Some(SearchRecord::new(
                RecordType::TERM,
                format!("term-{}", term_slug(&title)),
                title,
                content,
                GLOSSARY_URL.to_string(),
            ))
        })
        .collect()
}

fn term_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}
