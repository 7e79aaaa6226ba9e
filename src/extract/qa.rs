use super::selector;
use crate::document::{RecordType, SearchRecord};
use crate::text::{attr_or_empty, select_text};
use scraper::{Html, Selector};

lazy_static::lazy_static! {
    static ref CARD: Selector = selector(".qa-card");
    static ref QUESTION: Selector = selector(".qa-question-text");
    static ref CONTENT: Selector = selector(".qa-content");
}

/// Question/answer cards of the Q&A page
pub fn extract_qa(doc: &Html) -> Vec<SearchRecord> {
    doc.select(&CARD)
        .map(|card| {
            let card_id = attr_or_empty(card, "id");
            let question = select_text(card, &QUESTION);
            // Headings carry a "#" permalink marker
            let title = match question.strip_prefix('#') {
                Some(rest) => rest.trim().to_string(),
                None => question,
            };
            let content = select_text(card, &CONTENT);

            SearchRecord::new(
                RecordType::QA,
                format!("qa-{}", card_id),
                title,
                content,
                format!("qa#{}", card_id),
            )
        })
        .collect()
}
