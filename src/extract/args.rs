use super::selector;
use crate::document::{RecordType, SearchRecord};
use crate::text::{attr_or_empty, select_text};
use scraper::{Html, Selector};

lazy_static::lazy_static! {
    static ref CARD: Selector = selector(".arg-card");
    static ref NUMBER: Selector = selector(".arg-num");
    static ref CLAIM: Selector = selector(".arg-claim");
    static ref LABEL: Selector = selector(".arg-label");
    static ref ANSWER: Selector = selector(".arg-vastaus");
    static ref BODY: Selector = selector(".arg-body");
}

/// Numbered claim/response cards.
///
/// Shared by every page using the argument card markup; `page_url` and
/// `kind` tell the pages apart.
pub fn extract_arg_cards(doc: &Html, page_url: &str, kind: RecordType) -> Vec<SearchRecord> {
    doc.select(&CARD)
        .map(|card| {
            let card_id = attr_or_empty(card, "id");
            let number = select_text(card, &NUMBER);
            let claim = select_text(card, &CLAIM);
            let label = select_text(card, &LABEL);

            let mut title = format!("{} {}", number, claim).trim().to_string();
            if !label.is_empty() {
                title = format!("{} ({})", title, label);
            }

            let mut content = select_text(card, &ANSWER);
            if content.is_empty() {
                content = select_text(card, &BODY);
            }

            SearchRecord::new(
                kind,
                format!("{}-{}", kind.tag, card_id),
                title,
                content,
                format!("{}#{}", page_url, card_id),
            )
        })
        .collect()
}
