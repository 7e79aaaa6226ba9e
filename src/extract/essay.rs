use super::selector;
use crate::document::{RecordType, SearchRecord};
use crate::text::{normalize, select_first};
use scraper::{ElementRef, Html, Selector};

lazy_static::lazy_static! {
    static ref BODY: Selector = selector(".essay-body");
    static ref HEADER_H1: Selector = selector(".essay-header h1");
    static ref SECTION: Selector = selector("section");
    static ref H2: Selector = selector("h2");
    static ref H3: Selector = selector("h3");
    static ref ANCHOR: Selector = selector("a[id]");
}

/// Sections of a long-form essay page.
///
/// Without `<section>` elements the whole body becomes a single `{tag}-full`
/// record.
pub fn extract_essay(doc: &Html, page_url: &str, kind: RecordType) -> Vec<SearchRecord> {
    let Some(body) = doc.select(&BODY).next() else {
        return Vec::new();
    };

    let sections: Vec<ElementRef<'_>> = body.select(&SECTION).collect();
    if sections.is_empty() {
        let title = match doc.select(&HEADER_H1).next() {
            Some(h1) => normalize(Some(h1)),
            None => kind.label.to_string(),
        };
        return vec![SearchRecord::new(
            kind,
            format!("{}-full", kind.tag),
            title,
            normalize(Some(body)),
            page_url.to_string(),
        )];
    }

    sections
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            let h2 = select_first(section, &H2);
            let h3 = select_first(section, &H3);

            let mut title = normalize(h2);
            if title.is_empty() {
                title = normalize(h3);
            }
            if title.is_empty() {
                title = format!("Osio {}", i + 1);
            }

            let anchor = h2.or(h3).and_then(heading_anchor);
            let url = match anchor {
                Some(id) => format!("{}#{}", page_url, id),
                None => page_url.to_string(),
            };

            SearchRecord::new(
                kind,
                format!("{}-s{}", kind.tag, i),
                title,
                normalize(Some(section)),
                url,
            )
        })
        .collect()
}

/// Fragment for a heading: a nested `a[id]` wins over the heading's own id
fn heading_anchor(heading: ElementRef<'_>) -> Option<String> {
    select_first(heading, &ANCHOR)
        .and_then(|a| a.value().attr("id"))
        .or_else(|| heading.value().attr("id"))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
