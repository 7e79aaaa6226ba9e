use super::selector;
use crate::document::{RecordType, SearchRecord};
use crate::text::{normalize, select_first, select_text};
use scraper::{Html, Selector};

/// Link used for every chapter without an external target
pub const TOC_PAGE_URL: &str = "sisallys";

const SECTION_SEPARATOR: &str = " — ";

lazy_static::lazy_static! {
    static ref CHAPTER: Selector = selector(".toc-chapter");
    static ref TITLE: Selector = selector(".toc-chapter-title");
    static ref BADGE: Selector = selector(".toc-badge");
    static ref LINK: Selector = selector("a[href]");
    static ref SECTIONS: Selector = selector(".toc-sections");
    static ref ITEM: Selector = selector("li");
}

/// Chapter summaries of the table-of-contents page.
///
/// Chapters without a title element are skipped. Internal chapter links are
/// collapsed to the contents page itself; only `http` links are kept.
pub fn extract_toc(doc: &Html) -> Vec<SearchRecord> {
    doc.select(&CHAPTER)
        .filter_map(|chapter| {
            let title_el = select_first(chapter, &TITLE)?;
            let raw_title = normalize(Some(title_el));
            let badge = select_text(title_el, &BADGE);
            let title = if badge.is_empty() {
                raw_title.clone()
            } else {
                raw_title.replace(&badge, "").trim().to_string()
            };

            let href = select_first(title_el, &LINK)
                .and_then(|a| a.value().attr("href"))
                .unwrap_or(TOC_PAGE_URL)
                .to_string();

            let items: Vec<String> = select_first(chapter, &SECTIONS)
                .map(|list| list.select(&ITEM).map(|li| normalize(Some(li))).collect())
                .unwrap_or_default();
            let content = if items.is_empty() {
                raw_title
            } else {
                items.join(SECTION_SEPARATOR)
            };

            let url = if href.starts_with("http") {
                href.clone()
            } else {
                TOC_PAGE_URL.to_string()
            };

            Some(SearchRecord::new(
                RecordType::TOC,
                format!("toc-{}", href),
                title,
                content,
                url,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_stripped_from_title() {
        let doc = Html::parse_document(
            r#"<div class="toc-chapter">
                 <h2 class="toc-chapter-title">Chapter 1 <span class="toc-badge">NEW</span></h2>
               </div>"#,
        );
        let records = extract_toc(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Chapter 1");
        // No section list: content is the uncleaned title
        assert_eq!(records[0].content, "Chapter 1 NEW");
        assert_eq!(records[0].id, "toc-sisallys");
        assert_eq!(records[0].url, "sisallys");
        assert_eq!(records[0].type_label, "Sisällys");
    }

    #[test]
    fn test_links_and_sections() {
        let doc = Html::parse_document(
            r#"<div class="toc-chapter">
                 <h2 class="toc-chapter-title"><a href="argumentit">Argumentit</a></h2>
                 <ul class="toc-sections"><li>Yksi</li><li>Kaksi
                   osa</li></ul>
               </div>
               <div class="toc-chapter">
                 <h2 class="toc-chapter-title"><a href="https://example.org/kirja">Kirja</a></h2>
               </div>"#,
        );
        let records = extract_toc(&doc);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].id, "toc-argumentit");
        assert_eq!(records[0].url, "sisallys");
        assert_eq!(records[0].content, "Yksi — Kaksi osa");

        assert_eq!(records[1].id, "toc-https://example.org/kirja");
        assert_eq!(records[1].url, "https://example.org/kirja");
    }

    #[test]
    fn test_chapter_without_title_skipped() {
        let doc = Html::parse_document(
            r#"<div class="toc-chapter"><p>Ei otsikkoa</p></div>
               <div class="toc-chapter"><h2 class="toc-chapter-title">Luku</h2></div>"#,
        );
        let records = extract_toc(&doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Luku");
    }
}
