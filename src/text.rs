use scraper::{ElementRef, Selector};

/// Default excerpt bound, in characters
pub const DEFAULT_EXCERPT_LEN: usize = 300;

/// Marker appended to truncated excerpts
pub const ELLIPSIS: char = '…';

/// Collapse every whitespace run to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text under `element`, with element boundaries treated as spaces.
///
/// An absent element yields an empty string.
pub fn normalize(element: Option<ElementRef<'_>>) -> String {
    match element {
        Some(el) => collapse_whitespace(&el.text().collect::<Vec<_>>().join(" ")),
        None => String::new(),
    }
}

/// Cut `text` to at most `max_len` characters at a word boundary, appending `…`.
///
/// Text that already fits is returned unchanged. When the cut contains no
/// space the text is hard-cut at `max_len`.
pub fn truncate(text: &str, max_len: usize) -> String {
    let Some((byte_end, _)) = text.char_indices().nth(max_len) else {
        return text.to_string();
    };

    let cut = &text[..byte_end];
    let kept = match cut.rfind(' ') {
        Some(pos) => &cut[..pos],
        None => cut,
    };

    let mut out = String::with_capacity(kept.len() + ELLIPSIS.len_utf8());
    out.push_str(kept);
    out.push(ELLIPSIS);
    out
}

/// First descendant of `element` matching `selector`
pub fn select_first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// Normalized text of the first descendant matching `selector`, or empty
pub fn select_text(element: ElementRef<'_>, selector: &Selector) -> String {
    normalize(select_first(element, selector))
}

/// Value of attribute `name`, or empty when missing
pub fn attr_or_empty(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}
