//! Property tests for the text normalizer.

use proptest::prelude::*;
use scraper::{Html, Selector};
use sivuhaku::text::{collapse_whitespace, normalize, truncate, ELLIPSIS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn truncate_is_bounded(s in "[a-zäö \n]{0,600}") {
        let out = truncate(&s, 300);
        prop_assert!(out.chars().count() <= 301);
        if s.chars().count() <= 300 {
            prop_assert_eq!(&out, &s);
        } else {
            prop_assert!(out.ends_with(ELLIPSIS));
            let kept = out.trim_end_matches(ELLIPSIS);
            prop_assert!(s.starts_with(kept));
        }
    }

    #[test]
    fn collapse_leaves_no_runs(s in "\\PC{0,200}") {
        let out = collapse_whitespace(&s);
        prop_assert!(!out.starts_with(char::is_whitespace));
        prop_assert!(!out.ends_with(char::is_whitespace));
        let mut prev_ws = false;
        for c in out.chars() {
            let ws = c.is_whitespace();
            prop_assert!(!(ws && prev_ws));
            prev_ws = ws;
        }
    }

    #[test]
    fn normalize_markup(words in proptest::collection::vec("[a-zA-Z]{1,8}", 0..12), gap in "[ \t\n]{0,4}") {
        let body: String = words
            .iter()
            .map(|w| format!("<span>{gap}{w}</span>{gap}"))
            .collect();
        let doc = Html::parse_fragment(&format!("<div>{body}</div>"));
        let div = Selector::parse("div").unwrap();
        let out = normalize(doc.select(&div).next());
        prop_assert_eq!(out, words.join(" "));
    }
}
