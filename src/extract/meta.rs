use crate::selectors::{META_SELECTOR, TITLE_SELECTOR};
use scraper::Html;

/// Collect `(name|property, content)` pairs plus the `<title>` text under the
/// key `title`. The HTML parser sees attributes as a set, so both
/// `<meta property=.. content=..>` and `<meta content=.. property=..>` match.
pub(super) fn collect_meta_tags(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let mut tags = Vec::new();

    if let Some(el) = document.select(&TITLE_SELECTOR).next() {
        let text = el.text().collect::<String>().trim().to_string();
        if !text.is_empty() {
            tags.push(("title".to_string(), text));
        }
    }

    for el in document.select(&META_SELECTOR) {
        let key = el
            .value()
            .attr("property")
            .or_else(|| el.value().attr("name"));
        let value = el.value().attr("content");
        if let (Some(k), Some(v)) = (key, value) {
            if !v.trim().is_empty() {
                tags.push((k.to_string(), v.to_string()));
            }
        }
    }

    tags
}

/// Find the first non-empty value for any of the given keys, in key-priority
/// order.
pub(super) fn find_value(pairs: &[(String, String)], keys: &[&str]) -> Option<String> {
    for key in keys {
        for (k, v) in pairs {
            if k.eq_ignore_ascii_case(key) {
                let cleaned = v.trim().to_string();
                if !cleaned.is_empty() {
                    return Some(cleaned);
                }
            }
        }
    }
    None
}
