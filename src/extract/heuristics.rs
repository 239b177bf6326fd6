use super::jsonld::parse_decimal;
use crate::selectors::IMG_SELECTOR;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

// Ordered: the more specific currency shapes first; first match wins.
static PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // symbol before amount: "€ 18,90", "$24.99"
        r"[$€£]\s*([0-9]+(?:[.,][0-9]{1,2})?)",
        // symbol after amount: "18,90 €"
        r"([0-9]+(?:[.,][0-9]{1,2})?)\s*[$€£]",
        // labeled values: `"price": "12,50"`, `amount: 12.50`
        r#"(?i)(?:price|amount)["']?\s*[:=]\s*["']?([0-9]+(?:[.,][0-9]{1,2})?)"#,
        // markup data attributes
        r#"data-price=["']([0-9]+(?:[.,][0-9]{1,2})?)["']"#,
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid price regex"))
    .collect()
});

// "ISBN: 9781234567890", "ASIN: B00EXAMPLE"; tokens run 10-17 chars
static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:ISBN|ASIN)[:\s]*([0-9A-Z-]{10,17})").expect("valid identifier regex"));

/// Scan raw document text with the ordered currency patterns.
pub(super) fn scan_price(html: &str) -> Option<f64> {
    for pattern in PRICE_PATTERNS.iter() {
        if let Some(price) = pattern
            .captures(html)
            .and_then(|cap| cap.get(1))
            .and_then(|m| parse_decimal(m.as_str()))
        {
            return Some(price);
        }
    }
    None
}

/// Labeled ISBN/ASIN token anywhere in the markup.
pub(super) fn scan_identifier(html: &str) -> Option<String> {
    IDENTIFIER_REGEX
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Last-resort image: the first `<img src>` that does not look like site
/// chrome (logos, icons).
pub(super) fn fallback_image(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    for el in document.select(&IMG_SELECTOR) {
        if let Some(src) = el.value().attr("src") {
            let lower = src.to_ascii_lowercase();
            if src.trim().is_empty() || lower.contains("logo") || lower.contains("icon") {
                continue;
            }
            return Some(src.to_string());
        }
    }
    None
}
