use crate::selectors::JSONLD_SELECTOR;
use scraper::Html;
use serde_json::Value;

/// Schema types accepted as the product-like candidate for a page.
const CANDIDATE_TYPES: [&str; 4] = ["Product", "Book", "IndividualProduct", "CreativeWork"];

/// Parse every JSON-LD block independently and return the first object whose
/// `@type` names a product-like schema. Blocks that fail to parse are
/// skipped, never fatal.
pub(super) fn select_candidate(html: &str) -> Option<Value> {
    let document = Html::parse_document(html);
    document
        .select(&JSONLD_SELECTOR)
        .filter_map(|el| {
            let raw = el.text().collect::<String>();
            serde_json::from_str::<Value>(raw.trim()).ok()
        })
        .flat_map(flatten)
        .find(is_candidate)
}

fn flatten(value: Value) -> Vec<Value> {
    match value {
        Value::Array(arr) => arr.into_iter().flat_map(flatten).collect(),
        Value::Object(mut obj) => {
            if let Some(Value::Array(arr)) = obj.remove("@graph") {
                return arr.into_iter().flat_map(flatten).collect();
            }
            vec![Value::Object(obj)]
        }
        _ => Vec::new(),
    }
}

fn is_candidate(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => CANDIDATE_TYPES.contains(&t.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| CANDIDATE_TYPES.contains(&t)),
        _ => false,
    }
}

pub(super) fn name(candidate: &Value) -> Option<String> {
    string_field(candidate, "name")
}

pub(super) fn description(candidate: &Value) -> Option<String> {
    string_field(candidate, "description")
}

/// `image` may be a plain URL, an array of them, or an ImageObject.
pub(super) fn image(candidate: &Value) -> Option<String> {
    image_value(candidate.get("image")?)
}

fn image_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Array(arr) => arr.first().and_then(image_value),
        Value::Object(obj) => obj.get("url").and_then(Value::as_str).and_then(non_empty),
        _ => None,
    }
}

/// `author` may be a plain name, a Person object, or an array of either.
pub(super) fn author(candidate: &Value) -> Option<String> {
    author_value(candidate.get("author")?)
}

fn author_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Object(obj) => obj.get("name").and_then(Value::as_str).and_then(non_empty),
        Value::Array(arr) => arr.first().and_then(author_value),
        _ => None,
    }
}

/// `isbn` preferred over the broader `gtin13`; either may be encoded as a
/// string or a bare number.
pub(super) fn identifier(candidate: &Value) -> Option<String> {
    ["isbn", "gtin13"].iter().find_map(|key| match candidate.get(key) {
        Some(Value::String(s)) => non_empty(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Price of the first offer. Offers may be a single object or an array;
/// the price itself a number or a (possibly comma-decimal) string.
pub(super) fn offer_price(candidate: &Value) -> Option<f64> {
    let offers = candidate.get("offers")?;
    let offer = match offers {
        Value::Array(arr) => arr.first()?,
        other => other,
    };
    match offer.get("price")? {
        Value::Number(n) => n.as_f64().filter(|p| *p >= 0.0),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Decimal parse tolerating comma decimal separators ("12,50") and mixed
/// grouping ("1.234,56").
pub(super) fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        // comma after dot: dot groups thousands, comma is the decimal mark
        (Some(dot), Some(comma)) if comma > dot => {
            cleaned.replace('.', "").replace(',', ".")
        }
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (None, Some(comma)) => {
            let decimals = cleaned.len() - comma - 1;
            if cleaned.matches(',').count() == 1 && decimals != 3 {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        _ => cleaned,
    };

    normalized.parse::<f64>().ok().filter(|p| *p >= 0.0)
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).and_then(non_empty)
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
