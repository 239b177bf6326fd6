//! Layered generic extraction. Structured data is tried first, then meta
//! tags, with regex heuristics as the last resort. Site-specific rewrites
//! live in `sites`.

mod heuristics;
mod jsonld;
mod meta;

#[cfg(test)]
mod tests;

use crate::types::ScrapeResult;

/// Derive all generic fields from one fetched document. Per field, the first
/// non-empty source wins; a field nothing matches is simply left empty.
pub fn extract_fields(html: &str) -> ScrapeResult {
    let tags = meta::collect_meta_tags(html);
    let candidate = jsonld::select_candidate(html);

    let title = meta::find_value(&tags, &["og:title", "twitter:title"])
        .or_else(|| candidate.as_ref().and_then(jsonld::name))
        .or_else(|| meta::find_value(&tags, &["title"]))
        .unwrap_or_default();

    let image = meta::find_value(&tags, &["og:image", "twitter:image"])
        .or_else(|| candidate.as_ref().and_then(jsonld::image))
        .or_else(|| heuristics::fallback_image(html))
        .unwrap_or_default();

    let description = meta::find_value(
        &tags,
        &["og:description", "twitter:description", "description"],
    )
    .or_else(|| candidate.as_ref().and_then(jsonld::description))
    .unwrap_or_default();

    let price = candidate
        .as_ref()
        .and_then(jsonld::offer_price)
        .or_else(|| heuristics::scan_price(html));

    let author = meta::find_value(&tags, &["author", "og:book:author", "book:author"])
        .or_else(|| candidate.as_ref().and_then(jsonld::author))
        .unwrap_or_default();

    let isbn = meta::find_value(&tags, &["og:isbn", "book:isbn"])
        .or_else(|| candidate.as_ref().and_then(jsonld::identifier))
        .or_else(|| heuristics::scan_identifier(html))
        .unwrap_or_default();

    ScrapeResult {
        title,
        description,
        image,
        price,
        author,
        isbn,
        error: None,
    }
}
