//! Host-keyed post-processing. Each rule is a pure rewrite applied after
//! generic extraction; hosts nothing matches pass through untouched.

mod amazon;
mod youtube;


use crate::types::{Domain, ScrapeResult};

pub struct SiteRule {
    pub name: &'static str,
    pub matches: fn(&Domain) -> bool,
    pub apply: fn(ScrapeResult, &str, &str) -> ScrapeResult,
}

/// Rules in application order. New sites slot in here without touching the
/// generic pipeline.
pub fn site_rules() -> &'static [SiteRule] {
    static RULES: [SiteRule; 2] = [
        SiteRule {
            name: "amazon",
            matches: amazon::matches,
            apply: amazon::apply,
        },
        SiteRule {
            name: "youtube",
            matches: youtube::matches,
            apply: youtube::apply,
        },
    ];
    &RULES
}

pub fn apply_site_rules(
    mut result: ScrapeResult,
    domain: &Domain,
    url: &str,
    html: &str,
) -> ScrapeResult {
    for rule in site_rules() {
        if (rule.matches)(domain) {
            result = (rule.apply)(result, url, html);
        }
    }
    result
}
