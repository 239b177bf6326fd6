use crate::types::{Domain, ScrapeResult};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static VIDEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|/embed/|/v/|youtu\.be/|/shorts/)([^#&?/]+)").expect("valid video id regex")
});

// watch pages carry the channel as <link itemprop="name" content="...">
static CHANNEL_NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"link[itemprop="name"]"#).expect("valid channel name selector")
});

static OWNER_CHANNEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""ownerChannelName"\s*:\s*"([^"]+)""#).expect("valid owner channel regex")
});
static SCRIPT_AUTHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""author"\s*:\s*"([^"]+)""#).expect("valid script author regex"));

pub(super) fn matches(domain: &Domain) -> bool {
    let host = domain.0.as_str();
    host == "youtu.be" || host == "youtube.com" || host.ends_with(".youtube.com")
}

pub(super) fn apply(mut result: ScrapeResult, url: &str, html: &str) -> ScrapeResult {
    if result.image.is_empty() {
        // no page image; the thumbnail is derivable from the video id alone
        if let Some(id) = video_id(url) {
            result.image = format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg");
        }
    } else if result.image.contains("hqdefault.jpg") {
        result.image = result.image.replace("hqdefault.jpg", "maxresdefault.jpg");
    }

    if result.author.is_empty() {
        if let Some(channel) = channel_name(html, &result.title) {
            result.author = channel;
        }
    }

    result
}

fn video_id(url: &str) -> Option<String> {
    VIDEO_ID
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|id| !id.is_empty())
}

/// Channel fallback chain: itemprop markup, then the player-config script
/// fields, then the "<video> - <channel> - YouTube" title shape.
fn channel_name(html: &str, title: &str) -> Option<String> {
    let document = Html::parse_document(html);
    if let Some(el) = document.select(&CHANNEL_NAME_SELECTOR).next() {
        if let Some(content) = el.value().attr("content") {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    for pattern in [&*OWNER_CHANNEL, &*SCRIPT_AUTHOR] {
        if let Some(name) = pattern
            .captures(html)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|name| !name.is_empty())
        {
            return Some(name);
        }
    }

    if title.ends_with(" - YouTube") {
        let segments: Vec<&str> = title.split(" - ").collect();
        if segments.len() >= 2 {
            let channel = segments[segments.len() - 2].trim();
            if !channel.is_empty() {
                return Some(channel.to_string());
            }
        }
    }

    None
}
