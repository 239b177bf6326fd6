use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

/// Desktop Chrome on Windows. Several retailers serve reduced or blocking
/// responses to default/bot-identified client signatures.
pub(super) const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Header set for a single document GET.
pub(super) fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_a_non_default_user_agent() {
        let headers = browser_headers();
        let ua = headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(ua.contains("Mozilla/5.0"));
        assert!(ua.contains("Chrome"));
    }

    #[test]
    fn carries_browser_accept_headers() {
        let headers = browser_headers();
        assert!(headers.contains_key("accept"));
        assert!(headers.contains_key("accept-language"));
    }
}
