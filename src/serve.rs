//! HTTP boundary for the extractor: one POST endpoint consumed by the
//! product-entry form. 400 is reserved for requests malformed at this
//! boundary; upstream failures travel as 200 with a populated `error` field
//! so the form can degrade to manual entry instead of hard-failing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;

use crate::extractor::MetadataExtractor;
use crate::types::ScrapeRequest;

// The endpoint is a non-sensitive read-only helper; a wildcard origin is
// acceptable.
const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "authorization, content-type, x-client-info";

pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let extractor = MetadataExtractor::new()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(extractor)).await?;
    Ok(())
}

pub fn router(extractor: MetadataExtractor) -> Router {
    Router::new()
        .route("/scrape", post(scrape).options(preflight))
        .with_state(Arc::new(extractor))
}

async fn preflight() -> Response {
    with_cors(StatusCode::OK.into_response())
}

async fn scrape(State(extractor): State<Arc<MetadataExtractor>>, body: Bytes) -> Response {
    let (status, payload) = handle_scrape(&extractor, &body).await;
    let mut response = (status, payload).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    with_cors(response)
}

/// Transport-independent request handling, also the unit-test seam.
async fn handle_scrape(extractor: &MetadataExtractor, body: &[u8]) -> (StatusCode, String) {
    let request = match serde_json::from_slice::<ScrapeRequest>(body) {
        Ok(request) if !request.url.trim().is_empty() => request,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "URL is required" }).to_string(),
            );
        }
    };

    let result = extractor.extract(&request).await;
    let payload = serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string());
    (StatusCode::OK, payload)
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}
