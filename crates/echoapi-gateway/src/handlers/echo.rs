//! `/api` echo handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method},
    response::Html,
};

use echoapi_core::echo::{collapse_headers, render_page, EchoBody, EchoPayload};

use crate::app_state::AppState;

/// Path served by the echo handler; also the `endpoint` metric label.
pub const ECHO_ENDPOINT: &str = "/api";

/// Count the request, then reflect its method, headers, and body as HTML.
pub async fn echo(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    raw: Bytes,
) -> Html<String> {
    state.metrics().record_request(method.as_str(), ECHO_ENDPOINT);

    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let body = EchoBody::parse(content_type, &raw);

    let headers = collapse_headers(headers.iter().map(|(name, value)| {
        (
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )
    }));

    tracing::debug!(
        method = %method,
        body_kind = body.kind(),
        body_len = raw.len(),
        headers = headers.len(),
        "echo request"
    );

    Html(render_page(&EchoPayload {
        method: method.to_string(),
        headers,
        body,
    }))
}
