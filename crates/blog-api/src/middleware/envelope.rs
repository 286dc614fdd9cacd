//! Envelope for error responses produced outside the handlers
//!
//! Method mismatches (405), the rate limiter (429) and the request timeout
//! (503) answer with empty or plain-text bodies. This rewrites any non-JSON
//! error body into the same `{code, message}` shape the handlers use.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::response::Envelope;

pub async fn wrap_bare_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let envelope: Envelope<()> = Envelope {
        code: status.as_u16(),
        message: status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
        data: None,
    };
    let body = Json(envelope).into_response().into_body();

    // Keep status and headers such as x-request-id or retry hints
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Response::from_parts(parts, body)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
