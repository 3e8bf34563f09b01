use axum::http::{HeaderMap, header};

/// Host the client addressed. The first `x-forwarded-host` entry wins over `host`
/// since the service runs behind the edge proxy; empty when neither is present.
pub fn request_host(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-host")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| {
            headers
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
        })
        .unwrap_or_default()
        .to_string()
}
