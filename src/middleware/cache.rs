use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

/// Embedded assets are versioned with the binary, everything else is a
/// freshly rendered page.
fn is_static_file(path: &str) -> bool {
    path.starts_with("/static/") || path == "/favicon.ico" || path == "/robots.txt"
}

/// Middleware to set cache control headers
/// - Static files: cached for a day
/// - Pages and form responses: never cached
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = is_static_file(req.uri().path());
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_static {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=86400"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    }

    response
}
