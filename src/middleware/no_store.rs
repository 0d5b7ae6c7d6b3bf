use axum::{
    extract::Request,
    http::{
        header::{CACHE_CONTROL, REFERRER_POLICY},
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};

/// Keeps authorize URLs and returned codes out of caches and `Referer` headers.
pub async fn no_store_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    response
}
