use std::path::Path;

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
#[cfg(debug_assertions)]
use axum::{http::Method, routing::post};
#[cfg(debug_assertions)]
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub const NO_STORE: &str = "no-store";
pub const PAGE_CACHE: &str = "public, max-age=259200";
pub const ASSET_CACHE: &str = "public, max-age=604800";

const ASSET_EXTENSIONS: &[&str] = &[
    "wasm", "js", "css", "png", "jpg", "jpeg", "gif", "svg", "webp", "avif", "ico", "woff", "woff2", "ttf",
];

/// `Cache-Control` value for a request path.
pub fn cache_policy(path: &str) -> &'static str {
    if path == "/api" || path.starts_with("/api/") {
        return NO_STORE;
    }
    let file_name = path.rsplit('/').next().unwrap_or_default();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if ASSET_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => ASSET_CACHE,
        _ => PAGE_CACHE,
    }
}

pub async fn cache_headers(request: Request, next: Next) -> Response {
    let policy = cache_policy(request.uri().path());
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(policy));
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}

pub async fn health() -> &'static str {
    "OK"
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Lead webhook stand-in for debug builds of the frontend: answers 200 and
/// sends the posted body back.
#[cfg(debug_assertions)]
pub async fn echo_lead(body: String) -> impl IntoResponse {
    tracing::info!("Echoing lead payload ({} bytes)", body.len());
    ([(header::CONTENT_TYPE, "application/json")], body)
}

// `trunk serve` runs on its own port, so the echo needs CORS.
#[cfg(debug_assertions)]
fn dev_routes() -> Router {
    Router::new().route("/api/leads/echo", post(echo_lead)).layer(
        CorsLayer::new()
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_origin(Any)
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// Health check, then static files from `dist_dir`; unknown paths get
/// `index.html` so the client-side router can take over.
pub fn router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let static_files = ServeDir::new(dist_dir).fallback(index);

    let routes = Router::new().route("/api/health", get(health));
    #[cfg(debug_assertions)]
    let routes = routes.merge(dev_routes());

    routes
        .route("/api/{*rest}", any(api_not_found))
        .fallback_service(static_files)
        .layer(middleware::from_fn(cache_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!doctype html><title>MVP Sprint</title>";

    fn dist() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(dir.path().join("app-1a2b.wasm"), b"\0asm").unwrap();
        dir
    }

    async fn get_path(dist: &TempDir, path: &str) -> Response {
        router(dist.path())
            .oneshot(HttpRequest::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn cache_policy_by_path() {
        assert_eq!(cache_policy("/api/health"), NO_STORE);
        assert_eq!(cache_policy("/api"), NO_STORE);
        assert_eq!(cache_policy("/"), PAGE_CACHE);
        assert_eq!(cache_policy("/terms"), PAGE_CACHE);
        assert_eq!(cache_policy("/index.html"), PAGE_CACHE);
        assert_eq!(cache_policy("/mvpsprint-frontend-9f3c.wasm"), ASSET_CACHE);
        assert_eq!(cache_policy("/images/projects/nfts.PNG"), ASSET_CACHE);
        assert_eq!(cache_policy("/apiary"), PAGE_CACHE);
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let dist = dist();
        let response = get_path(&dist, "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], NO_STORE);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn unknown_api_path_is_not_the_spa() {
        let dist = dist();
        let response = get_path(&dist, "/api/leads").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    async fn lead_echo_returns_the_posted_body() {
        let dist = dist();
        let payload = r#"{"companyName":"Acme","source":"landing_lead_form"}"#;
        let response = router(dist.path())
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/api/leads/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers()[header::CACHE_CONTROL], NO_STORE);
        assert_eq!(body_text(response).await, payload);
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    async fn lead_echo_answers_cors_preflight() {
        let dist = dist();
        let response = router(dist.path())
            .oneshot(
                HttpRequest::builder()
                    .method("OPTIONS")
                    .uri("/api/leads/echo")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dist = dist();
        for path in ["/", "/terms", "/privacy", "/apply", "/does-not-exist"] {
            let response = get_path(&dist, path).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(response.headers()[header::CACHE_CONTROL], PAGE_CACHE, "{}", path);
            assert_eq!(body_text(response).await, INDEX_HTML, "{}", path);
        }
    }

    #[tokio::test]
    async fn assets_get_long_cache_and_nosniff() {
        let dist = dist();
        let response = get_path(&dist, "/app-1a2b.wasm").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], ASSET_CACHE);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }
}
