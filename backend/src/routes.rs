use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, request_context, state::AppState};

const ALLOWED_METHODS: &str = "GET, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

pub fn create_router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/muse", get(handlers::muse))
        .route("/api/:collection", get(handlers::get_collection))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(answer_options))
        .layer(middleware::from_fn(request_context::request_context_middleware))
}

/// Every `OPTIONS` request gets an empty 204 with the CORS headers, whether
/// or not it is a well-formed preflight.
async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    response
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::to_bytes, http::Request as HttpRequest};
    use portfolio_shared::content_store::{FileKvStore, KvStore, MemoryKvStore};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::MuseConfig, muse::MuseClient};

    fn offline_muse() -> MuseClient {
        MuseClient::new(MuseConfig {
            api_key: None,
            api_base: "http://127.0.0.1:9".to_string(),
            model: "unused".to_string(),
        })
    }

    fn app_with(store: Arc<dyn KvStore>) -> Router {
        create_router(AppState::new(store, offline_muse()))
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Response) {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "https://portfolio.example")
            .body(Body::empty())
            .expect("build request");
        let response = app.oneshot(request).await.expect("router is infallible");
        (response.status(), response)
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn stored_collection_is_returned_verbatim() {
        let projects = json!([{"id": "1", "title": "生态追踪", "titleEn": "EcoTrack"}]);
        let store = MemoryKvStore::with_values([("projects".to_string(), projects.clone())]);
        let (status, response) = send(app_with(Arc::new(store)), Method::GET, "/api/projects").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
        assert_eq!(json_body(response).await, projects);
    }

    #[tokio::test]
    async fn missing_or_null_collection_is_an_empty_array() {
        let store = MemoryKvStore::with_values([("blog".to_string(), Value::Null)]);
        let app = app_with(Arc::new(store));

        for uri in ["/api/blog", "/api/calligraphy"] {
            let (status, response) = send(app.clone(), Method::GET, uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json_body(response).await, json!([]));
        }
    }

    #[tokio::test]
    async fn unknown_paths_are_json_404s() {
        let app = app_with(Arc::new(MemoryKvStore::new()));
        for uri in ["/api/settings", "/api/projects/1", "/", "/healthz"] {
            let (status, response) = send(app.clone(), Method::GET, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(json_body(response).await, json!({"error": "Not found"}));
        }
    }

    #[tokio::test]
    async fn store_failure_is_a_json_500() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("photography.json"), "{broken").expect("write");
        let app = app_with(Arc::new(FileKvStore::new(dir.path())));

        let (status, response) = send(app, Method::GET, "/api/photography").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(body["error"].as_str().is_some_and(|message| message.contains("photography")));
    }

    #[tokio::test]
    async fn options_requests_get_an_empty_204_with_cors_headers() {
        let app = app_with(Arc::new(MemoryKvStore::new()));
        for uri in ["/api/projects", "/anything"] {
            let (status, response) = send(app.clone(), Method::OPTIONS, uri).await;
            assert_eq!(status, StatusCode::NO_CONTENT);
            let headers = response.headers();
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("read body");
            assert!(bytes.is_empty());
        }
    }

    #[tokio::test]
    async fn muse_without_key_answers_with_placeholder() {
        let app = app_with(Arc::new(MemoryKvStore::new()));
        let (status, response) = send(app.clone(), Method::GET, "/api/muse?topic=moss").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(response).await["text"], crate::muse::MISSING_KEY_TEXT);

        let (status, _) = send(app, Method::GET, "/api/muse?topic=%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn request_id_is_echoed_back() {
        let app = app_with(Arc::new(MemoryKvStore::new()));
        let request = HttpRequest::builder()
            .uri("/api/blog")
            .header(request_context::REQUEST_ID_HEADER, "req-test-1")
            .body(Body::empty())
            .expect("build request");
        let response = app.oneshot(request).await.expect("router is infallible");
        assert_eq!(response.headers()[request_context::REQUEST_ID_HEADER], "req-test-1");
    }
}
