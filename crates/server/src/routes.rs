pub mod dishes;
pub mod health;

use axum::{
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::errors::JsonApiError;
use crate::openapi;
use crate::state::AppState;

/// Fallback for any unmatched path or method.
pub async fn not_found() -> impl IntoResponse {
    JsonApiError::not_found()
}

/// Build the application router. API routes are mounted under `base_path`
/// (for example `/api`); an empty `base_path` mounts them at the root.
pub fn build_router(state: AppState, cors: CorsLayer, base_path: &str) -> Router {
    let doc = openapi::document(base_path);

    let api = Router::new()
        .route("/health", get(health::health).fallback(not_found))
        .route("/dishes", get(dishes::list).post(dishes::create).fallback(not_found))
        .route("/dishes/random", get(dishes::random).fallback(not_found))
        .route("/dishes/:id", delete(dishes::delete).fallback(not_found))
        .route("/openapi.json", get(move || async move { Json(doc) }))
        .with_state(state);

    let app = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(base_path, api)
    };

    app.fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::in_memory(), CorsLayer::very_permissive(), "/api")
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(b) => {
                req = req.header("content-type", "application/json");
                Body::from(b.to_string())
            }
            None => Body::empty(),
        };
        let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_connected_store() {
        let (status, body) = call(&app(), Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "API is running");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn unmatched_path_and_method_are_json_404() {
        let app = app();
        for (method, uri) in [
            (Method::GET, "/nope"),
            (Method::GET, "/api/nope"),
            (Method::PUT, "/api/dishes"),
            (Method::DELETE, "/api/dishes/random"),
        ] {
            let (status, body) = call(&app, method, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["error"], "Not found");
        }
    }

    #[tokio::test]
    async fn create_then_list_and_delete() {
        let app = app();
        let (status, created) =
            call(&app, Method::POST, "/api/dishes", Some(r#"{"name":" X ","cuisine":"Italian"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "X");
        assert!(created.get("description").is_none());

        let (status, listed) = call(&app, Method::GET, "/api/dishes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let uri = format!("/api/dishes/{}", created["id"].as_str().unwrap());
        let (status, body) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Dish deleted");

        let (status, _) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_bodies_are_bad_requests() {
        let app = app();
        let (status, body) = call(&app, Method::POST, "/api/dishes", Some(r#"{"cuisine":"Thai"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, _) = call(&app, Method::POST, "/api/dishes", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, listed) = call(&app, Method::GET, "/api/dishes", None).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn random_on_empty_store_is_404() {
        let (status, body) = call(&app(), Method::GET, "/api/dishes/random", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn root_mount_and_openapi_document() {
        let app = build_router(AppState::in_memory(), CorsLayer::very_permissive(), "");
        let (status, _) = call(&app, Method::GET, "/dishes", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, doc) = call(&app, Method::GET, "/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/dishes/random"].is_object());
    }
}
