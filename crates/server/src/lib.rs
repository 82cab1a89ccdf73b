//! Inventory server library.
//!
//! The product store, the GraphQL API over it and the HTML inventory page,
//! exposed as a library so the router can be tested and embedded.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Build the application router.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let public_dir = ServeDir::new(&state.config().public_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .fallback_service(public_dir)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;
    use crate::middleware::REQUEST_ID_HEADER;

    fn test_app() -> (Router, AppState) {
        let state = AppState::new(ServerConfig::default());
        (app(state.clone()), state)
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn graphql_post(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_graphql_add_and_list() {
        let (app, state) = test_app();

        let add = json!({
            "query": "mutation ($product: ProductInputs!) { addProduct(product: $product) { id } }",
            "variables": {"product": {"name": "Shirt", "price": 9.99, "category": "Shirts", "imageUrl": ""}}
        });
        let response = app.clone().oneshot(graphql_post(&add)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["data"]["addProduct"]["id"], 1);

        let list = json!({"query": "{ productList { id name } }", "variables": {}});
        let response = app.oneshot(graphql_post(&list)).await.unwrap();
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["data"]["productList"], json!([{"id": 1, "name": "Shirt"}]));
        assert_eq!(state.store().len().await, 1);
    }

    #[tokio::test]
    async fn test_graphql_malformed_body_is_rejected() {
        let (app, _) = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_graphql_syntax_error_comes_back_as_errors() {
        let (app, _) = test_app();
        let response = app
            .oneshot(graphql_post(&json!({"query": "{ productList { "})))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["errors"][0]["message"].is_string());
    }

    #[tokio::test]
    async fn test_graphiql_page() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("/graphql"));
    }

    #[tokio::test]
    async fn test_home_page_on_empty_store() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("My Company Inventory"));
        assert!(html.contains("No Products added yet"));
        assert!(html.contains(r#"value="$""#));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[tokio::test]
    async fn test_add_form_adds_and_resets() {
        let (app, state) = test_app();
        let response = app
            .oneshot(form_post(
                "/products",
                "name=Denim&price=%2412.50&category=Jeans&imageUrl=https%3A%2F%2Fexample.com%2Fd.png",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"id="product-1""#));
        assert!(html.contains("Denim"));
        assert!(html.contains("12.5"));
        assert!(html.contains(r#"target="_blank""#));
        // Form is back to its initial state
        assert!(html.contains(r#"id="name" name="name" value="""#));
        assert!(html.contains(r#"<option value="Shirts" selected>"#));

        let stored = state.store().list().await;
        assert_eq!(stored[0].price, Some(12.5));
        assert_eq!(stored[0].category.as_deref(), Some("Jeans"));
    }

    #[tokio::test]
    async fn test_add_form_with_bare_symbol_stores_no_price() {
        let (app, state) = test_app();
        app.oneshot(form_post("/products", "name=Belt&price=%24&category=Accessories"))
            .await
            .unwrap();

        let stored = state.store().list().await;
        assert_eq!(stored.len(), 1);
        assert!(stored[0].price.is_none());
    }

    #[tokio::test]
    async fn test_price_keystroke_keeps_symbol_in_front() {
        let (app, _) = test_app();
        let response = app
            .oneshot(form_post("/products/price", "price=12%243"))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.contains(r#"value="$123""#));
        assert!(html.contains(r#"hx-post="/products/price""#));
        // A newer keystroke aborts the one in flight instead of being dropped
        assert!(html.contains(r#"hx-sync="this:replace""#));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_static_files() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/missing.txt").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
