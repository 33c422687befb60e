//! HTTP surface tests
//!
//! Drive the axum router in-process with mocked provider clients to verify
//! the endpoint contracts independently of any network access.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use server::traits::{MockArticleGenerator, MockArticlePublisher};
use server::{Server, ServerError};
use shared::PublishOutcome;

fn test_server(generator: MockArticleGenerator, publisher: MockArticlePublisher) -> Server<MockArticleGenerator, MockArticlePublisher> {
    let bind = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8008);
    Server::new(bind, generator, publisher)
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn generate_returns_article_field() {
    let mut generator = MockArticleGenerator::new();
    generator
        .expect_generate()
        .withf(|title| title == "Linked Lists")
        .returning(|_| Ok("Linked lists are a fundamental data structure.".to_string()));

    let router = test_server(generator, MockArticlePublisher::new()).build_router();

    let response = router
        .oneshot(json_request(
            "/api/generate-article",
            serde_json::json!({ "title": "Linked Lists" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let article = body["article"].as_str().unwrap();
    assert!(!article.is_empty());
}

#[tokio::test]
async fn generate_surfaces_provider_faults_as_http_errors() {
    let mut generator = MockArticleGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Err(ServerError::ProviderUnavailable));

    let router = test_server(generator, MockArticlePublisher::new()).build_router();

    let response = router
        .oneshot(json_request(
            "/api/generate-article",
            serde_json::json!({ "title": "Anything" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn publish_success_is_forwarded_verbatim() {
    let mut publisher = MockArticlePublisher::new();
    publisher.expect_publish().returning(|_| {
        Ok(PublishOutcome::Success {
            url: "https://dev.to/u/article-1".to_string(),
        })
    });

    let router = test_server(MockArticleGenerator::new(), publisher).build_router();

    let response = router
        .oneshot(json_request(
            "/api/publish-article",
            serde_json::json!({ "title": "X", "content": "Y" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["url"], "https://dev.to/u/article-1");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn publish_rejection_is_forwarded_verbatim() {
    let mut publisher = MockArticlePublisher::new();
    publisher.expect_publish().returning(|_| {
        Ok(PublishOutcome::Error {
            message: "Validation failed: title can't be blank".to_string(),
        })
    });

    let router = test_server(MockArticleGenerator::new(), publisher).build_router();

    let response = router
        .oneshot(json_request(
            "/api/publish-article",
            serde_json::json!({ "title": "", "content": "Y" }),
        ))
        .await
        .unwrap();

    // Rejections travel inside the outcome body, not the HTTP status
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Validation failed: title can't be blank");
    assert!(body.get("url").is_none());
}

#[tokio::test]
async fn publish_flag_default_reaches_the_publisher() {
    let mut publisher = MockArticlePublisher::new();
    publisher
        .expect_publish()
        .withf(|request| request.title == "X" && request.content == "Y" && !request.published)
        .returning(|_| {
            Ok(PublishOutcome::Success {
                url: "https://dev.to/u/x-1".to_string(),
            })
        });

    let router = test_server(MockArticleGenerator::new(), publisher).build_router();

    // No published field in the request body
    let response = router
        .oneshot(json_request(
            "/api/publish-article",
            serde_json::json!({ "title": "X", "content": "Y" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_counters() {
    let mut generator = MockArticleGenerator::new();
    generator.expect_generate().returning(|_| Ok("article".to_string()));

    let server = test_server(generator, MockArticlePublisher::new());
    let router = server.build_router();

    let response = router
        .clone()
        .oneshot(json_request(
            "/api/generate-article",
            serde_json::json!({ "title": "T" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["articles_generated"], 1);
    assert_eq!(body["articles_published"], 0);
}

#[tokio::test]
async fn malformed_generate_body_is_rejected() {
    let router = test_server(MockArticleGenerator::new(), MockArticlePublisher::new()).build_router();

    let response = router
        .oneshot(json_request("/api/generate-article", serde_json::json!({ "name": "X" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
