use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use flashdeck_server::{
    error::{GENERATION_FAILED_MESSAGE, PDF_IMPORT_PENDING_MESSAGE},
    server::{self, handlers::AppState},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt; // for `oneshot`

mod common;

use common::{mocks::MockGenerator, test_utils::*};

fn create_test_app(generator: MockGenerator) -> Router {
    server::router(AppState::new(create_service(generator)))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn images_body(count: usize) -> Value {
    let images: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "base64": SAMPLE_BASE64,
                "mimeType": "image/png",
                "name": format!("page-{}.png", i)
            })
        })
        .collect();
    json!({ "images": images, "language": "Spanish" })
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app(MockGenerator::new());

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_images_endpoint_returns_flashcards() {
    let generator = MockGenerator::new().with_responses(vec![full_flashcard_output()]);
    let app = create_test_app(generator.clone());

    let response = app
        .oneshot(post_json("/flashcards/images", images_body(2)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, full_flashcard_output());
    assert_eq!(generator.get_requests()[0].messages[0].image_urls().len(), 2);
}

#[tokio::test]
async fn test_images_endpoint_rejects_empty_list() {
    let generator = MockGenerator::new();
    let app = create_test_app(generator.clone());

    let response = app
        .oneshot(post_json("/flashcards/images", json!({"images": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid request");
    assert_eq!(body["issues"][0]["path"], "images");
    assert!(generator.get_requests().is_empty());
}

#[tokio::test]
async fn test_images_endpoint_rejects_short_base64() {
    let app = create_test_app(MockGenerator::new());

    let body = json!({
        "images": [{"base64": "c2hvcnQ=AA", "mimeType": "image/png", "name": "a.png"}]
    });
    let response = app.oneshot(post_json("/flashcards/images", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["issues"][0]["path"], "images[0].base64");
}

#[tokio::test]
async fn test_images_endpoint_hides_upstream_error() {
    let generator = MockGenerator::new().with_error("invalid_api_key sk-live-abc");
    let app = create_test_app(generator);

    let response = app
        .oneshot(post_json("/flashcards/images", images_body(1)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"], GENERATION_FAILED_MESSAGE);
    assert!(!body.to_string().contains("sk-live"));
    assert!(body.get("issues").is_none());
}

#[tokio::test]
async fn test_pdfs_endpoint_is_not_implemented() {
    let app = create_test_app(MockGenerator::new());

    let body = json!({
        "files": [{
            "base64": "JVBERi0xLjQK",
            "mimeType": "application/pdf",
            "name": "lecture.pdf",
            "sizeBytes": 1024
        }]
    });
    let response = app.oneshot(post_json("/flashcards/pdfs", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_json(response).await["error"], PDF_IMPORT_PENDING_MESSAGE);
}

#[tokio::test]
async fn test_pdfs_endpoint_validates_shape() {
    let app = create_test_app(MockGenerator::new());

    let body = json!({
        "files": [{
            "base64": "JVBERi0xLjQK",
            "mimeType": "application/pdf",
            "name": "empty.pdf",
            "sizeBytes": 0
        }]
    });
    let response = app.oneshot(post_json("/flashcards/pdfs", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["issues"][0]["path"],
        "files[0].sizeBytes"
    );
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let app = create_test_app(MockGenerator::new());

    let body = json!({"images": [{"base64": SAMPLE_BASE64, "name": "a.png"}]});
    let response = app.oneshot(post_json("/flashcards/images", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let app = create_test_app(MockGenerator::new());

    let request = Request::builder()
        .method("POST")
        .uri("/flashcards/images")
        .header("content-type", "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pattern_endpoint_renders_svg() {
    let app = create_test_app(MockGenerator::new());

    let request = Request::builder()
        .uri("/pattern?data=DECK-42&size=210&foreground=%23123456")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "image/svg+xml"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let svg = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(svg.contains("width=\"250\""));
    assert!(svg.contains("fill=\"#123456\""));
    assert!(svg.contains("fill=\"#FFFFFF\""));
}

#[tokio::test]
async fn test_pattern_endpoint_rejects_non_positive_size() {
    let app = create_test_app(MockGenerator::new());

    let request = Request::builder()
        .uri("/pattern?data=DECK-42&size=0")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["issues"][0]["path"], "size");
}
