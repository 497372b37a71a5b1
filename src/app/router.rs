use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{generations, images};

use super::{controller, envy::Envy, errors::ConfigError, state::AppState, util::temp_files::TempFiles};

/// Base64 inflates the largest accepted image by a third, plus form overhead.
pub const MAX_BODY_SIZE: usize = images::service::MAX_FILE_SIZE / 3 * 4 + 1024 * 1024;

pub fn router(state: Arc<AppState>) -> Result<Router, ConfigError> {
    let cors = cors_layer(&state.envy)?;
    let temp_dir = ServeDir::new(state.delivery.temp_files.dir());

    let app = Router::new()
        .route("/", get(controller::get_root))
        .route("/health", get(controller::get_health))
        .route("/api/generate", post(generations::controller::generate))
        .route(
            "/api/generate-json",
            post(generations::controller::generate_json),
        )
        .nest_service(TempFiles::ROUTE, temp_dir)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
        .with_state(state);

    Ok(app)
}

fn cors_layer(envy: &Envy) -> Result<CorsLayer, ConfigError> {
    let origins = envy.cors_origins();
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST]);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return Ok(cors.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(origins).allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        extract::State,
        http::{header, Request, StatusCode},
        routing::post,
        Json,
    };
    use serde_json::{json, Value};
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        generations::models::generate_response::GenerateResponse,
        test_util::{png_bytes, spawn_stub},
    };

    const BOUNDARY: &str = "blueprint-boundary";

    type SeenPrompt = Arc<Mutex<Option<String>>>;

    /// Upstream stand-in that records the prompt and answers with `reply`.
    async fn spawn_doubao_stub(reply: Value) -> (String, SeenPrompt) {
        let seen: SeenPrompt = Arc::default();
        let stub = Router::new()
            .route(
                "/images/generations",
                post(
                    move |State(seen): State<SeenPrompt>, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            *seen.lock().await = body["prompt"].as_str().map(str::to_string);
                            Json(reply)
                        }
                    },
                ),
            )
            .with_state(seen.clone());

        let base_url = spawn_stub(stub).await;
        (format!("{}/images/generations", base_url), seen)
    }

    async fn test_app(api_url: String, temp_dir: &tempfile::TempDir) -> Router {
        let envy = Envy {
            ark_api_key: Some("ark-key".to_string()),
            ark_api_url: Some(api_url),
            temp_dir: Some(temp_dir.path().to_string_lossy().to_string()),
            generation_timeout_secs: Some(5),
            ..Default::default()
        };

        router(crate::app::state::provide_state(envy).await.unwrap()).unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

        (status, body.to_vec())
    }

    fn json_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-json")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(file_name: &str, file: &[u8], fields: &[(&str, &str)]) -> Request<Body> {
        let mut body = Vec::new();

        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(file);
        body.extend_from_slice(b"\r\n");

        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY, name, value
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn parse(body: &[u8]) -> GenerateResponse {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn json_endpoint_returns_upstream_url() {
        let (api_url, seen) =
            spawn_doubao_stub(json!({ "data": [{ "url": "http://x/y.png" }] })).await;
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app(api_url, &temp_dir).await;

        let (status, body) = send(
            app,
            json_request(json!({
                "image": base64::encode(png_bytes(100, 100)),
                "viewAngle": "side",
                "style": "technical",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response = parse(&body);
        assert!(response.success);
        assert_eq!(response.image_url.as_deref(), Some("http://x/y.png"));
        assert_eq!(response.error, None);
        assert!(response.processing_time >= 0.0);

        let prompt = seen.lock().await.take().unwrap();
        assert!(prompt.contains("正交侧视图"));
        assert!(prompt.contains("技术线稿"));
    }

    #[tokio::test]
    async fn multipart_endpoint_persists_inline_image() {
        let generated = png_bytes(12, 12);
        let (api_url, seen) = spawn_doubao_stub(json!({
            "data": { "b64_image": base64::encode(&generated) }
        }))
        .await;
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app(api_url, &temp_dir).await;

        let (status, body) = send(
            app.clone(),
            multipart_request(
                "plan.png",
                &png_bytes(100, 100),
                &[("description", "two storey house"), ("viewAngle", "top")],
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let image_url = parse(&body).image_url.unwrap();
        assert!(image_url.starts_with("/temp/"));

        let prompt = seen.lock().await.take().unwrap();
        assert!(prompt.contains("SUBJECT DESCRIPTION: two storey house"));
        assert!(prompt.contains("SPECIAL CONSTRAINT FOR TOP VIEW"));

        let served = Request::builder()
            .uri(image_url.as_str())
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, served).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, generated);
    }

    #[tokio::test]
    async fn pdf_upload_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let (status, body) = send(app, multipart_request("drawing.pdf", b"%PDF-1.4", &[])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let response = parse(&body);
        assert!(!response.success);
        assert!(response.error.unwrap().contains("PDF"));
    }

    #[tokio::test]
    async fn undecodable_upload_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let (status, body) = send(app, multipart_request("plan.png", b"not a png", &[])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!parse(&body).success);
    }

    #[tokio::test]
    async fn unreadable_text_field_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let mut body = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"plan.png\"\r\nContent-Type: image/png\r\n\r\n",
            BOUNDARY
        )
        .into_bytes();
        body.extend_from_slice(&png_bytes(8, 8));
        body.extend_from_slice(
            format!(
                "\r\n--{}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\ncut off mid",
                BOUNDARY
            )
            .as_bytes(),
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let response = parse(&body);
        assert!(!response.success);
        assert!(response.error.unwrap().contains("description"));
    }

    #[tokio::test]
    async fn oversized_dimensions_are_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let (status, body) = send(
            app,
            json_request(json!({ "image": base64::encode(png_bytes(9000, 1)) })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response_error(&body).contains("dimensions"));
    }

    fn response_error(body: &[u8]) -> String {
        parse(body).error.unwrap()
    }

    #[tokio::test]
    async fn missing_image_field_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(format!(
                "--{0}\r\nContent-Disposition: form-data; name=\"style\"\r\n\r\ncartoon\r\n--{0}--\r\n",
                BOUNDARY
            )))
            .unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!parse(&body).success);
    }

    #[tokio::test]
    async fn invalid_base64_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let (status, body) = send(app, json_request(json!({ "image": "%%%" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let response = parse(&body);
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Invalid base64 image data."));
    }

    #[tokio::test]
    async fn malformed_json_uses_the_envelope() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/generate-json")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"image\":"))
            .unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!parse(&body).success);
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_server_error() {
        let (api_url, _) = spawn_doubao_stub(json!({ "data": [] })).await;
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app(api_url, &temp_dir).await;

        let (status, body) = send(
            app,
            json_request(json!({ "image": base64::encode(png_bytes(10, 10)) })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let response = parse(&body);
        assert!(!response.success);
        assert_eq!(response.image_url, None);
        assert!(response.error.unwrap().starts_with("Generation failed:"));
    }

    #[tokio::test]
    async fn upstream_timeout_maps_to_gateway_timeout() {
        let stub = Router::new().route(
            "/images/generations",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Json(json!({}))
            }),
        );
        let base_url = spawn_stub(stub).await;
        let temp_dir = tempfile::tempdir().unwrap();
        let envy = Envy {
            ark_api_key: Some("ark-key".to_string()),
            ark_api_url: Some(format!("{}/images/generations", base_url)),
            temp_dir: Some(temp_dir.path().to_string_lossy().to_string()),
            generation_timeout_secs: Some(1),
            ..Default::default()
        };
        let app = router(crate::app::state::provide_state(envy).await.unwrap()).unwrap();

        let (status, body) = send(
            app,
            json_request(json!({ "image": base64::encode(png_bytes(10, 10)) })),
        )
        .await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        let response = parse(&body);
        assert!(!response.success);
        assert!(!response.error.unwrap().is_empty());
        assert!(response.processing_time >= 0.0);
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = test_app("http://127.0.0.1:1/unused".to_string(), &temp_dir).await;

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn invalid_cors_origin_is_a_config_error() {
        let envy = Envy {
            cors_origins: Some("http://ok.test,bad\norigin".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            cors_layer(&envy),
            Err(ConfigError::InvalidCorsOrigin(_))
        ));
    }
}
