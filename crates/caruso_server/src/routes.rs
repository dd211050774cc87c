//! Route handlers and router assembly.

use crate::{ErrorResponse, HealthResponse, PodcastResponse, ServiceInfo};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use caruso_core::PodcastRequest;
use caruso_error::{CarusoError, CarusoErrorKind, StorageErrorKind};
use caruso_pipeline::PodcastPipeline;
use caruso_storage::ArtifactStore;
use std::sync::Arc;

/// Environment variables each collaborator needs.
const REQUIRED_CREDENTIALS: [&str; 3] =
    ["GEMINI_API_KEY", "ELEVENLABS_API_KEY", "FIRECRAWL_API_KEY"];

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<PodcastPipeline>,
    store: Arc<ArtifactStore>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(pipeline: Arc<PodcastPipeline>, store: Arc<ArtifactStore>) -> Self {
        Self { pipeline, store }
    }
}

/// Creates the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/generate-podcast", post(generate_podcast))
        .route("/audio/:filename", get(get_audio))
        .route("/recent-podcasts", get(recent_podcasts))
        .with_state(state)
}

/// Map a pipeline failure to the status code callers expect.
fn status_for(err: &CarusoError) -> StatusCode {
    match err.kind() {
        CarusoErrorKind::Validation(_) | CarusoErrorKind::Extraction(_) => StatusCode::BAD_REQUEST,
        CarusoErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &CarusoError) -> Response {
    (
        status_for(err),
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
        .into_response()
}

/// Service banner.
async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo {
        message: "Caruso blog-to-podcast service".to_string(),
        status: "healthy".to_string(),
    })
}

/// Report whether all collaborator credentials are configured.
async fn health_check() -> impl IntoResponse {
    let missing = missing_credentials(|name| std::env::var(name).ok());
    Json(health_response(missing))
}

/// Names of required credentials `lookup` cannot resolve.
fn missing_credentials(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    REQUIRED_CREDENTIALS
        .iter()
        .filter(|name| lookup(name).map_or(true, |value| value.trim().is_empty()))
        .map(|name| name.to_string())
        .collect()
}

fn health_response(missing: Vec<String>) -> HealthResponse {
    if missing.is_empty() {
        HealthResponse {
            status: "healthy".to_string(),
            missing,
        }
    } else {
        HealthResponse {
            status: "unhealthy".to_string(),
            missing,
        }
    }
}

/// Run the full pipeline for a blog URL.
async fn generate_podcast(
    State(state): State<AppState>,
    Json(request): Json<PodcastRequest>,
) -> Response {
    match state.pipeline.generate(&request).await {
        Ok(result) => (StatusCode::OK, Json(PodcastResponse::from(&result))).into_response(),
        Err(e) => {
            tracing::error!(url = %request.url, error = %e, "Podcast generation failed");
            error_response(&e)
        }
    }
}

/// Serve a generated audio file.
async fn get_audio(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    match state.store.read_audio(&filename).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response(),
        Err(e) => error_response(&e),
    }
}

/// List the current ledger contents.
async fn recent_podcasts(State(state): State<AppState>) -> Response {
    match state.store.records().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load ledger");
            error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use caruso_error::{CarusoResult, StorageError, ValidationError};
    use caruso_interface::{ContentExtractor, ScriptWriter, SpeechSynthesizer};
    use caruso_storage::MemoryLedger;

    struct FixedExtractor;

    #[async_trait]
    impl ContentExtractor for FixedExtractor {
        async fn extract(&self, _url: &str) -> CarusoResult<String> {
            Ok("Blog content about Rust.".to_string())
        }

        fn provider_name(&self) -> &'static str {
            "fixed-extractor"
        }
    }

    struct FixedWriter;

    #[async_trait]
    impl ScriptWriter for FixedWriter {
        async fn write_script(&self, _content: &str) -> CarusoResult<String> {
            Ok("Welcome to today's episode.".to_string())
        }

        fn provider_name(&self) -> &'static str {
            "fixed-writer"
        }
    }

    struct FixedSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for FixedSynthesizer {
        async fn synthesize(&self, _script: &str) -> CarusoResult<Vec<u8>> {
            Ok(b"mp3 audio bytes".to_vec())
        }

        fn provider_name(&self) -> &'static str {
            "fixed-synthesizer"
        }
    }

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        let store = Arc::new(
            ArtifactStore::new(Box::new(MemoryLedger::new()), dir.path().join("audio"), 5)
                .unwrap(),
        );
        let pipeline = Arc::new(PodcastPipeline::new(
            Arc::new(FixedExtractor),
            Arc::new(FixedWriter),
            Arc::new(FixedSynthesizer),
            store.clone(),
        ));
        AppState::new(pipeline, store)
    }

    #[tokio::test]
    async fn generate_then_list_then_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let response = generate_podcast(
            State(state.clone()),
            Json(PodcastRequest::new("https://example.com/post")),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let records = state.store.records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_url, "https://example.com/post");

        let audio = get_audio(State(state.clone()), Path(records[0].filename.clone())).await;
        assert_eq!(audio.status(), StatusCode::OK);
        assert_eq!(
            audio.headers().get(header::CONTENT_TYPE).unwrap(),
            "audio/mpeg"
        );
    }

    #[tokio::test]
    async fn empty_url_returns_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let response =
            generate_podcast(State(state), Json(PodcastRequest::new("   "))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_audio_returns_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let response = get_audio(State(state), Path("nope.mp3".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_and_extraction_failures_are_the_callers_fault() {
        let err = CarusoError::from(ValidationError::new("URL cannot be empty"));
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_audio_maps_to_not_found() {
        let err = CarusoError::from(StorageError::new(StorageErrorKind::NotFound(
            "gone.mp3".to_string(),
        )));
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let err = CarusoError::from(StorageError::new(StorageErrorKind::Persistence(
            "disk full".to_string(),
        )));
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn health_reports_missing_credentials_by_name() {
        let response = health_response(missing_credentials(|name| {
            (name == "GEMINI_API_KEY").then(|| "key".to_string())
        }));

        assert_eq!(response.status, "unhealthy");
        assert_eq!(
            response.missing,
            vec!["ELEVENLABS_API_KEY".to_string(), "FIRECRAWL_API_KEY".to_string()]
        );
    }

    #[test]
    fn health_is_healthy_with_all_credentials() {
        let response = health_response(missing_credentials(|_| Some("key".to_string())));
        assert_eq!(response.status, "healthy");
        assert!(response.missing.is_empty());
    }

    #[test]
    fn blank_credentials_count_as_missing() {
        let missing = missing_credentials(|_| Some("   ".to_string()));
        assert_eq!(missing.len(), REQUIRED_CREDENTIALS.len());
    }
}
