use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rag_system::{
    ChatRequest, ChatResponse, ChunkPreview, ComplaintRequest, ComplaintResponse,
    DebugContentResponse, DebugErrorResponse, MessageResponse, Retriever, ServiceError,
    TranscriptionResponse,
};
use tower_http::cors::{Any, CorsLayer};

const DEBUG_SAMPLE_SIZE: usize = 10;
const DEBUG_PREVIEW_COUNT: usize = 5;
const PREVIEW_CHARS: usize = 200;
const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/debug/pdf-content", get(debug_pdf_content))
        .route("/chat", post(chat))
        .route("/classify", post(classify))
        .route(
            "/speech-to-text/",
            post(speech_to_text).layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES)),
        )
        .layer(cors)
        .with_state(state)
}

async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "🚀 Chatbot + Complaint Classifier is running!".to_string(),
    })
}

async fn debug_pdf_content(State(state): State<AppState>) -> Response {
    match state.retriever().similarity_search("", DEBUG_SAMPLE_SIZE).await {
        Ok(chunks) => {
            let content_preview = chunks
                .iter()
                .take(DEBUG_PREVIEW_COUNT)
                .enumerate()
                .map(|(chunk_id, chunk)| ChunkPreview {
                    chunk_id,
                    content_preview: preview(&chunk.content),
                    full_length: chunk.content.chars().count(),
                })
                .collect();

            Json(DebugContentResponse {
                total_chunks: chunks.len(),
                pdf_loaded: true,
                content_preview,
            })
            .into_response()
        }
        Err(e) => {
            log::error!("Debug content lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DebugErrorResponse {
                    error: e.to_string(),
                    pdf_loaded: false,
                }),
            )
                .into_response()
        }
    }
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let answer = state.chat().answer(&request.question).await?;
    Ok(Json(ChatResponse { answer }))
}

async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<ComplaintRequest>, JsonRejection>,
) -> Result<Json<ComplaintResponse>, ApiError> {
    let Json(request) = payload?;
    let classification = state.classifier().classify(&request.description).await?;
    Ok(Json(classification))
}

/// Accepts the upload under the `audio` field; any other file field is
/// taken as a fallback.
async fn speech_to_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let mut upload: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::validation(format!("Invalid multipart payload: {}", e)))?
    {
        let is_audio = field.name() == Some("audio");
        if !is_audio && (field.file_name().is_none() || upload.is_some()) {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ServiceError::validation(format!("Failed to read audio upload: {}", e)))?;

        upload = Some((file_name, data.to_vec()));
        if is_audio {
            break;
        }
    }

    let (file_name, audio) =
        upload.ok_or_else(|| ServiceError::validation("No audio file provided"))?;

    let transcription = state
        .transcription()
        .transcribe(&audio, file_name.as_deref())
        .await?;

    Ok(Json(TranscriptionResponse { transcription }))
}

fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let head: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}
