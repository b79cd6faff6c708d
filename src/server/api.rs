use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{ get, post },
    Router,
    extract::State,
    response::{ IntoResponse, Response },
    http::StatusCode,
    Json,
};
use log::{ info, error };
use serde::{ Deserialize, Serialize };
use thiserror::Error as ThisError;
use tower_http::cors::{ Any, CorsLayer };

use crate::fallback;
use crate::gateway::CompletionGateway;
use crate::models::chat::{ Message, Role };
use crate::store::ConversationStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConversationStore>,
    pub gateway: Option<Arc<CompletionGateway>>,
}

#[derive(Deserialize)]
pub struct PostMessageRequest {
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct ExchangeResponse {
    #[serde(rename = "userMessage")]
    pub user_message: Message,
    #[serde(rename = "aiMessage")]
    pub ai_message: Message,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ClearedBody {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    storage: &'static str,
}

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl ApiError {
    fn internal(context: &'static str, source: Box<dyn Error + Send + Sync>) -> Self {
        ApiError::Internal { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::Internal { context, source } => {
                // Detail stays server-side; the client gets the short context.
                error!("{}: {}", context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/chat/history", get(get_history).delete(delete_history))
        .route("/api/chat/message", post(post_message))
        .route("/api/health", get(health))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    port: u16,
    state: AppState
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = format!("0.0.0.0:{}", port).parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn get_history(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.store
        .list().await
        .map_err(|e| ApiError::internal("Failed to fetch chat history", e))?;
    Ok(Json(messages))
}

async fn post_message(
    State(state): State<AppState>,
    Json(req): Json<PostMessageRequest>
) -> Result<Json<ExchangeResponse>, ApiError> {
    let content = req.content.as_deref().unwrap_or("").trim();
    if content.is_empty() {
        return Err(ApiError::Validation("Message content is required"));
    }

    // No rollback: a downstream failure leaves the user message persisted.
    let user_message = state.store
        .append(Role::User, content).await
        .map_err(|e| ApiError::internal("Failed to process message", e))?;

    let history = state.store
        .list().await
        .map_err(|e| ApiError::internal("Failed to process message", e))?;

    let reply = generate_reply(&state, &history, content).await;

    let ai_message = state.store
        .append(Role::Assistant, &reply).await
        .map_err(|e| ApiError::internal("Failed to process message", e))?;

    Ok(Json(ExchangeResponse { user_message, ai_message }))
}

/// The gateway is best-effort: any failure is logged and the reply comes from
/// the canned-response engine instead. Gateway errors never reach the client.
async fn generate_reply(state: &AppState, history: &[Message], latest: &str) -> String {
    if let Some(gateway) = &state.gateway {
        match gateway.complete(history).await {
            Ok(text) => {
                return text;
            }
            Err(e) => {
                error!("Completion gateway error: {}. Falling back to canned responses.", e);
            }
        }
    }
    fallback::respond(latest)
}

async fn delete_history(State(state): State<AppState>) -> Result<Json<ClearedBody>, ApiError> {
    state.store
        .clear().await
        .map_err(|e| ApiError::internal("Failed to clear history", e))?;
    Ok(Json(ClearedBody { message: "Chat history cleared" }))
}

async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "OK",
        storage: state.store.backend_name(),
    })
}
