use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::application::DEFAULT_CONVERSATION_LIMIT;
use crate::connector::api::Container;
use crate::domain::{ChatRequest, Message};

use super::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub id: i64,
    pub user: String,
    pub message: String,
    pub response: String,
    pub timestamp: String,
}

impl From<&Message> for ConversationEntry {
    fn from(msg: &Message) -> Self {
        Self {
            id: msg.id().unwrap_or_default(),
            user: msg.user().to_string(),
            message: msg.message().to_string(),
            response: msg.response().to_string(),
            timestamp: msg.timestamp_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ConversationsParams {
    limit: Option<i64>,
}

/// `POST /chat`
pub(super) async fn chat(
    State(container): State<Arc<Container>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let use_case = container.send_message_use_case();
    let saved = use_case.execute(request).await?;

    Ok(Json(ChatResponse {
        response: saved.response().to_string(),
    }))
}

/// `GET /conversations?limit=N`, oldest first.
pub(super) async fn conversations(
    State(container): State<Arc<Container>>,
    Query(params): Query<ConversationsParams>,
) -> Result<Json<Vec<ConversationEntry>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_CONVERSATION_LIMIT);
    debug!("Listing conversations (limit {})", limit);

    let use_case = container.list_conversations_use_case();
    let messages = use_case.execute(limit).await.map_err(|e| {
        let invalid = e.is_invalid_input();
        let err = ApiError::from(e);
        if invalid {
            err.with_status(StatusCode::BAD_REQUEST)
        } else {
            err
        }
    })?;

    Ok(Json(messages.iter().map(ConversationEntry::from).collect()))
}

/// `GET /health`
pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
