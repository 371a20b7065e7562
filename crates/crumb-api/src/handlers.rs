//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/path parameters via axum extractors,
//! interacts with AppState services, and returns JSON responses.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crumb_catalog::{CategoryFilter, Product};
use crumb_chat::types::{HistoryResponse, MessageRequest, MessageResponse, SessionResponse};
use crumb_feed::{MediaItem, MediaKind};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ProductsParams {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub kind: Option<String>,
    pub limit: Option<usize>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub chat_enabled: bool,
    pub active_sessions: u64,
    pub topics: u64,
    pub rules: u64,
    pub product_count: u64,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub slug: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct FeedMediaResponse {
    pub media: Vec<MediaItem>,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - liveness check with basic site stats.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let uptime = state.start_time.elapsed().as_secs();
    let active_sessions = state.chat.session_count().map_err(ApiError::from)? as u64;
    let knowledge = crumb_chat::builtin();
    let rules: usize = knowledge.topics.iter().map(|t| t.rules.len()).sum();

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
        uptime_secs: uptime,
        chat_enabled: state.config.chat.enabled,
        active_sessions,
        topics: knowledge.topics.len() as u64,
        rules: rules as u64,
        product_count: crumb_catalog::all().len() as u64,
    }))
}

/// GET /ui - serve the self-contained chat widget HTML.
pub async fn ui() -> impl IntoResponse {
    Html(crumb_ui::widget::CHAT_WIDGET_HTML)
}

/// POST /chat/sessions - open a chat session and return the greeting.
pub async fn create_chat_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (session_id, greeting) = state.chat.create_session()?;
    Ok(Json(SessionResponse {
        session_id,
        greeting,
        typing_delay_ms: state.config.chat.typing_delay_ms,
    }))
}

/// POST /chat/message - resolve a reply for a visitor message.
///
/// A missing or unknown session id starts a fresh session; the response
/// carries the id the client should keep using.
pub async fn chat_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (session_id, reply) = state
        .chat
        .handle_message(request.session_id, &request.message)?;
    Ok(Json(MessageResponse { session_id, reply }))
}

/// GET /chat/sessions/{id}/messages - full history of a session.
pub async fn chat_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let messages = state.chat.history(id)?;
    Ok(Json(HistoryResponse {
        session_id: id,
        messages,
    }))
}

/// DELETE /chat/sessions/{id} - end a session and discard its history.
pub async fn end_chat_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.chat.end_session(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /products - catalog listing with optional category and featured
/// filters.
pub async fn products(
    Query(params): Query<ProductsParams>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let filter = match params.category.as_deref() {
        Some(raw) => CategoryFilter::parse(raw).ok_or_else(|| {
            ApiError::BadRequest(format!(
                "Invalid category '{}'. Must be one of: all, traditional, filled, chocolate, coffee",
                raw
            ))
        })?,
        None => CategoryFilter::All,
    };

    let mut selected = crumb_catalog::by_category(filter);
    if let Some(featured) = params.featured {
        selected.retain(|product| product.featured == featured);
    }

    let products: Vec<Product> = selected.into_iter().copied().collect();
    Ok(Json(ProductsResponse {
        total: products.len(),
        products,
    }))
}

/// GET /products/categories - category filter options in display order,
/// starting with the "all" pseudo-filter.
pub async fn product_categories() -> Json<CategoriesResponse> {
    let mut categories = vec![CategoryInfo {
        slug: "all".to_string(),
        label: "All".to_string(),
    }];
    categories.extend(
        crumb_catalog::categories()
            .into_iter()
            .map(|category| CategoryInfo {
                slug: category.as_str().to_string(),
                label: category.label().to_string(),
            }),
    );
    Json(CategoriesResponse { categories })
}

/// GET /products/{id} - a single product by id.
pub async fn product(Path(id): Path<u32>) -> Result<Json<Product>, ApiError> {
    crumb_catalog::by_id(id)
        .map(|product| Json(*product))
        .ok_or_else(|| ApiError::NotFound(format!("No product with id {}", id)))
}

/// GET /feed/media - latest feed media, optionally filtered by kind.
///
/// Fetch problems never surface here; the feed degrades to an empty list.
pub async fn feed_media(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<FeedMediaResponse>, ApiError> {
    let media = match params.kind.as_deref() {
        None => {
            let mut items = state.feed.latest_media().await;
            if let Some(limit) = params.limit {
                items.truncate(limit);
            }
            items
        }
        Some(raw) => match MediaKind::parse(raw) {
            Some(MediaKind::Image) => state.feed.latest_posts(params.limit).await,
            Some(MediaKind::Video) => state.feed.latest_reels(params.limit).await,
            _ => {
                return Err(ApiError::BadRequest(format!(
                    "Invalid kind '{}'. Must be one of: image, posts, video, reels",
                    raw
                )))
            }
        },
    };

    Ok(Json(FeedMediaResponse { media }))
}
