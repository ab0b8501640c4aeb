//! HTTP API
//!
//! Router and handlers. Every error leaves as `{code, message}` JSON so
//! the frontend can surface validation messages and log the rest.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Game, SignupForm};
use crate::store::{CatalogEntry, ListStore, Session, StoreError};


/// Header carrying the session token on authenticated requests
pub const SESSION_HEADER: &str = "x-session-token";

pub struct AppState {
    pub store: ListStore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Unauthorized,
    NotFound,
    Validation,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

type Rejection = (StatusCode, Json<ApiError>);

/// Body of `POST /add` and `POST /remove`
#[derive(Debug, Deserialize, Serialize)]
pub struct ListChangeRequest {
    pub response: String,
}

/// Success body of `POST /add` and `POST /remove`: the identifier,
/// echoed verbatim so the client knows which element to update
#[derive(Debug, Deserialize, Serialize)]
pub struct ListChangeResponse {
    pub response: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SignupResponse {
    pub user_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/games", get(list_games))
        .route("/my-games", get(list_my_games))
        .route("/search", get(search_games))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/add", post(add_to_list))
        .route("/remove", post(remove_from_list))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

// ========================
// Catalog
// ========================

async fn list_games(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Vec<CatalogEntry>> {
    let user = maybe_session(&state, &headers).await;
    Json(state.store.catalog_for(user).await)
}

async fn search_games(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<CatalogEntry>> {
    let user = maybe_session(&state, &headers).await;
    Json(state.store.search(query.q.trim(), user).await)
}

async fn list_my_games(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Game>>, Rejection> {
    let user = require_session(&state, &headers).await?;
    Ok(Json(state.store.wishlist(user).await))
}

// ========================
// List Mutations
// ========================

async fn add_to_list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ListChangeRequest>,
) -> Result<Json<ListChangeResponse>, Rejection> {
    let user = require_session(&state, &headers).await?;
    let game_id = parse_game_id(&request.response)?;
    state
        .store
        .add_to_list(user, game_id)
        .await
        .map_err(reject)?;
    info!(user, game = game_id, "added to list");
    Ok(Json(ListChangeResponse {
        response: request.response,
    }))
}

async fn remove_from_list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ListChangeRequest>,
) -> Result<Json<ListChangeResponse>, Rejection> {
    let user = require_session(&state, &headers).await?;
    let game_id = parse_game_id(&request.response)?;
    state
        .store
        .remove_from_list(user, game_id)
        .await
        .map_err(reject)?;
    info!(user, game = game_id, "removed from list");
    Ok(Json(ListChangeResponse {
        response: request.response,
    }))
}

// ========================
// Accounts
// ========================

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SignupForm>,
) -> Result<Json<SignupResponse>, Rejection> {
    let user_id = state.store.signup(form).await.map_err(reject)?;
    info!(user_id, "account created");
    Ok(Json(SignupResponse { user_id }))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Session>, Rejection> {
    let session = state
        .store
        .login(&request.username, &request.password)
        .await
        .map_err(reject)?;
    info!(username = %session.username, "logged in");
    Ok(Json(session))
}

async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    if let Some(token) = session_token(&headers) {
        state.store.logout(token).await;
    }
    Json(serde_json::json!({ "status": "ok" }))
}

// ========================
// Helpers
// ========================

fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(SESSION_HEADER)?.to_str().ok()
}

async fn maybe_session(state: &AppState, headers: &HeaderMap) -> Option<u32> {
    let token = session_token(headers)?;
    state.store.authenticate(token).await
}

async fn require_session(state: &AppState, headers: &HeaderMap) -> Result<u32, Rejection> {
    match maybe_session(state, headers).await {
        Some(user) => Ok(user),
        None => Err(error(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized,
            "a valid session is required",
        )),
    }
}

fn parse_game_id(raw: &str) -> Result<u32, Rejection> {
    raw.trim().parse().map_err(|_| {
        error(
            StatusCode::BAD_REQUEST,
            ErrorCode::Validation,
            format!("'{raw}' is not a game identifier"),
        )
    })
}

fn error(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Rejection {
    (
        status,
        Json(ApiError {
            code,
            message: message.into(),
        }),
    )
}

fn reject(err: StoreError) -> Rejection {
    match err {
        StoreError::Validation(message) => {
            error(StatusCode::BAD_REQUEST, ErrorCode::Validation, message)
        }
        StoreError::Unauthorized(message) => {
            error(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, message)
        }
        StoreError::NotFound(message) => {
            error(StatusCode::NOT_FOUND, ErrorCode::NotFound, message)
        }
        StoreError::Internal(message) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Internal, message)
        }
    }
}
