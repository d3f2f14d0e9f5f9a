//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;

use crate::auth::{AuthError, require_token};
use crate::domain::{Trail, TrailFilter, TrailId, ValidationError};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `/health` and `/login` are open; every `/trails` route requires a bearer token.
pub fn create_router(state: AppState) -> Router {
    let trails = Router::new()
        .route("/trails", get(list_trails).post(create_trail))
        .route("/trails/nearby", get(nearby_trails))
        .route(
            "/trails/:id",
            get(get_trail).put(update_trail).delete(delete_trail),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .merge(trails)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Exchange credentials for a bearer token.
async fn login(State(state): State<AppState>, body: Bytes) -> Result<Json<LoginResponse>, AppError> {
    let req: LoginRequest = parse_json(&body)?;
    let token = state.tokens.login(&req.username, &req.password)?;
    Ok(Json(LoginResponse { token }))
}

/// Create a trail, rejecting near-identical ones.
async fn create_trail(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TrailResult>), AppError> {
    let req: TrailRequest = parse_json(&body)?;
    let trail = req.into_trail()?;
    let created = state.store.create(trail)?;
    Ok((StatusCode::CREATED, Json(TrailResult::from(&created))))
}

/// Fetch one trail by id.
async fn get_trail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrailResult>, AppError> {
    let id = parse_id(&id)?;
    let trail = state.store.get(&id)?;
    Ok(Json(TrailResult::from(&trail)))
}

/// List trails matching the query parameters.
async fn list_trails(
    State(state): State<AppState>,
    query: Result<Query<TrailQuery>, QueryRejection>,
) -> Result<Json<ListTrailsResponse>, AppError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;
    respond_with_matches(&state, &filter)
}

/// List trails within a radius of a point.
///
/// Same parameters as [`list_trails`], but the proximity triple is mandatory.
async fn nearby_trails(
    State(state): State<AppState>,
    query: Result<Query<TrailQuery>, QueryRejection>,
) -> Result<Json<ListTrailsResponse>, AppError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;
    if filter.latitude.is_none() && filter.longitude.is_none() && filter.radius_km.is_none() {
        return Err(AppError::BadRequest {
            message: "nearby search requires lat, lon and radius-km".to_string(),
        });
    }
    respond_with_matches(&state, &filter)
}

fn respond_with_matches(
    state: &AppState,
    filter: &TrailFilter,
) -> Result<Json<ListTrailsResponse>, AppError> {
    let mut trails = state.store.list(Some(filter))?;
    // The store has no ordering; keep responses stable
    trails.sort_by_key(|t| (t.created_at, t.id));

    Ok(Json(ListTrailsResponse {
        trails: trails.iter().map(TrailResult::from).collect(),
    }))
}

/// Replace a trail's fields, keeping its id and creation time.
async fn update_trail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TrailResult>, AppError> {
    let id = parse_id(&id)?;
    let req: TrailRequest = parse_json(&body)?;
    let trail = Trail {
        id,
        ..req.into_trail()?
    };

    let saved = state.store.replace(trail)?;
    Ok(Json(TrailResult::from(&saved)))
}

/// Delete a trail.
async fn delete_trail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Parse a JSON body, reporting failures as bad requests.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {e}"),
    })
}

/// An unparseable id cannot name a stored trail.
fn parse_id(raw: &str) -> Result<TrailId, AppError> {
    TrailId::parse(raw).map_err(|_| AppError::NotFound {
        message: "trail not found".to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        let message = e.to_string();
        match e {
            StoreError::Validation(_) | StoreError::InvalidFilter(_) => {
                AppError::BadRequest { message }
            }
            StoreError::Duplicate => AppError::Conflict { message },
            StoreError::NotFound(_) => AppError::NotFound { message },
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        let message = e.to_string();
        match e {
            AuthError::MissingCredentials => AppError::BadRequest { message },
            AuthError::MissingHeader | AuthError::InvalidToken => {
                AppError::Unauthorized { message }
            }
            AuthError::Signing(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
