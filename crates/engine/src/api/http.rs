//! HTTP routes.
//!
//! Versioned resources live under `/api/v1`; `/` and `/health` sit outside
//! the prefix.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use myfun_domain::{HistoryEntry, Profile, Setting};
use myfun_shared::{
    CreateProfileRequest, HealthResponse, HistoryEntryResponse, HistoryQuery, HistoryResponse,
    MessageResponse, ProfileResponse, ServiceInfoResponse, SettingResponse,
    SettingsBulkUpdateRequest, SettingsResponse, UpdateSettingRequest,
};

use crate::app::App;
use crate::infrastructure::neo4j::to_stored_timestamp;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::{ProfileError, SettingsError};

const SERVICE_NAME: &str = "myFun Backend API";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .nest("/api/v1", v1_routes())
}

fn v1_routes() -> Router<Arc<App>> {
    Router::new()
        .route("/profiles", post(create_profile))
        .route("/profiles/{profile_id}", get(get_profile))
        .route(
            "/profiles/{profile_id}/settings",
            get(get_all_settings).post(bulk_update_settings),
        )
        .route(
            "/profiles/{profile_id}/settings/{key}",
            get(get_setting).put(update_setting).delete(delete_setting),
        )
        .route("/profiles/{profile_id}/history", get(get_history))
}

async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Always 200; the body tells whether the database answered.
async fn health(State(app): State<Arc<App>>) -> Json<HealthResponse> {
    match app.health.verify_connectivity().await {
        Ok(()) => Json(HealthResponse::connected()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            Json(HealthResponse::unhealthy(e.to_string()))
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

async fn create_profile(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Json(req) = body?;
    let profile = app
        .use_cases
        .profiles
        .ops
        .create_or_touch(&req.profile_id, req.profile_name)
        .await?;
    Ok(Json(profile_response(profile)))
}

async fn get_profile(
    State(app): State<Arc<App>>,
    Path(profile_id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = app.use_cases.profiles.ops.get(&profile_id).await?;
    Ok(Json(profile_response(profile)))
}

// =============================================================================
// Settings
// =============================================================================

async fn get_all_settings(
    State(app): State<Arc<App>>,
    Path(profile_id): Path<String>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = app.use_cases.settings.ops.get_all(&profile_id).await?;
    Ok(Json(SettingsResponse { settings }))
}

async fn get_setting(
    State(app): State<Arc<App>>,
    Path((profile_id, key)): Path<(String, String)>,
) -> Result<Json<SettingResponse>, ApiError> {
    let setting = app.use_cases.settings.ops.get(&profile_id, &key).await?;
    Ok(Json(setting_response(setting)))
}

/// The path key wins over a `key` echoed in the body.
async fn update_setting(
    State(app): State<Arc<App>>,
    Path((profile_id, key)): Path<(String, String)>,
    body: Result<Json<UpdateSettingRequest>, JsonRejection>,
) -> Result<Json<SettingResponse>, ApiError> {
    let Json(req) = body?;
    let setting = app
        .use_cases
        .settings
        .ops
        .update(&profile_id, &key, req.value, &req.category)
        .await?;
    Ok(Json(setting_response(setting)))
}

async fn bulk_update_settings(
    State(app): State<Arc<App>>,
    Path(profile_id): Path<String>,
    body: Result<Json<SettingsBulkUpdateRequest>, JsonRejection>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let Json(req) = body?;
    let settings = app
        .use_cases
        .settings
        .ops
        .bulk_update(&profile_id, req.settings, &req.category)
        .await?;
    Ok(Json(SettingsResponse { settings }))
}

async fn delete_setting(
    State(app): State<Arc<App>>,
    Path((profile_id, key)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    app.use_cases.settings.ops.delete(&profile_id, &key).await?;
    Ok(Json(MessageResponse::new("Setting deleted successfully")))
}

async fn get_history(
    State(app): State<Arc<App>>,
    Path(profile_id): Path<String>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let Query(query) = query?;
    let history = app
        .use_cases
        .settings
        .ops
        .history(&profile_id, query.key, query.limit)
        .await?
        .into_iter()
        .map(history_entry_response)
        .collect();
    Ok(Json(HistoryResponse { history }))
}

// =============================================================================
// Conversions
// =============================================================================

fn profile_response(profile: Profile) -> ProfileResponse {
    ProfileResponse {
        profile_id: profile.profile_id.into(),
        profile_name: Some(profile.profile_name),
        created_at: Some(to_stored_timestamp(profile.created_at)),
        last_accessed_at: Some(to_stored_timestamp(profile.last_accessed_at)),
    }
}

/// A setting without a readable timestamp reports an empty `updated_at`.
fn setting_response(setting: Setting) -> SettingResponse {
    SettingResponse {
        key: setting.key.into(),
        value: setting.value.into_inner(),
        category: setting.category.into(),
        updated_at: Some(
            setting
                .updated_at
                .map(to_stored_timestamp)
                .unwrap_or_default(),
        ),
    }
}

fn history_entry_response(entry: HistoryEntry) -> HistoryEntryResponse {
    HistoryEntryResponse {
        setting_key: entry.setting_key.into(),
        old_value: entry.old_value,
        new_value: entry.new_value,
        timestamp: to_stored_timestamp(entry.timestamp),
        change_type: entry.change_type.to_string(),
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error body is plain text: the detail for 404/400, the raw error for 500.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ProfileError> for ApiError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProfileError::Invalid(e) => ApiError::BadRequest(e.to_string()),
            ProfileError::Repo(e) => e.into(),
        }
    }
}

impl From<SettingsError> for ApiError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::NotFound(_) => ApiError::NotFound(e.to_string()),
            SettingsError::Invalid(e) => ApiError::BadRequest(e.to_string()),
            SettingsError::Repo(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
