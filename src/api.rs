// 🌐 REST API - axum routes over the four resource controllers
//
// Request layer duties live here: JSON/query/path extraction, boundary
// validation, and mapping core errors onto HTTP status codes.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::controller::Controller;
use crate::entities::{Address, Disposable, Entity, Person, Scholarship, Tuition};
use crate::error::StoreError;
use crate::record::Record;
use crate::validation::{Validate, ValidationError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub persons: Arc<Controller<Person>>,
    pub addresses: Arc<Controller<Address>>,
    pub tuitions: Arc<Controller<Tuition>>,
    pub scholarships: Arc<Controller<Scholarship>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            persons: Arc::new(Controller::new()),
            addresses: Arc::new(Controller::new()),
            tuitions: Arc::new(Controller::new()),
            scholarships: Arc::new(Controller::new()),
            config: Arc::new(config),
        }
    }
}

/// Entity kinds exposed over HTTP
pub trait Routed: Entity + Validate {
    fn controller(state: &AppState) -> &Controller<Self>;
}

impl Routed for Person {
    fn controller(state: &AppState) -> &Controller<Self> {
        &state.persons
    }
}

impl Routed for Address {
    fn controller(state: &AppState) -> &Controller<Self> {
        &state.addresses
    }
}

impl Routed for Tuition {
    fn controller(state: &AppState) -> &Controller<Self> {
        &state.tuitions
    }
}

impl Routed for Scholarship {
    fn controller(state: &AppState) -> &Controller<Self> {
        &state.scholarships
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Conflict { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_)
            | ApiError::Json(_)
            | ApiError::Query(_)
            | ApiError::Path(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

// Extractors whose rejections come back as ApiError instead of axum's plain-text bodies

#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
struct ApiJson<T>(T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
struct ApiQuery<T>(T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
struct ApiPath<T>(T);

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

// ============================================================================
// RESOURCE HANDLERS
// ============================================================================

/// POST /{kind}
async fn create<T: Routed>(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<T>,
) -> ApiResult<(StatusCode, Json<Record<T>>)> {
    fields.validate()?;
    let record = T::controller(&state).create(fields)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /{kind}?field=value
async fn list<T: Routed>(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<T::Query>,
) -> Json<Vec<Record<T>>> {
    Json(T::controller(&state).list(&query))
}

/// GET /{kind}/:id
async fn fetch<T: Routed>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Record<T>>> {
    Ok(Json(T::controller(&state).get(id)?))
}

/// PATCH /{kind}/:id
async fn update<T>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(update): ApiJson<T::Update>,
) -> ApiResult<Json<Record<T>>>
where
    T: Routed,
    T::Update: Validate,
{
    update.validate()?;
    Ok(Json(T::controller(&state).update(id, update)?))
}

/// PUT /{kind}/:id
async fn replace<T: Routed + Disposable>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(fields): ApiJson<T>,
) -> ApiResult<Json<Record<T>>> {
    fields.validate()?;
    Ok(Json(T::controller(&state).replace(id, fields)?))
}

/// DELETE /{kind}/:id
async fn remove<T: Routed + Disposable>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Message>> {
    T::controller(&state).delete(id)?;
    Ok(Json(Message {
        message: format!("{} deleted successfully", T::KIND.label()),
    }))
}

// ============================================================================
// SERVICE HANDLERS
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: u16,
    pub status_message: String,
    pub timestamp: String,
    pub ip_address: String,
    pub echo: Option<String>,
    pub path_echo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EchoQuery {
    echo: Option<String>,
}

fn make_health(state: &AppState, echo: Option<String>, path_echo: Option<String>) -> Health {
    Health {
        status: StatusCode::OK.as_u16(),
        status_message: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        ip_address: state.config.host.clone(),
        echo,
        path_echo,
    }
}

/// GET /health
async fn health(State(state): State<AppState>, ApiQuery(query): ApiQuery<EchoQuery>) -> Json<Health> {
    Json(make_health(&state, query.echo, None))
}

/// GET /health/:path_echo
async fn health_with_path(
    State(state): State<AppState>,
    ApiPath(path_echo): ApiPath<String>,
    ApiQuery(query): ApiQuery<EchoQuery>,
) -> Json<Health> {
    Json(make_health(&state, query.echo, Some(path_echo)))
}

/// GET /
async fn root() -> Json<Message> {
    Json(Message {
        message: "Welcome to the Person/Address/Tuition/Scholarship API.".to_string(),
    })
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/health/:path_echo", get(health_with_path))
        .route("/addresses", get(list::<Address>).post(create::<Address>))
        .route(
            "/addresses/:id",
            get(fetch::<Address>).patch(update::<Address>),
        )
        .route("/persons", get(list::<Person>).post(create::<Person>))
        .route("/persons/:id", get(fetch::<Person>).patch(update::<Person>))
        .route("/tuitions", get(list::<Tuition>).post(create::<Tuition>))
        .route(
            "/tuitions/:id",
            get(fetch::<Tuition>)
                .patch(update::<Tuition>)
                .put(replace::<Tuition>)
                .delete(remove::<Tuition>),
        )
        .route(
            "/scholarships",
            get(list::<Scholarship>).post(create::<Scholarship>),
        )
        .route(
            "/scholarships/:id",
            get(fetch::<Scholarship>)
                .patch(update::<Scholarship>)
                .put(replace::<Scholarship>)
                .delete(remove::<Scholarship>),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
