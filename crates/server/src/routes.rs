use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::{ApiError, ENDPOINT_NOT_FOUND};
use crate::state::AppState;

pub mod person;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn endpoint_not_found() -> ApiError {
    ApiError::NotFound(ENDPOINT_NOT_FOUND.into())
}

/// Any origin; GET/POST/PUT/DELETE; `Content-Type` request header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the full application router: person CRUD, CSV import, health, and
/// the plain-text 404 fallback.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    let people = Router::new()
        .route("/person", get(person::list_people).post(person::create_person))
        // static segment wins over `:id`; other methods still treat `import` as an id
        .route(
            "/person/import",
            post(person::import_people)
                .layer(upload_limit)
                .get(person::get_import_segment)
                .put(person::update_import_segment)
                .delete(person::delete_import_segment),
        )
        .route(
            "/person/:id",
            get(person::get_person)
                .put(person::update_person)
                .delete(person::delete_person),
        );

    Router::new()
        .route("/health", get(health))
        .merge(people)
        .fallback(endpoint_not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
