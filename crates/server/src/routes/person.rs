use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use models::person::Person;
use service::{errors::ServiceError, person::import};
use tracing::{info, warn};

use crate::errors::{ApiError, MISSING_UPLOAD_FILE, PERSON_NOT_FOUND};
use crate::state::AppState;

/// Multipart field carrying the CSV upload.
const UPLOAD_FIELD: &str = "file";

fn person_not_found() -> ApiError {
    ApiError::NotFound(PERSON_NOT_FOUND.into())
}

/// Decode and validate a JSON person payload.
fn candidate(payload: Result<Json<Person>, JsonRejection>) -> Result<Person, ApiError> {
    let Json(person) = payload?;
    person.validate().map_err(ServiceError::from)?;
    Ok(person)
}

/// POST /person
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let person = candidate(payload)?;
    let created = state.store.create(person).await;
    info!(person_id = %created.id, "person created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /person
pub async fn list_people(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.store.get_all().await)
}

/// GET /person/:id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    state.store.get(&id).await.map(Json).ok_or_else(person_not_found)
}

/// PUT /person/:id
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let person = candidate(payload)?;
    let updated = state.store.update(&id, person).await.ok_or_else(person_not_found)?;
    info!(person_id = %updated.id, "person updated");
    Ok(Json(updated))
}

/// DELETE /person/:id
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete(&id).await {
        return Err(person_not_found());
    }
    info!(person_id = %id, "person deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Literal segment of the import route; any other method treats it as an id.
const IMPORT_SEGMENT: &str = "import";

/// GET /person/import
pub async fn get_import_segment(state: State<AppState>) -> Result<Json<Person>, ApiError> {
    get_person(state, Path(IMPORT_SEGMENT.to_string())).await
}

/// PUT /person/import
pub async fn update_import_segment(
    state: State<AppState>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    update_person(state, Path(IMPORT_SEGMENT.to_string()), payload).await
}

/// DELETE /person/import
pub async fn delete_import_segment(state: State<AppState>) -> Result<StatusCode, ApiError> {
    delete_person(state, Path(IMPORT_SEGMENT.to_string())).await
}

/// POST /person/import
///
/// Rows are created as they are read. A bad row ends the request with 400;
/// rows created before it are kept.
pub async fn import_people(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Vec<Person>>), ApiError> {
    let mut multipart = multipart?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            upload = Some(field.bytes().await?);
            break;
        }
    }
    let data = upload.ok_or_else(|| ApiError::bad_request(MISSING_UPLOAD_FILE))?;

    let people = import::import_csv(state.store.as_ref(), &data[..])
        .await
        .map_err(|e| {
            warn!(row = e.row, committed = e.committed, error = %e, "person import aborted");
            ServiceError::from(e)
        })?;
    info!(imported = people.len(), bytes = data.len(), "person import complete");
    Ok((StatusCode::CREATED, Json(people)))
}
