//! Request handlers for the student collection.
//!
//! Each handler takes the store and the already-resolved route input and
//! returns either a response or a [`ServerError`]. The router has already
//! checked the method, so a handler never sees a verb it does not serve.

use std::borrow::Cow;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use roster_store::{Student, StudentDraft, StudentId, StudentStore};

use crate::error::{ServerError, ServerResult};
use crate::router::Route;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }
}

/// Entry point for every request: resolve the route, then run its handler.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    decode_path(uri.path())
        .and_then(|path| Route::resolve(&method, &path))
        .and_then(|route| handle(state.store.as_ref(), route, &body))
        .unwrap_or_else(IntoResponse::into_response)
}

/// Percent-decode the request path, so `/students/%31` names student 1.
fn decode_path(raw: &str) -> ServerResult<Cow<'_, str>> {
    urlencoding::decode(raw).map_err(|_| ServerError::InvalidPath {
        path: raw.to_string(),
    })
}

fn handle(store: &dyn StudentStore, route: Route, body: &[u8]) -> ServerResult<Response> {
    match route {
        Route::List => list_students(store).map(IntoResponse::into_response),
        Route::Create => create_student(store, body).map(IntoResponse::into_response),
        Route::Get { id } => get_student(store, &id).map(IntoResponse::into_response),
        Route::Update { id } => update_student(store, &id, body).map(IntoResponse::into_response),
        Route::Delete { id } => delete_student(store, &id).map(IntoResponse::into_response),
    }
}

/// `POST /students`
pub fn create_student(store: &dyn StudentStore, body: &[u8]) -> ServerResult<Json<Student>> {
    let draft = decode_draft(body)?;
    let student = store.insert(draft)?;
    tracing::info!(id = %student.id, "student created");
    Ok(Json(student))
}

/// `GET /students`
pub fn list_students(store: &dyn StudentStore) -> ServerResult<Json<Vec<Student>>> {
    Ok(Json(store.list()?))
}

/// `GET /students/{id}`
pub fn get_student(store: &dyn StudentStore, segment: &str) -> ServerResult<Json<Student>> {
    let id = parse_id(segment)?;
    store
        .find(id)?
        .map(Json)
        .ok_or(ServerError::StudentNotFound(id))
}

/// `PUT /students/{id}`
///
/// The body replaces the whole record; fields it leaves out become empty.
pub fn update_student(
    store: &dyn StudentStore,
    segment: &str,
    body: &[u8],
) -> ServerResult<Json<Student>> {
    let id = parse_id(segment)?;
    let draft = decode_draft(body)?;
    let student = store
        .replace(id, draft)?
        .ok_or(ServerError::StudentNotFound(id))?;
    tracing::info!(%id, "student updated");
    Ok(Json(student))
}

/// `DELETE /students/{id}`
pub fn delete_student(store: &dyn StudentStore, segment: &str) -> ServerResult<StatusCode> {
    let id = parse_id(segment)?;
    if !store.delete(id)? {
        return Err(ServerError::StudentNotFound(id));
    }
    tracing::info!(%id, "student deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(segment: &str) -> ServerResult<StudentId> {
    segment.parse().map_err(|_| ServerError::InvalidId {
        segment: segment.to_string(),
    })
}

fn decode_draft(body: &[u8]) -> ServerResult<StudentDraft> {
    serde_json::from_slice(body).map_err(|e| ServerError::InvalidBody(e.to_string()))
}
