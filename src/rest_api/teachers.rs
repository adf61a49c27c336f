//! Teacher endpoints
//!
//! Email uniqueness and the subject reference are enforced by the store;
//! their violations map to 409 and 422.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::model::{CreateTeacher, Teacher, TeacherPatch, TEACHER_COLUMNS};
use crate::patch::UpdateBuilder;
use crate::store::{self, schema::TEACHERS_TABLE, StoreError};

use super::errors::{RestError, RestResult};
use super::{ensure_exists, path_id, SharedState};

const ENTITY: &str = "Teacher";

pub(super) fn routes() -> Router<SharedState> {
    Router::new()
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route(
            "/teachers/:id",
            get(get_teacher)
                .put(update_teacher)
                .patch(update_teacher)
                .delete(delete_teacher),
        )
}

fn write_error(err: StoreError) -> RestError {
    match err {
        StoreError::UniqueViolation(_) => RestError::Conflict("Email already registered".to_string()),
        StoreError::ForeignKeyViolation(_) => RestError::InvalidReference(
            "subject_id does not reference an existing subject".to_string(),
        ),
        other => other.into(),
    }
}

async fn create_teacher(
    State(state): State<SharedState>,
    body: Result<Json<CreateTeacher>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Teacher>)> {
    let Json(body) = body?;
    let new = body.validate()?;

    let teacher = store::teacher_create(state.store.pool(), &new)
        .await
        .map_err(write_error)?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

async fn list_teachers(State(state): State<SharedState>) -> RestResult<Json<Vec<Teacher>>> {
    let teachers = store::teacher_list(state.store.pool()).await?;
    Ok(Json(teachers))
}

async fn get_teacher(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<Teacher>> {
    let id = path_id(id)?;
    store::teacher_find_by_id(state.store.pool(), id)
        .await?
        .map(Json)
        .ok_or(RestError::NotFound(ENTITY))
}

async fn update_teacher(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<TeacherPatch>, JsonRejection>,
) -> RestResult<Json<Teacher>> {
    let id = path_id(id)?;
    let pool = state.store.pool();
    ensure_exists(pool, TEACHERS_TABLE, ENTITY, id).await?;

    let Json(patch) = body?;
    let changes = patch.validate()?;
    let update = UpdateBuilder::from_changeset(changes).build(id)?;

    store::update_returning::<Teacher>(pool, update, TEACHER_COLUMNS)
        .await
        .map_err(write_error)?
        .map(Json)
        .ok_or(RestError::NotFound(ENTITY))
}

async fn delete_teacher(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<StatusCode> {
    let id = path_id(id)?;
    if store::delete_by_id(state.store.pool(), TEACHERS_TABLE, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RestError::NotFound(ENTITY))
    }
}
