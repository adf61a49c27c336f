//! Student endpoints

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::model::{CreateStudent, Student, StudentPatch, STUDENT_COLUMNS};
use crate::patch::UpdateBuilder;
use crate::store::{self, schema::STUDENTS_TABLE};

use super::errors::{RestError, RestResult};
use super::{ensure_exists, path_id, SharedState};

const ENTITY: &str = "Student";

pub(super) fn routes() -> Router<SharedState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student)
                .put(update_student)
                .patch(update_student)
                .delete(delete_student),
        )
}

async fn create_student(
    State(state): State<SharedState>,
    body: Result<Json<CreateStudent>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Student>)> {
    let Json(body) = body?;
    let new = body.validate()?;

    let student = store::student_create(state.store.pool(), &new).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn list_students(State(state): State<SharedState>) -> RestResult<Json<Vec<Student>>> {
    let students = store::student_list(state.store.pool()).await?;
    Ok(Json(students))
}

async fn get_student(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<Student>> {
    let id = path_id(id)?;
    store::student_find_by_id(state.store.pool(), id)
        .await?
        .map(Json)
        .ok_or(RestError::NotFound(ENTITY))
}

async fn update_student(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> RestResult<Json<Student>> {
    let id = path_id(id)?;
    let pool = state.store.pool();
    ensure_exists(pool, STUDENTS_TABLE, ENTITY, id).await?;

    let Json(patch) = body?;
    let changes = patch.validate()?;
    let update = UpdateBuilder::from_changeset(changes).build(id)?;

    store::update_returning::<Student>(pool, update, STUDENT_COLUMNS)
        .await?
        .map(Json)
        .ok_or(RestError::NotFound(ENTITY))
}

async fn delete_student(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<StatusCode> {
    let id = path_id(id)?;
    if store::delete_by_id(state.store.pool(), STUDENTS_TABLE, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RestError::NotFound(ENTITY))
    }
}
