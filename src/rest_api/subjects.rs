//! Subject endpoints

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::model::{CreateSubject, Subject, SubjectPatch, SUBJECT_COLUMNS};
use crate::patch::UpdateBuilder;
use crate::store::{self, schema::SUBJECTS_TABLE, StoreError};

use super::errors::{RestError, RestResult};
use super::{ensure_exists, path_id, SharedState};

const ENTITY: &str = "Subject";

pub(super) fn routes() -> Router<SharedState> {
    Router::new()
        .route("/subjects", get(list_subjects).post(create_subject))
        .route(
            "/subjects/:id",
            get(get_subject)
                .put(update_subject)
                .patch(update_subject)
                .delete(delete_subject),
        )
}

/// `GET /subjects` query string
#[derive(Debug, Default, Deserialize)]
pub struct SubjectListQuery {
    #[serde(default)]
    pub active_only: Option<String>,
}

impl SubjectListQuery {
    pub fn active_only(&self) -> RestResult<bool> {
        match self.active_only.as_deref().map(str::trim) {
            None | Some("") => Ok(false),
            Some("1") | Some("true") => Ok(true),
            Some("0") | Some("false") => Ok(false),
            Some(other) => Err(RestError::InvalidQueryParam(format!(
                "active_only must be one of 1, 0, true, false (got '{other}')"
            ))),
        }
    }
}

fn write_error(err: StoreError) -> RestError {
    match err {
        StoreError::UniqueViolation(_) => {
            RestError::Conflict("A subject with this name already exists".to_string())
        }
        other => other.into(),
    }
}

async fn create_subject(
    State(state): State<SharedState>,
    body: Result<Json<CreateSubject>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Subject>)> {
    let Json(body) = body?;
    let new = body.validate()?;

    let subject = store::subject_create(state.store.pool(), &new)
        .await
        .map_err(write_error)?;
    Ok((StatusCode::CREATED, Json(subject)))
}

async fn list_subjects(
    State(state): State<SharedState>,
    query: Result<Query<SubjectListQuery>, QueryRejection>,
) -> RestResult<Json<Vec<Subject>>> {
    let Query(query) = query?;
    let subjects = store::subject_list(state.store.pool(), query.active_only()?).await?;
    Ok(Json(subjects))
}

async fn get_subject(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<Subject>> {
    let id = path_id(id)?;
    store::subject_find_by_id(state.store.pool(), id)
        .await?
        .map(Json)
        .ok_or(RestError::NotFound(ENTITY))
}

async fn update_subject(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SubjectPatch>, JsonRejection>,
) -> RestResult<Json<Subject>> {
    let id = path_id(id)?;
    let pool = state.store.pool();
    ensure_exists(pool, SUBJECTS_TABLE, ENTITY, id).await?;

    let Json(patch) = body?;
    let changes = patch.validate()?;
    let update = UpdateBuilder::from_changeset(changes).build(id)?;

    store::update_returning::<Subject>(pool, update, SUBJECT_COLUMNS)
        .await
        .map_err(write_error)?
        .map(Json)
        .ok_or(RestError::NotFound(ENTITY))
}

/// A subject still referenced by a teacher is kept and reported as a conflict.
async fn delete_subject(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> RestResult<StatusCode> {
    let id = path_id(id)?;
    let deleted = store::delete_by_id(state.store.pool(), SUBJECTS_TABLE, id)
        .await
        .map_err(|err| match err {
            StoreError::ForeignKeyViolation(_) => {
                RestError::Conflict("Subject is still assigned to teachers".to_string())
            }
            other => other.into(),
        })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RestError::NotFound(ENTITY))
    }
}
