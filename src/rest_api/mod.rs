//! # campus REST API Module
//!
//! CRUD endpoints for students, teachers and subjects.
//!
//! Every handler follows the same order: decode the path id, check the
//! target exists (updates only), decode and validate the body, run the
//! store call, then shape the response. Errors from each step map onto
//! [`RestError`] and its status code.

pub mod errors;
pub mod server;
mod students;
mod subjects;
mod teachers;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use server::{AppState, RestServer, SharedState};
pub use subjects::SubjectListQuery;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use sqlx::SqlitePool;

use crate::store;

fn path_id(id: Result<Path<i64>, PathRejection>) -> RestResult<i64> {
    let Path(id) = id?;
    Ok(id)
}

/// Not found wins over any payload problem, so updates check this first.
async fn ensure_exists(
    pool: &SqlitePool,
    table: &'static str,
    entity: &'static str,
    id: i64,
) -> RestResult<()> {
    if store::exists(pool, table, id).await? {
        Ok(())
    } else {
        Err(RestError::NotFound(entity))
    }
}
