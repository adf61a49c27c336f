use chrono::Utc;
use sqlx::SqlitePool;

use crate::model::{NewSubject, Subject, SUBJECT_COLUMNS};

use super::StoreResult;

pub async fn subject_create(pool: &SqlitePool, new: &NewSubject) -> StoreResult<Subject> {
    let sql = format!(
        "INSERT INTO subjects (name, active, created_at) VALUES (?, ?, ?) RETURNING {SUBJECT_COLUMNS}"
    );
    let res = sqlx::query_as::<_, Subject>(&sql)
        .bind(&new.name)
        .bind(new.active)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
    Ok(res)
}

/// Most recently created first, optionally restricted to active subjects.
pub async fn subject_list(pool: &SqlitePool, active_only: bool) -> StoreResult<Vec<Subject>> {
    let filter = if active_only { "WHERE active = 1" } else { "" };
    let sql = format!("SELECT {SUBJECT_COLUMNS} FROM subjects {filter} ORDER BY id DESC");
    let res = sqlx::query_as::<_, Subject>(&sql).fetch_all(pool).await?;
    Ok(res)
}

pub async fn subject_find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<Subject>> {
    let sql = format!("SELECT {SUBJECT_COLUMNS} FROM subjects WHERE id = ?");
    let res = sqlx::query_as::<_, Subject>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(res)
}
