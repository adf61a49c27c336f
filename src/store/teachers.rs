use chrono::Utc;
use sqlx::SqlitePool;

use crate::model::{NewTeacher, Teacher, TEACHER_COLUMNS};

use super::StoreResult;

pub async fn teacher_create(pool: &SqlitePool, new: &NewTeacher) -> StoreResult<Teacher> {
    let sql = format!(
        r#"INSERT INTO teachers
        (name, email, subject_id, qualification, phone, weekly_load, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING {TEACHER_COLUMNS}"#
    );
    let res = sqlx::query_as::<_, Teacher>(&sql)
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.subject_id)
        .bind(&new.qualification)
        .bind(new.phone.as_deref())
        .bind(new.weekly_load)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
    Ok(res)
}

/// Most recently created first.
pub async fn teacher_list(pool: &SqlitePool) -> StoreResult<Vec<Teacher>> {
    let sql = format!("SELECT {TEACHER_COLUMNS} FROM teachers ORDER BY id DESC");
    let res = sqlx::query_as::<_, Teacher>(&sql).fetch_all(pool).await?;
    Ok(res)
}

pub async fn teacher_find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<Teacher>> {
    let sql = format!("SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = ?");
    let res = sqlx::query_as::<_, Teacher>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(res)
}
