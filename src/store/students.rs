use chrono::Utc;
use sqlx::SqlitePool;

use crate::model::{NewStudent, Student, STUDENT_COLUMNS};

use super::StoreResult;

pub async fn student_create(pool: &SqlitePool, new: &NewStudent) -> StoreResult<Student> {
    let sql = format!(
        "INSERT INTO students (name, age, created_at) VALUES (?, ?, ?) RETURNING {STUDENT_COLUMNS}"
    );
    let res = sqlx::query_as::<_, Student>(&sql)
        .bind(&new.name)
        .bind(new.age)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;
    Ok(res)
}

/// Most recently created first.
pub async fn student_list(pool: &SqlitePool) -> StoreResult<Vec<Student>> {
    let sql = format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY id DESC");
    let res = sqlx::query_as::<_, Student>(&sql).fetch_all(pool).await?;
    Ok(res)
}

pub async fn student_find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<Student>> {
    let sql = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?");
    let res = sqlx::query_as::<_, Student>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(res)
}
