//! Student entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patch::{Changeset, FieldUpdate, SqlValue};
use crate::store::schema::STUDENTS_TABLE;
use crate::validation::{rules, ValidationError, Violations};

/// Minimum trimmed length of a student name
pub const NAME_MIN_LEN: usize = 2;

/// Column list in declaration order, used by every SELECT/RETURNING
pub const STUDENT_COLUMNS: &str = "id, name, age, created_at";

/// Persisted student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

/// POST body
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateStudent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

/// Normalized create input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
}

impl CreateStudent {
    pub fn validate(self) -> Result<NewStudent, ValidationError> {
        let mut v = Violations::new();

        let name = v
            .required("name", self.name)
            .and_then(|n| rules::text(&mut v, "name", n, NAME_MIN_LEN));
        let age = v
            .required("age", self.age)
            .and_then(|a| rules::non_negative(&mut v, "age", a));

        let (Some(name), Some(age)) = (name, age) else {
            return Err(v.into_error());
        };
        v.finish()?;

        Ok(NewStudent { name, age })
    }
}

/// PUT/PATCH body
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentPatch {
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub age: FieldUpdate<i64>,
}

/// Validated student changes
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl StudentPatch {
    pub fn validate(self) -> Result<StudentChanges, ValidationError> {
        let mut v = Violations::new();

        let name = v
            .non_null("name", self.name)
            .and_then(|n| rules::text(&mut v, "name", n, NAME_MIN_LEN));
        let age = v
            .non_null("age", self.age)
            .and_then(|a| rules::non_negative(&mut v, "age", a));

        v.finish()?;
        Ok(StudentChanges { name, age })
    }
}

impl Changeset for StudentChanges {
    const TABLE: &'static str = STUDENTS_TABLE;

    fn into_changes(self) -> Vec<(&'static str, SqlValue)> {
        let mut changes = Vec::new();
        if let Some(name) = self.name {
            changes.push(("name", name.into()));
        }
        if let Some(age) = self.age {
            changes.push(("age", age.into()));
        }
        changes
    }
}
