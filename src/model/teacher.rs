//! Teacher entity
//!
//! A teacher belongs to one subject through `subject_id`. The store owns the
//! foreign key; validation only checks that a reference was supplied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patch::{Changeset, FieldUpdate, SqlValue};
use crate::store::schema::TEACHERS_TABLE;
use crate::validation::{rules, ValidationError, Violations};

pub const DEFAULT_QUALIFICATION: &str = "Graduate";
pub const DEFAULT_WEEKLY_LOAD: i64 = 20;

pub const TEACHER_COLUMNS: &str =
    "id, name, email, subject_id, qualification, phone, weekly_load, created_at";

/// Persisted teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject_id: i64,
    pub qualification: String,
    pub phone: Option<String>,
    pub weekly_load: i64,
    pub created_at: DateTime<Utc>,
}

/// POST body
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTeacher {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub weekly_load: Option<i64>,
}

/// Normalized create input with defaults resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub subject_id: i64,
    pub qualification: String,
    pub phone: Option<String>,
    pub weekly_load: i64,
}

impl CreateTeacher {
    pub fn validate(self) -> Result<NewTeacher, ValidationError> {
        let mut v = Violations::new();

        let name = v
            .required("name", self.name)
            .and_then(|n| rules::text(&mut v, "name", n, 1));
        let email = v
            .required("email", self.email)
            .and_then(|e| rules::email(&mut v, "email", e));
        let subject_id = v.required("subject_id", self.subject_id);
        let qualification = match self.qualification {
            Some(q) => rules::text(&mut v, "qualification", q, 1),
            None => Some(DEFAULT_QUALIFICATION.to_string()),
        };
        let weekly_load = match self.weekly_load {
            Some(load) => rules::non_negative(&mut v, "weekly_load", load),
            None => Some(DEFAULT_WEEKLY_LOAD),
        };
        let phone = self.phone.and_then(rules::optional_text);

        let (Some(name), Some(email), Some(subject_id), Some(qualification), Some(weekly_load)) =
            (name, email, subject_id, qualification, weekly_load)
        else {
            return Err(v.into_error());
        };
        v.finish()?;

        Ok(NewTeacher {
            name,
            email,
            subject_id,
            qualification,
            phone,
            weekly_load,
        })
    }
}

/// PUT/PATCH body
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeacherPatch {
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub email: FieldUpdate<String>,
    #[serde(default)]
    pub subject_id: FieldUpdate<i64>,
    #[serde(default)]
    pub qualification: FieldUpdate<String>,
    #[serde(default)]
    pub phone: FieldUpdate<String>,
    #[serde(default)]
    pub weekly_load: FieldUpdate<i64>,
}

/// Validated teacher changes. `phone: Some(None)` clears the phone.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TeacherChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject_id: Option<i64>,
    pub qualification: Option<String>,
    pub phone: Option<Option<String>>,
    pub weekly_load: Option<i64>,
}

impl TeacherPatch {
    pub fn validate(self) -> Result<TeacherChanges, ValidationError> {
        let mut v = Violations::new();

        let name = v
            .non_null("name", self.name)
            .and_then(|n| rules::text(&mut v, "name", n, 1));
        let email = v
            .non_null("email", self.email)
            .and_then(|e| rules::email(&mut v, "email", e));
        let subject_id = v.non_null("subject_id", self.subject_id);
        let qualification = v
            .non_null("qualification", self.qualification)
            .and_then(|q| rules::text(&mut v, "qualification", q, 1));
        let phone = match self.phone {
            FieldUpdate::Absent => None,
            FieldUpdate::Null => Some(None),
            FieldUpdate::Value(p) => Some(rules::optional_text(p)),
        };
        let weekly_load = v
            .non_null("weekly_load", self.weekly_load)
            .and_then(|load| rules::non_negative(&mut v, "weekly_load", load));

        v.finish()?;
        Ok(TeacherChanges {
            name,
            email,
            subject_id,
            qualification,
            phone,
            weekly_load,
        })
    }
}

impl Changeset for TeacherChanges {
    const TABLE: &'static str = TEACHERS_TABLE;

    fn into_changes(self) -> Vec<(&'static str, SqlValue)> {
        let mut changes = Vec::new();
        if let Some(name) = self.name {
            changes.push(("name", name.into()));
        }
        if let Some(email) = self.email {
            changes.push(("email", email.into()));
        }
        if let Some(subject_id) = self.subject_id {
            changes.push(("subject_id", subject_id.into()));
        }
        if let Some(qualification) = self.qualification {
            changes.push(("qualification", qualification.into()));
        }
        if let Some(phone) = self.phone {
            changes.push(("phone", phone.into()));
        }
        if let Some(weekly_load) = self.weekly_load {
            changes.push(("weekly_load", weekly_load.into()));
        }
        changes
    }
}
