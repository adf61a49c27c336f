//! Subject entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patch::{Changeset, FieldUpdate, SqlValue};
use crate::store::schema::SUBJECTS_TABLE;
use crate::validation::{rules, ValidationError, Violations};

use super::BoolLike;

pub const SUBJECT_COLUMNS: &str = "id, name, active, created_at";

/// Persisted subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// POST body
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateSubject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: Option<BoolLike>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub name: String,
    pub active: bool,
}

impl CreateSubject {
    pub fn validate(self) -> Result<NewSubject, ValidationError> {
        let mut v = Violations::new();

        let name = v
            .required("name", self.name)
            .and_then(|n| rules::text(&mut v, "name", n, 1));

        let Some(name) = name else {
            return Err(v.into_error());
        };
        v.finish()?;

        Ok(NewSubject {
            name,
            active: self.active.map_or(true, BoolLike::value),
        })
    }
}

/// PUT/PATCH body
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectPatch {
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub active: FieldUpdate<BoolLike>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SubjectChanges {
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl SubjectPatch {
    pub fn validate(self) -> Result<SubjectChanges, ValidationError> {
        let mut v = Violations::new();

        let name = v
            .non_null("name", self.name)
            .and_then(|n| rules::text(&mut v, "name", n, 1));
        let active = v.non_null("active", self.active).map(BoolLike::value);

        v.finish()?;
        Ok(SubjectChanges { name, active })
    }
}

impl Changeset for SubjectChanges {
    const TABLE: &'static str = SUBJECTS_TABLE;

    fn into_changes(self) -> Vec<(&'static str, SqlValue)> {
        let mut changes = Vec::new();
        if let Some(name) = self.name {
            changes.push(("name", name.into()));
        }
        if let Some(active) = self.active {
            changes.push(("active", active.into()));
        }
        changes
    }
}
