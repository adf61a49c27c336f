//! # Domain Model
//!
//! Records, request bodies and validators for students, teachers and
//! subjects. Each entity has:
//!
//! - a persisted record (`Student`, ...) decoded from rows and returned as JSON
//! - a create body that validates into a normalized `New*` value
//! - a patch body that validates into a `*Changes` changeset for the
//!   partial-update builder

mod student;
mod subject;
mod teacher;

pub use student::{
    CreateStudent, NewStudent, Student, StudentChanges, StudentPatch, STUDENT_COLUMNS,
};
pub use subject::{
    CreateSubject, NewSubject, Subject, SubjectChanges, SubjectPatch, SUBJECT_COLUMNS,
};
pub use teacher::{
    CreateTeacher, NewTeacher, Teacher, TeacherChanges, TeacherPatch, DEFAULT_QUALIFICATION,
    DEFAULT_WEEKLY_LOAD, TEACHER_COLUMNS,
};

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// A boolean that also accepts integers (non-zero is true).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolLike(pub bool);

impl BoolLike {
    pub fn value(self) -> bool {
        self.0
    }
}

struct BoolLikeVisitor;

impl<'de> Visitor<'de> for BoolLikeVisitor {
    type Value = BoolLike;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or an integer")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(BoolLike(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BoolLike(v != 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BoolLike(v != 0))
    }
}

impl<'de> Deserialize<'de> for BoolLike {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BoolLikeVisitor)
    }
}
