//! Table definitions bootstrapped on startup.
//!
//! Statements are idempotent; an existing schema is left untouched.

pub const STUDENTS_TABLE: &str = "students";
pub const SUBJECTS_TABLE: &str = "subjects";
pub const TEACHERS_TABLE: &str = "teachers";

/// Subjects come before teachers so the foreign key target exists.
pub(super) const BOOTSTRAP: [&str; 3] = [
    r#"CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL CHECK (age >= 0),
        created_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS subjects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS teachers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        subject_id INTEGER NOT NULL REFERENCES subjects(id),
        qualification TEXT NOT NULL DEFAULT 'Graduate',
        phone TEXT,
        weekly_load INTEGER NOT NULL DEFAULT 20,
        created_at TEXT NOT NULL
    )"#,
];
