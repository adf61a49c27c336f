//! # Partial Updates
//!
//! Builds `UPDATE` statements that touch only the fields a request supplied.
//!
//! Each entity exposes a validated changeset listing its present fields in
//! column declaration order. [`UpdateBuilder`] turns that into a
//! [`CompiledUpdate`]: the `column = ?` fragments, their bound values, and
//! the entity id as the final parameter. An empty changeset never reaches
//! the store.

mod builder;
mod field;
mod value;

pub use builder::{Changeset, CompiledUpdate, NothingToUpdate, UpdateBuilder};
pub use field::FieldUpdate;
pub use value::SqlValue;
