use thiserror::Error;

use super::SqlValue;

/// The payload carried no field to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nothing to update")]
pub struct NothingToUpdate;

/// A validated set of column changes for one entity.
pub trait Changeset {
    /// Table the changes apply to
    const TABLE: &'static str;

    /// Present fields only, in the table's column declaration order.
    fn into_changes(self) -> Vec<(&'static str, SqlValue)>;
}

/// Accumulates `column = ?` assignments for an `UPDATE` statement.
#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    assignments: Vec<String>,
    values: Vec<SqlValue>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn from_changeset<C: Changeset>(changeset: C) -> Self {
        changeset
            .into_changes()
            .into_iter()
            .fold(Self::new(C::TABLE), |builder, (column, value)| {
                builder.set(column, value)
            })
    }

    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.assignments.push(format!("{column} = ?"));
        self.values.push(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Closes the statement on `id`, which is bound after every assignment.
    pub fn build(self, id: i64) -> Result<CompiledUpdate, NothingToUpdate> {
        if self.is_empty() {
            return Err(NothingToUpdate);
        }

        let mut values = self.values;
        values.push(SqlValue::Integer(id));

        Ok(CompiledUpdate {
            table: self.table,
            assignments: self.assignments,
            values,
        })
    }
}

/// An `UPDATE ... WHERE id = ?` statement with its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledUpdate {
    table: &'static str,
    assignments: Vec<String>,
    values: Vec<SqlValue>,
}

impl CompiledUpdate {
    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }

    /// Assignment values followed by the id.
    pub fn params(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn into_params(self) -> Vec<SqlValue> {
        self.values
    }

    pub fn sql(&self) -> String {
        format!(
            "UPDATE {} SET {} WHERE id = ?",
            self.table,
            self.assignments.join(", ")
        )
    }

    pub fn sql_returning(&self, columns: &str) -> String {
        format!("{} RETURNING {}", self.sql(), columns)
    }
}
