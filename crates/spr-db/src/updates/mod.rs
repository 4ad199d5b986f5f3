//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields: `None` means
//! "leave the column alone". Nullable columns use `Option<Option<T>>`, where
//! `Some(None)` clears the column to NULL. Only `Some` fields generate SET
//! clauses in the dynamic UPDATE SQL.

pub mod internship;
pub mod offer;
pub mod report;
pub mod student;

/// Accumulates `column = ?N` clauses and their parameters.
#[derive(Default)]
pub(crate) struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    pub(crate) fn set(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    pub(crate) fn set_nullable<T: Into<libsql::Value>>(&mut self, column: &str, value: Option<T>) {
        self.set(column, value.map_or(libsql::Value::Null, Into::into));
    }

    /// `UPDATE {table} SET ... WHERE id = ?N` plus its parameters.
    pub(crate) fn into_update(mut self, table: &str, id: i64) -> (String, Vec<libsql::Value>) {
        self.params.push(id.into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}
