//! INSERT statement node.

use super::table::Table;
use crate::builder;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;

/// An INSERT statement under construction.
///
/// Columns and values are parallel sequences paired by index. They may be set
/// together ([`Insert::from_pairs`], [`Insert::set`]) or independently
/// ([`Insert::columns`], [`Insert::values`]); pairing is only enforced when
/// [`Insert::execute`] runs.
#[derive(Clone, Debug)]
pub struct Insert {
    table: Table,
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Insert {
    pub(crate) fn new(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Replace columns and values from ordered column/value pairs.
    ///
    /// Pair order is preserved. Empty input leaves the node unchanged.
    pub fn from_pairs<C, V>(mut self, data: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
    {
        let (columns, values): (Vec<String>, Vec<Value>) = data
            .into_iter()
            .map(|(c, v)| (c.into(), v.into()))
            .unzip();
        if !columns.is_empty() {
            self.columns = columns;
            self.values = values;
        }
        self
    }

    /// Append one column/value pair.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    /// Replace the column list, leaving values untouched.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the value list, leaving columns untouched.
    pub fn values(mut self, values: Vec<Value>) -> Self {
        self.values = values;
        self
    }

    /// The target table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Values in insertion order.
    pub fn value_list(&self) -> &[Value] {
        &self.values
    }

    fn validate(&self) -> QueryResult<()> {
        self.table.ensure_named()?;
        if self.columns.is_empty() {
            return Err(QueryError::invalid_query(
                "INSERT requires at least one column/value pair",
            ));
        }
        if self.columns.len() != self.values.len() {
            return Err(QueryError::invalid_query(format!(
                "INSERT column/value length mismatch: {} columns, {} values",
                self.columns.len(),
                self.values.len()
            )));
        }
        Ok(())
    }

    /// Serialize this node to SQL text without executing it.
    pub fn to_sql(&self) -> String {
        builder::insert::build(self)
    }

    /// Run the statement and return the affected-row count.
    ///
    /// Fails with [`QueryError::InvalidQuery`] before any I/O if the node has
    /// no pairs or mismatched column/value lengths.
    pub async fn execute(self) -> QueryResult<u64> {
        self.validate()?;
        let sql = builder::insert::build(&self);
        self.table.db().execute(&sql).await
    }
}
