//! UPDATE statement node.

use super::table::Table;
use super::where_clause::{Conjunction, Where};
use crate::builder;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;

/// An UPDATE statement under construction.
///
/// SET columns and values follow the same index-pairing rule as INSERT; the
/// WHERE clause list is optional (an unfiltered UPDATE touches every row).
#[derive(Clone, Debug)]
pub struct Update {
    table: Table,
    columns: Vec<String>,
    values: Vec<Value>,
    where_group: Where,
}

impl Update {
    pub(crate) fn new(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
            where_group: Where::new(),
        }
    }

    /// Replace SET columns and values from ordered column/value pairs.
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

    /// Append one SET column/value pair.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    /// Replace the SET column list, leaving values untouched.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the SET value list, leaving columns untouched.
    pub fn values(mut self, values: Vec<Value>) -> Self {
        self.values = values;
        self
    }

    /// Append a WHERE clause with an explicit operator and conjunction.
    pub fn where_clause(
        mut self,
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
        conjunction: Conjunction,
    ) -> Self {
        self.where_group.add(column, operator, value, conjunction);
        self
    }

    /// Append `column = value`, AND-joined to any following clause.
    pub fn where_equals(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_clause(column, "=", value, Conjunction::And)
    }

    /// Append `column != value`, AND-joined to any following clause.
    pub fn where_not_equals(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_clause(column, "!=", value, Conjunction::And)
    }

    /// The target table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// SET column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// SET values in insertion order.
    pub fn value_list(&self) -> &[Value] {
        &self.values
    }

    /// The WHERE clause list.
    pub fn where_group(&self) -> &Where {
        &self.where_group
    }

    fn validate(&self) -> QueryResult<()> {
        self.table.ensure_named()?;
        if self.columns.is_empty() {
            return Err(QueryError::invalid_query(
                "UPDATE requires at least one SET column/value pair",
            ));
        }
        if self.columns.len() != self.values.len() {
            return Err(QueryError::invalid_query(format!(
                "UPDATE column/value length mismatch: {} columns, {} values",
                self.columns.len(),
                self.values.len()
            )));
        }
        Ok(())
    }

    /// Serialize this node to SQL text without executing it.
    pub fn to_sql(&self) -> String {
        builder::update::build(self)
    }

    /// Run the statement and return the affected-row count.
    ///
    /// Fails with [`QueryError::InvalidQuery`] before any I/O if the node has
    /// no SET pairs or mismatched column/value lengths.
    pub async fn execute(self) -> QueryResult<u64> {
        self.validate()?;
        let sql = builder::update::build(&self);
        self.table.db().execute(&sql).await
    }
}
