//! DELETE statement node.

use super::table::Table;
use super::where_clause::{Conjunction, Where};
use crate::builder;
use crate::error::QueryResult;
use crate::value::Value;

/// A DELETE statement under construction.
///
/// The WHERE clause list is optional; an unfiltered DELETE removes every row.
#[derive(Clone, Debug)]
pub struct Delete {
    table: Table,
    where_group: Where,
}

impl Delete {
    pub(crate) fn new(table: Table) -> Self {
        Self {
            table,
            where_group: Where::new(),
        }
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

    /// The WHERE clause list.
    pub fn where_group(&self) -> &Where {
        &self.where_group
    }

    /// Serialize this node to SQL text without executing it.
    pub fn to_sql(&self) -> String {
        builder::delete::build(self)
    }

    /// Run the statement and return the affected-row count.
    pub async fn execute(self) -> QueryResult<u64> {
        self.table.ensure_named()?;
        let sql = builder::delete::build(&self);
        self.table.db().execute(&sql).await
    }
}
