//! SELECT statement node.

use super::columns::ColumnSpec;
use super::order_by::{OrderBy, OrderDirection};
use super::table::Table;
use super::where_clause::{Conjunction, Where};
use crate::builder;
use crate::error::QueryResult;
use crate::response::SelectResponse;
use crate::row::Row;
use crate::value::Value;

/// A SELECT statement under construction.
///
/// Built fluently from [`Table::select`] and consumed by [`Select::execute`];
/// a node represents exactly one statement and is not reusable.
#[derive(Clone, Debug)]
pub struct Select {
    table: Table,
    columns: ColumnSpec,
    where_group: Where,
    order_group: OrderBy,
    limit: u64,
    offset: u64,
}

impl Select {
    pub(crate) fn new(table: Table) -> Self {
        Self {
            table,
            columns: ColumnSpec::All,
            where_group: Where::new(),
            order_group: OrderBy::new(),
            limit: 0,
            offset: 0,
        }
    }

    /// Set the projected columns, replacing any previous projection.
    ///
    /// Accepts a single string (used verbatim, so raw expressions work) or a
    /// list of column names; empty means all columns.
    pub fn columns(mut self, columns: impl Into<ColumnSpec>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Append a WHERE clause with an explicit operator and conjunction.
    ///
    /// The conjunction joins this clause to the next one and is dropped if no
    /// clause follows.
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

    /// Append an ORDER BY entry.
    pub fn order_by(mut self, column: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_group.add(column, direction);
        self
    }

    /// Set the row limit; the offset is reset to 0.
    ///
    /// A limit of 0 means "no LIMIT clause".
    pub fn limit(self, limit: u64) -> Self {
        self.limit_offset(limit, 0)
    }

    /// Set limit and offset together.
    ///
    /// Either field at 0 is omitted from the generated statement.
    pub fn limit_offset(mut self, limit: u64, offset: u64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// The target table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The projected columns.
    pub fn column_spec(&self) -> &ColumnSpec {
        &self.columns
    }

    /// The WHERE clause list.
    pub fn where_group(&self) -> &Where {
        &self.where_group
    }

    /// The ORDER BY entry list.
    pub fn order_group(&self) -> &OrderBy {
        &self.order_group
    }

    /// The row limit (0 = unset).
    pub fn limit_value(&self) -> u64 {
        self.limit
    }

    /// The row offset (0 = unset).
    pub fn offset_value(&self) -> u64 {
        self.offset
    }

    /// Serialize this node to SQL text without executing it.
    pub fn to_sql(&self) -> String {
        builder::select::build(self)
    }

    /// Run the statement and collect all rows.
    ///
    /// An empty result set is `Ok`: the response simply has zero rows.
    pub async fn execute(self) -> QueryResult<SelectResponse> {
        self.table.ensure_named()?;
        let sql = builder::select::build(&self);
        let pg_rows = self.table.db().query(&sql).await?;
        let rows = pg_rows
            .iter()
            .map(Row::from_pg)
            .collect::<QueryResult<Vec<Row>>>()?;
        Ok(SelectResponse::new(rows))
    }
}
