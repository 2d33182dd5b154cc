//! Table reference and query-node factory.

use super::delete::Delete;
use super::insert::Insert;
use super::select::Select;
use super::update::Update;
use crate::builder;
use crate::db::Db;
use crate::error::{QueryError, QueryResult};

/// A named target table.
///
/// Obtained from [`Db::table`]; acts as the factory for statement nodes and
/// carries the connection context into them. The name is fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct Table {
    db: Db,
    name: String,
}

impl Table {
    pub(crate) fn new(db: Db, name: impl Into<String>) -> Self {
        Self {
            db,
            name: name.into(),
        }
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn db(&self) -> &Db {
        &self.db
    }

    pub(crate) fn ensure_named(&self) -> QueryResult<()> {
        if self.name.is_empty() {
            return Err(QueryError::invalid_query("table name must not be empty"));
        }
        Ok(())
    }

    /// Start a SELECT statement over this table (all columns by default).
    pub fn select(&self) -> Select {
        Select::new(self.clone())
    }

    /// Start an INSERT statement into this table.
    pub fn insert(&self) -> Insert {
        Insert::new(self.clone())
    }

    /// Start an UPDATE statement over this table.
    pub fn update(&self) -> Update {
        Update::new(self.clone())
    }

    /// Start a DELETE statement over this table.
    pub fn delete(&self) -> Delete {
        Delete::new(self.clone())
    }

    /// Drop this table if it exists.
    pub async fn drop(&self) -> QueryResult<u64> {
        self.ensure_named()?;
        self.db.execute(&builder::table::build_drop(self)).await
    }

    /// Remove all rows from this table.
    pub async fn truncate(&self) -> QueryResult<u64> {
        self.ensure_named()?;
        self.db.execute(&builder::table::build_truncate(self)).await
    }
}
