//! Row-entity convenience: one identifier bound to CRUD against one table.

use crate::db::Db;
use crate::error::QueryResult;
use crate::response::SelectResponse;
use crate::syntax::ColumnSpec;
use crate::value::Value;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Collaborator contract for row entities: anything that names its table.
pub trait Entity {
    /// The table this entity's rows live in.
    fn table_name(&self) -> &str;
}

/// One logical row, addressed by identifier.
///
/// The identifier is generated as a UUID v4 when not supplied. Every
/// persistence call builds a fresh statement scoped `WHERE id = <id>` and
/// runs it through the given [`Db`]; there is no dirty tracking and no
/// optimistic concurrency — the statement always targets the current
/// identifier, whatever the in-memory state.
#[derive(Clone, Debug)]
pub struct Record {
    table: String,
    id: String,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Create a record with a freshly generated UUID v4 identifier.
    pub fn new(table: impl Into<String>) -> Self {
        Self::with_id(table, Uuid::new_v4().to_string())
    }

    /// Create a record with a known identifier.
    pub fn with_id(table: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            id: id.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Attach row timestamps (as fetched from storage).
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    /// Replace the identifier with a freshly generated UUID v4.
    pub fn generate_id(&mut self) -> &str {
        self.id = Uuid::new_v4().to_string();
        &self.id
    }

    /// Set the identifier.
    ///
    /// The identifier is expected to stay fixed once the row is persisted;
    /// pointing an already-persisted record at a different id silently
    /// retargets every later call.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    /// The identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp, if known.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last-update timestamp, if known.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Fetch this row (empty spec selects all columns).
    pub async fn select(
        &self,
        db: &Db,
        columns: impl Into<ColumnSpec>,
    ) -> QueryResult<SelectResponse> {
        db.table(&self.table)
            .select()
            .columns(columns)
            .where_equals("id", self.id.as_str())
            .execute()
            .await
    }

    /// Update this row with the given column/value pairs.
    pub async fn update<C, V>(
        &self,
        db: &Db,
        data: impl IntoIterator<Item = (C, V)>,
    ) -> QueryResult<u64>
    where
        C: Into<String>,
        V: Into<Value>,
    {
        db.table(&self.table)
            .update()
            .from_pairs(data)
            .where_equals("id", self.id.as_str())
            .execute()
            .await
    }

    /// Delete this row.
    pub async fn delete(&self, db: &Db) -> QueryResult<u64> {
        db.table(&self.table)
            .delete()
            .where_equals("id", self.id.as_str())
            .execute()
            .await
    }
}

impl Entity for Record {
    fn table_name(&self) -> &str {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_hyphenated_uuid_v4() {
        for _ in 0..64 {
            let record = Record::new("users");
            let id = record.id();

            assert_eq!(id.len(), 36);
            let groups: Vec<&str> = id.split('-').collect();
            let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
            assert_eq!(lens, [8, 4, 4, 4, 12]);
            assert!(groups.iter().all(|g| g.chars().all(|c| c.is_ascii_hexdigit())));

            // Version nibble fixed to 4, variant bits to 10xx.
            assert_eq!(groups[2].chars().next(), Some('4'));
            assert!(matches!(
                groups[3].chars().next(),
                Some('8') | Some('9') | Some('a') | Some('b')
            ));
        }
    }

    #[test]
    fn test_supplied_id_is_kept() {
        let record = Record::with_id("users", "abc-123");
        assert_eq!(record.id(), "abc-123");
        assert_eq!(record.table_name(), "users");
    }

    #[test]
    fn test_generate_id_replaces() {
        let mut record = Record::with_id("users", "abc-123");
        let fresh = record.generate_id().to_string();
        assert_ne!(fresh, "abc-123");
        assert_eq!(record.id(), fresh);
    }
}
