//! Table-level DDL serialization.

use crate::syntax::Table;

/// Serialize `DROP TABLE IF EXISTS <t>;`.
pub fn build_drop(table: &Table) -> String {
    format!("DROP TABLE IF EXISTS {};", table.name())
}

/// Serialize `TRUNCATE TABLE <t>;`.
pub fn build_truncate(table: &Table) -> String {
    format!("TRUNCATE TABLE {};", table.name())
}
