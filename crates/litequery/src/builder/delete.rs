//! DELETE statement serialization.

use super::where_builder;
use crate::syntax::Delete;

/// Serialize a DELETE node as `DELETE FROM <t>[ WHERE …];`.
pub fn build(delete: &Delete) -> String {
    let mut sql = format!("DELETE FROM {}", delete.table().name());

    if delete.where_group().has() {
        sql.push(' ');
        sql.push_str(&where_builder::build(delete.where_group()));
    }

    sql.push(';');
    sql
}
