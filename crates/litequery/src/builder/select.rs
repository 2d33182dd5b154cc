//! SELECT statement serialization.

use super::{order_by, where_builder};
use crate::syntax::Select;

/// Serialize a SELECT node.
///
/// Composition order: projection, `FROM`, then optional `WHERE`, `ORDER BY`,
/// `LIMIT`, `OFFSET`. Limit/offset of 0 never appear in the output.
pub fn build(select: &Select) -> String {
    let mut sql = format!(
        "SELECT {} FROM {}",
        select.column_spec().to_sql(),
        select.table().name()
    );

    if select.where_group().has() {
        sql.push(' ');
        sql.push_str(&where_builder::build(select.where_group()));
    }

    if select.order_group().has() {
        sql.push(' ');
        sql.push_str(&order_by::build(select.order_group()));
    }

    if select.limit_value() > 0 {
        sql.push_str(&format!(" LIMIT {}", select.limit_value()));
    }

    if select.offset_value() > 0 {
        sql.push_str(&format!(" OFFSET {}", select.offset_value()));
    }

    sql.push(';');
    sql
}
