//! ORDER BY clause serialization.

use crate::syntax::OrderBy;

/// Serialize an entry list as `ORDER BY <col> <DIR>, …` in insertion order.
///
/// Returns an empty string for an empty list.
pub fn build(order_group: &OrderBy) -> String {
    let entries = order_group.entries();
    if entries.is_empty() {
        return String::new();
    }

    let mut sql = String::from("ORDER BY ");
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&entry.column);
        sql.push(' ');
        sql.push_str(entry.direction.as_sql());
    }
    sql
}
