//! INSERT statement serialization.

use crate::syntax::Insert;
use crate::value::Value;

/// Serialize an INSERT node as `INSERT INTO <t> (<cols>) VALUES (<vals>);`.
pub fn build(insert: &Insert) -> String {
    let values: Vec<String> = insert.value_list().iter().map(Value::sql_literal).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        insert.table().name(),
        insert.column_names().join(", "),
        values.join(", ")
    )
}
