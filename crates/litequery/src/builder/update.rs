//! UPDATE statement serialization.

use super::where_builder;
use crate::syntax::Update;

/// Serialize an UPDATE node as `UPDATE <t> SET <col> = <val>, …[ WHERE …];`.
pub fn build(update: &Update) -> String {
    let assignments: Vec<String> = update
        .column_names()
        .iter()
        .zip(update.value_list())
        .map(|(column, value)| format!("{} = {}", column, value.sql_literal()))
        .collect();

    let mut sql = format!(
        "UPDATE {} SET {}",
        update.table().name(),
        assignments.join(", ")
    );

    if update.where_group().has() {
        sql.push(' ');
        sql.push_str(&where_builder::build(update.where_group()));
    }

    sql.push(';');
    sql
}
