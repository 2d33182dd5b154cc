//! WHERE clause serialization.

use crate::syntax::Where;

/// Serialize a clause list as `WHERE <col> <op> <literal> [<conj> …]`.
///
/// Returns an empty string for an empty list. Clauses render in insertion
/// order; each clause's conjunction joins it to the next, so the last one is
/// never emitted.
pub fn build(where_group: &Where) -> String {
    let clauses = where_group.clauses();
    if clauses.is_empty() {
        return String::new();
    }

    let mut sql = String::from("WHERE ");
    for (i, clause) in clauses.iter().enumerate() {
        sql.push_str(&clause.column);
        sql.push(' ');
        sql.push_str(&clause.operator);
        sql.push(' ');
        sql.push_str(&clause.value.sql_literal());

        if i != clauses.len() - 1 {
            sql.push(' ');
            sql.push_str(clause.conjunction.as_sql());
            sql.push(' ');
        }
    }
    sql
}
