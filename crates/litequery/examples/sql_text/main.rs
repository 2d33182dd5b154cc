//! Print the SQL text the builders generate, without touching a database.
//!
//! Run with: `cargo run --example sql_text`

use litequery::{Conjunction, Db, OrderDirection, Value};

fn main() {
    // An unconnected context can build statements; only execute() needs a
    // live connection.
    let db = Db::new();

    let select = db
        .table("users")
        .select()
        .columns(["id", "name", "email"])
        .where_equals("status", "active")
        .where_clause("age", ">=", 21, Conjunction::And)
        .order_by("created_at", OrderDirection::Desc)
        .limit_offset(20, 40);
    println!("{}", select.to_sql());

    let insert = db
        .table("users")
        .insert()
        .from_pairs([("name", Value::from("Bob")), ("age", Value::from(42))]);
    println!("{}", insert.to_sql());

    let update = db
        .table("users")
        .update()
        .set("name", "Bob")
        .where_equals("id", 5);
    println!("{}", update.to_sql());

    let delete = db
        .table("users")
        .delete()
        .where_equals("id", 5)
        .where_equals("active", 1);
    println!("{}", delete.to_sql());
}
