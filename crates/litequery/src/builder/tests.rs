use super::table as table_builder;
use crate::{Conjunction, Db, OrderDirection, Value};

fn db() -> Db {
    Db::new()
}

#[test]
fn test_bare_select() {
    let select = db().table("t").select();
    assert_eq!(select.to_sql(), "SELECT * FROM t;");
}

#[test]
fn test_select_columns_string_and_list_agree() {
    let by_string = db().table("users").select().columns("name");
    let by_list = db().table("users").select().columns(["name"]);
    assert_eq!(by_string.to_sql(), "SELECT name FROM users;");
    assert_eq!(by_string.to_sql(), by_list.to_sql());
}

#[test]
fn test_select_column_list() {
    let select = db().table("users").select().columns(["id", "name", "email"]);
    assert_eq!(select.to_sql(), "SELECT id, name, email FROM users;");
}

#[test]
fn test_select_raw_expression_column() {
    let select = db().table("users").select().columns("COUNT(*) AS n");
    assert_eq!(select.to_sql(), "SELECT COUNT(*) AS n FROM users;");
}

#[test]
fn test_empty_column_list_selects_all() {
    let select = db().table("users").select().columns(Vec::<String>::new());
    assert_eq!(select.to_sql(), "SELECT * FROM users;");
}

#[test]
fn test_where_clauses_render_in_insertion_order() {
    let select = db()
        .table("users")
        .select()
        .where_equals("status", "active")
        .where_clause("age", ">", 18, Conjunction::And)
        .where_not_equals("role", "bot");
    assert_eq!(
        select.to_sql(),
        "SELECT * FROM users WHERE status = 'active' AND age > 18 AND role != 'bot';"
    );
}

#[test]
fn test_last_conjunction_is_never_emitted() {
    // The trailing OR belongs to the last clause and must be dropped.
    let select = db()
        .table("users")
        .select()
        .where_clause("a", "=", 1, Conjunction::Or)
        .where_clause("b", "=", 2, Conjunction::Or);
    assert_eq!(select.to_sql(), "SELECT * FROM users WHERE a = 1 OR b = 2;");
}

#[test]
fn test_unsupported_operator_is_serialized_verbatim() {
    // The operator vocabulary is not restricted.
    let select = db()
        .table("users")
        .select()
        .where_clause("name", "LIKE", "%bo%", Conjunction::And);
    assert_eq!(
        select.to_sql(),
        "SELECT * FROM users WHERE name LIKE '%bo%';"
    );
}

#[test]
fn test_where_literal_forms() {
    let select = db()
        .table("m")
        .select()
        .where_clause("ratio", ">", 0.5, Conjunction::And)
        .where_clause("active", "=", true, Conjunction::And)
        .where_clause("deleted_at", "IS", Value::Null, Conjunction::And);
    assert_eq!(
        select.to_sql(),
        "SELECT * FROM m WHERE ratio > 0.5 AND active = TRUE AND deleted_at IS NULL;"
    );
}

#[test]
fn test_order_by_absent_and_present() {
    let plain = db().table("users").select();
    assert!(!plain.to_sql().contains("ORDER BY"));

    let ordered = db()
        .table("users")
        .select()
        .order_by("created_at", OrderDirection::Desc)
        .order_by("id", OrderDirection::Asc);
    assert_eq!(
        ordered.to_sql(),
        "SELECT * FROM users ORDER BY created_at DESC, id ASC;"
    );
}

#[test]
fn test_limit_without_offset() {
    let select = db().table("users").select().limit(10);
    assert_eq!(select.to_sql(), "SELECT * FROM users LIMIT 10;");
    assert!(!select.to_sql().contains("OFFSET"));
}

#[test]
fn test_limit_with_offset_order() {
    let select = db().table("users").select().limit_offset(10, 5);
    assert_eq!(select.to_sql(), "SELECT * FROM users LIMIT 10 OFFSET 5;");
}

#[test]
fn test_zero_limit_and_offset_are_omitted() {
    // Explicit zeros must render the same as the defaults.
    let select = db().table("users").select().limit_offset(0, 0);
    assert_eq!(select.to_sql(), "SELECT * FROM users;");
}

#[test]
fn test_full_select_composition() {
    let select = db()
        .table("posts")
        .select()
        .columns(["id", "title"])
        .where_equals("published", true)
        .order_by("created_at", OrderDirection::Desc)
        .limit_offset(20, 40);
    assert_eq!(
        select.to_sql(),
        "SELECT id, title FROM posts WHERE published = TRUE ORDER BY created_at DESC LIMIT 20 OFFSET 40;"
    );
}

#[test]
fn test_insert_single_pair() {
    let insert = db().table("users").insert().set("name", "Bob");
    assert_eq!(insert.to_sql(), "INSERT INTO users (name) VALUES ('Bob');");
}

#[test]
fn test_insert_preserves_pair_order() {
    let insert = db()
        .table("users")
        .insert()
        .from_pairs([("name", Value::from("Bob")), ("age", Value::from(42))]);
    assert_eq!(
        insert.to_sql(),
        "INSERT INTO users (name, age) VALUES ('Bob', 42);"
    );
}

#[test]
fn test_update_with_where() {
    let update = db()
        .table("users")
        .update()
        .set("name", "Bob")
        .where_equals("id", 5);
    assert_eq!(update.to_sql(), "UPDATE users SET name = 'Bob' WHERE id = 5;");
}

#[test]
fn test_update_multiple_assignments_without_where() {
    let update = db()
        .table("users")
        .update()
        .set("name", "Bob")
        .set("active", false);
    assert_eq!(
        update.to_sql(),
        "UPDATE users SET name = 'Bob', active = FALSE;"
    );
}

#[test]
fn test_delete_with_chained_equals() {
    let delete = db()
        .table("users")
        .delete()
        .where_equals("id", 5)
        .where_equals("active", 1);
    assert_eq!(
        delete.to_sql(),
        "DELETE FROM users WHERE id = 5 AND active = 1;"
    );
}

#[test]
fn test_delete_without_where() {
    let delete = db().table("users").delete();
    assert_eq!(delete.to_sql(), "DELETE FROM users;");
}

#[test]
fn test_drop_and_truncate() {
    let db = db();
    let table = db.table("sessions");
    assert_eq!(
        table_builder::build_drop(&table),
        "DROP TABLE IF EXISTS sessions;"
    );
    assert_eq!(
        table_builder::build_truncate(&table),
        "TRUNCATE TABLE sessions;"
    );
}
