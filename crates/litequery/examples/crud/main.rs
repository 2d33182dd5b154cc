//! End-to-end CRUD against a real database.
//!
//! Reads connection settings from the environment (`.env` supported):
//! `PGHOST`, `PGPORT`, `PGDATABASE`, `PGUSER`, `PGPASSWORD`.
//!
//! Run with: `cargo run --example crud`

use litequery::{ConnectConfig, Db, Migration, Migrator, QueryResult, Record, async_trait};
use std::env;

struct CreateNotes;

#[async_trait]
impl Migration for CreateNotes {
    fn name(&self) -> &str {
        "create_notes"
    }

    async fn up(&self, db: &Db) -> QueryResult<()> {
        db.execute("CREATE TABLE IF NOT EXISTS notes (id text PRIMARY KEY, body text, pinned boolean);")
            .await?;
        Ok(())
    }

    async fn down(&self, db: &Db) -> QueryResult<()> {
        db.table("notes").drop().await?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ConnectConfig::new()
        .host(env::var("PGHOST").unwrap_or_else(|_| "localhost".into()))
        .port(env::var("PGPORT").ok().and_then(|p| p.parse().ok()).unwrap_or(5432))
        .dbname(env::var("PGDATABASE").unwrap_or_else(|_| "postgres".into()))
        .username(env::var("PGUSER").unwrap_or_else(|_| "postgres".into()))
        .password(env::var("PGPASSWORD").unwrap_or_default());

    let db = Db::new();
    db.connect(&config).await?;

    let migrator = Migrator::new().register(CreateNotes);
    migrator.run(&db).await?;

    // Insert a row addressed by a generated UUID v4.
    let note = Record::new("notes");
    db.table("notes")
        .insert()
        .set("id", note.id())
        .set("body", "hello from litequery")
        .set("pinned", false)
        .execute()
        .await?;

    // Read it back through the entity helper.
    let fetched = note.select(&db, "").await?;
    println!("inserted: {}", fetched.to_json()?);

    // Update and delete through the same identifier scope.
    note.update(&db, [("pinned", true)]).await?;
    let pinned = note.select(&db, ["pinned"]).await?;
    println!("updated: {}", pinned.to_json()?);

    note.delete(&db).await?;
    println!("deleted; remaining = {}", db.table("notes").select().execute().await?.count());

    migrator.rollback(&db).await?;
    Ok(())
}
