//! Migration registry.
//!
//! Migrations are an explicit, ordered list supplied by the application —
//! never discovered by scanning the filesystem. Each migration is a tagged
//! unit with four optional operations; the query layer's table primitives
//! ([`Table::drop`](crate::Table::drop), [`Table::truncate`](crate::Table::truncate),
//! and the CRUD nodes) are what migration bodies call.
//!
//! ```ignore
//! struct CreateUsers;
//!
//! #[async_trait]
//! impl Migration for CreateUsers {
//!     fn name(&self) -> &str {
//!         "create_users"
//!     }
//!
//!     async fn up(&self, db: &Db) -> QueryResult<()> {
//!         db.execute("CREATE TABLE users (id uuid PRIMARY KEY, name text);")
//!             .await?;
//!         Ok(())
//!     }
//!
//!     async fn down(&self, db: &Db) -> QueryResult<()> {
//!         db.table("users").drop().await?;
//!         Ok(())
//!     }
//! }
//!
//! let migrator = Migrator::new().register(CreateUsers);
//! migrator.run(&db).await?;
//! ```

use crate::db::Db;
use crate::error::QueryResult;
use async_trait::async_trait;

/// One migration unit.
///
/// All four operations default to no-ops; implement the ones that apply.
#[async_trait]
pub trait Migration: Send + Sync {
    /// Tag identifying this migration in logs.
    fn name(&self) -> &str;

    /// Apply schema changes.
    async fn up(&self, db: &Db) -> QueryResult<()> {
        let _ = db;
        Ok(())
    }

    /// Revert schema changes.
    async fn down(&self, db: &Db) -> QueryResult<()> {
        let _ = db;
        Ok(())
    }

    /// Remove this migration's data without touching the schema.
    async fn truncate(&self, db: &Db) -> QueryResult<()> {
        let _ = db;
        Ok(())
    }

    /// Populate initial data.
    async fn seed(&self, db: &Db) -> QueryResult<()> {
        let _ = db;
        Ok(())
    }
}

/// Ordered migration registry.
///
/// Runs migrations in registration order and halts on the first error; a
/// failed step leaves earlier steps applied (there is no transaction wrapper
/// at this layer).
#[derive(Default)]
pub struct Migrator {
    migrations: Vec<Box<dyn Migration>>,
}

impl Migrator {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a migration to the registry.
    pub fn register<M: Migration + 'static>(mut self, migration: M) -> Self {
        self.migrations.push(Box::new(migration));
        self
    }

    /// Number of registered migrations.
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    /// Apply every migration: `up` then `seed`, in registration order.
    pub async fn run(&self, db: &Db) -> QueryResult<()> {
        for migration in &self.migrations {
            tracing::info!(target: "litequery.migrate", name = migration.name(), "applying migration");
            migration.up(db).await?;
            migration.seed(db).await?;
        }
        Ok(())
    }

    /// Revert every migration via `down`, in registration order.
    pub async fn rollback(&self, db: &Db) -> QueryResult<()> {
        for migration in &self.migrations {
            tracing::info!(target: "litequery.migrate", name = migration.name(), "rolling back migration");
            migration.down(db).await?;
        }
        Ok(())
    }

    /// Truncate every migration's data, in registration order.
    pub async fn truncate(&self, db: &Db) -> QueryResult<()> {
        for migration in &self.migrations {
            tracing::info!(target: "litequery.migrate", name = migration.name(), "truncating migration data");
            migration.truncate(db).await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Migrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migrator")
            .field(
                "migrations",
                &self
                    .migrations
                    .iter()
                    .map(|m| m.name().to_string())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Trace {
        calls: Mutex<Vec<String>>,
    }

    struct Tracked<'a> {
        name: String,
        trace: &'a Trace,
    }

    #[async_trait]
    impl Migration for Tracked<'_> {
        fn name(&self) -> &str {
            &self.name
        }

        async fn up(&self, _db: &Db) -> QueryResult<()> {
            self.trace
                .calls
                .lock()
                .unwrap()
                .push(format!("up:{}", self.name));
            Ok(())
        }

        async fn seed(&self, _db: &Db) -> QueryResult<()> {
            self.trace
                .calls
                .lock()
                .unwrap()
                .push(format!("seed:{}", self.name));
            Ok(())
        }

        async fn down(&self, _db: &Db) -> QueryResult<()> {
            self.trace
                .calls
                .lock()
                .unwrap()
                .push(format!("down:{}", self.name));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_applies_in_registration_order() {
        let trace: &'static Trace = Box::leak(Box::new(Trace::default()));
        let migrator = Migrator::new()
            .register(Tracked {
                name: "first".into(),
                trace,
            })
            .register(Tracked {
                name: "second".into(),
                trace,
            });

        migrator.run(&Db::new()).await.unwrap();
        assert_eq!(
            *trace.calls.lock().unwrap(),
            ["up:first", "seed:first", "up:second", "seed:second"]
        );

        trace.calls.lock().unwrap().clear();
        migrator.rollback(&Db::new()).await.unwrap();
        assert_eq!(*trace.calls.lock().unwrap(), ["down:first", "down:second"]);
    }

    struct Failing;

    #[async_trait]
    impl Migration for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn up(&self, _db: &Db) -> QueryResult<()> {
            Err(crate::QueryError::invalid_query("boom"))
        }
    }

    struct Counting(&'static AtomicUsize);

    #[async_trait]
    impl Migration for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        async fn up(&self, _db: &Db) -> QueryResult<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_halts_on_first_error() {
        static LATER: AtomicUsize = AtomicUsize::new(0);
        let migrator = Migrator::new().register(Failing).register(Counting(&LATER));

        let err = migrator.run(&Db::new()).await.unwrap_err();
        assert!(err.is_invalid_query());
        assert_eq!(LATER.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_default_operations_are_no_ops() {
        struct Bare;

        #[async_trait]
        impl Migration for Bare {
            fn name(&self) -> &str {
                "bare"
            }
        }

        let migrator = Migrator::new().register(Bare);
        migrator.run(&Db::new()).await.unwrap();
        migrator.rollback(&Db::new()).await.unwrap();
        migrator.truncate(&Db::new()).await.unwrap();
    }
}
