//! # litequery
//!
//! A lightweight PostgreSQL query layer: a small statement AST, pure text
//! builders, and an execution facade.
//!
//! ## Features
//!
//! - **Statement AST**: `Select`/`Insert`/`Update`/`Delete` value objects
//!   built fluently from a [`Table`] factory and consumed once by `execute()`
//! - **Pure builders**: the [`builder`] module serializes nodes to SQL text
//!   with no I/O, so statement generation is testable in isolation
//! - **Explicit context**: a [`Db`] connection object created once at startup
//!   and passed into everything that issues SQL — no global state
//! - **Typed results**: [`SelectResponse`] over ordered [`Row`] maps, with
//!   order-preserving JSON encoding
//! - **Row entities**: [`Record`] binds a UUID v4 identifier to per-row CRUD
//! - **Migration registry**: an ordered, statically known [`Migrator`] over
//!   `up`/`down`/`truncate`/`seed` units
//!
//! ## Example
//!
//! ```ignore
//! use litequery::{ConnectConfig, Db, OrderDirection};
//!
//! let db = Db::new();
//! db.connect(&ConnectConfig::new().dbname("app").username("svc")).await?;
//!
//! let users = db
//!     .table("users")
//!     .select()
//!     .columns(["id", "name"])
//!     .where_equals("status", "active")
//!     .order_by("created_at", OrderDirection::Desc)
//!     .limit(20)
//!     .execute()
//!     .await?;
//!
//! println!("{}", users.to_json()?);
//! ```
//!
//! ## Security
//!
//! Statements are serialized with values spliced in as **literals** — there
//! is no parameter binding and no quote escaping. This mirrors the layer's
//! string-building architecture and is an injection hazard: never feed
//! untrusted input into column values, names, operators, or raw column
//! expressions. See [`Value::sql_literal`].

pub mod builder;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod migrate;
pub mod response;
pub mod row;
pub mod syntax;
pub mod value;

pub use config::ConnectConfig;
pub use db::Db;
pub use entity::{Entity, Record};
pub use error::{QueryError, QueryResult};
pub use migrate::{Migration, Migrator};
pub use response::SelectResponse;
pub use row::Row;
pub use syntax::{
    ColumnSpec, Conjunction, Delete, Insert, OrderBy, OrderDirection, OrderEntry, Select, Table,
    Update, Where, WhereClause,
};
pub use value::Value;

// Re-export async_trait for downstream `Migration` impls
pub use async_trait::async_trait;
