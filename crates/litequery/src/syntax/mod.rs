//! Statement AST: value objects representing one SQL statement each.
//!
//! [`Table`] (from [`Db::table`](crate::Db::table)) is the factory; the four
//! statement nodes are built by fluent mutation and consumed once by
//! `execute()`. Serialization lives in [`crate::builder`]; nodes hold state
//! only.
//!
//! ```ignore
//! let response = db
//!     .table("users")
//!     .select()
//!     .columns(["id", "name"])
//!     .where_equals("status", "active")
//!     .order_by("created_at", OrderDirection::Desc)
//!     .limit(20)
//!     .execute()
//!     .await?;
//! ```

mod columns;
mod delete;
mod insert;
mod order_by;
mod select;
mod table;
mod update;
mod where_clause;

pub use columns::ColumnSpec;
pub use delete::Delete;
pub use insert::Insert;
pub use order_by::{OrderBy, OrderDirection, OrderEntry};
pub use select::Select;
pub use table::Table;
pub use update::Update;
pub use where_clause::{Conjunction, Where, WhereClause};
