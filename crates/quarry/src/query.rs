//! Builders bound to a [`Db`](crate::Db).
//!
//! Each builder owns one statement tree, compiles it with the handle's
//! dialect through `to_sql` and runs it through `execute` (or the `fetch_`
//! family for SELECT).

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod schema;
pub use schema::{AlterTable, CreateIndex, CreateTable, DropIndex, DropTable, TruncateTable};

mod select;
pub use select::Select;

mod update;
pub use update::Update;
