pub mod db;
pub use db::Db;

mod entity;
pub use entity::{AnyEntity, Attributes, ColumnMapping, Entity, EntityMap, RelationCache};

pub mod query;

pub mod relation;
pub use relation::{Related, Relations, Relationship};

pub use quarry_core::{bail, driver, err, stmt::Row, Error, Result};

/// The statement tree and clause builder traits.
pub mod stmt {
    pub use quarry_sql::stmt::*;
}

pub use stmt::{BinaryOp, Filtered, SelectBuilder, Statement, Value};

#[cfg(feature = "sqlite")]
pub use quarry_driver_sqlite as sqlite;
