#[macro_use]
mod fmt;
use fmt::ToSql;

mod check;

mod delim;
use delim::{Comma, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod expr;
mod name;
mod schema;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use quarry_core::{driver::operation::Transaction, driver::Dialect, Result};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Compiles `stmt` to SQL text, pushing every bound value onto `params`
    /// in the order its placeholder appears.
    ///
    /// Statements the dialect cannot express fail with an unsupported
    /// feature error before anything is written to `params`. Modifiers the
    /// dialect has no syntax for (charsets, table options, ...) are dropped.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        self.check(stmt)?;

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        Ok(ret)
    }

    /// Serialize a transaction control operation to a SQL string.
    ///
    /// MySQL uses `START TRANSACTION` while SQLite uses `BEGIN`.
    pub fn serialize_transaction(&self, op: &Transaction) -> String {
        match op {
            Transaction::Start => match self.flavor {
                Flavor::Mysql => "START TRANSACTION".to_string(),
                Flavor::Sqlite => "BEGIN".to_string(),
            },
            Transaction::Commit => "COMMIT".to_string(),
            Transaction::Rollback => "ROLLBACK".to_string(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self.flavor {
            Flavor::Mysql => Dialect::Mysql,
            Flavor::Sqlite => Dialect::Sqlite,
        }
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}
