mod transaction;

use crate::{query, stmt::Statement, Result};

use quarry_core::{
    driver::{
        operation::{Operation, QuerySql, Transaction},
        Connection, Dialect, Response,
    },
    stmt::{Bind, Value},
    Error,
};
use quarry_sql::Serializer;

use std::{
    cell::{Cell, RefCell},
    fmt,
};

/// A database handle paired with the compiler for its dialect.
///
/// Every builder created from a `Db` borrows it, compiles with its
/// serializer and executes on its connection. The handle is single threaded:
/// open one `Db` per thread.
pub struct Db {
    connection: RefCell<Box<dyn Connection>>,
    serializer: Serializer,

    /// Number of open transactions started through this handle.
    depth: Cell<usize>,
}

impl Db {
    /// Wraps a caller-supplied connection. The connection's dialect selects
    /// the compiler.
    pub fn new(connection: impl Connection + 'static) -> Db {
        let serializer = Serializer::new(connection.dialect());

        Db {
            connection: RefCell::new(Box::new(connection)),
            serializer,
            depth: Cell::new(0),
        }
    }

    /// Connects to the database named by `url`.
    ///
    /// Only `sqlite:` URLs are understood. `sqlite::memory:` opens an
    /// in-memory database, `sqlite:<path>` opens an existing file.
    #[cfg(feature = "sqlite")]
    pub fn connect(url: &str) -> Result<Db> {
        if !url.starts_with("sqlite:") {
            return Err(Error::invalid_connection_url(format!(
                "no database handle available for this URL; url={url}"
            )));
        }

        let connection = quarry_driver_sqlite::Sqlite::new(url)?.connect()?;
        Ok(Db::new(connection))
    }

    pub fn dialect(&self) -> Dialect {
        self.serializer.dialect()
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    pub fn select(&self) -> query::Select<'_> {
        query::Select::new(self)
    }

    pub fn insert(&self) -> query::Insert<'_> {
        query::Insert::new(self)
    }

    pub fn update(&self) -> query::Update<'_> {
        query::Update::new(self)
    }

    pub fn delete(&self) -> query::Delete<'_> {
        query::Delete::new(self)
    }

    pub fn create_table(&self, name: impl Into<String>) -> query::CreateTable<'_> {
        query::CreateTable::new(self, name)
    }

    pub fn alter_table(&self, name: impl Into<String>) -> query::AlterTable<'_> {
        query::AlterTable::new(self, name)
    }

    pub fn drop_table(&self) -> query::DropTable<'_> {
        query::DropTable::new(self)
    }

    pub fn truncate_table(&self, name: impl Into<String>) -> query::TruncateTable<'_> {
        query::TruncateTable::new(self, name)
    }

    pub fn create_index(
        &self,
        name: impl Into<String>,
        table: impl Into<String>,
    ) -> query::CreateIndex<'_> {
        query::CreateIndex::new(self, name, table)
    }

    pub fn drop_index(&self, name: impl Into<String>) -> query::DropIndex<'_> {
        query::DropIndex::new(self, name)
    }

    /// Compiles `stmt` for this handle's dialect without executing it.
    pub fn to_sql(&self, stmt: &Statement) -> Result<(String, Vec<Bind>)> {
        let mut bindings = vec![];
        let sql = self.serializer.serialize(stmt, &mut bindings)?;
        Ok((sql, bindings))
    }

    /// Compiles and executes a statement.
    ///
    /// SELECT returns its rows, the other DML statements return the affected
    /// row count. Schema statements are sent as raw SQL and return the
    /// count the handle reports. A schema statement that compiles to nothing
    /// is not sent at all.
    pub fn exec(&self, stmt: &Statement) -> Result<Response> {
        let (sql, bindings) = self.to_sql(stmt)?;

        if stmt.is_ddl() {
            if sql.is_empty() {
                tracing::debug!("statement compiled to nothing; skipping");
                return Ok(Response::count(0));
            }

            return self.exec_sql(sql).map(Response::count);
        }

        let values: Vec<Value> = bindings.iter().map(|bind| bind.value.clone()).collect();
        tracing::debug!(sql = %sql, bindings = ?values, "executing statement");

        let op = QuerySql {
            sql: sql.clone(),
            bindings,
            ret: stmt.returns_rows(),
        };

        self.exec_op(op.into())
            .map_err(|err| err.context(Error::statement_failed(sql, &values)))
    }

    /// Executes raw SQL that carries no bind parameters, returning the
    /// affected row count.
    pub fn exec_sql(&self, sql: impl Into<String>) -> Result<u64> {
        let sql = sql.into();
        tracing::debug!(sql = %sql, "executing raw SQL");

        self.exec_op(Operation::ExecSql(sql.clone()))
            .and_then(Response::into_count)
            .map_err(|err| err.context(Error::statement_failed(sql, &[])))
    }

    /// Returns the id generated by the most recent INSERT on this handle.
    pub fn last_insert_id(&self, sequence: Option<&str>) -> Result<String> {
        self.connection.borrow_mut().last_insert_id(sequence)
    }

    fn exec_op(&self, op: Operation) -> Result<Response> {
        self.connection.borrow_mut().exec(op)
    }

    fn exec_transaction(&self, op: Transaction) -> Result<()> {
        tracing::debug!(op = ?op, "transaction");
        self.exec_op(op.into())?;
        Ok(())
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("dialect", &self.dialect())
            .field("connection", &self.connection)
            .finish()
    }
}
