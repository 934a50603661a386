mod value;
pub(crate) use value::Value;

use quarry_core::{
    driver::{
        operation::{Operation, QuerySql},
        Dialect, Response,
    },
    stmt::Row,
    Error, Result,
};
use quarry_sql as sql;
use rusqlite::{Connection as RusqliteConnection, OpenFlags};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Parses a connection URL: `sqlite::memory:` or `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Refer to an existing SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Creates the database file if it does not exist yet and connects to it.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Connection> {
        Connection::create(path)
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens a connection. A file database must already exist.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        tracing::trace!("opening in-memory sqlite database");

        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    /// Opens an existing database file, failing when it is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_flags(path, OpenFlags::default() - OpenFlags::SQLITE_OPEN_CREATE)
    }

    /// Opens a database file, creating it first when missing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_flags(path, OpenFlags::default())
    }

    fn open_with_flags<P: AsRef<Path>>(path: P, flags: OpenFlags) -> Result<Self> {
        let path = path.as_ref();
        tracing::trace!(path = %path.display(), "opening sqlite database");

        let connection = RusqliteConnection::open_with_flags(path, flags)
            .map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    fn query_sql(&mut self, op: QuerySql) -> Result<Response> {
        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::driver_operation_failed)?;

        // Bindings are stored in placeholder order, which is also the order
        // SQLite numbers both `?` and first-seen `:name` parameters.
        for (index, bind) in op.bindings.iter().enumerate() {
            stmt.raw_bind_parameter(index + 1, Value::from(&bind.value))
                .map_err(Error::driver_operation_failed)?;
        }

        if !op.ret {
            let count = stmt.raw_execute().map_err(Error::driver_operation_failed)?;
            return Ok(Response::count(count as u64));
        }

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt.raw_query();
        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut values = Row::new();

            for (index, column) in columns.iter().enumerate() {
                let value = row
                    .get_ref(index)
                    .map_err(Error::driver_operation_failed)?;
                values.insert(column.clone(), Value::from_sql(value)?);
            }

            ret.push(values);
        }

        Ok(Response::values(ret))
    }
}

impl quarry_core::driver::Connection for Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.query_sql(op),
            Operation::ExecSql(sql) => {
                // `changes()` keeps the count of the last DML statement across
                // DDL, the running total does not move for DDL
                let before = self.connection.total_changes();
                self.connection
                    .execute_batch(&sql)
                    .map_err(Error::driver_operation_failed)?;
                Ok(Response::count(self.connection.total_changes() - before))
            }
            Operation::Transaction(op) => {
                let sql = sql::Serializer::sqlite().serialize_transaction(&op);
                self.connection
                    .execute_batch(&sql)
                    .map_err(Error::driver_operation_failed)?;
                Ok(Response::count(0))
            }
        }
    }

    fn last_insert_id(&mut self, _sequence: Option<&str>) -> Result<String> {
        Ok(self.connection.last_insert_rowid().to_string())
    }
}
