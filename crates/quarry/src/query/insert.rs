use crate::{
    stmt::{self, Name, Statement, Value},
    Db, Result,
};

use quarry_core::{stmt::Bind, Error};

use std::mem;

/// An INSERT statement bound to a database handle.
///
/// The table and column list persist across executions while the rows are
/// cleared, so one builder can insert many batches of the same shape.
#[derive(Debug, Clone)]
pub struct Insert<'a> {
    db: &'a Db,
    stmt: stmt::Insert,
}

impl<'a> Insert<'a> {
    pub(crate) fn new(db: &'a Db) -> Insert<'a> {
        Insert {
            db,
            stmt: stmt::Insert::new(),
        }
    }

    pub fn stmt(&self) -> &stmt::Insert {
        &self.stmt
    }

    pub fn into_table(&mut self, table: impl Into<Name>) -> &mut Self {
        self.stmt.into_table(table);
        self
    }

    /// Replaces the column list.
    pub fn columns<N: Into<Name>>(&mut self, columns: impl IntoIterator<Item = N>) -> &mut Self {
        self.stmt.columns(columns);
        self
    }

    /// Appends one row, with one value per column in column order.
    pub fn values<V: Into<Value>>(&mut self, row: impl IntoIterator<Item = V>) -> &mut Self {
        self.stmt.values(row);
        self
    }

    pub fn ignore(&mut self) -> &mut Self {
        self.stmt.ignore();
        self
    }

    pub fn to_sql(&self) -> Result<String> {
        self.to_sql_with_bindings().map(|(sql, _)| sql)
    }

    pub fn to_sql_with_bindings(&self) -> Result<(String, Vec<Bind>)> {
        self.db.to_sql(&self.statement())
    }

    /// Inserts the accumulated rows and returns the affected row count. The
    /// rows are cleared afterwards, whether or not the insert succeeded.
    pub fn execute(&mut self) -> Result<u64> {
        let res = self
            .db
            .exec(&self.statement())
            .and_then(|response| response.into_count());
        self.stmt.rows.clear();
        res
    }

    /// Inserts `rows` as a series of statements holding at most `chunk_size`
    /// rows each.
    ///
    /// All chunks run in one transaction: when any chunk fails, the
    /// transaction is rolled back and the error returned. Rows already added
    /// with [`values`](Self::values) are inserted first.
    pub fn chunked<R, V>(
        &mut self,
        rows: impl IntoIterator<Item = R>,
        chunk_size: usize,
    ) -> Result<u64>
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if chunk_size == 0 {
            return Err(Error::invalid_argument("chunk size must be at least 1"));
        }

        let mut pending = mem::take(&mut self.stmt.rows);
        pending.extend(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect::<Vec<_>>()),
        );

        if pending.is_empty() {
            return Ok(0);
        }

        let db = self.db;
        db.transaction(|_| {
            let mut total = 0;

            for (index, chunk) in pending.chunks(chunk_size).enumerate() {
                tracing::debug!(chunk = index, rows = chunk.len(), "inserting chunk");
                self.stmt.rows = chunk.to_vec();
                total += self.execute()?;
            }

            Ok(total)
        })
    }

    fn statement(&self) -> Statement {
        self.stmt.clone().into()
    }
}
