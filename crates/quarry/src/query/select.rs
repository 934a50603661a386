use crate::{
    stmt::{self, Conditions, Filtered, SelectBuilder, Selection, Statement},
    Db, Entity, Result,
};

use quarry_core::{
    stmt::{Bind, Row},
    Error,
};

/// A SELECT statement bound to a database handle.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    db: &'a Db,
    stmt: stmt::Select,
}

impl<'a> Select<'a> {
    pub(crate) fn new(db: &'a Db) -> Select<'a> {
        Select::from_stmt(db, stmt::Select::new())
    }

    pub fn from_stmt(db: &'a Db, stmt: stmt::Select) -> Select<'a> {
        Select { db, stmt }
    }

    pub fn stmt(&self) -> &stmt::Select {
        &self.stmt
    }

    pub fn into_stmt(self) -> stmt::Select {
        self.stmt
    }

    pub fn to_sql(&self) -> Result<String> {
        self.to_sql_with_bindings().map(|(sql, _)| sql)
    }

    pub fn to_sql_with_bindings(&self) -> Result<(String, Vec<Bind>)> {
        self.db.to_sql(&self.statement())
    }

    /// Executes the query and returns every row, in the order the database
    /// returned them.
    pub fn fetch_all(&self) -> Result<Vec<Row>> {
        self.db.exec(&self.statement())?.into_rows()
    }

    /// Executes the query with `LIMIT 1` and returns the row, if any.
    pub fn fetch_one(&self) -> Result<Option<Row>> {
        let mut stmt = self.stmt.clone();
        stmt.limit = Some(1);

        let rows = self.db.exec(&stmt.into())?.into_rows()?;
        Ok(rows.into_iter().next())
    }

    /// Loads every row as an entity of type `E`.
    pub fn load_all<E: Entity>(&self) -> Result<Vec<E>> {
        self.fetch_all()?.into_iter().map(E::from_row).collect()
    }

    pub fn load_one<E: Entity>(&self) -> Result<Option<E>> {
        self.fetch_one()?.map(E::from_row).transpose()
    }

    /// Counts the rows the query matches.
    ///
    /// The count runs on a copy of the statement with its ORDER BY, LIMIT and
    /// OFFSET removed. Returns 0 when no row matches.
    pub fn count(&self) -> Result<u64> {
        let mut stmt = self.stmt.clone();
        stmt.columns = vec![Selection::raw("COUNT(*)")];
        stmt.order_by.clear();
        stmt.limit = None;
        stmt.offset = None;

        let rows = self.db.exec(&stmt.into())?.into_rows()?;

        let Some(value) = rows.first().and_then(Row::first) else {
            return Ok(0);
        };

        let count: i64 = value.clone().into_type()?;
        u64::try_from(count)
            .map_err(|_| Error::invalid_result(format!("negative row count {count}")))
    }

    fn statement(&self) -> Statement {
        self.stmt.clone().into()
    }
}

impl Filtered for Select<'_> {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.stmt.filter
    }
}

impl SelectBuilder for Select<'_> {
    fn select_mut(&mut self) -> &mut stmt::Select {
        &mut self.stmt
    }
}
