use crate::{
    stmt::{self, Conditions, Filtered, Name, OrderByExpr, Statement, TableRef, Value},
    Db, Result,
};

use quarry_core::stmt::Bind;

/// An UPDATE statement bound to a database handle.
///
/// `set` binds its value as a parameter. `set_raw` and `set_column` embed an
/// expression or another column and bind nothing.
#[derive(Debug, Clone)]
pub struct Update<'a> {
    db: &'a Db,
    stmt: stmt::Update,
}

impl<'a> Update<'a> {
    pub(crate) fn new(db: &'a Db) -> Update<'a> {
        Update {
            db,
            stmt: stmt::Update::new(),
        }
    }

    pub fn stmt(&self) -> &stmt::Update {
        &self.stmt
    }

    pub fn table(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.stmt.table(table);
        self
    }

    pub fn set(&mut self, column: impl Into<Name>, value: impl Into<Value>) -> &mut Self {
        self.stmt.set(column, value);
        self
    }

    /// Assigns several columns at once.
    pub fn set_many<N, V>(&mut self, assignments: impl IntoIterator<Item = (N, V)>) -> &mut Self
    where
        N: Into<Name>,
        V: Into<Value>,
    {
        for (column, value) in assignments {
            self.stmt.set(column, value);
        }
        self
    }

    pub fn set_raw(&mut self, column: impl Into<Name>, sql: impl Into<String>) -> &mut Self {
        self.stmt.set_raw(column, sql);
        self
    }

    pub fn set_column(&mut self, column: impl Into<Name>, other: impl Into<Name>) -> &mut Self {
        self.stmt.set_column(column, other);
        self
    }

    pub fn order_by<O: Into<OrderByExpr>>(
        &mut self,
        terms: impl IntoIterator<Item = O>,
    ) -> &mut Self {
        self.stmt.order_by(terms);
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.stmt.limit(limit);
        self
    }

    pub fn to_sql(&self) -> Result<String> {
        self.to_sql_with_bindings().map(|(sql, _)| sql)
    }

    pub fn to_sql_with_bindings(&self) -> Result<(String, Vec<Bind>)> {
        self.db.to_sql(&self.statement())
    }

    /// Runs the update and returns the affected row count. The SET clause is
    /// cleared afterwards while the table and WHERE clause are kept.
    pub fn execute(&mut self) -> Result<u64> {
        let res = self
            .db
            .exec(&self.statement())
            .and_then(|response| response.into_count());
        self.stmt.assignments.clear();
        res
    }

    fn statement(&self) -> Statement {
        self.stmt.clone().into()
    }
}

impl Filtered for Update<'_> {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.stmt.filter
    }
}
