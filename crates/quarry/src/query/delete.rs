use crate::{
    stmt::{self, Conditions, Filtered, OrderByExpr, Statement, TableRef},
    Db, Result,
};

use quarry_core::stmt::Bind;

#[derive(Debug, Clone)]
pub struct Delete<'a> {
    db: &'a Db,
    stmt: stmt::Delete,
}

impl<'a> Delete<'a> {
    pub(crate) fn new(db: &'a Db) -> Delete<'a> {
        Delete {
            db,
            stmt: stmt::Delete::new(),
        }
    }

    pub fn stmt(&self) -> &stmt::Delete {
        &self.stmt
    }

    pub fn from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.stmt.from(table);
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

    /// Runs the delete and returns the affected row count.
    pub fn execute(&self) -> Result<u64> {
        self.db.exec(&self.statement())?.into_count()
    }

    fn statement(&self) -> Statement {
        self.stmt.clone().into()
    }
}

impl Filtered for Delete<'_> {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.stmt.filter
    }
}
