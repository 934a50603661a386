mod query_sql;
pub use query_sql::QuerySql;

mod transaction;
pub use transaction::Transaction;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a compiled, parameterized statement
    QuerySql(QuerySql),

    /// Execute raw SQL without parameters. Used for DDL, and may contain
    /// several statements separated by `;`.
    ExecSql(String),

    /// Execute a transaction lifecycle operation
    Transaction(Transaction),
}

impl Operation {
    /// The SQL text this operation sends, if any.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Operation::QuerySql(op) => Some(&op.sql),
            Operation::ExecSql(sql) => Some(sql),
            Operation::Transaction(_) => None,
        }
    }

    pub fn is_query_sql(&self) -> bool {
        matches!(self, Operation::QuerySql(_))
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Operation::Transaction(_))
    }
}
