use super::Operation;

use crate::stmt::{Bind, Value};

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL text, with `?` and `:name` placeholders
    pub sql: String,

    /// Bound parameters, in placeholder order
    pub bindings: Vec<Bind>,

    /// When `true`, the handle fetches every result row. Otherwise it returns
    /// the affected row count.
    pub ret: bool,
}

impl QuerySql {
    /// The bound values without their placeholder names.
    pub fn values(&self) -> Vec<Value> {
        self.bindings.iter().map(|bind| bind.value.clone()).collect()
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
