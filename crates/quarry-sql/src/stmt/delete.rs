use super::{Conditions, Filtered, OrderByExpr, TableRef};

/// A DELETE statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Delete {
    pub from: Option<TableRef>,
    pub filter: Conditions,

    /// MySQL only
    pub order_by: Vec<OrderByExpr>,

    /// MySQL only
    pub limit: Option<u64>,
}

impl Delete {
    pub fn new() -> Delete {
        Delete::default()
    }

    pub fn from(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.from = Some(table.into());
        self
    }

    pub fn order_by<O: Into<OrderByExpr>>(
        &mut self,
        terms: impl IntoIterator<Item = O>,
    ) -> &mut Self {
        self.order_by = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }
}

impl Filtered for Delete {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.filter
    }
}
