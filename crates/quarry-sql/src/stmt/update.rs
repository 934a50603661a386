use super::{Conditions, Filtered, Name, OrderByExpr, TableRef, Value};

/// An UPDATE statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Update {
    pub table: Option<TableRef>,
    pub assignments: Vec<Assignment>,
    pub filter: Conditions,

    /// MySQL only
    pub order_by: Vec<OrderByExpr>,

    /// MySQL only
    pub limit: Option<u64>,
}

/// `column = <value>` in a SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: Name,
    pub value: AssignmentValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentValue {
    /// Bound as a named parameter.
    Value(Value),

    /// Embedded verbatim.
    Raw(String),

    /// Another column of the updated row.
    Column(Name),
}

impl Update {
    pub fn new() -> Update {
        Update::default()
    }

    pub fn table(&mut self, table: impl Into<TableRef>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Assigns a column. Assigning the same column twice keeps the latest
    /// assignment, at the position of the first.
    pub fn assign(&mut self, column: impl Into<Name>, value: AssignmentValue) -> &mut Self {
        let column = column.into();

        match self.assignments.iter_mut().find(|a| a.column == column) {
            Some(existing) => existing.value = value,
            None => self.assignments.push(Assignment { column, value }),
        }

        self
    }

    pub fn set(&mut self, column: impl Into<Name>, value: impl Into<Value>) -> &mut Self {
        self.assign(column, AssignmentValue::Value(value.into()))
    }

    pub fn set_raw(&mut self, column: impl Into<Name>, sql: impl Into<String>) -> &mut Self {
        self.assign(column, AssignmentValue::Raw(sql.into()))
    }

    pub fn set_column(&mut self, column: impl Into<Name>, other: impl Into<Name>) -> &mut Self {
        self.assign(column, AssignmentValue::Column(other.into()))
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

impl Filtered for Update {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.filter
    }
}
