use super::{Name, Value};

/// An INSERT statement with one or more rows of bound values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Insert {
    pub table: Option<Name>,
    pub columns: Vec<Name>,

    /// Each row holds one value per column, in column order.
    pub rows: Vec<Vec<Value>>,

    /// Skip rows that violate a unique constraint.
    pub ignore: bool,
}

impl Insert {
    pub fn new() -> Insert {
        Insert::default()
    }

    pub fn into_table(&mut self, table: impl Into<Name>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Replaces the column list.
    pub fn columns<N: Into<Name>>(&mut self, columns: impl IntoIterator<Item = N>) -> &mut Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one row.
    pub fn values<V: Into<Value>>(&mut self, row: impl IntoIterator<Item = V>) -> &mut Self {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn ignore(&mut self) -> &mut Self {
        self.ignore = true;
        self
    }
}
