use super::{BinaryOp, Conditions, Filtered, Name, TableRef};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

/// A JOIN clause. Its ON conditions compare columns by default.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    pub on: Conditions,
}

impl Join {
    pub fn new(kind: JoinKind, table: impl Into<TableRef>) -> Join {
        Join {
            kind,
            table: table.into(),
            on: Conditions::new(),
        }
    }

    /// `lhs <op> rhs`, both sides being columns.
    pub fn on(&mut self, lhs: impl Into<Name>, op: BinaryOp, rhs: impl Into<Name>) -> &mut Self {
        self.filter_column(lhs, op, rhs)
    }

    pub fn or_on(&mut self, lhs: impl Into<Name>, op: BinaryOp, rhs: impl Into<Name>) -> &mut Self {
        self.or_filter_column(lhs, op, rhs)
    }
}

impl Filtered for Join {
    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.on
    }
}
