use super::{BinaryOp, Name, Select, Value};

/// Keyword joining a predicate to the one before it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

/// An ordered list of predicates, as found in WHERE, HAVING and JOIN ... ON.
///
/// The conjunction of the first rendered predicate is never emitted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Conditions {
    pub items: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub conjunction: Conjunction,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column <op> ?`, the value is bound.
    Binary {
        column: Name,
        op: BinaryOp,
        value: Value,
    },

    /// `column <op> <sql>`, the right-hand side is embedded verbatim.
    Raw {
        column: Name,
        op: BinaryOp,
        sql: String,
    },

    /// `lhs <op> rhs`, comparing two columns.
    Column { lhs: Name, op: BinaryOp, rhs: Name },

    /// `column [NOT] IN (?, ?, ...)`
    InList {
        column: Name,
        values: Vec<Value>,
        negate: bool,
    },

    /// `column [NOT] IN (SELECT ...)`
    InSubquery {
        column: Name,
        query: Box<Select>,
        negate: bool,
    },

    /// `column IS [NOT] NULL`
    IsNull { column: Name, negate: bool },

    /// `[NOT] EXISTS (SELECT ...)`
    Exists { query: Box<Select>, negate: bool },

    /// A parenthesized sub-clause.
    Group(Conditions),

    /// A complete predicate embedded verbatim.
    Sql(String),
}

impl Conditions {
    pub fn new() -> Conditions {
        Conditions::default()
    }

    /// Returns `true` when nothing would be rendered, including when every
    /// item is itself an empty group.
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|item| item.predicate.is_empty_group())
    }

    pub fn push(&mut self, conjunction: Conjunction, predicate: Predicate) {
        self.items.push(Condition {
            conjunction,
            predicate,
        });
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Every sub-select nested in the conditions, including inside groups.
    pub(crate) fn subqueries(&self) -> Vec<&Select> {
        let mut out = vec![];
        for item in &self.items {
            match &item.predicate {
                Predicate::InSubquery { query, .. } | Predicate::Exists { query, .. } => {
                    out.push(&**query)
                }
                Predicate::Group(group) => out.extend(group.subqueries()),
                _ => {}
            }
        }
        out
    }
}

impl Predicate {
    fn is_empty_group(&self) -> bool {
        match self {
            Predicate::Group(group) => group.is_empty(),
            _ => false,
        }
    }
}
