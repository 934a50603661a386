use super::{Comma, Params, ToSql};

use crate::stmt::{self, Conjunction, Predicate, Value};

/// Renders the predicates joined by their conjunctions. Empty groups are
/// skipped, and the first rendered predicate drops its conjunction.
impl ToSql for &stmt::Conditions {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let mut first = true;

        for item in &self.items {
            if let Predicate::Group(group) = &item.predicate {
                if group.is_empty() {
                    continue;
                }
            }

            if !first {
                fmt!(f, item.conjunction);
            }

            fmt!(f, &item.predicate);
            first = false;
        }
    }
}

impl ToSql for Conjunction {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Conjunction::And => fmt!(f, " AND "),
            Conjunction::Or => fmt!(f, " OR "),
        }
    }
}

impl ToSql for &Predicate {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Predicate::Binary {
                column,
                op: stmt::BinaryOp::Eq,
                value: Value::Null,
            } => fmt!(f, column, " IS NULL"),
            Predicate::Binary {
                column,
                op: stmt::BinaryOp::Ne,
                value: Value::Null,
            } => fmt!(f, column, " IS NOT NULL"),
            Predicate::Binary { column, op, value } => {
                fmt!(f, column, " ", op.as_str(), " ", value)
            }
            Predicate::Raw { column, op, sql } => fmt!(f, column, " ", op.as_str(), " ", sql),
            Predicate::Column { lhs, op, rhs } => fmt!(f, lhs, " ", op.as_str(), " ", rhs),
            // `IN ()` is not valid SQL, an empty list matches nothing
            Predicate::InList { values, negate, .. } if values.is_empty() => {
                fmt!(f, if *negate { "1 = 1" } else { "1 = 0" })
            }
            Predicate::InList {
                column,
                values,
                negate,
            } => {
                let keyword = if *negate { " NOT IN (" } else { " IN (" };
                fmt!(f, column, keyword, Comma(values), ")")
            }
            Predicate::InSubquery {
                column,
                query,
                negate,
            } => {
                let keyword = if *negate { " NOT IN (" } else { " IN (" };
                fmt!(f, column, keyword, &**query, ")")
            }
            Predicate::IsNull { column, negate } => {
                fmt!(f, column, if *negate { " IS NOT NULL" } else { " IS NULL" })
            }
            Predicate::Exists { query, negate } => {
                fmt!(f, if *negate { "NOT EXISTS (" } else { "EXISTS (" }, &**query, ")")
            }
            Predicate::Group(group) => fmt!(f, "(", group, ")"),
            Predicate::Sql(sql) => fmt!(f, sql),
        }
    }
}
