use super::{Ident, Params, Period, ToSql};

use crate::stmt;

impl ToSql for &stmt::Name {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let parts = Period(self.0.iter().map(Ident));
        fmt!(f, parts);
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", Ident(alias)));

        match &self.query {
            Some(query) => fmt!(f, "(", &**query, ")", alias),
            None => fmt!(f, &self.name, alias),
        }
    }
}

impl ToSql for &stmt::Selection {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Selection::Column { name, alias } => {
                let alias = alias.as_ref().map(|alias| (" AS ", Ident(alias)));
                fmt!(f, name, alias);
            }
            stmt::Selection::Raw(sql) => fmt!(f, sql),
        }
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.name, " ", self.direction);
    }
}

impl ToSql for stmt::Direction {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl<A: ToSql, B: ToSql> ToSql for (A, B) {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.0, self.1);
    }
}
