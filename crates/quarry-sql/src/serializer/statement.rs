use super::{Comma, Flavor, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

use std::collections::HashSet;

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::AlterTable(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropIndex(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::TruncateTable(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let distinct = if self.distinct { "DISTINCT " } else { "" };

        fmt!(f, "SELECT ", distinct);

        if self.columns.is_empty() {
            fmt!(f, "*");
        } else {
            fmt!(f, Comma(&self.columns));
        }

        if !self.from.is_empty() {
            fmt!(f, " FROM ", Comma(&self.from));
        }

        for join in &self.joins {
            fmt!(f, " ", join);
        }

        fmt!(f, Where(&self.filter));

        if !self.group_by.is_empty() {
            fmt!(f, " GROUP BY ", Comma(&self.group_by));
        }

        if !self.having.is_empty() {
            fmt!(f, " HAVING ", &self.having);
        }

        fmt!(
            f,
            OrderBy(&self.order_by),
            Limit {
                limit: self.limit,
                offset: self.offset
            }
        );
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let keyword = match self.kind {
            stmt::JoinKind::Inner => "INNER JOIN ",
            stmt::JoinKind::Left => "LEFT JOIN ",
            stmt::JoinKind::Right => "RIGHT JOIN ",
            stmt::JoinKind::Full => "FULL OUTER JOIN ",
        };

        fmt!(f, keyword, &self.table);

        if !self.on.is_empty() {
            fmt!(f, " ON ", &self.on);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let keyword = match (self.ignore, f.serializer.flavor) {
            (false, _) => "INSERT INTO ",
            (true, Flavor::Mysql) => "INSERT IGNORE INTO ",
            (true, Flavor::Sqlite) => "INSERT OR IGNORE INTO ",
        };

        fmt!(f, keyword, self.table.as_ref());

        if !self.columns.is_empty() {
            fmt!(f, " (", Comma(&self.columns), ")");
        }

        let rows = Comma(self.rows.iter().map(|row| ("(", (Comma(row), ")"))));
        fmt!(f, " VALUES ", rows);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "UPDATE ", self.table.as_ref(), " SET ");

        let mut used = HashSet::new();
        let mut s = "";

        for assignment in &self.assignments {
            fmt!(f, s, &assignment.column, " = ");

            match &assignment.value {
                stmt::AssignmentValue::Value(value) => {
                    let name = param_name(&assignment.column, &mut used);
                    let placeholder = f.params.push_named(&name, value);
                    fmt!(f, placeholder);
                }
                stmt::AssignmentValue::Raw(sql) => fmt!(f, sql),
                stmt::AssignmentValue::Column(column) => fmt!(f, column),
            }

            s = ", ";
        }

        fmt!(
            f,
            Where(&self.filter),
            OrderBy(&self.order_by),
            Limit {
                limit: self.limit,
                offset: None
            }
        );
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(
            f,
            "DELETE FROM ",
            self.from.as_ref(),
            Where(&self.filter),
            OrderBy(&self.order_by),
            Limit {
                limit: self.limit,
                offset: None
            }
        );
    }
}

/// The placeholder name for a SET column: the column name reduced to
/// `[A-Za-z0-9_]`, suffixed with a counter when already taken.
fn param_name(column: &stmt::Name, used: &mut HashSet<String>) -> String {
    let base: String = column
        .base()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let base = if base.is_empty() { "p".to_string() } else { base };

    let mut name = base.clone();
    let mut n = 2;
    while !used.insert(name.clone()) {
        name = format!("{base}_{n}");
        n += 1;
    }
    name
}

struct Where<'a>(&'a stmt::Conditions);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE ", self.0);
        }
    }
}

struct OrderBy<'a>(&'a [stmt::OrderByExpr]);

impl ToSql for OrderBy<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if !self.0.is_empty() {
            fmt!(f, " ORDER BY ", Comma(self.0));
        }
    }
}

/// LIMIT and OFFSET, rendered as integer literals. An offset without a limit
/// needs the flavor's "no limit" sentinel, as neither flavor accepts a bare
/// OFFSET.
struct Limit {
    limit: Option<u64>,
    offset: Option<u64>,
}

impl ToSql for Limit {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match (self.limit, self.offset) {
            (None, None) => {}
            (Some(limit), None) => fmt!(f, " LIMIT ", limit),
            (Some(limit), Some(offset)) => fmt!(f, " LIMIT ", limit, " OFFSET ", offset),
            (None, Some(offset)) => {
                let sentinel = match f.serializer.flavor {
                    Flavor::Mysql => "18446744073709551615",
                    Flavor::Sqlite => "-1",
                };
                fmt!(f, " LIMIT ", sentinel, " OFFSET ", offset)
            }
        }
    }
}

impl ToSql for &stmt::TruncateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "TRUNCATE TABLE ", Ident(&self.name));
    }
}
