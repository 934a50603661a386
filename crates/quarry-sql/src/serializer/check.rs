use super::Serializer;

use crate::stmt::{self, JoinKind, Statement};

use quarry_core::{Error, Result};

impl Serializer {
    /// Rejects statements the flavor cannot express and statements that are
    /// malformed regardless of flavor.
    pub(super) fn check(&self, stmt: &Statement) -> Result<()> {
        match stmt {
            Statement::Select(select) => self.check_select(select),
            Statement::Insert(insert) => check_insert(insert),
            Statement::Update(update) => {
                if update.table.is_none() {
                    return Err(Error::invalid_argument("UPDATE requires a table"));
                }
                if update.assignments.is_empty() {
                    return Err(Error::invalid_argument("UPDATE requires at least one SET column"));
                }
                if self.is_sqlite() && (update.limit.is_some() || !update.order_by.is_empty()) {
                    return Err(Error::unsupported_feature(
                        "ORDER BY and LIMIT on UPDATE are not supported by SQLite",
                    ));
                }
                self.check_conditions(&update.filter)
            }
            Statement::Delete(delete) => {
                if delete.from.is_none() {
                    return Err(Error::invalid_argument("DELETE requires a table"));
                }
                if self.is_sqlite() && (delete.limit.is_some() || !delete.order_by.is_empty()) {
                    return Err(Error::unsupported_feature(
                        "ORDER BY and LIMIT on DELETE are not supported by SQLite",
                    ));
                }
                self.check_conditions(&delete.filter)
            }
            Statement::CreateTable(create) => self.check_create_table(create),
            Statement::AlterTable(alter) => {
                if alter.alterations.is_empty() {
                    return Err(Error::invalid_argument(format!(
                        "ALTER TABLE `{}` has no alterations",
                        alter.name
                    )));
                }
                Ok(())
            }
            Statement::DropTable(drop) => {
                if drop.tables.is_empty() {
                    return Err(Error::invalid_argument("DROP TABLE requires at least one table"));
                }
                Ok(())
            }
            Statement::TruncateTable(_) if self.is_sqlite() => Err(Error::unsupported_feature(
                "TRUNCATE TABLE is not supported by SQLite",
            )),
            Statement::TruncateTable(_) => Ok(()),
            Statement::CreateIndex(index) => {
                if index.columns.is_empty() {
                    return Err(Error::invalid_argument(format!(
                        "index `{}` has no columns",
                        index.name
                    )));
                }
                Ok(())
            }
            Statement::DropIndex(index) => {
                if self.is_mysql() && index.table.is_none() {
                    return Err(Error::invalid_argument(format!(
                        "MySQL requires the table of index `{}` to drop it",
                        index.name
                    )));
                }
                Ok(())
            }
        }
    }

    fn check_select(&self, select: &stmt::Select) -> Result<()> {
        let mut ret = Ok(());

        select.visit(&mut |query: &stmt::Select| {
            if ret.is_err() {
                return;
            }

            if self.is_mysql() && query.joins.iter().any(|j| j.kind == JoinKind::Full) {
                ret = Err(Error::unsupported_feature(
                    "FULL OUTER JOIN is not supported by MySQL",
                ));
            }
        });

        ret
    }

    fn check_conditions(&self, conditions: &stmt::Conditions) -> Result<()> {
        for query in conditions.subqueries() {
            self.check_select(query)?;
        }
        Ok(())
    }

    fn check_create_table(&self, create: &stmt::CreateTable) -> Result<()> {
        if create.columns.is_empty() {
            return Err(Error::invalid_argument(format!(
                "table `{}` has no columns",
                create.name
            )));
        }

        let flagged = create.primary_key_columns().count();
        let declared = create
            .constraints
            .iter()
            .filter(|c| matches!(c, stmt::Constraint::PrimaryKey(_)))
            .count();

        if declared > 1 || (declared == 1 && flagged > 0) {
            return Err(Error::invalid_argument(format!(
                "table `{}` declares more than one primary key",
                create.name
            )));
        }

        if self.is_sqlite() {
            let auto = create.columns.iter().filter(|c| c.auto_increment).count();

            // SQLite only auto increments a column that is the sole primary key
            let other_key = create.primary_key_columns().any(|c| !c.auto_increment);

            if auto > 1 || (auto == 1 && (declared > 0 || other_key)) {
                return Err(Error::unsupported_feature(
                    "SQLite only supports AUTOINCREMENT on a single-column primary key",
                ));
            }
        }

        Ok(())
    }
}

fn check_insert(insert: &stmt::Insert) -> Result<()> {
    if insert.table.is_none() {
        return Err(Error::invalid_argument("INSERT requires a table"));
    }

    if insert.rows.is_empty() {
        return Err(Error::invalid_argument("INSERT requires at least one row of values"));
    }

    let width = if insert.columns.is_empty() {
        insert.rows[0].len()
    } else {
        insert.columns.len()
    };

    if width == 0 {
        return Err(Error::invalid_argument("INSERT row has no values"));
    }

    if let Some(row) = insert.rows.iter().find(|row| row.len() != width) {
        return Err(Error::invalid_argument(format!(
            "INSERT row has {} values, expected {width}",
            row.len()
        )));
    }

    Ok(())
}
