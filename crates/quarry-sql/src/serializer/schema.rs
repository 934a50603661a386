use super::{
    column_def::{renders_constraint, ColumnSpec},
    value::Quoted,
    Comma, Flavor, Ident, Params, ToSql,
};

use crate::stmt::{self, Alteration};

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let sqlite = f.serializer.is_sqlite();
        let mut s = "";

        for column in &self.0.columns {
            // SQLite declares the auto incrementing key on the column itself
            let spec = ColumnSpec {
                inline_key: sqlite && column.auto_increment,
                ..ColumnSpec::new(column)
            };
            fmt!(f, s, spec);
            s = ", ";
        }

        let trailing_pk: Vec<_> = self
            .0
            .primary_key_columns()
            .filter(|column| !(sqlite && column.auto_increment))
            .map(|column| Ident(&column.name))
            .collect();

        if !trailing_pk.is_empty() {
            fmt!(f, ", PRIMARY KEY (", Comma(trailing_pk), ")");
        }

        let flavor = f.serializer.flavor;
        for constraint in &self.0.constraints {
            if renders_constraint(flavor, constraint) {
                fmt!(f, ", ", constraint);
            }
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let columns = ColumnsWithConstraints(self);

        match f.serializer.flavor {
            Flavor::Mysql => {
                let temporary = if self.temporary { "TEMPORARY " } else { "" };
                let if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" };

                fmt!(
                    f,
                    "CREATE ",
                    temporary,
                    "TABLE ",
                    if_not_exists,
                    name,
                    " (",
                    columns,
                    ")",
                    &self.options
                );
            }
            Flavor::Sqlite => fmt!(f, "CREATE TABLE ", name, " (", columns, ")"),
        }
    }
}

impl ToSql for &stmt::TableOptions {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if let Some(engine) = &self.engine {
            fmt!(f, " ENGINE=", engine);
        }
        if let Some(charset) = &self.charset {
            fmt!(f, " DEFAULT CHARACTER SET=", charset);
        }
        if let Some(collate) = &self.collate {
            fmt!(f, " COLLATE=", collate);
        }
        if let Some(comment) = &self.comment {
            fmt!(f, " COMMENT=", Quoted(comment));
        }
    }
}

impl ToSql for &stmt::AlterTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);

        match f.serializer.flavor {
            Flavor::Mysql => {
                fmt!(f, "ALTER TABLE ", name, " ", Comma(&self.alterations));
            }
            Flavor::Sqlite => {
                // One statement per alteration, SQLite accepts a single
                // alteration per ALTER TABLE
                let mut s = "";

                for alteration in &self.alterations {
                    if alteration.is_supported_by_sqlite() {
                        fmt!(f, s, "ALTER TABLE ", Ident(&self.name), " ", alteration);
                        s = "; ";
                    }
                }
            }
        }
    }
}

impl ToSql for &Alteration {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let position = f.serializer.is_mysql();

        match self {
            Alteration::AddColumn(column) => {
                let spec = ColumnSpec {
                    position,
                    ..ColumnSpec::new(column)
                };
                fmt!(f, "ADD COLUMN ", spec);
            }
            Alteration::AddConstraint(constraint) => fmt!(f, "ADD ", constraint),
            Alteration::DropColumn(column) => fmt!(f, "DROP COLUMN ", Ident(column)),
            Alteration::ModifyColumn(column) => {
                let spec = ColumnSpec {
                    position,
                    ..ColumnSpec::new(column)
                };
                fmt!(f, "MODIFY COLUMN ", spec);
            }
            Alteration::ChangeColumn { from, column } => {
                let spec = ColumnSpec {
                    position,
                    ..ColumnSpec::new(column)
                };
                fmt!(f, "CHANGE ", Ident(from), " ", spec);
            }
            Alteration::RenameTo(name) => fmt!(f, "RENAME TO ", Ident(name)),
            Alteration::DropIndex(name) => fmt!(f, "DROP INDEX ", Ident(name)),
            Alteration::DropForeignKey(name) => fmt!(f, "DROP FOREIGN KEY ", Ident(name)),
            Alteration::DropPrimaryKey => fmt!(f, "DROP PRIMARY KEY"),
        }
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        match f.serializer.flavor {
            Flavor::Mysql => {
                let temporary = if self.temporary { "TEMPORARY " } else { "" };
                let tables = Comma(self.tables.iter().map(Ident));
                fmt!(f, "DROP ", temporary, "TABLE ", if_exists, tables);
            }
            Flavor::Sqlite => {
                let mut s = "";
                for table in &self.tables {
                    fmt!(f, s, "DROP TABLE ", if_exists, Ident(table));
                    s = "; ";
                }
            }
        }
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let if_not_exists = if self.if_not_exists && f.serializer.is_sqlite() {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(
            f,
            "CREATE ",
            unique,
            "INDEX ",
            if_not_exists,
            Ident(&self.name),
            " ON ",
            Ident(&self.table),
            " (",
            Comma(&self.columns),
            ")"
        );
    }
}

impl ToSql for &stmt::IndexColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(&self.name));

        if let Some(direction) = self.direction {
            fmt!(f, " ", direction);
        }
    }
}

impl ToSql for &stmt::DropIndex {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => {
                let table = self.table.as_ref().map(|table| (" ON ", Ident(table)));
                fmt!(f, "DROP INDEX ", Ident(&self.name), table);
            }
            Flavor::Sqlite => {
                let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
                fmt!(f, "DROP INDEX ", if_exists, Ident(&self.name));
            }
        }
    }
}
