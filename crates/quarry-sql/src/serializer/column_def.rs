use super::{
    value::{Literal, Quoted},
    Comma, Flavor, Ident, Params, ToSql,
};

use crate::stmt;

/// A column declaration in the context it is rendered in.
pub(super) struct ColumnSpec<'a> {
    pub(super) def: &'a stmt::ColumnDef,

    /// Render `PRIMARY KEY AUTOINCREMENT` inline (SQLite only)
    pub(super) inline_key: bool,

    /// Render FIRST / AFTER (MySQL ALTER TABLE only)
    pub(super) position: bool,
}

impl<'a> ColumnSpec<'a> {
    pub(super) fn new(def: &'a stmt::ColumnDef) -> ColumnSpec<'a> {
        ColumnSpec {
            def,
            inline_key: false,
            position: false,
        }
    }
}

impl ToSql for ColumnSpec<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let def = self.def;

        fmt!(f, Ident(&def.name), " ", &def.ty);

        if self.inline_key {
            fmt!(f, " PRIMARY KEY AUTOINCREMENT");
        }

        if !def.nullable {
            fmt!(f, " NOT NULL");
        }

        match &def.default {
            Some(stmt::ColumnDefault::Value(value)) => fmt!(f, " DEFAULT ", Literal(value)),
            Some(stmt::ColumnDefault::Raw(sql)) => fmt!(f, " DEFAULT ", sql),
            None => {}
        }

        if f.serializer.is_mysql() {
            if def.auto_increment {
                fmt!(f, " AUTO_INCREMENT");
            }

            if let Some(comment) = &def.comment {
                fmt!(f, " COMMENT ", Quoted(comment));
            }

            if self.position {
                match &def.position {
                    Some(stmt::ColumnPosition::First) => fmt!(f, " FIRST"),
                    Some(stmt::ColumnPosition::After(column)) => fmt!(f, " AFTER ", column),
                    None => {}
                }
            }
        }
    }
}

/// Renders a table constraint. SQLite has no rendering for inline indexes
/// and foreign keys; callers skip those with [`renders_constraint`].
impl ToSql for &stmt::Constraint {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Constraint::PrimaryKey(columns) => {
                fmt!(f, "PRIMARY KEY (", Comma(columns.iter().map(Ident)), ")");
            }
            stmt::Constraint::Unique { name, columns } => {
                let columns = Comma(columns.iter().map(Ident));

                match (name, f.serializer.flavor) {
                    (Some(name), Flavor::Mysql) => {
                        fmt!(f, "UNIQUE KEY ", Ident(name), " (", columns, ")")
                    }
                    (Some(name), Flavor::Sqlite) => {
                        fmt!(f, "CONSTRAINT ", Ident(name), " UNIQUE (", columns, ")")
                    }
                    (None, _) => fmt!(f, "UNIQUE (", columns, ")"),
                }
            }
            stmt::Constraint::Index { name, columns } => {
                let name = name.as_ref().map(|name| (Ident(name), " "));
                fmt!(f, "INDEX ", name, "(", Comma(columns.iter().map(Ident)), ")");
            }
            stmt::Constraint::ForeignKey(fk) => {
                let name = fk
                    .name
                    .as_ref()
                    .map(|name| ("CONSTRAINT ", (Ident(name), " ")));

                fmt!(
                    f,
                    name,
                    "FOREIGN KEY (",
                    Comma(fk.columns.iter().map(Ident)),
                    ") REFERENCES ",
                    Ident(&fk.references_table),
                    " (",
                    Comma(fk.references_columns.iter().map(Ident)),
                    ")"
                );

                if let Some(action) = fk.on_delete {
                    fmt!(f, " ON DELETE ", action.as_str());
                }

                if let Some(action) = fk.on_update {
                    fmt!(f, " ON UPDATE ", action.as_str());
                }
            }
        }
    }
}

/// Whether the flavor has table-level syntax for the constraint.
pub(super) fn renders_constraint(flavor: Flavor, constraint: &stmt::Constraint) -> bool {
    match flavor {
        Flavor::Mysql => true,
        Flavor::Sqlite => matches!(
            constraint,
            stmt::Constraint::PrimaryKey(_) | stmt::Constraint::Unique { .. }
        ),
    }
}
