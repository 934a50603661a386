use crate::{
    stmt::{self, ColumnDef, Constraint, IndexColumn, Statement},
    Db, Result,
};

use std::ops::Deref;

/// Defines a schema builder: a statement tree bound to a handle. The
/// statement is readable through `Deref`, its builder methods are forwarded
/// with `forward!` so chains end on the handle-bound builder.
macro_rules! schema_builder {
    ( $( $(#[$attr:meta])* $name:ident; )* ) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone)]
            pub struct $name<'a> {
                db: &'a Db,
                stmt: stmt::$name,
            }

            impl<'a> $name<'a> {
                pub fn stmt(&self) -> &stmt::$name {
                    &self.stmt
                }

                /// Returns the SQL this statement compiles to. Schema
                /// statements bind no parameters.
                pub fn to_sql(&self) -> Result<String> {
                    self.db.to_sql(&self.statement()).map(|(sql, _)| sql)
                }

                /// Executes the statement. Nothing is sent when it compiles
                /// to an empty string.
                pub fn execute(&self) -> Result<u64> {
                    self.db.exec(&self.statement())?.into_count()
                }

                fn statement(&self) -> Statement {
                    self.stmt.clone().into()
                }
            }

            impl Deref for $name<'_> {
                type Target = stmt::$name;

                fn deref(&self) -> &Self::Target {
                    &self.stmt
                }
            }
        )*
    };
}

macro_rules! forward {
    ( $( $(#[$attr:meta])* fn $method:ident(&mut self $(, $arg:ident: $ty:ty)*); )* ) => {
        $(
            $(#[$attr])*
            pub fn $method(&mut self $(, $arg: $ty)*) -> &mut Self {
                self.stmt.$method($($arg),*);
                self
            }
        )*
    };
}

schema_builder! {
    /// `CREATE TABLE`. Columns are declared with
    /// [`column`](stmt::CreateTable::column), which returns the column
    /// definition for further modifiers.
    CreateTable;

    /// `ALTER TABLE`. Under SQLite only ADD COLUMN, DROP COLUMN and
    /// RENAME TO are emitted.
    AlterTable;

    DropTable;

    /// `TRUNCATE TABLE`. Not supported by SQLite.
    TruncateTable;

    CreateIndex;

    DropIndex;
}

impl<'a> CreateTable<'a> {
    pub(crate) fn new(db: &'a Db, name: impl Into<String>) -> CreateTable<'a> {
        CreateTable {
            db,
            stmt: stmt::CreateTable::new(name),
        }
    }

    /// Declares a column and returns its definition for further modifiers.
    pub fn column(
        &mut self,
        name: impl Into<String>,
        ty: impl Into<stmt::Type>,
    ) -> &mut ColumnDef {
        self.stmt.column(name, ty)
    }

    forward! {
        fn add_column(&mut self, column: ColumnDef);
        fn constraint(&mut self, constraint: impl Into<Constraint>);
        fn temporary(&mut self);
        fn if_not_exists(&mut self);

        /// MySQL only.
        fn engine(&mut self, engine: impl Into<String>);
        fn charset(&mut self, charset: impl Into<String>);
        fn collate(&mut self, collate: impl Into<String>);
        fn comment(&mut self, comment: impl Into<String>);
    }
}

impl<'a> AlterTable<'a> {
    pub(crate) fn new(db: &'a Db, name: impl Into<String>) -> AlterTable<'a> {
        AlterTable {
            db,
            stmt: stmt::AlterTable::new(name),
        }
    }

    forward! {
        fn add_column(&mut self, column: ColumnDef);
        fn add_constraint(&mut self, constraint: impl Into<Constraint>);
        fn drop_column(&mut self, name: impl Into<String>);
        fn modify_column(&mut self, column: ColumnDef);
        fn change_column(&mut self, from: impl Into<String>, column: ColumnDef);
        fn rename_to(&mut self, name: impl Into<String>);
        fn drop_index(&mut self, name: impl Into<String>);
        fn drop_foreign_key(&mut self, name: impl Into<String>);
        fn drop_primary_key(&mut self);
    }
}

impl<'a> DropTable<'a> {
    pub(crate) fn new(db: &'a Db) -> DropTable<'a> {
        DropTable {
            db,
            stmt: stmt::DropTable::new(),
        }
    }

    forward! {
        fn table(&mut self, name: impl Into<String>);
        fn if_exists(&mut self);
        fn temporary(&mut self);
    }
}

impl<'a> TruncateTable<'a> {
    pub(crate) fn new(db: &'a Db, name: impl Into<String>) -> TruncateTable<'a> {
        TruncateTable {
            db,
            stmt: stmt::TruncateTable::new(name),
        }
    }
}

impl<'a> CreateIndex<'a> {
    pub(crate) fn new(
        db: &'a Db,
        name: impl Into<String>,
        table: impl Into<String>,
    ) -> CreateIndex<'a> {
        CreateIndex {
            db,
            stmt: stmt::CreateIndex::new(name, table),
        }
    }

    forward! {
        fn column(&mut self, column: impl Into<IndexColumn>);
        fn unique(&mut self);
        fn if_not_exists(&mut self);
    }
}

impl<'a> DropIndex<'a> {
    pub(crate) fn new(db: &'a Db, name: impl Into<String>) -> DropIndex<'a> {
        DropIndex {
            db,
            stmt: stmt::DropIndex::new(name),
        }
    }

    forward! {
        /// MySQL requires the table an index belongs to.
        fn on(&mut self, table: impl Into<String>);
        fn if_exists(&mut self);
    }
}
