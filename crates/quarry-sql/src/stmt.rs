mod alter_table;
pub use alter_table::{AlterTable, Alteration};

mod column_def;
pub use column_def::{ColumnDef, ColumnDefault, ColumnPosition};

mod condition;
pub use condition::{Condition, Conditions, Conjunction, Predicate};

mod constraint;
pub use constraint::{Constraint, ForeignKey, ReferentialAction};

mod create_index;
pub use create_index::{CreateIndex, IndexColumn};

mod create_table;
pub use create_table::{CreateTable, TableOptions};

mod delete;
pub use delete::Delete;

mod drop_index;
pub use drop_index::DropIndex;

mod drop_table;
pub use drop_table::DropTable;

mod filtered;
pub use filtered::Filtered;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod name;
pub use name::Name;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::{Direction, OrderByExpr};

mod select;
pub use select::{Select, SelectBuilder};

mod selection;
pub use selection::Selection;

mod table_ref;
pub use table_ref::TableRef;

mod truncate_table;
pub use truncate_table::TruncateTable;

mod ty;
pub use ty::{Type, TypeKind};

mod update;
pub use update::{Assignment, AssignmentValue, Update};

pub use quarry_core::stmt::{Bind, Value};

/// One SQL statement, prior to compilation.
#[derive(Debug, Clone)]
pub enum Statement {
    AlterTable(AlterTable),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    Delete(Delete),
    DropIndex(DropIndex),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    TruncateTable(TruncateTable),
    Update(Update),
}

impl Statement {
    /// Returns `true` for statements that produce result rows.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    /// Returns `true` for schema statements, which are executed without bind
    /// parameters.
    pub fn is_ddl(&self) -> bool {
        matches!(
            self,
            Statement::AlterTable(_)
                | Statement::CreateIndex(_)
                | Statement::CreateTable(_)
                | Statement::DropIndex(_)
                | Statement::DropTable(_)
                | Statement::TruncateTable(_)
        )
    }
}

macro_rules! impl_from_stmt {
    ( $( $variant:ident, )* ) => {
        $(
            impl From<$variant> for Statement {
                fn from(src: $variant) -> Self {
                    Statement::$variant(src)
                }
            }
        )*
    };
}

impl_from_stmt! {
    AlterTable,
    CreateIndex,
    CreateTable,
    Delete,
    DropIndex,
    DropTable,
    Insert,
    Select,
    TruncateTable,
    Update,
}
