use super::{ColumnDef, Constraint};

/// An ALTER TABLE statement holding one or more alterations.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    pub name: String,
    pub alterations: Vec<Alteration>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Alteration {
    AddColumn(ColumnDef),
    AddConstraint(Constraint),
    DropColumn(String),
    ModifyColumn(ColumnDef),

    /// Renames `from` while redefining it.
    ChangeColumn { from: String, column: ColumnDef },

    RenameTo(String),
    DropIndex(String),
    DropForeignKey(String),
    DropPrimaryKey,
}

impl Alteration {
    /// Returns `true` if SQLite can express the alteration.
    pub fn is_supported_by_sqlite(&self) -> bool {
        matches!(
            self,
            Alteration::AddColumn(_) | Alteration::DropColumn(_) | Alteration::RenameTo(_)
        )
    }
}

impl AlterTable {
    pub fn new(name: impl Into<String>) -> AlterTable {
        AlterTable {
            name: name.into(),
            alterations: vec![],
        }
    }

    pub fn add_column(&mut self, column: ColumnDef) -> &mut Self {
        self.alterations.push(Alteration::AddColumn(column));
        self
    }

    pub fn add_constraint(&mut self, constraint: impl Into<Constraint>) -> &mut Self {
        self.alterations
            .push(Alteration::AddConstraint(constraint.into()));
        self
    }

    pub fn drop_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.alterations.push(Alteration::DropColumn(name.into()));
        self
    }

    pub fn modify_column(&mut self, column: ColumnDef) -> &mut Self {
        self.alterations.push(Alteration::ModifyColumn(column));
        self
    }

    pub fn change_column(&mut self, from: impl Into<String>, column: ColumnDef) -> &mut Self {
        self.alterations.push(Alteration::ChangeColumn {
            from: from.into(),
            column,
        });
        self
    }

    pub fn rename_to(&mut self, name: impl Into<String>) -> &mut Self {
        self.alterations.push(Alteration::RenameTo(name.into()));
        self
    }

    pub fn drop_index(&mut self, name: impl Into<String>) -> &mut Self {
        self.alterations.push(Alteration::DropIndex(name.into()));
        self
    }

    pub fn drop_foreign_key(&mut self, name: impl Into<String>) -> &mut Self {
        self.alterations.push(Alteration::DropForeignKey(name.into()));
        self
    }

    pub fn drop_primary_key(&mut self) -> &mut Self {
        self.alterations.push(Alteration::DropPrimaryKey);
        self
    }
}
