use super::{ColumnDef, Constraint, Type};

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub name: String,

    /// MySQL only
    pub temporary: bool,

    /// MySQL only
    pub if_not_exists: bool,

    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<Constraint>,

    /// MySQL only
    pub options: TableOptions,
}

/// Trailing table options, rendered by MySQL only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableOptions {
    pub engine: Option<String>,
    pub charset: Option<String>,
    pub collate: Option<String>,
    pub comment: Option<String>,
}

impl CreateTable {
    pub fn new(name: impl Into<String>) -> CreateTable {
        CreateTable {
            name: name.into(),
            temporary: false,
            if_not_exists: false,
            columns: vec![],
            constraints: vec![],
            options: TableOptions::default(),
        }
    }

    /// Declares a column and returns it for further modification.
    pub fn column(&mut self, name: impl Into<String>, ty: impl Into<Type>) -> &mut ColumnDef {
        self.columns.push(ColumnDef::new(name, ty));
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    pub fn add_column(&mut self, column: ColumnDef) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn constraint(&mut self, constraint: impl Into<Constraint>) -> &mut Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn temporary(&mut self) -> &mut Self {
        self.temporary = true;
        self
    }

    pub fn if_not_exists(&mut self) -> &mut Self {
        self.if_not_exists = true;
        self
    }

    pub fn engine(&mut self, engine: impl Into<String>) -> &mut Self {
        self.options.engine = Some(engine.into());
        self
    }

    pub fn charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.options.charset = Some(charset.into());
        self
    }

    pub fn collate(&mut self, collate: impl Into<String>) -> &mut Self {
        self.options.collate = Some(collate.into());
        self
    }

    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.options.comment = Some(comment.into());
        self
    }

    /// Columns flagged as primary key, in declaration order.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|column| column.primary_key)
    }
}
