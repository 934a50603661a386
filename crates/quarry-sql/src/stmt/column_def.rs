use super::{Name, Type, Value};

/// A column declaration in CREATE TABLE or ALTER TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub nullable: bool,
    pub default: Option<ColumnDefault>,
    pub auto_increment: bool,
    pub primary_key: bool,
    pub comment: Option<String>,

    /// Only rendered by ALTER TABLE under MySQL.
    pub position: Option<ColumnPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    /// Rendered as an escaped SQL literal.
    Value(Value),

    /// Rendered verbatim, e.g. `CURRENT_TIMESTAMP`.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnPosition {
    First,
    After(Name),
}

impl ColumnDef {
    /// A `NOT NULL` column of the given type.
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            default: None,
            auto_increment: false,
            primary_key: false,
            comment: None,
            position: None,
        }
    }

    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    pub fn default_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default = Some(ColumnDefault::Value(value.into()));
        self
    }

    pub fn default_raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.default = Some(ColumnDefault::Raw(sql.into()));
        self
    }

    pub fn auto_increment(&mut self) -> &mut Self {
        self.auto_increment = true;
        self
    }

    pub fn primary_key(&mut self) -> &mut Self {
        self.primary_key = true;
        self
    }

    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn first(&mut self) -> &mut Self {
        self.position = Some(ColumnPosition::First);
        self
    }

    pub fn after(&mut self, column: impl Into<Name>) -> &mut Self {
        self.position = Some(ColumnPosition::After(column.into()));
        self
    }
}
