/// A DROP INDEX statement. MySQL requires the table the index belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndex {
    pub name: String,
    pub table: Option<String>,

    /// SQLite only
    pub if_exists: bool,
}

impl DropIndex {
    pub fn new(name: impl Into<String>) -> DropIndex {
        DropIndex {
            name: name.into(),
            table: None,
            if_exists: false,
        }
    }

    pub fn on(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    pub fn if_exists(&mut self) -> &mut Self {
        self.if_exists = true;
        self
    }
}
