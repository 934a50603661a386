/// A DROP TABLE statement over one or more tables.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DropTable {
    pub tables: Vec<String>,
    pub if_exists: bool,

    /// MySQL only
    pub temporary: bool,
}

impl DropTable {
    pub fn new() -> DropTable {
        DropTable::default()
    }

    pub fn table(&mut self, name: impl Into<String>) -> &mut Self {
        self.tables.push(name.into());
        self
    }

    pub fn if_exists(&mut self) -> &mut Self {
        self.if_exists = true;
        self
    }

    pub fn temporary(&mut self) -> &mut Self {
        self.temporary = true;
        self
    }
}
