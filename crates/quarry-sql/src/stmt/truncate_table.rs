/// A TRUNCATE TABLE statement. SQLite has no such statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncateTable {
    pub name: String,
}

impl TruncateTable {
    pub fn new(name: impl Into<String>) -> TruncateTable {
        TruncateTable { name: name.into() }
    }
}
