/// SQL dialects the compiler can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// MySQL and MariaDB. Identifiers are quoted with backticks.
    Mysql,

    /// SQLite, the embedded single-file database. Identifiers are quoted
    /// with double quotes.
    Sqlite,
}

impl Dialect {
    pub fn is_mysql(self) -> bool {
        matches!(self, Dialect::Mysql)
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, Dialect::Sqlite)
    }
}
