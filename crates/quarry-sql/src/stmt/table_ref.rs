use super::{Name, Select};

/// A table in a FROM, JOIN, UPDATE or DELETE clause, with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub name: Name,
    pub alias: Option<String>,

    /// Set for a derived table, `(SELECT ...) AS alias`. `name` is then the
    /// alias.
    pub query: Option<Box<Select>>,
}

impl TableRef {
    pub fn new(name: impl Into<Name>) -> TableRef {
        TableRef {
            name: name.into(),
            alias: None,
            query: None,
        }
    }

    pub fn aliased(name: impl Into<Name>, alias: impl Into<String>) -> TableRef {
        TableRef {
            name: name.into(),
            alias: Some(alias.into()),
            query: None,
        }
    }

    pub fn derived(query: Select, alias: impl Into<String>) -> TableRef {
        let alias = alias.into();
        TableRef {
            name: Name::from(&alias[..]),
            alias: Some(alias),
            query: Some(Box::new(query)),
        }
    }

    /// The name other clauses use to refer to this table: the alias when one
    /// is set, otherwise the table name.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.base())
    }
}

/// Parses `"users"`, `"users u"` and `"users AS u"`.
impl From<&str> for TableRef {
    fn from(src: &str) -> Self {
        let parts: Vec<_> = src.split_whitespace().collect();

        match parts[..] {
            [name, alias] => TableRef::aliased(name, alias),
            [name, kw, alias] if kw.eq_ignore_ascii_case("as") => TableRef::aliased(name, alias),
            _ => TableRef::new(src.trim()),
        }
    }
}

impl From<String> for TableRef {
    fn from(src: String) -> Self {
        TableRef::from(&src[..])
    }
}

impl From<&String> for TableRef {
    fn from(src: &String) -> Self {
        TableRef::from(&src[..])
    }
}

impl<N: Into<Name>, A: Into<String>> From<(N, A)> for TableRef {
    fn from((name, alias): (N, A)) -> Self {
        TableRef::aliased(name, alias)
    }
}

impl From<Name> for TableRef {
    fn from(src: Name) -> Self {
        TableRef::new(src)
    }
}
