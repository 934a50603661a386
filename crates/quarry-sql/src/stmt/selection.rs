use super::Name;

/// One entry of a SELECT column list.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A column reference with an optional alias.
    Column { name: Name, alias: Option<String> },

    /// A raw SQL expression, embedded verbatim (e.g. `COUNT(*)`).
    Raw(String),
}

impl Selection {
    pub fn column(name: impl Into<Name>) -> Selection {
        Selection::Column {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<Name>, alias: impl Into<String>) -> Selection {
        Selection::Column {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn raw(sql: impl Into<String>) -> Selection {
        Selection::Raw(sql.into())
    }
}

/// Parses `"email"`, `"u.email"` and `"u.email AS mail"`.
impl From<&str> for Selection {
    fn from(src: &str) -> Self {
        let lower = src.to_ascii_lowercase();

        match lower.find(" as ") {
            Some(pos) => Selection::aliased(&src[..pos], src[pos + 4..].trim()),
            None => Selection::column(src),
        }
    }
}

impl From<String> for Selection {
    fn from(src: String) -> Self {
        Selection::from(&src[..])
    }
}

impl From<&String> for Selection {
    fn from(src: &String) -> Self {
        Selection::from(&src[..])
    }
}

impl From<Name> for Selection {
    fn from(src: Name) -> Self {
        Selection::column(src)
    }
}
