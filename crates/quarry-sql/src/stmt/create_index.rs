use super::Direction;

/// A CREATE INDEX statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    pub name: String,
    pub table: String,
    pub columns: Vec<IndexColumn>,
    pub unique: bool,

    /// SQLite only
    pub if_not_exists: bool,
}

/// An indexed column with an optional sort direction.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexColumn {
    pub name: String,
    pub direction: Option<Direction>,
}

impl CreateIndex {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> CreateIndex {
        CreateIndex {
            name: name.into(),
            table: table.into(),
            columns: vec![],
            unique: false,
            if_not_exists: false,
        }
    }

    pub fn column(&mut self, column: impl Into<IndexColumn>) -> &mut Self {
        self.columns.push(column.into());
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        self.unique = true;
        self
    }

    pub fn if_not_exists(&mut self) -> &mut Self {
        self.if_not_exists = true;
        self
    }
}

/// Parses `"email"` and `"created_at desc"`.
impl From<&str> for IndexColumn {
    fn from(src: &str) -> Self {
        let src = src.trim();

        if let Some((name, dir)) = src.rsplit_once(char::is_whitespace) {
            let direction = if dir.eq_ignore_ascii_case("desc") {
                Some(Direction::Desc)
            } else if dir.eq_ignore_ascii_case("asc") {
                Some(Direction::Asc)
            } else {
                None
            };

            if direction.is_some() {
                return IndexColumn {
                    name: name.trim().to_string(),
                    direction,
                };
            }
        }

        IndexColumn {
            name: src.to_string(),
            direction: None,
        }
    }
}

impl From<String> for IndexColumn {
    fn from(src: String) -> Self {
        IndexColumn::from(&src[..])
    }
}

impl From<(&str, Direction)> for IndexColumn {
    fn from((name, direction): (&str, Direction)) -> Self {
        IndexColumn {
            name: name.to_string(),
            direction: Some(direction),
        }
    }
}
