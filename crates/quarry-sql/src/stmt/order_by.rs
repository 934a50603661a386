use super::Name;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// One ORDER BY term.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub name: Name,
    pub direction: Direction,
}

impl OrderByExpr {
    pub fn asc(name: impl Into<Name>) -> OrderByExpr {
        OrderByExpr {
            name: name.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(name: impl Into<Name>) -> OrderByExpr {
        OrderByExpr {
            name: name.into(),
            direction: Direction::Desc,
        }
    }
}

/// Parses `"created_at"`, `"created_at asc"` and `"created_at DESC"`.
/// Anything without a recognized suffix sorts ascending.
impl From<&str> for OrderByExpr {
    fn from(src: &str) -> Self {
        let src = src.trim();

        if let Some((name, dir)) = src.rsplit_once(char::is_whitespace) {
            if dir.eq_ignore_ascii_case("desc") {
                return OrderByExpr::desc(name.trim());
            }
            if dir.eq_ignore_ascii_case("asc") {
                return OrderByExpr::asc(name.trim());
            }
        }

        OrderByExpr::asc(src)
    }
}

impl From<String> for OrderByExpr {
    fn from(src: String) -> Self {
        OrderByExpr::from(&src[..])
    }
}

impl<N: Into<Name>> From<(N, Direction)> for OrderByExpr {
    fn from((name, direction): (N, Direction)) -> Self {
        OrderByExpr {
            name: name.into(),
            direction,
        }
    }
}
