/// A possibly qualified identifier, such as `users` or `u.email`.
///
/// The parts are quoted individually when serialized. A `*` part is left
/// unquoted so `u.*` selects every column of `u`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(pub Vec<String>);

impl Name {
    pub fn new(parts: impl IntoIterator<Item = impl Into<String>>) -> Name {
        Name(parts.into_iter().map(Into::into).collect())
    }

    /// Builds `qualifier.column`.
    pub fn qualified(qualifier: impl Into<String>, column: impl Into<String>) -> Name {
        Name(vec![qualifier.into(), column.into()])
    }

    /// The last part of the name, which is the column or table itself.
    pub fn base(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Self {
        Name(src.split('.').map(|part| part.trim().to_string()).collect())
    }
}

impl From<String> for Name {
    fn from(src: String) -> Self {
        Name::from(&src[..])
    }
}

impl From<&String> for Name {
    fn from(src: &String) -> Self {
        Name::from(&src[..])
    }
}

impl From<&Name> for Name {
    fn from(src: &Name) -> Self {
        src.clone()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}
