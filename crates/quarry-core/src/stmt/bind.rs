use super::Value;

/// One bound parameter of a compiled statement.
///
/// Positional parameters (`?`) have no name. Named parameters (`:name`) keep
/// the name without the leading colon. Bindings are stored in the order their
/// placeholders appear in the SQL text.
#[derive(Debug, Clone, PartialEq)]
pub struct Bind {
    pub name: Option<String>,
    pub value: Value,
}

impl Bind {
    pub fn positional(value: Value) -> Self {
        Self { name: None, value }
    }

    pub fn named(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}
